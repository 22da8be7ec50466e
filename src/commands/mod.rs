// Command implementations

pub mod resolve;
pub mod versions;
