// Version spec parsing for user-supplied version strings

use crate::distributions::version_data::CanonicalVersion;
use crate::error::ResolveError;

/// Suffix marking a request for the early-access channel (e.g. "17-ea")
pub const EA_SUFFIX: &str = "-ea";

/// A parsed version specifier. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionSpec {
    /// A build-qualified version like "11.0.10+9"; matches by equality
    /// after coercing both sides
    Exact(CanonicalVersion),

    /// A dotted numeric prefix like "11" or "8.0"; matches the half-open
    /// interval the prefix spans
    Range {
        lower: CanonicalVersion,
        upper: CanonicalVersion,
        lower_inclusive: bool,
        upper_inclusive: bool,
    },

    /// An early-access tag like "17-ea"; matches any EA build of that major
    EarlyAccess { major: u32 },
}

impl VersionSpec {
    /// Parse a user-supplied version string.
    ///
    /// Recognized forms, tried in order:
    /// 1. `<major>-ea` -> `EarlyAccess`
    /// 2. `<dotted>+<build>` -> `Exact`
    /// 3. a dotted numeric prefix, optionally ending in a `.x` wildcard
    ///    ("11", "8.0", "11.x") -> `Range` over the prefix
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ResolveError::InvalidVersionSpec(input.to_string()));
        }

        if let Some(prefix) = input.strip_suffix(EA_SUFFIX) {
            let major = prefix
                .parse::<u32>()
                .map_err(|_| ResolveError::InvalidVersionSpec(input.to_string()))?;
            return Ok(VersionSpec::EarlyAccess { major });
        }

        if let Some((dotted, build)) = input.split_once('+') {
            let components = parse_components(dotted, input)?;
            if components.len() > 3 {
                return Err(ResolveError::InvalidVersionSpec(input.to_string()));
            }
            let build = build
                .parse::<u32>()
                .map_err(|_| ResolveError::InvalidVersionSpec(input.to_string()))?;
            return Ok(VersionSpec::Exact(
                canonical_from(&components).with_build(build),
            ));
        }

        let mut parts: Vec<&str> = input.split('.').collect();
        // A trailing wildcard component adds nothing over the bare prefix
        if parts.len() > 1 && matches!(*parts.last().unwrap(), "x" | "X" | "*") {
            parts.pop();
        }
        let components = parts
            .iter()
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| ResolveError::InvalidVersionSpec(input.to_string()))
            })
            .collect::<Result<Vec<u32>, ResolveError>>()?;
        if components.len() > 4 {
            return Err(ResolveError::InvalidVersionSpec(input.to_string()));
        }

        let lower = canonical_from(&components);
        let mut bumped = components;
        *bumped.last_mut().unwrap() += 1;
        let upper = canonical_from(&bumped);

        Ok(VersionSpec::Range {
            lower,
            upper,
            lower_inclusive: true,
            upper_inclusive: false,
        })
    }

    pub fn is_early_access(&self) -> bool {
        matches!(self, VersionSpec::EarlyAccess { .. })
    }

    /// Whether a coerced catalog version satisfies this spec. The selector
    /// is responsible for having already filtered on the EA channel flag.
    pub fn matches(&self, version: &CanonicalVersion) -> bool {
        match self {
            VersionSpec::Exact(target) => version == target,
            VersionSpec::Range {
                lower,
                upper,
                lower_inclusive,
                upper_inclusive,
            } => {
                let above = if *lower_inclusive {
                    version >= lower
                } else {
                    version > lower
                };
                let below = if *upper_inclusive {
                    version <= upper
                } else {
                    version < upper
                };
                above && below
            }
            VersionSpec::EarlyAccess { major } => version.major == *major,
        }
    }
}

fn parse_components(dotted: &str, spec: &str) -> Result<Vec<u32>, ResolveError> {
    dotted
        .split('.')
        .map(|part| {
            part.parse::<u32>()
                .map_err(|_| ResolveError::InvalidVersionSpec(spec.to_string()))
        })
        .collect()
}

fn canonical_from(components: &[u32]) -> CanonicalVersion {
    let version = CanonicalVersion::new(
        components.first().copied().unwrap_or(0),
        components.get(1).copied().unwrap_or(0),
        components.get(2).copied().unwrap_or(0),
    );
    match components.get(3) {
        Some(build) => version.with_build(*build),
        None => version,
    }
}
