// Platform normalization tables for vendor catalog queries

/// Vendor-facing architecture parameters derived from a logical token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchitectureOptions {
    pub arch: String,
    pub hw_bitness: String,
    pub abi: String,
}

/// Base bundle plus the JavaFX flag split out of the requested package type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOptions {
    pub bundle_type: String,
    pub javafx: bool,
}

/// Package types suffixed with this carry JavaFX
pub const FX_SUFFIX: &str = "+fx";

// logical token -> (vendor arch, hw_bitness). Tokens not listed pass
// through unchanged with empty bitness and ABI.
const ARCHITECTURE_TABLE: &[(&str, &str, &str)] = &[
    ("x64", "x86", "64"),
    ("x86", "x86", "32"),
];

pub fn architecture_options(architecture: &str) -> ArchitectureOptions {
    for (token, arch, hw_bitness) in ARCHITECTURE_TABLE {
        if *token == architecture {
            return ArchitectureOptions {
                arch: (*arch).to_string(),
                hw_bitness: (*hw_bitness).to_string(),
                abi: String::new(),
            };
        }
    }
    ArchitectureOptions {
        arch: architecture.to_string(),
        hw_bitness: String::new(),
        abi: String::new(),
    }
}

pub fn bundle_options(package_type: &str) -> BundleOptions {
    match package_type.strip_suffix(FX_SUFFIX) {
        Some(base) => BundleOptions {
            bundle_type: base.to_string(),
            javafx: true,
        },
        None => BundleOptions {
            bundle_type: package_type.to_string(),
            javafx: false,
        },
    }
}

pub fn release_status(early_access: bool) -> &'static str {
    if early_access { "ea" } else { "ga" }
}

/// OS query value for the current host
pub fn os_option() -> &'static str {
    std::env::consts::OS
}

/// Archive extension the download collaborator will be handed
pub fn archive_extension() -> &'static str {
    if cfg!(windows) { "zip" } else { "tar.gz" }
}

/// Logical architecture token for the current host, used as the CLI default
pub fn default_architecture() -> &'static str {
    map_host_arch(std::env::consts::ARCH)
}

fn map_host_arch(arch: &'static str) -> &'static str {
    match arch {
        "x86_64" => "x64",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_architecture_table() {
        let x64 = architecture_options("x64");
        assert_eq!((x64.arch.as_str(), x64.hw_bitness.as_str()), ("x86", "64"));

        let x86 = architecture_options("x86");
        assert_eq!((x86.arch.as_str(), x86.hw_bitness.as_str()), ("x86", "32"));
    }

    #[test]
    fn test_unknown_architecture_passes_through() {
        for token in ["x32", "arm", "aarch64", "ppc64"] {
            let options = architecture_options(token);
            assert_eq!(options.arch, token);
            assert_eq!(options.hw_bitness, "");
            assert_eq!(options.abi, "");
        }
    }

    #[test]
    fn test_bundle_options_split_fx_suffix() {
        assert_eq!(
            bundle_options("jdk+fx"),
            BundleOptions { bundle_type: "jdk".into(), javafx: true }
        );
        assert_eq!(
            bundle_options("jre+fx"),
            BundleOptions { bundle_type: "jre".into(), javafx: true }
        );
        assert_eq!(
            bundle_options("jre"),
            BundleOptions { bundle_type: "jre".into(), javafx: false }
        );
    }

    #[test]
    fn test_release_status() {
        assert_eq!(release_status(true), "ea");
        assert_eq!(release_status(false), "ga");
    }

    #[test]
    fn test_host_arch_mapping() {
        assert_eq!(map_host_arch("x86_64"), "x64");
        assert_eq!(map_host_arch("x86"), "x86");
        assert_eq!(map_host_arch("aarch64"), "aarch64");
    }
}
