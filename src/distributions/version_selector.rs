// Deterministic candidate selection over fetched catalog records

use crate::distributions::catalog::{ReleaseRecord, SelectionQuery};
use crate::distributions::version_spec::VersionSpec;
use crate::error::ResolveError;
use log::debug;
use std::cmp::Ordering;

/// Pick the single best record for a query and spec.
///
/// Filters on exact attribute match, then on spec satisfaction of the
/// coerced version, then takes the maximum under canonical order with the
/// raw component sequence as tie-break. Records whose raw versions are
/// fully identical (packaging variants of one artifact) resolve to the
/// first catalog row, so selection is reproducible for a given catalog.
///
/// Pure and re-entrant; a miss is never substituted with a "closest" match.
pub fn select_package(
    query: &SelectionQuery,
    spec: &VersionSpec,
    spec_str: &str,
    records: Vec<ReleaseRecord>,
) -> Result<ReleaseRecord, ResolveError> {
    let mut satisfied: Vec<ReleaseRecord> = records
        .into_iter()
        .filter(|record| record.matches_query(query))
        .filter(|record| spec.matches(&record.raw_version.coerce()))
        .collect();

    debug!("{} record(s) satisfy '{}'", satisfied.len(), spec_str);

    // Stable descending sort: the best candidate lands first, full ties
    // keep their catalog order
    satisfied.sort_by(|a, b| selection_order(b, a));
    satisfied
        .into_iter()
        .next()
        .ok_or_else(|| ResolveError::NoSatisfyingVersion(spec_str.to_string()))
}

/// Canonical order first; when two records coerce to the same canonical
/// version, prefer the lexicographically greatest raw component sequence
/// (the vendor's most specific sub-build, invisible to the canonical
/// order).
fn selection_order(a: &ReleaseRecord, b: &ReleaseRecord) -> Ordering {
    a.raw_version
        .coerce()
        .cmp(&b.raw_version.coerce())
        .then_with(|| a.raw_version.cmp(&b.raw_version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::version_data::RawVersion;

    fn query() -> SelectionQuery {
        SelectionQuery {
            os: "macos".into(),
            ext: "tar.gz".into(),
            bundle_type: "jdk".into(),
            javafx: false,
            arch: "x86".into(),
            hw_bitness: "64".into(),
            abi: String::new(),
            early_access: false,
        }
    }

    fn record(components: &[u32], url: &str) -> ReleaseRecord {
        ReleaseRecord {
            raw_version: RawVersion(components.to_vec()),
            url: url.to_string(),
            os: "macos".into(),
            arch: "x86".into(),
            hw_bitness: "64".into(),
            bundle_type: "jdk".into(),
            javafx: false,
            early_access: false,
        }
    }

    fn catalog() -> Vec<ReleaseRecord> {
        vec![
            record(&[8, 0, 262, 17], "https://cdn.example/jdk8.0.262.17.tar.gz"),
            record(&[8, 0, 262, 19], "https://cdn.example/jdk8.0.262.19.tar.gz"),
            record(&[8, 0, 262, 18], "https://cdn.example/jdk8.0.262.18.tar.gz"),
            record(&[8, 0, 282, 8], "https://cdn.example/jdk8.0.282.tar.gz"),
            record(&[9, 0, 0, 0], "https://cdn.example/jdk9.0.0.tar.gz"),
            record(&[9, 0, 1, 0], "https://cdn.example/jdk9.0.1.tar.gz"),
            record(&[11, 0, 9, 1], "https://cdn.example/jdk11.0.9.tar.gz"),
            record(&[11, 0, 10, 9], "https://cdn.example/jdk11.0.10.tar.gz"),
            record(&[15, 0, 2, 7], "https://cdn.example/jdk15.0.2.tar.gz"),
        ]
    }

    fn select(spec_str: &str) -> Result<ReleaseRecord, ResolveError> {
        let spec = VersionSpec::parse(spec_str).unwrap();
        select_package(&query(), &spec, spec_str, catalog())
    }

    #[test]
    fn test_selects_highest_satisfying_version() {
        for (spec, expected) in [
            ("8", "8.0.282+8"),
            ("8.0", "8.0.282+8"),
            ("11.x", "11.0.10+9"),
            ("11.0.x", "11.0.10+9"),
            ("15", "15.0.2+7"),
            ("9.0.0", "9.0.0+0"),
            ("9.0", "9.0.1+0"),
        ] {
            let winner = select(spec).unwrap();
            assert_eq!(winner.raw_version.to_string(), expected, "spec '{}'", spec);
        }
    }

    #[test]
    fn test_highest_update_wins_within_a_patch() {
        let winner = select("8.0.262").unwrap();
        assert_eq!(winner.raw_version.to_string(), "8.0.262+19");
    }

    #[test]
    fn test_sub_build_breaks_canonical_ties() {
        // Same canonical version; the 5-component raw sequence wins
        let records = vec![
            record(&[11, 0, 5, 10], "https://cdn.example/plain.tar.gz"),
            record(&[11, 0, 5, 10, 2], "https://cdn.example/sub-build.tar.gz"),
        ];
        let spec = VersionSpec::parse("11.0.5").unwrap();
        let winner = select_package(&query(), &spec, "11.0.5", records).unwrap();
        assert_eq!(winner.url, "https://cdn.example/sub-build.tar.gz");
    }

    #[test]
    fn test_identical_raw_versions_resolve_to_first_catalog_row() {
        // Packaging variants of the same artifact keep catalog order
        let records = vec![
            record(&[11, 0, 5, 10], "https://cdn.example/zulu11.35.15.tar.gz"),
            record(&[11, 0, 5, 10], "https://cdn.example/zulu11.37.8.tar.gz"),
        ];
        let spec = VersionSpec::parse("11.0.5").unwrap();
        for _ in 0..2 {
            let winner = select_package(&query(), &spec, "11.0.5", records.clone()).unwrap();
            assert_eq!(winner.url, "https://cdn.example/zulu11.35.15.tar.gz");
        }
    }

    #[test]
    fn test_non_matching_attributes_are_filtered_out() {
        let mut records = catalog();
        let mut arm = record(&[16, 0, 0, 1], "https://cdn.example/jdk16-arm.tar.gz");
        arm.arch = "arm".into();
        arm.hw_bitness = String::new();
        records.push(arm);

        let spec = VersionSpec::parse("16").unwrap();
        let err = select_package(&query(), &spec, "16", records).unwrap_err();
        assert!(matches!(err, ResolveError::NoSatisfyingVersion(_)));
    }

    #[test]
    fn test_miss_names_the_original_spec() {
        let err = select("18").unwrap_err();
        match err {
            ResolveError::NoSatisfyingVersion(spec) => assert_eq!(spec, "18"),
            other => panic!("expected NoSatisfyingVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_early_access_channel() {
        let mut ea_query = query();
        ea_query.early_access = true;

        let mut ea_record = record(&[17, 0, 0, 0, 35], "https://cdn.example/jdk17-ea.tar.gz");
        ea_record.early_access = true;
        let records = vec![
            record(&[17, 0, 0, 1], "https://cdn.example/jdk17-ga.tar.gz"),
            ea_record,
        ];

        let spec = VersionSpec::parse("17-ea").unwrap();
        let winner = select_package(&ea_query, &spec, "17-ea", records).unwrap();
        assert_eq!(winner.url, "https://cdn.example/jdk17-ea.tar.gz");
    }
}
