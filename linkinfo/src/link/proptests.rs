//! Property-based tests for the link model.

use super::classify::{is_absolute, is_external, is_local, is_relative, is_uri};
use super::normalize::normalize;
use super::LinkInfo;
use proptest::prelude::*;

// Strategy for generating link path segments
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ -]{1,12}(\\.[a-z]{1,4})?"
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

fn link_path_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just(String::new()),
            Just("/".to_string()),
            Just("./".to_string()),
            Just("file://".to_string()),
            Just("https://".to_string()),
            Just("mailto:".to_string()),
        ],
        relative_path_strategy(),
        prop_oneof![Just(""), Just("/"), Just(".")],
    )
        .prop_map(|(prefix, body, suffix)| format!("{prefix}{body}{suffix}"))
}

fn raw_strategy() -> impl Strategy<Value = String> {
    "[a-z./#: ]{0,24}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent on generated link paths
    #[test]
    fn normalize_idempotent(path in link_path_strategy()) {
        let once = normalize(path.as_str());
        let twice = normalize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    // Name boundaries always satisfy 0 <= start <= end <= len
    #[test]
    fn name_bounds_ordered(raw in raw_strategy()) {
        let link = LinkInfo::new(raw.as_str());
        prop_assert!(link.name_start() <= link.name_end());
        prop_assert!(link.name_end() <= link.file_path().len());
    }

    // name_end is the length or a dot strictly after name_start
    #[test]
    fn name_end_is_dot_or_len(raw in raw_strategy()) {
        let link = LinkInfo::new(raw.as_str());
        let end = link.name_end();
        if end < link.file_path().len() {
            prop_assert_eq!(&link.file_path()[end..=end], ".");
            prop_assert!(end > link.name_start());
        }
    }

    // Canonical link paths have no dot directories or trailing separators
    #[test]
    fn canonical_shape(path in link_path_strategy()) {
        let link = LinkInfo::new(path.as_str());
        let canonical = link.file_path();
        prop_assert!(!canonical.starts_with("./"));
        prop_assert!(!canonical.contains("/./"));
        prop_assert!(!canonical.ends_with('.'));
        prop_assert!(!canonical.ends_with('/'));
    }

    // Views reassemble into the canonical path
    #[test]
    fn views_reassemble(raw in raw_strategy()) {
        let link = LinkInfo::new(raw.as_str());
        prop_assert_eq!(format!("{}{}", link.path(), link.file_name()), link.file_path());
        prop_assert_eq!(
            format!("{}{}", link.path(), link.file_name_no_ext()),
            link.file_path_no_ext()
        );
        if link.has_ext() {
            prop_assert_eq!(
                format!("{}.{}", link.file_path_no_ext(), link.ext()),
                link.file_path()
            );
        }
    }

    // Relative and absolute are complements
    #[test]
    fn relative_is_not_absolute(raw in raw_strategy()) {
        prop_assert_eq!(is_relative(raw.as_str()), !is_absolute(raw.as_str()));
    }

    // Relative implies local; external implies URI and not local
    #[test]
    fn classification_implications(path in link_path_strategy()) {
        let p = path.as_str();
        if is_relative(p) {
            prop_assert!(is_local(p));
        }
        if is_external(p) {
            prop_assert!(is_uri(p));
            prop_assert!(!is_local(p));
        }
    }

    // Appending a segment then ".." returns to the starting link
    #[test]
    fn append_then_pop(base in relative_path_strategy(), part in "[a-z0-9]{1,8}") {
        let link = LinkInfo::new(base.as_str());
        let round = link.append([part.as_str(), ".."]);
        prop_assert_eq!(round, link);
    }

    // Extension replacement sets the extension
    #[test]
    fn with_ext_sets_ext(base in relative_path_strategy(), ext in "[a-z]{1,4}") {
        let link = LinkInfo::new(base.as_str());
        let changed = link.with_ext(ext.as_str());
        prop_assert_eq!(changed.ext(), ext.as_str());
        prop_assert_eq!(changed.file_path_no_ext(), link.file_path_no_ext());
    }

    // Ordering agrees with the canonical path ordering
    #[test]
    fn ordering_matches_paths(a in raw_strategy(), b in raw_strategy()) {
        let la = LinkInfo::new(a.as_str());
        let lb = LinkInfo::new(b.as_str());
        prop_assert_eq!(la.cmp(&lb), la.file_path().cmp(lb.file_path()));
    }
}
