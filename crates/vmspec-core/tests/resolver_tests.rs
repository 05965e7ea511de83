//! Tests for layered option resolution

use rstest::rstest;
use std::collections::HashMap;
use vmspec_core::ValueResolver;

fn resolver(pairs: &[(&str, &str)]) -> ValueResolver<HashMap<String, String>> {
    ValueResolver::with_env(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

mod string_tests {
    use super::*;

    #[rstest]
    // Nothing set
    #[case(None, "", "dflt", "dflt")]
    // Environment only
    #[case(Some("env"), "", "dflt", "env")]
    // Set but empty environment falls through to the default
    #[case(Some(""), "", "dflt", "dflt")]
    // Flag beats environment
    #[case(Some("env"), "flag", "dflt", "flag")]
    // Flag equal to the default looks like "not given"
    #[case(Some("env"), "dflt", "dflt", "env")]
    #[case(None, "dflt", "dflt", "dflt")]
    // Flag with no environment
    #[case(None, "flag", "dflt", "flag")]
    // Empty default leaves an empty result
    #[case(None, "", "", "")]
    fn test_resolve_string(
        #[case] env: Option<&str>,
        #[case] flag: &str,
        #[case] default: &str,
        #[case] expected: &str,
    ) {
        let pairs: Vec<(&str, &str)> = env.map(|v| ("OPT", v)).into_iter().collect();
        let resolved = resolver(&pairs).resolve_string("OPT", flag, default);
        assert_eq!(resolved, expected);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let r = resolver(&[("OTHER", "nope")]);
        assert_eq!(r.resolve_string("OPT", "", "dflt"), "dflt");
    }
}

mod int_tests {
    use super::*;

    #[rstest]
    #[case(None, 0, 4, 4)]
    #[case(Some("8"), 0, 4, 8)]
    #[case(Some("+8"), 0, 4, 8)]
    #[case(Some("8"), 2, 4, 2)]
    // Flag equal to the default does not override the environment
    #[case(Some("8"), 4, 4, 8)]
    // Unparsable environment is silently treated as zero
    #[case(Some("eight"), 0, 4, 4)]
    #[case(Some(" 8"), 0, 4, 4)]
    #[case(Some(""), 0, 4, 4)]
    #[case(Some("eight"), 2, 4, 2)]
    // Environment zero means "unset"
    #[case(Some("0"), 0, 4, 4)]
    fn test_resolve_int(
        #[case] env: Option<&str>,
        #[case] flag: i64,
        #[case] default: i64,
        #[case] expected: i64,
    ) {
        let pairs: Vec<(&str, &str)> = env.map(|v| ("N", v)).into_iter().collect();
        assert_eq!(resolver(&pairs).resolve_int("N", flag, default), expected);
    }
}

mod bool_tests {
    use super::*;

    #[rstest]
    #[case(Some("true"), false, false)]
    #[case(Some(""), true, true)]
    #[case(Some("1"), true, true)]
    #[case(Some("FALSE"), false, false)]
    #[case(Some("yes"), false, false)]
    #[case(None, true, true)]
    #[case(None, false, false)]
    fn test_resolve_bool_flag_always_wins(
        #[case] env: Option<&str>,
        #[case] flag: bool,
        #[case] expected: bool,
    ) {
        let pairs: Vec<(&str, &str)> = env.map(|v| ("B", v)).into_iter().collect();
        assert_eq!(resolver(&pairs).resolve_bool("B", flag), expected);
    }

    #[rstest]
    #[case(Some("true"), None, true)]
    #[case(Some("false"), None, false)]
    #[case(Some(""), None, false)]
    #[case(Some("typo"), None, true)]
    #[case(None, None, false)]
    #[case(Some("true"), Some(false), false)]
    #[case(Some("0"), Some(true), true)]
    fn test_resolve_bool_tri_state(
        #[case] env: Option<&str>,
        #[case] flag: Option<bool>,
        #[case] expected: bool,
    ) {
        let pairs: Vec<(&str, &str)> = env.map(|v| ("B", v)).into_iter().collect();
        assert_eq!(resolver(&pairs).resolve_bool_flag("B", flag), expected);
    }
}
