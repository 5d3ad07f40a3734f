// tests/call_site_tests.rs

#[cfg(test)]
mod tests {
    use fnarg_core::call_sites::{self, bounded_super, logged_super, mega_super, really_super};
    use fnarg_core::{superlative, FnArgError, Message, OutputBuffer};
    use proptest::prelude::*;

    #[test]
    fn test_scenario_really_super_awesome() {
        assert_eq!(really_super().as_str(), "really super awesome");
    }

    #[test]
    fn test_scenario_logged_super_cool() {
        let mut out = OutputBuffer::new();
        let result = logged_super(&mut out);

        assert_eq!(result.as_str(), "super cool");
        assert_eq!(out.lines(), &["super cool".to_string()]);
    }

    #[test]
    fn test_scenario_mega_super_rad() {
        assert_eq!(mega_super().as_str(), "mega super rad");
    }

    #[test]
    fn test_call_sites_do_not_share_output() {
        let mut first = OutputBuffer::new();
        let mut second = OutputBuffer::new();
        logged_super(&mut first);
        logged_super(&mut second);
        really_super();

        assert_eq!(first.lines().len(), 1);
        assert_eq!(second.lines().len(), 1);
    }

    #[test]
    fn test_new_call_site_needs_nothing_from_helper() {
        // A call site the library has never heard of.
        let hyphenated = superlative("duper", |m: Message| Message::new(m.as_str().replace(' ', "-")));
        assert_eq!(hyphenated, "super-duper");

        assert_eq!(really_super().as_str(), "really super awesome");
        assert_eq!(mega_super().as_str(), "mega super rad");
    }

    #[test]
    fn test_bounded_error_reaches_caller() {
        match bounded_super("awesome", 8) {
            Err(FnArgError::MessageTooLong { len, max }) => {
                assert_eq!(len, 13);
                assert_eq!(max, 8);
            }
            other => panic!("expected MessageTooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_registry_reports() {
        let report = call_sites::run("really").unwrap();
        assert_eq!(report.output.as_str(), "really super awesome");
        assert!(report.logged.is_empty());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["output"], "really super awesome");
        assert_eq!(json["input"], "awesome");
    }

    proptest! {
        // Swapping the customization one call site supplies leaves the
        // registered call sites' results alone.
        #[test]
        fn prop_call_sites_are_independent(prefix in "[a-z ]{0,8}") {
            let mega_before = call_sites::run("mega").unwrap();
            let logged_before = call_sites::run("logged").unwrap();

            let p = prefix.clone();
            let replaced_really = superlative("awesome", move |m: Message| m.prepend(&p));
            prop_assert_eq!(replaced_really.into_string(), format!("{}super awesome", prefix));

            let mega_after = call_sites::run("mega").unwrap();
            let logged_after = call_sites::run("logged").unwrap();
            prop_assert_eq!(mega_after.output.as_str(), "mega super rad");
            prop_assert_eq!(logged_after.output.as_str(), "super cool");
            prop_assert_eq!(&logged_after.logged, &vec!["super cool".to_string()]);
            prop_assert_eq!(mega_before, mega_after);
            prop_assert_eq!(logged_before, logged_after);
        }
    }
}
