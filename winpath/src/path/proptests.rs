//! Property-based tests for path parsing.

use super::parser::parse_with_stats;
use super::validate::{PathErrorKind, MAX_PATH};
use super::ParsedPath;
use proptest::prelude::*;

// Components built only from scalars the validator accepts.
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ._$~-]{1,16}".prop_filter("not an extended marker", |s| s != "UNC")
}

fn drive_strategy() -> impl Strategy<Value = Option<char>> {
    prop::option::of(prop::char::range('A', 'Z'))
}

fn structured_strategy() -> impl Strategy<Value = (Option<char>, Option<String>, Vec<String>, bool)> {
    (
        drive_strategy(),
        prop::option::of(component_strategy()),
        prop::collection::vec(component_strategy(), 0..8),
        any::<bool>(),
    )
}

fn build_input(drive: Option<char>, node: Option<&str>, parts: &[String], rooted: bool) -> String {
    let mut input = String::new();
    match (drive, node) {
        (Some(d), _) => {
            input.push(d);
            input.push(':');
        }
        (None, Some(n)) => {
            input.push_str(r"\\");
            input.push_str(n);
        }
        (None, None) => {}
    }
    for (i, part) in parts.iter().enumerate() {
        if i > 0 || rooted || node.is_some() && drive.is_none() {
            input.push('\\');
        }
        input.push_str(part);
    }
    input
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Parsing never panics, whatever the input.
    #[test]
    fn parsing_is_total(input in any::<String>()) {
        let _ = ParsedPath::parse(&input);
    }

    // Accessors keep the offending text even when errors are recorded.
    #[test]
    fn errors_never_drop_text(input in "[a-z\\x00-\\x1f<>|*]{1,40}") {
        let path = ParsedPath::parse(&input);
        prop_assert_eq!(path.name(), Some(input.as_str()));
        let illegal = input.chars().filter(|c| (*c as u32) < 32 || "<>|*".contains(*c)).count();
        prop_assert_eq!(path.errors().len(), illegal);
    }

    // Device and node are never both present.
    #[test]
    fn device_and_node_exclusive(input in "[a-zA-Z:\\\\?]{0,24}") {
        let path = ParsedPath::parse(&input);
        prop_assert!(!(path.device().is_some() && path.node().is_some()));
        prop_assert_eq!(path.is_remote(), path.node().is_some());
    }

    // Re-parsing the canonical form reproduces the structure.
    #[test]
    fn canonical_reparse_idempotent((drive, node, parts, rooted) in structured_strategy()) {
        let input = build_input(drive, node.as_deref(), &parts, rooted);
        let first = ParsedPath::parse(&input);
        let second = ParsedPath::parse(&first.to_canonical_string());
        prop_assert_eq!(first.device(), second.device());
        prop_assert_eq!(first.node(), second.node());
        prop_assert_eq!(first.dirs(), second.dirs());
        prop_assert_eq!(first.name(), second.name());
        prop_assert_eq!(second.to_canonical_string(), first.to_canonical_string());
    }

    // No component is lost by the extended-length form.
    #[test]
    fn extended_form_keeps_components((drive, node, parts, rooted) in structured_strategy()) {
        let input = build_input(drive, node.as_deref(), &parts, rooted);
        let first = ParsedPath::parse(&input);
        let second = ParsedPath::parse(&first.to_extended_unc());
        prop_assert!(second.is_extended_length());
        prop_assert_eq!(first.device(), second.device());
        prop_assert_eq!(first.node(), second.node());
        let a: Vec<&str> = first.components().collect();
        let b: Vec<&str> = second.components().collect();
        prop_assert_eq!(a, b);
    }

    // The single rewind never re-reads more than one component.
    #[test]
    fn rewind_bounded_by_component(first in component_strategy(), rest in prop::collection::vec(component_strategy(), 0..4)) {
        let input = format!(r"\\?\{}\{}", first, rest.join("\\"));
        let (_, stats) = parse_with_stats(&input);
        prop_assert!(stats.rewound <= first.chars().count());
        prop_assert!(stats.rewound <= stats.longest_component);
    }

    // Length errors depend only on the raw scalar count.
    #[test]
    fn length_error_matches_scalar_count(input in "[a-z\\\\]{200,300}") {
        let path = ParsedPath::parse(&input);
        let too_long = path.errors().iter().any(|e| e.kind() == PathErrorKind::PathTooLong);
        prop_assert_eq!(too_long, !path.is_extended_length() && input.chars().count() > MAX_PATH);
    }

    // make_directory leaves no name and preserves component order.
    #[test]
    fn make_directory_preserves_components((drive, node, parts, rooted) in structured_strategy()) {
        let input = build_input(drive, node.as_deref(), &parts, rooted);
        let mut path = ParsedPath::parse(&input);
        let before: Vec<String> = path.components().map(str::to_string).collect();
        path.make_directory();
        prop_assert_eq!(path.name(), None);
        prop_assert_eq!(path.dirs().to_vec(), before);
    }
}
