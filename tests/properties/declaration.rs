//! Property tests for menu declaration parsing and validation.

use proptest::prelude::*;

use crmnav::domain::entities::Menu;
use crmnav::{MenuDeclaration, MenuEntry};

fn raw_entry() -> impl Strategy<Value = MenuEntry> {
    let leaf = ("[A-Za-z ]{0,6}", "[/a-z.?]{0,10}", proptest::option::of(any::<bool>()))
        .prop_map(|(label, path, expandable)| MenuEntry {
            label,
            path,
            expandable,
            children: Vec::new(),
        });
    leaf.prop_recursive(2, 12, 4, |inner| {
        ("[A-Za-z ]{0,6}", "[/a-z]{0,10}", proptest::collection::vec(inner, 0..=4)).prop_map(
            |(label, path, children)| MenuEntry {
                label,
                path,
                expandable: None,
                children,
            },
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation never panics; a built menu keeps every declared entry.
    #[test]
    fn property_validation_never_panics(
        entries in proptest::collection::vec(raw_entry(), 0..=6),
        home in proptest::option::of("[/a-z]{0,8}"),
    ) {
        let declaration = MenuDeclaration { home, entries };
        match Menu::from_declaration(&declaration) {
            Ok(menu) => {
                let declared = declaration.entries.len()
                    + declaration.entries.iter().map(|e| e.children.len()).sum::<usize>();
                prop_assert_eq!(menu.nodes().len(), declared);
                prop_assert_eq!(menu.top_level().len(), declaration.entries.len());
            }
            Err(issues) => prop_assert!(!issues.is_empty()),
        }
    }

    /// PROPERTY: Arbitrary TOML never panics the declaration parser.
    #[test]
    fn property_toml_declaration_never_panics(content in "(?s).{0,256}") {
        let _ = toml::from_str::<MenuDeclaration>(&content);
    }
}
