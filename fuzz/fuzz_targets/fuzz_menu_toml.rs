#![no_main]

use libfuzzer_sys::fuzz_target;

use crmnav::{MenuDeclaration, NavigationTree};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and validating a menu declaration should never panic
        if let Ok(declaration) = toml::from_str::<MenuDeclaration>(content) {
            let _ = NavigationTree::from_declaration(&declaration, "fuzz");
        }
    }
});
