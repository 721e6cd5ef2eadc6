#![no_main]

use libfuzzer_sys::fuzz_target;

use crmnav::config::Verbosity;
use crmnav::Config;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    // Config parsing and env overrides must never panic
    if let Ok(config) = toml::from_str::<Config>(content) {
        let overridden = config.with_overrides_from(|key| match key {
            "CRMNAV_VERBOSITY" | "CRMNAV_ASCII" => Some(content.to_string()),
            _ => None,
        });
        let _ = overridden.output.verbosity.log_filter();
    }
    let _ = Verbosity::from_name(content);
});
