#![no_main]

use libfuzzer_sys::fuzz_target;
use media_type::MediaType;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let Some(mt) = MediaType::new(s) else {
            return;
        };
        assert_eq!(mt.as_str(), s);

        let _ = (mt.top_level_type(), mt.tree(), mt.subtype(), mt.suffix(), mt.parameters());

        let normalized = mt.normalized();
        assert_eq!(normalized.normalized(), normalized);
        assert!(mt.matches(&mt));

        let _ = mt.adding_parameter("charset", "UTF-8").removing_suffix();
    }
});
