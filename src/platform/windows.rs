//! Windows extension database.
//!
//! Reads file extension associations from the Windows registry.

use crate::extension::Registry;
use crate::media_type::MediaType;
use winreg::enums::*;
use winreg::RegKey;

/// Reads HKEY_CLASSES_ROOT for extension associations and their Content Type values.
pub(super) fn load_system_types(registry: &mut Registry) {
    let hkcr = RegKey::predef(HKEY_CLASSES_ROOT);

    let mut added = 0;
    for name in hkcr.enum_keys().flatten() {
        // Only extension keys (start with ".")
        if name.len() < 2 || !name.starts_with('.') {
            continue;
        }

        let Ok(key) = hkcr.open_subkey_with_flags(&name, KEY_READ) else {
            continue;
        };
        let Ok(content_type) = key.get_value::<String, _>("Content Type") else {
            continue;
        };
        let Some(media_type) = MediaType::new(content_type) else {
            continue;
        };

        // Windows sometimes registers .js as text/plain; see Go issue #32350.
        if name == ".js" && media_type.matches(&MediaType::from_static("text/plain")) {
            continue;
        }

        if registry.insert(&name, media_type, true) {
            added += 1;
        }
    }
    tracing::debug!(added, "loaded extensions from the Windows registry");
}
