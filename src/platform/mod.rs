//! Platform-specific extension databases.

#[cfg(unix)]
mod unix;

#[cfg(windows)]
mod windows;

use crate::extension::Registry;

/// Adds extension mappings from platform-specific sources. Extensions that
/// are already registered keep their media type, and sources that cannot be
/// read are skipped.
///
/// On Unix systems, reads from:
/// - /usr/share/mime/globs2 (FreeDesktop Shared MIME-info Database)
/// - /etc/mime.types, /etc/apache2/mime.types, etc.
///
/// On Windows, reads from:
/// - Registry HKEY_CLASSES_ROOT for extension associations
pub(crate) fn load_system_types(registry: &mut Registry) {
    #[cfg(unix)]
    unix::load_system_types(registry);

    #[cfg(windows)]
    windows::load_system_types(registry);

    #[cfg(not(any(unix, windows)))]
    let _ = registry;
}
