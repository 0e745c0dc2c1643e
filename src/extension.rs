//! Media type lookup by file extension.
//!
//! Maps file extensions to media types and back.
//!
//! The built-in table is small but on Unix it is augmented by the local system's
//! MIME-info database or mime.types file(s) if available under one or more of these names:
//! - /usr/local/share/mime/globs2
//! - /usr/share/mime/globs2
//! - /etc/mime.types
//! - /etc/apache2/mime.types
//! - /etc/apache/mime.types
//! - /etc/httpd/conf/mime.types
//!
//! On Windows, media types are extracted from the registry.
//!
//! Text types get a `charset=UTF-8` parameter when registered without one.

use crate::error::{Error, Result};
use crate::media_type::MediaType;
use crate::top_level_type::TopLevelType;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Built-in extension mappings (all lowercase extensions). Where a type has
/// several extensions the preferred one comes first.
static BUILTIN_TYPES: &[(&str, &str)] = &[
    (".avif", "image/avif"),
    (".bmp", "image/bmp"),
    (".css", "text/css; charset=UTF-8"),
    (".csv", "text/csv; charset=UTF-8"),
    (".epub", "application/epub+zip"),
    (".gif", "image/gif"),
    (".gz", "application/gzip"),
    (".heic", "image/heic"),
    (".html", "text/html; charset=UTF-8"),
    (".htm", "text/html; charset=UTF-8"),
    (".ics", "text/calendar; charset=UTF-8"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".js", "text/javascript; charset=UTF-8"),
    (".mjs", "text/javascript; charset=UTF-8"),
    (".json", "application/json"),
    (".jsonld", "application/ld+json"),
    (".md", "text/markdown; charset=UTF-8"),
    (".markdown", "text/markdown; charset=UTF-8"),
    (".mp3", "audio/mpeg"),
    (".mp4", "video/mp4"),
    (".otf", "font/otf"),
    (".pdf", "application/pdf"),
    (".png", "image/png"),
    (".rtf", "application/rtf"),
    (".svg", "image/svg+xml"),
    (".tar", "application/x-tar"),
    (".tiff", "image/tiff"),
    (".tif", "image/tiff"),
    (".ttf", "font/ttf"),
    (".txt", "text/plain; charset=UTF-8"),
    (".vcf", "text/vcard; charset=UTF-8"),
    (".wasm", "application/wasm"),
    (".webp", "image/webp"),
    (".woff", "font/woff"),
    (".woff2", "font/woff2"),
    (".xml", "text/xml; charset=UTF-8"),
    (".zip", "application/zip"),
];

/// The extension tables.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    /// Extension as registered => media type.
    /// Example: ".Z" => "application/x-compress"
    by_extension: HashMap<String, MediaType>,
    /// Lowercase extension => media type.
    /// Example: ".z" => "application/x-compress"
    by_extension_lower: HashMap<String, MediaType>,
    /// Normalized media type without parameters => lowercase extensions in
    /// registration order.
    /// Example: "image/jpeg" => [".jpg", ".jpeg"]
    extensions: HashMap<String, Vec<String>>,
}

impl Registry {
    fn with_builtins() -> Self {
        let mut registry = Self::default();
        for &(ext, raw) in BUILTIN_TYPES {
            registry.insert(ext, MediaType::from_static(raw), false);
        }
        registry
    }

    /// Registers `media_type` for `extension`. With `skip_existing`, an
    /// extension that is already known keeps its media type. Returns whether
    /// the mapping was added.
    pub(crate) fn insert(&mut self, extension: &str, media_type: MediaType, skip_existing: bool) -> bool {
        let ext_lower = extension.to_lowercase();
        if skip_existing && self.by_extension_lower.contains_key(&ext_lower) {
            return false;
        }

        let media_type = if media_type.top_level_type() == TopLevelType::Text
            && media_type.parameter("charset").is_none()
        {
            media_type.adding_parameter("charset", "UTF-8")
        } else {
            media_type
        };

        let key = lookup_key(&media_type);
        self.by_extension.insert(extension.to_string(), media_type.clone());
        self.by_extension_lower.insert(ext_lower.clone(), media_type);

        let exts = self.extensions.entry(key).or_default();
        if !exts.contains(&ext_lower) {
            exts.push(ext_lower);
        }
        true
    }

    fn get(&self, extension: &str) -> Option<MediaType> {
        self.by_extension
            .get(extension)
            .or_else(|| self.by_extension_lower.get(&extension.to_lowercase()))
            .cloned()
    }

    fn extensions_for(&self, media_type: &MediaType) -> &[String] {
        self.extensions
            .get(&lookup_key(media_type))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn lookup_key(media_type: &MediaType) -> String {
    media_type.normalized().removing_parameters().into_string()
}

static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| {
    let mut registry = Registry::with_builtins();
    crate::platform::load_system_types(&mut registry);
    RwLock::new(registry)
});

fn read() -> RwLockReadGuard<'static, Registry> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY.write().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the media type associated with the file extension `ext`.
///
/// The extension should begin with a leading dot, as in ".html".
/// Extensions are looked up first case-sensitively, then case-insensitively.
///
/// # Examples
///
/// ```
/// use media_type::media_type_by_extension;
///
/// let html = media_type_by_extension(".HTML").unwrap();
/// assert_eq!(html.subtype(), Some("html"));
/// assert_eq!(media_type_by_extension(".unknown-extension"), None);
/// ```
pub fn media_type_by_extension(ext: &str) -> Option<MediaType> {
    read().get(ext)
}

/// Returns the extensions known to be associated with `media_type`, sorted.
///
/// Parameters are ignored and the media type is compared in normalized form.
/// Each extension begins with a leading dot, as in ".html".
///
/// # Examples
///
/// ```
/// use media_type::{extensions_by_media_type, MediaType};
///
/// let exts = extensions_by_media_type(&MediaType::from_static("IMAGE/JPEG"));
/// assert!(exts.contains(&".jpg".to_string()));
/// assert!(exts.contains(&".jpeg".to_string()));
/// ```
pub fn extensions_by_media_type(media_type: &MediaType) -> Vec<String> {
    let mut exts = read().extensions_for(media_type).to_vec();
    exts.sort();
    exts
}

/// Returns the preferred extension for `media_type`, without the leading
/// dot. This is the first extension registered for the type.
pub fn preferred_extension(media_type: &MediaType) -> Option<String> {
    read()
        .extensions_for(media_type)
        .first()
        .map(|ext| ext.trim_start_matches('.').to_string())
}

/// Associates the extension `ext` with `media_type`.
///
/// The extension must begin with a leading dot, as in ".html".
///
/// # Examples
///
/// ```
/// use media_type::{add_extension_type, media_type_by_extension, MediaType};
///
/// add_extension_type(".foo", MediaType::from_static("application/foo")).unwrap();
/// assert_eq!(media_type_by_extension(".foo").unwrap(), "application/foo");
/// ```
pub fn add_extension_type(ext: &str, media_type: MediaType) -> Result<()> {
    if !ext.starts_with('.') {
        return Err(Error::InvalidExtension(ext.to_string()));
    }
    write().insert(ext, media_type, false);
    Ok(())
}

/// Splits a mime.types line into its media type and extensions.
///
/// Format: `mimetype ext1 ext2 ext3 ...`, with `#` starting a comment.
/// Extensions are returned with a leading dot.
pub(crate) fn parse_mime_types_line(line: &str) -> Option<(MediaType, Vec<String>)> {
    let line = line.split('#').next().unwrap_or_default();
    let mut fields = line.split_whitespace();
    let media_type = MediaType::new(fields.next()?)?;
    let exts: Vec<String> = fields
        .map(|ext| {
            if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{}", ext)
            }
        })
        .collect();
    if exts.is_empty() {
        None
    } else {
        Some((media_type, exts))
    }
}

/// Loads additional mappings from a file in mime.types format.
///
/// Extensions that are already known keep their media type. Returns the
/// number of extensions added.
pub async fn load_mime_types(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file = tokio::fs::File::open(path).await?;
    let mut lines = BufReader::new(file).lines();

    let mut entries = Vec::new();
    while let Some(line) = lines.next_line().await? {
        match parse_mime_types_line(&line) {
            Some(entry) => entries.push(entry),
            None => tracing::trace!(line = %line, "skipping mime.types line"),
        }
    }

    let mut registry = write();
    let mut added = 0;
    for (media_type, exts) in entries {
        for ext in exts {
            if registry.insert(&ext, media_type.clone(), true) {
                added += 1;
            }
        }
    }
    tracing::debug!(path = %path.display(), added, "loaded mime.types file");
    Ok(added)
}
