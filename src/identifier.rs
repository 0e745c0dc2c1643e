//! Conversion between media types and platform type identifiers.
//!
//! Operating systems name file formats with their own identifiers, such as
//! Apple's Uniform Type Identifiers (`public.png`). [`TypeIdentifierRegistry`]
//! abstracts such a system; [`type_identifier`] and [`preferred_media_type`]
//! convert through it.

use crate::media_type::MediaType;

/// A host system's type identifier database.
pub trait TypeIdentifierRegistry {
    /// The host's identifier for a type.
    type Handle: Clone + PartialEq;

    /// Looks up the identifier declared for a media type string.
    fn lookup(&self, media_type: &str) -> Option<Self::Handle>;

    /// Reports whether the identifier was synthesized by the host rather
    /// than declared. Dynamic identifiers are ignored when the lookup still
    /// has parameters to strip.
    fn is_dynamic(&self, _handle: &Self::Handle) -> bool {
        false
    }

    /// Returns the preferred media type string for an identifier.
    fn preferred_mime_type(&self, handle: &Self::Handle) -> Option<String>;

    /// Returns a more specific identifier for text in the given charset,
    /// e.g. UTF-8 plain text for plain text.
    fn refine_for_charset(&self, _handle: &Self::Handle, _charset: &str) -> Option<Self::Handle> {
        None
    }
}

/// Returns the identifier for `media_type`.
///
/// The media type is normalized and looked up with its parameters. If that
/// fails, or finds only a dynamic identifier, the parameters are stripped and
/// the lookup retried; the result is then refined by the `charset` parameter
/// where the registry supports it.
pub fn type_identifier<R>(media_type: &MediaType, registry: &R) -> Option<R::Handle>
where
    R: TypeIdentifierRegistry + ?Sized,
{
    let normalized = media_type.normalized();

    if let Some(handle) = registry.lookup(normalized.as_str()) {
        if !registry.is_dynamic(&handle) {
            return Some(handle);
        }
    }

    let stripped = normalized.removing_parameters();
    let handle = registry.lookup(stripped.as_str())?;

    match normalized.parameter("charset") {
        Some(charset) => registry.refine_for_charset(&handle, charset).or(Some(handle)),
        None => Some(handle),
    }
}

/// Returns the preferred media type for an identifier.
pub fn preferred_media_type<R>(handle: &R::Handle, registry: &R) -> Option<MediaType>
where
    R: TypeIdentifierRegistry + ?Sized,
{
    registry.preferred_mime_type(handle).and_then(MediaType::new)
}

/// Identifier => preferred media type, in normalized form.
static UNIFORM_TYPE_IDENTIFIERS: &[(&str, &str)] = &[
    ("public.text", "text"),
    ("public.plain-text", "text/plain"),
    ("public.utf8-plain-text", "text/plain; charset=UTF-8"),
    ("public.utf16-plain-text", "text/plain; charset=UTF-16"),
    ("public.html", "text/html"),
    ("public.comma-separated-values-text", "text/csv"),
    ("public.rtf", "text/rtf"),
    ("public.vcard", "text/vcard"),
    ("net.daringfireball.markdown", "text/markdown"),
    ("public.xml", "application/xml"),
    ("public.json", "application/json"),
    ("com.adobe.pdf", "application/pdf"),
    ("public.zip-archive", "application/zip"),
    ("org.gnu.gnu-zip-archive", "application/gzip"),
    ("org.idpf.epub-container", "application/epub+zip"),
    ("public.image", "image"),
    ("public.png", "image/png"),
    ("public.jpeg", "image/jpeg"),
    ("com.compuserve.gif", "image/gif"),
    ("public.tiff", "image/tiff"),
    ("public.heic", "image/heic"),
    ("public.avif", "image/avif"),
    ("org.webmproject.webp", "image/webp"),
    ("public.svg-image", "image/svg+xml"),
    ("public.audio", "audio"),
    ("public.mp3", "audio/mpeg"),
    ("public.mpeg-4-audio", "audio/mp4"),
    ("public.video", "video"),
    ("public.mpeg-4", "video/mp4"),
    ("com.apple.quicktime-movie", "video/quicktime"),
    ("public.font", "font"),
    ("public.opentype-font", "font/otf"),
    ("public.truetype-ttf-font", "font/ttf"),
];

/// A built-in table of Apple Uniform Type Identifiers.
///
/// ```
/// use media_type::identifier::{type_identifier, UniformTypeIdentifiers};
/// use media_type::MediaType;
///
/// let plain = MediaType::from_static("Text/Plain; CHARSET=Utf-16Le");
/// assert_eq!(
///     type_identifier(&plain, &UniformTypeIdentifiers),
///     Some("public.utf16-plain-text")
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformTypeIdentifiers;

impl TypeIdentifierRegistry for UniformTypeIdentifiers {
    type Handle = &'static str;

    fn lookup(&self, media_type: &str) -> Option<Self::Handle> {
        UNIFORM_TYPE_IDENTIFIERS
            .iter()
            .find(|(_, mime)| *mime == media_type)
            .map(|(uti, _)| *uti)
    }

    fn preferred_mime_type(&self, handle: &Self::Handle) -> Option<String> {
        UNIFORM_TYPE_IDENTIFIERS
            .iter()
            .find(|(uti, _)| uti == handle)
            .map(|(_, mime)| mime.to_string())
    }

    // UTF-16, UTF-16BE and UTF-16LE text may all be read as UTF-16 (RFC 2781
    // sections 4.2 and 4.3).
    fn refine_for_charset(&self, handle: &Self::Handle, charset: &str) -> Option<Self::Handle> {
        if *handle != "public.plain-text" {
            return None;
        }
        match charset.to_ascii_uppercase().as_str() {
            "UTF-8" => Some("public.utf8-plain-text"),
            "UTF-16" | "UTF-16BE" | "UTF-16LE" => Some("public.utf16-plain-text"),
            _ => None,
        }
    }
}
