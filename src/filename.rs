//! Generic descriptions and default file names for media types.

use crate::extension;
use crate::media_type::MediaType;
use crate::top_level_type::TopLevelType;

const EPUB: MediaType = MediaType::from_static("application/epub+zip");
const EMAIL: MediaType = MediaType::from_static("message/rfc822");
const MARKDOWN: MediaType = MediaType::from_static("text/markdown");
const PLAIN_TEXT: MediaType = MediaType::from_static("text/plain");

/// Returns a generic description of the media type, e.g. `"Image"` for
/// image types.
///
/// ```
/// use media_type::filename::generic_description;
/// use media_type::MediaType;
///
/// assert_eq!(generic_description(&MediaType::from_static("image/png")), Some("Image"));
/// assert_eq!(generic_description(&MediaType::from_static("application/json")), None);
/// ```
pub fn generic_description(media_type: &MediaType) -> Option<&'static str> {
    if media_type.matches(&EPUB) {
        return Some("Publication");
    }
    if media_type.matches(&EMAIL) {
        return Some("Email");
    }
    match media_type.top_level_type() {
        TopLevelType::Audio => Some("Audio"),
        TopLevelType::Font => Some("Font"),
        TopLevelType::Haptics => Some("Haptics"),
        TopLevelType::Image => Some("Image"),
        TopLevelType::Message => Some("Message"),
        TopLevelType::Model => Some("Model"),
        TopLevelType::Text => Some("Text"),
        TopLevelType::Video => Some("Video"),
        _ => None,
    }
}

/// Returns the file name extension to use for the media type, without the
/// leading dot.
pub fn preferred_filename_extension(media_type: &MediaType) -> Option<String> {
    if let Some(ext) = extension::preferred_extension(media_type) {
        return Some(ext);
    }
    if media_type.matches(&MARKDOWN) {
        Some("md".to_string())
    } else if media_type.matches(&PLAIN_TEXT) {
        Some("txt".to_string())
    } else {
        None
    }
}

/// Returns a default file name for files of the media type, e.g.
/// `"Image.png"`. Types without a generic description are named `"File"`.
pub fn preferred_filename(media_type: &MediaType) -> String {
    let base = generic_description(media_type).unwrap_or("File");
    match preferred_filename_extension(media_type) {
        Some(ext) => format!("{}.{}", base, ext),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_description() {
        let cases = [
            ("audio/mpeg", Some("Audio")),
            ("font/otf", Some("Font")),
            ("haptics/ivs", Some("Haptics")),
            ("IMAGE/JPEG", Some("Image")),
            ("message/http", Some("Message")),
            ("model/obj", Some("Model")),
            ("text/csv", Some("Text")),
            ("video/mp4", Some("Video")),
            ("application/epub+zip", Some("Publication")),
            ("Message/RFC822", Some("Email")),
            ("application/pdf", None),
            ("multipart/mixed", None),
            ("x-custom/thing", None),
        ];
        for (raw, expected) in cases {
            assert_eq!(generic_description(&MediaType::new(raw).unwrap()), expected, "{}", raw);
        }
    }

    #[test]
    fn test_preferred_filename_extension() {
        let ext = |raw: &'static str| preferred_filename_extension(&MediaType::from_static(raw));
        assert_eq!(ext("text/plain").as_deref(), Some("txt"));
        assert_eq!(ext("text/plain; charset=UTF-16").as_deref(), Some("txt"));
        assert_eq!(ext("text/markdown; variant=GFM").as_deref(), Some("md"));
        assert_eq!(ext("image/png").as_deref(), Some("png"));
        assert_eq!(ext("application/x-no-such-type-here").as_deref(), None);
    }

    #[test]
    fn test_preferred_filename() {
        let name = |raw: &'static str| preferred_filename(&MediaType::from_static(raw));
        assert_eq!(name("text/plain"), "Text.txt");
        assert_eq!(name("image/png"), "Image.png");
        assert_eq!(name("application/epub+zip"), "Publication.epub");
        assert_eq!(name("application/x-no-such-type-here"), "File");
    }
}
