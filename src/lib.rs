//! RFC 6838 media types that keep their original text.
//!
//! This crate provides:
//! - A [`MediaType`] value that preserves its text exactly and decomposes it
//!   into type, tree, subtype, suffix and parameters on demand
//! - Construction from components with [`Builder`] and the per-type factories
//! - Parameter and suffix transformations that return new values
//! - Normalization with charset canonicalization, and template matching
//! - Media type lookup by file extension, seeded from the local system
//! - Conversion to and from platform type identifiers
//!
//! Loading additional mime.types files is async using tokio.
//!
//! # Examples
//!
//! ```
//! use media_type::MediaType;
//!
//! let mt = MediaType::from_static("Text/Markdown; Charset=utf-8; Variant=GFM");
//! assert!(mt.matches(&MediaType::from_static("text/markdown; charset=UTF-8")));
//! assert_eq!(
//!     mt.normalized(),
//!     "text/markdown; charset=UTF-8; variant=GFM"
//! );
//! ```

pub mod charset;
pub mod error;
pub mod extension;
pub mod filename;
pub mod grammar;
pub mod identifier;
pub mod markdown;
pub mod matching;
pub mod media_type;
pub mod normalize;
pub mod subtypes;
pub mod top_level_type;
pub mod tree;

mod platform;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extension::{
    add_extension_type, extensions_by_media_type, load_mime_types, media_type_by_extension,
    preferred_extension,
};
pub use markdown::MarkdownVariant;
pub use matching::matches_any;
pub use media_type::{Builder, MediaType};
pub use normalize::{BuiltinCanonicalizer, Canonicalizer};
pub use subtypes::{
    ApplicationSubtype, AudioSubtype, FontSubtype, HapticsSubtype, ImageSubtype, MessageSubtype,
    ModelSubtype, MultipartSubtype, TextSubtype, VideoSubtype,
};
pub use top_level_type::TopLevelType;
pub use tree::Tree;
