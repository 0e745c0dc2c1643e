//! Media type normalization.

use crate::charset;
use crate::grammar;
use crate::markdown::MarkdownVariant;
use crate::media_type::{Builder, MediaType};
use crate::top_level_type::TopLevelType;
use std::collections::BTreeMap;

/// Canonical spellings for well-known parameter values, applied during
/// normalization.
///
/// Implementations must map canonical names to themselves, otherwise
/// normalization stops being idempotent.
pub trait Canonicalizer {
    /// Returns the canonical name for a `charset` value, or `None` to keep
    /// the value as given.
    fn charset(&self, label: &str) -> Option<String> {
        charset::canonical_name(label).map(str::to_string)
    }

    /// Returns the canonical name for the `variant` value of a
    /// `text/markdown` type, or `None` to keep the value as given.
    fn markdown_variant(&self, label: &str) -> Option<String> {
        MarkdownVariant::parse(label).map(|variant| variant.as_str().to_string())
    }
}

/// The built-in IANA charset and Markdown variant tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCanonicalizer;

impl Canonicalizer for BuiltinCanonicalizer {}

impl MediaType {
    /// Returns a normalized copy, suitable for comparing media types
    /// regardless of case and whitespace.
    ///
    /// - type, facet, subtype and suffix are lower-cased
    /// - parameter names are lower-cased and only the first occurrence of
    ///   each name is kept
    /// - parameters are sorted by name and written as `; name=value`
    /// - whitespace around components and trailing delimiters are removed
    /// - `charset` values are replaced by their preferred IANA name, and the
    ///   `variant` of `text/markdown` by its canonical spelling
    ///
    /// ```
    /// use media_type::MediaType;
    ///
    /// let mt = MediaType::new("text/SGML; CharSet = utf-8;").unwrap();
    /// assert_eq!(mt.normalized(), "text/sgml; charset=UTF-8");
    /// ```
    pub fn normalized(&self) -> MediaType {
        self.normalized_with(&BuiltinCanonicalizer)
    }

    /// Normalizes using the given parameter value lookups.
    pub fn normalized_with<C>(&self, canonicalizer: &C) -> MediaType
    where
        C: Canonicalizer + ?Sized,
    {
        let spans = self.spans();
        let ty = TopLevelType::parse(&spans.ty.trim().to_lowercase());
        let subtype = grammar::component(spans.subtype).map(str::to_lowercase);

        let mut builder = Builder::new(ty.clone());
        if let Some(subtype) = &subtype {
            builder = builder.subtype(subtype.as_str()).delimited(
                spans.facet.map(|facet| facet.trim().to_lowercase()),
                spans.suffix.map(|suffix| suffix.trim().to_lowercase()),
            );
        }

        let is_markdown = ty == TopLevelType::Text && subtype.as_deref() == Some("markdown");
        let mut parameters = BTreeMap::new();
        for (name, value) in self.parameter_pairs() {
            let name = name.to_lowercase();
            if parameters.contains_key(&name) {
                continue;
            }
            let canonical = match name.as_str() {
                "charset" => canonicalizer.charset(value),
                "variant" if is_markdown => canonicalizer.markdown_variant(value),
                _ => None,
            };
            parameters.insert(name, canonical.unwrap_or_else(|| value.to_string()));
        }

        self.rebuilt(builder.parameters(parameters))
    }
}
