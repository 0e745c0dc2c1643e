//! The media type value.
//!
//! Implements RFC 6838 media types that keep their original text. Components
//! are decomposed from the text on every access; transformations build a new
//! string and never mutate the receiver.

use crate::error::{Error, Result};
use crate::grammar::{self, Parameters, Spans};
use crate::top_level_type::TopLevelType;
use crate::tree::Tree;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// A media type, also known as a MIME type or content type.
///
/// A media type is made of a top-level type, an optional subtype with an
/// optional facet (registration tree) and structured syntax suffix, and a
/// list of `name=value` parameters:
///
/// ```text
/// application/vnd.api+json; charset=UTF-8
/// ^^^^^^^^^^^ ^^^ ^^^ ^^^^  ^^^^^^^^^^^^^
///    type    facet sub suffix  parameter
/// ```
///
/// The text is kept exactly as given, including case and whitespace.
/// Equality and hashing compare that text, so `text/SGML` and `text/sgml`
/// are different values. Use [`MediaType::normalized`] to compare in a
/// case- and whitespace-insensitive way, or [`MediaType::matches`] to
/// compare against a template.
///
/// # Examples
///
/// ```
/// use media_type::{MediaType, TopLevelType};
///
/// let mt = MediaType::new("Text/HTML; Charset=UTF-8").unwrap();
/// assert_eq!(mt.top_level_type(), TopLevelType::Text);
/// assert_eq!(mt.subtype(), Some("HTML"));
/// assert_eq!(mt.parameter("charset"), Some("UTF-8"));
/// assert_eq!(mt.normalized(), "text/html; charset=UTF-8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaType {
    raw: Cow<'static, str>,
}

impl MediaType {
    /// Creates a media type from its text. Returns `None` if `raw` is empty;
    /// any other string is accepted.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self {
                raw: Cow::Owned(raw),
            })
        }
    }

    /// Creates a media type from a string literal.
    ///
    /// # Panics
    ///
    /// Panics if `raw` is empty. In a `const` context this is a compile
    /// error.
    pub const fn from_static(raw: &'static str) -> Self {
        assert!(!raw.is_empty(), "media type literal may not be empty");
        Self {
            raw: Cow::Borrowed(raw),
        }
    }

    /// Starts building a media type from its components.
    ///
    /// [`Builder::build`] panics when every component is empty; use
    /// [`Builder::try_build`] for components that come from runtime input.
    pub fn builder(ty: impl Into<TopLevelType>) -> Builder {
        Builder::new(ty.into())
    }

    /// Returns the media type `ty/subtype`.
    ///
    /// The subtype is written verbatim, so a subtype string may carry its
    /// own facet and suffix, e.g. `vnd.apple.installer+xml`.
    ///
    /// # Panics
    ///
    /// Panics if both `ty` and `subtype` are empty or whitespace. The
    /// registered types and the per-type factories never panic.
    pub fn with_subtype(ty: impl Into<TopLevelType>, subtype: &str) -> Self {
        Self::builder(ty).subtype(subtype).build()
    }

    /// Returns the media type text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consumes the media type, returning its text.
    pub fn into_string(self) -> String {
        self.raw.into_owned()
    }

    pub(crate) fn spans(&self) -> Spans<'_> {
        grammar::decompose(&self.raw)
    }

    /// The trimmed top-level type text.
    pub(crate) fn type_str(&self) -> &str {
        self.spans().ty.trim()
    }

    /// Returns the top-level type.
    pub fn top_level_type(&self) -> TopLevelType {
        TopLevelType::parse(self.spans().ty)
    }

    /// Returns the subtype without facet or suffix, or `None` if there is
    /// no subtype.
    pub fn subtype(&self) -> Option<&str> {
        grammar::component(self.spans().subtype)
    }

    /// Returns the facet naming the registration tree, e.g. `vnd`. Returns
    /// `None` when there is no facet or no subtype.
    pub fn facet(&self) -> Option<&str> {
        let spans = self.spans();
        grammar::component(spans.subtype).and(grammar::component(spans.facet))
    }

    /// Returns the registration tree. Types without a facet, including types
    /// without a subtype, belong to [`Tree::Standards`].
    pub fn tree(&self) -> Tree {
        self.facet().map(Tree::parse).unwrap_or_default()
    }

    /// Returns the structured syntax suffix, e.g. `json` in `ld+json`.
    pub fn suffix(&self) -> Option<&str> {
        let spans = self.spans();
        grammar::component(spans.subtype).and(grammar::component(spans.suffix))
    }

    /// Returns every parameter occurrence in order, duplicates included.
    pub fn parameter_pairs(&self) -> Parameters<'_> {
        Parameters::new(self.spans().parameters)
    }

    /// Returns the parameters keyed by lower-case name. When a name occurs
    /// more than once the first value is kept. Values keep their case.
    pub fn parameters(&self) -> BTreeMap<String, String> {
        let mut parameters = BTreeMap::new();
        for (name, value) in self.parameter_pairs() {
            parameters
                .entry(name.to_lowercase())
                .or_insert_with(|| value.to_string());
        }
        parameters
    }

    /// Returns the value of the first parameter whose name matches `name`
    /// case-insensitively.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.parameter_pairs()
            .find(|(n, _)| eq_ignore_case(n, name))
            .map(|(_, value)| value)
    }

    /// Reports whether the media type has at least one well-formed parameter.
    pub fn has_parameters(&self) -> bool {
        self.parameter_pairs().next().is_some()
    }

    /// Returns a media type with the given parameter, replacing any existing
    /// parameters of the same name. The new name keeps its case.
    ///
    /// Parameters are written sorted by name.
    pub fn adding_parameter(&self, name: &str, value: &str) -> Self {
        let name = name.trim();
        let mut parameters = self.retained_parameters(Some(name));
        parameters.insert(name.to_string(), value.to_string());
        self.rebuilt(self.components().parameters(parameters))
    }

    /// Returns a media type without any parameter named `name`.
    pub fn removing_parameter(&self, name: &str) -> Self {
        let parameters = self.retained_parameters(Some(name.trim()));
        self.rebuilt(self.components().parameters(parameters))
    }

    /// Returns a media type without parameters.
    pub fn removing_parameters(&self) -> Self {
        self.rebuilt(self.components())
    }

    /// Returns a media type with the given suffix, replacing any existing
    /// suffix. An empty suffix returns the receiver unchanged.
    pub fn adding_suffix(&self, suffix: &str) -> Self {
        if suffix.trim().is_empty() {
            return self.clone();
        }
        let builder = self
            .components()
            .suffix(suffix)
            .parameters(self.retained_parameters(None));
        self.rebuilt(builder)
    }

    /// Returns a media type without its suffix.
    ///
    /// A subtype that itself contains `+` keeps a trailing `+`, so that
    /// `image/jpeg+2000+q10` becomes `image/jpeg+2000+` with the subtype
    /// `jpeg+2000`.
    pub fn removing_suffix(&self) -> Self {
        let mut builder = self
            .components()
            .parameters(self.retained_parameters(None));
        builder.suffix = builder
            .subtype
            .as_deref()
            .filter(|subtype| subtype.contains('+'))
            .map(|_| String::new());
        self.rebuilt(builder)
    }

    /// A builder holding the receiver's type, facet, subtype and suffix.
    fn components(&self) -> Builder {
        let spans = self.spans();
        let builder = Builder::new(TopLevelType::parse(spans.ty));
        match grammar::component(spans.subtype) {
            Some(subtype) => builder.subtype(subtype).delimited(
                spans.facet.map(|facet| facet.trim().to_string()),
                spans.suffix.map(|suffix| suffix.trim().to_string()),
            ),
            None => builder,
        }
    }

    /// The parameters to carry into a transformed value: first occurrence per
    /// case-insensitive name, minus `excluded`.
    fn retained_parameters(&self, excluded: Option<&str>) -> BTreeMap<String, String> {
        let mut seen = HashSet::new();
        let mut parameters = BTreeMap::new();
        for (name, value) in self.parameter_pairs() {
            if excluded.is_some_and(|excluded| eq_ignore_case(name, excluded)) {
                continue;
            }
            if seen.insert(name.to_lowercase()) {
                parameters.insert(name.to_string(), value.to_string());
            }
        }
        parameters
    }

    /// Serializes `builder`, falling back to the receiver when the result
    /// would be empty (a receiver made only of whitespace and delimiters).
    pub(crate) fn rebuilt(&self, builder: Builder) -> Self {
        builder.try_build().unwrap_or_else(|| self.clone())
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || (!a.is_ascii() && a.to_lowercase() == b.to_lowercase())
}

/// Builds a [`MediaType`] from components.
///
/// The result is `type`, then `/facet.subtype+suffix` when a subtype is
/// present, then `; name=value` for each parameter sorted by name. Facet and
/// suffix are dropped without a subtype. Type, facet, subtype, suffix and
/// parameter names are trimmed; parameter values are written as given.
///
/// # Examples
///
/// ```
/// use media_type::{MediaType, TopLevelType};
///
/// let mt = MediaType::builder(TopLevelType::Application)
///     .facet("vnd")
///     .subtype("3gpp.bsf")
///     .suffix("xml")
///     .parameter("charset", "UTF-8")
///     .build();
/// assert_eq!(mt.as_str(), "application/vnd.3gpp.bsf+xml; charset=UTF-8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Builder {
    ty: TopLevelType,
    facet: Option<String>,
    subtype: Option<String>,
    suffix: Option<String>,
    parameters: BTreeMap<String, String>,
}

impl Builder {
    /// Creates a builder for a type without subtype or parameters.
    pub fn new(ty: TopLevelType) -> Self {
        Self {
            ty,
            facet: None,
            subtype: None,
            suffix: None,
            parameters: BTreeMap::new(),
        }
    }

    /// Sets the facet naming the registration tree. An empty facet clears
    /// it.
    pub fn facet(mut self, facet: impl Into<String>) -> Self {
        let facet: String = facet.into();
        self.facet = Some(facet).filter(|facet| !facet.trim().is_empty());
        self
    }

    /// Sets the facet from a registration tree; the standards tree clears it.
    pub fn tree(mut self, tree: &Tree) -> Self {
        self.facet = tree
            .facet()
            .filter(|facet| !facet.trim().is_empty())
            .map(str::to_string);
        self
    }

    /// Sets the subtype.
    pub fn subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    /// Sets the structured syntax suffix. An empty suffix clears it.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        let suffix: String = suffix.into();
        self.suffix = Some(suffix).filter(|suffix| !suffix.trim().is_empty());
        self
    }

    /// Sets facet and suffix exactly as decomposed from existing text.
    ///
    /// A present but empty component still writes its `.` or `+`, so the
    /// subtype splits the same way when the result is decomposed again:
    /// `text/..plain` keeps the subtype `.plain`.
    pub(crate) fn delimited(mut self, facet: Option<String>, suffix: Option<String>) -> Self {
        self.facet = facet;
        self.suffix = suffix;
        self
    }

    /// Adds a parameter, replacing one with the exact same name.
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Replaces all parameters.
    pub fn parameters<I, K, V>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = parameters
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        self
    }

    /// Builds the media type.
    ///
    /// # Panics
    ///
    /// Panics if the serialized text is empty, which only happens when the
    /// top-level type is empty and there is neither a subtype nor a
    /// parameter. See [`Builder::try_build`].
    pub fn build(self) -> MediaType {
        match self.try_build() {
            Some(media_type) => media_type,
            None => panic!("media type built from empty components"),
        }
    }

    /// Builds the media type, or returns `None` if the serialized text would
    /// be empty.
    ///
    /// ```
    /// use media_type::{MediaType, TopLevelType};
    ///
    /// assert!(MediaType::builder(TopLevelType::parse(" ")).try_build().is_none());
    /// assert_eq!(MediaType::builder("text").try_build().unwrap(), "text");
    /// ```
    pub fn try_build(&self) -> Option<MediaType> {
        MediaType::new(self.serialize())
    }

    fn serialize(&self) -> String {
        let subtype = non_empty(&self.subtype);

        let mut raw = String::new();
        raw.push_str(self.ty.as_str().trim());
        if let Some(subtype) = subtype {
            raw.push('/');
            if let Some(facet) = &self.facet {
                raw.push_str(facet.trim());
                raw.push('.');
            }
            raw.push_str(subtype);
            if let Some(suffix) = &self.suffix {
                raw.push('+');
                raw.push_str(suffix.trim());
            }
        }
        for (name, value) in &self.parameters {
            raw.push_str("; ");
            raw.push_str(name.trim());
            raw.push('=');
            raw.push_str(value);
        }
        raw
    }
}

fn non_empty(component: &Option<String>) -> Option<&str> {
    component.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// Type-only constants.
impl MediaType {
    pub const APPLICATION: MediaType = MediaType::from_static("application");
    pub const AUDIO: MediaType = MediaType::from_static("audio");
    pub const FONT: MediaType = MediaType::from_static("font");
    pub const HAPTICS: MediaType = MediaType::from_static("haptics");
    pub const IMAGE: MediaType = MediaType::from_static("image");
    pub const MESSAGE: MediaType = MediaType::from_static("message");
    pub const MODEL: MediaType = MediaType::from_static("model");
    pub const MULTIPART: MediaType = MediaType::from_static("multipart");
    pub const TEXT: MediaType = MediaType::from_static("text");
    pub const VIDEO: MediaType = MediaType::from_static("video");
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s).ok_or(Error::EmptyMediaType)
    }
}

impl TryFrom<String> for MediaType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s).ok_or(Error::EmptyMediaType)
    }
}

impl TryFrom<&str> for MediaType {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl From<MediaType> for String {
    fn from(media_type: MediaType) -> Self {
        media_type.into_string()
    }
}

impl AsRef<str> for MediaType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq<str> for MediaType {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for MediaType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Serialize for MediaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        MediaType::new(raw).ok_or_else(|| {
            de::Error::invalid_value(Unexpected::Str(""), &"a non-empty media type")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mt(s: &'static str) -> MediaType {
        MediaType::from_static(s)
    }

    #[test]
    fn test_new() {
        assert_eq!(MediaType::new("text/plain").unwrap().as_str(), "text/plain");
        assert!(MediaType::new("").is_none());
        assert!("".parse::<MediaType>().is_err());
        assert_eq!(MediaType::new(" ;/+").unwrap().as_str(), " ;/+");
    }

    #[test]
    #[should_panic(expected = "may not be empty")]
    fn test_from_static_empty() {
        let _ = MediaType::from_static("");
    }

    #[test]
    fn test_raw_equality() {
        assert_ne!(mt("TEXT/PLAIN"), mt("text/plain"));
        assert_eq!(mt("text/plain"), "text/plain");
    }

    #[test]
    fn test_build_type_only() {
        assert_eq!(MediaType::builder(TopLevelType::Text).build(), "text");
    }

    #[test]
    fn test_build_subtype() {
        let built = MediaType::with_subtype(TopLevelType::Text, "plain");
        assert_eq!(built, "text/plain");
    }

    #[test]
    fn test_build_tree() {
        let built = MediaType::builder(TopLevelType::Audio)
            .tree(&Tree::Vendor)
            .subtype("dolby.pl2")
            .build();
        assert_eq!(built, "audio/vnd.dolby.pl2");
    }

    #[test]
    fn test_build_suffix() {
        let built = MediaType::builder(TopLevelType::Application)
            .subtype("atom")
            .suffix("xml")
            .build();
        assert_eq!(built, "application/atom+xml");
    }

    #[test]
    fn test_build_drops_facet_and_suffix_without_subtype() {
        let built = MediaType::builder(TopLevelType::Application)
            .facet("vnd")
            .suffix("xml")
            .build();
        assert_eq!(built, "application");
    }

    #[test]
    fn test_build_parameters_sorted() {
        let built = MediaType::builder(TopLevelType::Text)
            .subtype("html")
            .parameters([
                ("first", "1st"),
                ("second", "2nd"),
                ("third", "3rd"),
                ("fourth", "4th"),
                ("fifth", "5th"),
            ])
            .build();
        assert_eq!(
            built,
            "text/html; fifth=5th; first=1st; fourth=4th; second=2nd; third=3rd"
        );
    }

    #[test]
    fn test_build_preserves_case() {
        let built = MediaType::builder(TopLevelType::Other("Movie".to_string()))
            .subtype("avi")
            .build();
        assert_eq!(built, "Movie/avi");

        let built = MediaType::builder(TopLevelType::Application)
            .subtype("ld")
            .suffix("JSON")
            .parameter("CharSet", "UTF-8")
            .build();
        assert_eq!(built, "application/ld+JSON; CharSet=UTF-8");
    }

    #[test]
    #[should_panic(expected = "empty components")]
    fn test_build_empty() {
        let _ = MediaType::builder(TopLevelType::Other(String::new())).build();
    }

    #[test]
    #[should_panic(expected = "empty components")]
    fn test_with_subtype_empty() {
        let _ = MediaType::with_subtype(" ", "");
    }

    #[test]
    fn test_try_build() {
        assert_eq!(MediaType::builder("").try_build(), None);
        assert_eq!(MediaType::builder("").subtype(" ").try_build(), None);
        assert_eq!(
            MediaType::builder("").subtype("plain").try_build().unwrap(),
            "/plain"
        );
        assert_eq!(
            MediaType::builder("").parameter("a", "b").try_build().unwrap(),
            "; a=b"
        );
    }

    #[test]
    fn test_build_ignores_empty_facet_and_suffix() {
        let built = MediaType::builder(TopLevelType::Text)
            .facet(" ")
            .subtype("plain")
            .suffix("")
            .build();
        assert_eq!(built, "text/plain");
    }

    #[test]
    fn test_type() {
        assert_eq!(mt("text/plain").top_level_type(), TopLevelType::Text);
        assert_eq!(mt("image").top_level_type(), TopLevelType::Image);
        assert_eq!(mt("video/").top_level_type(), TopLevelType::Video);
        assert_eq!(mt("video;").top_level_type(), TopLevelType::Video);
        assert_eq!(mt("TeXt/plain").top_level_type().as_str(), "text");
    }

    #[test]
    fn test_subtype() {
        assert_eq!(mt("text/plain").subtype(), Some("plain"));
        assert_eq!(mt("text").subtype(), None);
        assert_eq!(mt("video/").subtype(), None);
        assert_eq!(mt("video;").subtype(), None);
        assert_eq!(mt("text/plain;").subtype(), Some("plain"));
        assert_eq!(mt("text/plain+").subtype(), Some("plain"));
        assert_eq!(mt("text/SGML").subtype(), Some("SGML"));
    }

    #[test]
    fn test_facet_and_tree() {
        assert_eq!(mt("application/vnd.amazon.ebook").facet(), Some("vnd"));
        assert_eq!(mt("application/vnd.amazon.ebook;").facet(), Some("vnd"));
        assert_eq!(mt("application/vnd.amazon.ebook+").facet(), Some("vnd"));
        assert_eq!(mt("application/VND.amazon.ebook").facet(), Some("VND"));
        assert_eq!(mt("text/plain").facet(), None);
        assert_eq!(mt("text").facet(), None);

        assert_eq!(mt("application/VND.amazon.ebook").tree(), Tree::Vendor);
        assert_eq!(mt("text/prs.lines.tag").tree(), Tree::Personal);
        assert_eq!(mt("text/plain").tree(), Tree::Standards);
        assert_eq!(mt("text").tree(), Tree::Standards);
        assert_eq!(mt("text/vnd.").tree(), Tree::Standards);

        let nested = mt("text/vnd.rtf.dir");
        assert_eq!(nested.facet(), Some("vnd"));
        assert_eq!(nested.subtype(), Some("rtf.dir"));
    }

    #[test]
    fn test_suffix() {
        assert_eq!(mt("application/epub+zip").suffix(), Some("zip"));
        assert_eq!(mt("image/png").suffix(), None);
        assert_eq!(mt("image").suffix(), None);
        assert_eq!(mt("application/ld+json;").suffix(), Some("json"));
        assert_eq!(mt("application/ld+JSON").suffix(), Some("JSON"));

        let nested = mt("image/jpeg+2000+q10");
        assert_eq!(nested.subtype(), Some("jpeg+2000"));
        assert_eq!(nested.suffix(), Some("q10"));
    }

    #[test]
    fn test_parameter_lookup() {
        let m = mt("text/html; charset=UTF-8; linebreak=lf");
        assert_eq!(m.parameter("charset"), Some("UTF-8"));
        assert_eq!(m.parameter("CHARSET"), Some("UTF-8"));
        assert_eq!(m.parameter("linebreak"), Some("lf"));
        assert_eq!(m.parameter("format"), None);
        assert_eq!(mt("text/html").parameter("charset"), None);
    }

    #[test]
    fn test_parameter_first_occurrence_wins() {
        let m = mt("text/html; charset=UTF-8; charset=US-ASCII");
        assert_eq!(m.parameter("charset"), Some("UTF-8"));
        let expected = BTreeMap::from([("charset".to_string(), "UTF-8".to_string())]);
        assert_eq!(m.parameters(), expected);
        assert_eq!(m.parameter_pairs().count(), 2);
    }

    #[test]
    fn test_parameters_extraneous_delimiters_and_whitespace() {
        let m = mt("text/html; charset = UTF-8 ;; linebreak = lf ;;;");
        let expected = BTreeMap::from([
            ("charset".to_string(), "UTF-8".to_string()),
            ("linebreak".to_string(), "lf".to_string()),
        ]);
        assert_eq!(m.parameters(), expected);
        assert!(m.has_parameters());
        assert!(mt("text/html").parameters().is_empty());
        assert!(!mt("text/html;").has_parameters());
    }

    #[test]
    fn test_parameters_lowercase_keys() {
        let m = mt("text/html; CharSet=UTF-8");
        assert_eq!(m.parameters().get("charset").map(String::as_str), Some("UTF-8"));
    }

    #[test]
    fn test_adding_parameter() {
        assert_eq!(
            mt("text/markdown").adding_parameter("charset", "UTF-8"),
            "text/markdown; charset=UTF-8"
        );
        assert_eq!(
            mt("text/markdown").adding_parameter("CharSet", "UTF-8"),
            "text/markdown; CharSet=UTF-8"
        );
        assert_eq!(
            mt("text/markdown; charset=US-ASCII").adding_parameter("charset", "UTF-8"),
            "text/markdown; charset=UTF-8"
        );
        assert_eq!(
            mt("text/markdown; CHARSET=US-ASCII").adding_parameter("CharSet", "UTF-8"),
            "text/markdown; CharSet=UTF-8"
        );
        assert_eq!(
            mt("text/markdown; variant=GFM").adding_parameter("charset", "UTF-8"),
            "text/markdown; charset=UTF-8; variant=GFM"
        );
        assert_eq!(mt("text").adding_parameter("a", "b"), "text; a=b");
    }

    #[test]
    fn test_adding_then_removing_parameter() {
        let m = mt("application/vnd.api+json");
        assert_eq!(m.adding_parameter("k", "v").removing_parameter("k"), m);
    }

    #[test]
    fn test_removing_parameter() {
        let m = mt("text/html; charset=UTF-8; linebreak=lf");
        assert_eq!(m.removing_parameter("charset"), "text/html; linebreak=lf");
        assert_eq!(m.removing_parameter("CharSet"), "text/html; linebreak=lf");
        assert_eq!(
            mt("text/html; charset=UTF-8").removing_parameter("linebreak"),
            "text/html; charset=UTF-8"
        );
    }

    #[test]
    fn test_removing_parameters() {
        assert_eq!(
            mt("text/html; charset=UTF-8; linebreak=lf").removing_parameters(),
            "text/html"
        );
        assert_eq!(mt("text/html").removing_parameters(), "text/html");
        assert_eq!(
            mt("application/vnd.api+json; q=1").removing_parameters(),
            "application/vnd.api+json"
        );
    }

    #[test]
    fn test_suffix_transformations() {
        assert_eq!(mt("application/ld").adding_suffix("json"), "application/ld+json");
        assert_eq!(mt("application/ld+xml").adding_suffix("json"), "application/ld+json");
        assert_eq!(mt("application/ld+json").removing_suffix(), "application/ld");
        let jpeg = mt("image/jpeg+2000+q10").removing_suffix();
        assert_eq!(jpeg, "image/jpeg+2000+");
        assert_eq!(jpeg.subtype(), Some("jpeg+2000"));
        assert_eq!(jpeg.suffix(), None);
        assert_eq!(mt("Application/LD+xml").adding_suffix(""), "Application/LD+xml");
        assert_eq!(
            mt("application/ld+xml; b=2; a=1").adding_suffix("json"),
            "application/ld+json; a=1; b=2"
        );
    }

    #[test]
    fn test_transformations_keep_subtype_with_empty_facet_or_suffix() {
        let dotted = mt("text/..plain; a=1");
        assert_eq!(dotted.subtype(), Some(".plain"));
        assert_eq!(dotted.removing_parameters(), "text/..plain");
        assert_eq!(dotted.removing_parameters().subtype(), Some(".plain"));

        let plus = mt("text/+json+");
        assert_eq!(plus.subtype(), Some("+json"));
        assert_eq!(plus.adding_parameter("a", "b"), "text/+json+; a=b");
        assert_eq!(plus.adding_parameter("a", "b").subtype(), Some("+json"));
        assert_eq!(plus.adding_suffix("xml").subtype(), Some("+json"));
        assert_eq!(plus.removing_suffix(), "text/+json+");

        assert_eq!(mt("text/ . plain ; a=1").removing_parameter("a"), "text/.plain");
    }

    #[test]
    fn test_transformations_do_not_mutate() {
        let m = mt("text/plain; charset=UTF-8");
        let _ = m.adding_parameter("format", "flowed");
        let _ = m.removing_parameters();
        assert_eq!(m, "text/plain; charset=UTF-8");
    }

    #[test]
    fn test_degenerate_transformation_keeps_receiver() {
        let m = mt(" ");
        assert_eq!(m.removing_parameters(), " ");
    }

    #[test]
    fn test_display_and_conversions() {
        let m = mt("text/plain");
        assert_eq!(m.to_string(), "text/plain");
        assert_eq!(String::from(m.clone()), "text/plain");
        assert_eq!(MediaType::try_from("text/plain").unwrap(), m);
        assert!(matches!(
            MediaType::try_from(String::new()),
            Err(Error::EmptyMediaType)
        ));
    }
}
