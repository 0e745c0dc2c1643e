//! Template matching.

use crate::media_type::MediaType;

impl MediaType {
    /// Reports whether the receiver matches `template`.
    ///
    /// Both sides are normalized, then the template's type, facet, subtype,
    /// suffix and parameters are compared against the receiver's. Subtype,
    /// suffix and parameters missing from the template match anything;
    /// the type and facet must always agree. Parameters the receiver has
    /// beyond the template's are ignored.
    ///
    /// Matching is not symmetric:
    ///
    /// ```
    /// use media_type::MediaType;
    ///
    /// let plain = MediaType::from_static("text/plain; charset=UTF-8");
    /// assert!(plain.matches(&MediaType::TEXT));
    /// assert!(plain.matches(&MediaType::from_static("text/plain; charset=utf-8")));
    /// assert!(!MediaType::TEXT.matches(&plain));
    /// ```
    pub fn matches(&self, template: &MediaType) -> bool {
        if self == template {
            return true;
        }
        let value = self.normalized();
        let template = template.normalized();

        if value.type_str() != template.type_str() || value.facet() != template.facet() {
            return false;
        }
        if let Some(subtype) = template.subtype() {
            if value.subtype() != Some(subtype) {
                return false;
            }
        }
        if let Some(suffix) = template.suffix() {
            if value.suffix() != Some(suffix) {
                return false;
            }
        }
        template
            .parameter_pairs()
            .all(|(name, expected)| value.parameter(name) == Some(expected))
    }
}

/// Returns the first template that `media_type` matches.
///
/// ```
/// use media_type::{matches_any, MediaType};
///
/// let templates = [MediaType::IMAGE, MediaType::TEXT];
/// let html = MediaType::from_static("text/html");
/// assert_eq!(matches_any(&html, &templates), Some(&MediaType::TEXT));
/// ```
pub fn matches_any<'a, I>(media_type: &MediaType, templates: I) -> Option<&'a MediaType>
where
    I: IntoIterator<Item = &'a MediaType>,
{
    templates
        .into_iter()
        .find(|template| media_type.matches(template))
}
