//! Lexical decomposition of media type strings.
//!
//! A media type is split into five spans in a single left-to-right pass:
//!
//! ```text
//! type ["/" [facet "."] subtype ["+" suffix]] *(";" name "=" value)
//! ```
//!
//! Spans borrow from the input and are never trimmed here. Trimming happens
//! at the point of use so that the raw string always round-trips unchanged.

use std::str::Split;

/// The untrimmed spans of a media type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spans<'a> {
    /// Everything before the first `/` or `;`.
    pub ty: &'a str,
    /// The subtype prefix up to its first `.`.
    pub facet: Option<&'a str>,
    /// The subtype with facet and suffix removed.
    pub subtype: Option<&'a str>,
    /// Everything after the last `+` of the subtype.
    pub suffix: Option<&'a str>,
    /// Everything after the first `;`.
    pub parameters: Option<&'a str>,
}

/// Splits `raw` into its component spans.
///
/// The facet is split on the first `.` and the suffix on the last `+`, so
/// `text/vnd.rtf.dir` has the subtype `rtf.dir` and `image/jpeg+2000+q10`
/// has the subtype `jpeg+2000`.
///
/// # Examples
///
/// ```
/// use media_type::grammar::decompose;
///
/// let spans = decompose("application/vnd.api+json; charset=UTF-8");
/// assert_eq!(spans.ty, "application");
/// assert_eq!(spans.facet, Some("vnd"));
/// assert_eq!(spans.subtype, Some("api"));
/// assert_eq!(spans.suffix, Some("json"));
/// assert_eq!(spans.parameters, Some(" charset=UTF-8"));
/// ```
pub fn decompose(raw: &str) -> Spans<'_> {
    let (head, parameters) = match raw.split_once(';') {
        Some((head, parameters)) => (head, Some(parameters)),
        None => (raw, None),
    };

    let (ty, rest) = match head.split_once('/') {
        Some((ty, rest)) => (ty, Some(rest)),
        None => (head, None),
    };

    let mut facet = None;
    let mut suffix = None;
    let subtype = rest.map(|rest| {
        let rest = match rest.split_once('.') {
            Some((prefix, rest)) => {
                facet = Some(prefix);
                rest
            }
            None => rest,
        };
        match rest.rsplit_once('+') {
            Some((subtype, tail)) => {
                suffix = Some(tail);
                subtype
            }
            None => rest,
        }
    });

    Spans {
        ty,
        facet,
        subtype,
        suffix,
        parameters,
    }
}

/// Trims a span and maps an empty result to `None`.
pub fn component(span: Option<&str>) -> Option<&str> {
    span.map(str::trim).filter(|s| !s.is_empty())
}

/// Iterator over the `name=value` pairs of a parameter block.
///
/// Every occurrence is yielded in order, duplicates included. Names and
/// values are trimmed. Segments that are empty, lack an `=`, or have an
/// empty name or value are skipped.
#[derive(Debug, Clone)]
pub struct Parameters<'a> {
    segments: Option<Split<'a, char>>,
}

impl<'a> Parameters<'a> {
    /// Creates an iterator over the given parameter block.
    pub fn new(block: Option<&'a str>) -> Self {
        Self {
            segments: block.map(|block| block.split(';')),
        }
    }
}

impl<'a> Iterator for Parameters<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let segments = self.segments.as_mut()?;
        for segment in segments {
            let Some((name, value)) = segment.split_once('=') else {
                continue;
            };
            let (name, value) = (name.trim(), value.trim());
            if !name.is_empty() && !value.is_empty() {
                return Some((name, value));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_type_only() {
        let spans = decompose("image");
        assert_eq!(spans.ty, "image");
        assert_eq!(spans.subtype, None);
        assert_eq!(spans.facet, None);
        assert_eq!(spans.suffix, None);
        assert_eq!(spans.parameters, None);
    }

    #[test]
    fn test_decompose_trailing_delimiters() {
        let spans = decompose("video/");
        assert_eq!(spans.ty, "video");
        assert_eq!(spans.subtype, Some(""));
        assert_eq!(component(spans.subtype), None);

        let spans = decompose("video;");
        assert_eq!(spans.ty, "video");
        assert_eq!(spans.subtype, None);
        assert_eq!(spans.parameters, Some(""));

        let spans = decompose("text/plain+");
        assert_eq!(spans.subtype, Some("plain"));
        assert_eq!(component(spans.suffix), None);
    }

    #[test]
    fn test_decompose_last_plus_wins() {
        let spans = decompose("image/jpeg+2000+q10");
        assert_eq!(spans.subtype, Some("jpeg+2000"));
        assert_eq!(spans.suffix, Some("q10"));
    }

    #[test]
    fn test_decompose_first_period_wins() {
        let spans = decompose("text/vnd.rtf.dir");
        assert_eq!(spans.facet, Some("vnd"));
        assert_eq!(spans.subtype, Some("rtf.dir"));
    }

    #[test]
    fn test_decompose_delimiters_inside_parameters() {
        let spans = decompose("text/plain; name=a/b.c+d");
        assert_eq!(spans.subtype, Some("plain"));
        assert_eq!(spans.facet, None);
        assert_eq!(spans.suffix, None);
        assert_eq!(spans.parameters, Some(" name=a/b.c+d"));
    }

    #[test]
    fn test_decompose_preserves_whitespace() {
        let spans = decompose(" text / plain ; charset = UTF-8 ");
        assert_eq!(spans.ty, " text ");
        assert_eq!(spans.subtype, Some(" plain "));
        assert_eq!(component(spans.subtype), Some("plain"));
    }

    #[test]
    fn test_parameters_in_order_with_duplicates() {
        let pairs: Vec<_> =
            Parameters::new(Some(" charset=UTF-8; charset=US-ASCII; linebreak = lf ")).collect();
        assert_eq!(
            pairs,
            vec![("charset", "UTF-8"), ("charset", "US-ASCII"), ("linebreak", "lf")]
        );
    }

    #[test]
    fn test_parameters_skip_malformed_segments() {
        let pairs: Vec<_> =
            Parameters::new(Some(" a=1;; ;b: 2; =3; c=; d=x=y;")).collect();
        assert_eq!(pairs, vec![("a", "1"), ("d", "x=y")]);
    }

    #[test]
    fn test_parameters_skip_whitespace_only_values() {
        let pairs: Vec<_> = Parameters::new(Some(" a= ; b=\t; c=3")).collect();
        assert_eq!(pairs, vec![("c", "3")]);
    }

    #[test]
    fn test_parameters_absent_block() {
        assert_eq!(Parameters::new(None).count(), 0);
    }
}
