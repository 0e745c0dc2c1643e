//! Markdown variants (RFC 7763 `variant` parameter).

use crate::media_type::MediaType;
use std::fmt;

/// A registered value of the `variant` parameter of `text/markdown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkdownVariant {
    Markdown,
    MultiMarkdown,
    Gfm,
    Pandoc,
    Pandoc2Rfc,
    Fountain,
    CommonMark,
    Kramdown,
    MarkdownExtra,
}

impl MarkdownVariant {
    pub const ALL: [MarkdownVariant; 9] = [
        MarkdownVariant::Markdown,
        MarkdownVariant::MultiMarkdown,
        MarkdownVariant::Gfm,
        MarkdownVariant::Pandoc,
        MarkdownVariant::Pandoc2Rfc,
        MarkdownVariant::Fountain,
        MarkdownVariant::CommonMark,
        MarkdownVariant::Kramdown,
        MarkdownVariant::MarkdownExtra,
    ];

    /// Parses a variant name case-insensitively.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(label))
    }

    /// Returns the registered spelling of the variant.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MarkdownVariant::Markdown => "markdown",
            MarkdownVariant::MultiMarkdown => "MultiMarkdown",
            MarkdownVariant::Gfm => "GFM",
            MarkdownVariant::Pandoc => "pandoc",
            MarkdownVariant::Pandoc2Rfc => "rfc7328",
            MarkdownVariant::Fountain => "Fountain",
            MarkdownVariant::CommonMark => "CommonMark",
            MarkdownVariant::Kramdown => "kramdown-rfc2629",
            MarkdownVariant::MarkdownExtra => "Extra",
        }
    }
}

impl fmt::Display for MarkdownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MediaType {
    /// Returns the `variant` parameter as a Markdown variant, or `None` if
    /// it is absent or not recognized.
    pub fn markdown_variant(&self) -> Option<MarkdownVariant> {
        self.parameter("variant").and_then(MarkdownVariant::parse)
    }

    /// Returns a media type with the given `variant` parameter.
    pub fn with_markdown_variant(&self, variant: MarkdownVariant) -> Self {
        self.adding_parameter("variant", variant.as_str())
    }
}
