//! Subtype registration trees (RFC 6838 section 3).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The registration tree of a subtype, identified by its facet.
///
/// The standards tree has no facet. Facets are matched case-insensitively;
/// unknown facets are kept verbatim in [`Tree::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tree {
    /// No facet, e.g. `text/plain`.
    Standards,
    /// `vnd.`
    Vendor,
    /// `prs.`
    Personal,
    /// `x.`
    Unregistered,
    Other(String),
}

impl Tree {
    /// Parses a facet. An empty facet is the standards tree.
    pub fn parse(facet: &str) -> Self {
        let facet = facet.trim();
        if facet.is_empty() {
            Tree::Standards
        } else if facet.eq_ignore_ascii_case("vnd") {
            Tree::Vendor
        } else if facet.eq_ignore_ascii_case("prs") {
            Tree::Personal
        } else if facet.eq_ignore_ascii_case("x") {
            Tree::Unregistered
        } else {
            Tree::Other(facet.to_string())
        }
    }

    /// Returns the facet string, which is empty for the standards tree.
    pub fn as_str(&self) -> &str {
        match self {
            Tree::Standards => "",
            Tree::Vendor => "vnd",
            Tree::Personal => "prs",
            Tree::Unregistered => "x",
            Tree::Other(facet) => facet,
        }
    }

    /// Returns the facet to place before the subtype, or `None` for the
    /// standards tree.
    pub fn facet(&self) -> Option<&str> {
        match self {
            Tree::Standards => None,
            tree => Some(tree.as_str()),
        }
    }

    /// Returns the tree with an [`Tree::Other`] facet lower-cased.
    pub fn normalized(&self) -> Self {
        match self {
            Tree::Other(facet) => Tree::Other(facet.to_lowercase()),
            tree => tree.clone(),
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Tree::Standards
    }
}

impl FromStr for Tree {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Tree {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Standards => f.write_str("[standards]"),
            tree => f.write_str(tree.as_str()),
        }
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
