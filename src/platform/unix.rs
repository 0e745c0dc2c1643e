//! Unix extension databases.
//!
//! Implements loading from:
//! - FreeDesktop Shared MIME-info Database (globs2 format)
//! - Traditional mime.types files

use crate::error::Result;
use crate::extension::{parse_mime_types_line, Registry};
use crate::media_type::MediaType;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Paths to FreeDesktop Shared MIME-info Database globs2 files.
const MIME_GLOBS: &[&str] = &[
    "/usr/local/share/mime/globs2",
    "/usr/share/mime/globs2",
];

/// Common locations for mime.types files on Unix.
const TYPE_FILES: &[&str] = &[
    "/etc/mime.types",
    "/etc/apache2/mime.types",
    "/etc/apache/mime.types",
    "/etc/httpd/conf/mime.types",
];

pub(super) fn load_system_types(registry: &mut Registry) {
    // Stop at the first globs2 database found; mime.types files are the fallback.
    for filename in MIME_GLOBS {
        match load_globs_file(registry, filename) {
            Ok(added) => {
                tracing::debug!(path = filename, added, "loaded shared MIME-info globs");
                return;
            }
            Err(err) => tracing::debug!(path = filename, error = %err, "globs2 database unavailable"),
        }
    }

    for filename in TYPE_FILES {
        match load_types_file(registry, filename) {
            Ok(added) => tracing::debug!(path = filename, added, "loaded mime.types file"),
            Err(err) => tracing::debug!(path = filename, error = %err, "mime.types file unavailable"),
        }
    }
}

/// Parses a globs2 line into its extension and media type.
///
/// Format: `weight:mimetype:glob[:morefields...]`
/// Example: `50:text/plain:*.txt`
///
/// Only simple `*.ext` globs are accepted.
///
/// See https://specifications.freedesktop.org/shared-mime-info-spec/shared-mime-info-spec-0.21.html
fn parse_globs_line(line: &str) -> Option<(&str, MediaType)> {
    let mut fields = line.split(':');
    let weight = fields.next()?;
    let media_type = fields.next()?;
    let glob = fields.next()?;

    if weight.is_empty() || weight.starts_with('#') || glob.len() < 3 {
        return None;
    }
    let extension = glob.strip_prefix('*')?;
    if !extension.starts_with('.') || extension.contains(&['?', '*', '['][..]) {
        return None;
    }
    Some((extension, MediaType::new(media_type)?))
}

fn load_globs_file(registry: &mut Registry, filename: &str) -> Result<usize> {
    let reader = BufReader::new(File::open(filename)?);

    let mut added = 0;
    for line in reader.lines() {
        let line = line?;
        if let Some((extension, media_type)) = parse_globs_line(&line) {
            if registry.insert(extension, media_type, true) {
                added += 1;
            }
        }
    }
    Ok(added)
}

fn load_types_file(registry: &mut Registry, filename: &str) -> Result<usize> {
    let reader = BufReader::new(File::open(filename)?);

    let mut added = 0;
    for line in reader.lines() {
        let line = line?;
        let Some((media_type, exts)) = parse_mime_types_line(&line) else {
            continue;
        };
        for ext in exts {
            if registry.insert(&ext, media_type.clone(), true) {
                added += 1;
            }
        }
    }
    Ok(added)
}
