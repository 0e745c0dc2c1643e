//! IANA character set names.
//!
//! A subset of the IANA Character Sets registry: each entry is the preferred
//! MIME name followed by its registered aliases. Lookups are
//! case-insensitive.

use crate::media_type::MediaType;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Preferred MIME names and their aliases.
static CHARSETS: &[(&str, &[&str])] = &[
    (
        "US-ASCII",
        &[
            "ANSI_X3.4-1968",
            "iso-ir-6",
            "ANSI_X3.4-1986",
            "ISO_646.irv:1991",
            "ISO646-US",
            "us",
            "IBM367",
            "cp367",
            "csASCII",
        ],
    ),
    (
        "ISO-8859-1",
        &["ISO_8859-1:1987", "iso-ir-100", "ISO_8859-1", "latin1", "l1", "IBM819", "CP819", "csISOLatin1"],
    ),
    (
        "ISO-8859-2",
        &["ISO_8859-2:1987", "iso-ir-101", "ISO_8859-2", "latin2", "l2", "csISOLatin2"],
    ),
    (
        "ISO-8859-3",
        &["ISO_8859-3:1988", "iso-ir-109", "ISO_8859-3", "latin3", "l3", "csISOLatin3"],
    ),
    (
        "ISO-8859-4",
        &["ISO_8859-4:1988", "iso-ir-110", "ISO_8859-4", "latin4", "l4", "csISOLatin4"],
    ),
    (
        "ISO-8859-5",
        &["ISO_8859-5:1988", "iso-ir-144", "ISO_8859-5", "cyrillic", "csISOLatinCyrillic"],
    ),
    (
        "ISO-8859-6",
        &["ISO_8859-6:1987", "iso-ir-127", "ISO_8859-6", "ECMA-114", "ASMO-708", "arabic", "csISOLatinArabic"],
    ),
    (
        "ISO-8859-7",
        &[
            "ISO_8859-7:1987",
            "iso-ir-126",
            "ISO_8859-7",
            "ELOT_928",
            "ECMA-118",
            "greek",
            "greek8",
            "csISOLatinGreek",
        ],
    ),
    (
        "ISO-8859-8",
        &["ISO_8859-8:1988", "iso-ir-138", "ISO_8859-8", "hebrew", "csISOLatinHebrew"],
    ),
    (
        "ISO-8859-9",
        &["ISO_8859-9:1989", "iso-ir-148", "ISO_8859-9", "latin5", "l5", "csISOLatin5"],
    ),
    (
        "ISO-8859-10",
        &["iso-ir-157", "l6", "ISO_8859-10:1992", "csISOLatin6", "latin6"],
    ),
    ("ISO-8859-13", &["csISO885913"]),
    (
        "ISO-8859-14",
        &["iso-ir-199", "ISO_8859-14:1998", "ISO_8859-14", "latin8", "iso-celtic", "l8", "csISO885914"],
    ),
    ("ISO-8859-15", &["ISO_8859-15", "Latin-9", "csISO885915"]),
    (
        "ISO-8859-16",
        &["iso-ir-226", "ISO_8859-16:2001", "ISO_8859-16", "latin10", "l10", "csISO885916"],
    ),
    ("UTF-7", &["csUTF7"]),
    ("UTF-8", &["csUTF8"]),
    ("UTF-16", &["csUTF16"]),
    ("UTF-16BE", &["csUTF16BE"]),
    ("UTF-16LE", &["csUTF16LE"]),
    ("UTF-32", &["csUTF32"]),
    ("UTF-32BE", &["csUTF32BE"]),
    ("UTF-32LE", &["csUTF32LE"]),
    ("Shift_JIS", &["MS_Kanji", "csShiftJIS"]),
    (
        "EUC-JP",
        &["Extended_UNIX_Code_Packed_Format_for_Japanese", "csEUCPkdFmtJapanese"],
    ),
    ("ISO-2022-JP", &["csISO2022JP"]),
    ("ISO-2022-JP-2", &["csISO2022JP2"]),
    ("EUC-KR", &["csEUCKR"]),
    ("ISO-2022-KR", &["csISO2022KR"]),
    ("GB2312", &["csGB2312"]),
    ("GBK", &["CP936", "MS936", "windows-936", "csGBK"]),
    ("GB18030", &["csGB18030"]),
    ("Big5", &["csBig5"]),
    ("Big5-HKSCS", &["csBig5HKSCS"]),
    ("KOI8-R", &["csKOI8R"]),
    ("KOI8-U", &["csKOI8U"]),
    ("TIS-620", &["csTIS620", "ISO-8859-11"]),
    ("IBM437", &["cp437", "437", "csPC8CodePage437"]),
    ("IBM850", &["cp850", "850", "csPC850Multilingual"]),
    ("IBM866", &["cp866", "866", "csIBM866"]),
    ("macintosh", &["mac", "csMacintosh"]),
    ("windows-874", &["cswindows874"]),
    ("windows-1250", &["cswindows1250"]),
    ("windows-1251", &["cswindows1251"]),
    ("windows-1252", &["cswindows1252"]),
    ("windows-1253", &["cswindows1253"]),
    ("windows-1254", &["cswindows1254"]),
    ("windows-1255", &["cswindows1255"]),
    ("windows-1256", &["cswindows1256"]),
    ("windows-1257", &["cswindows1257"]),
    ("windows-1258", &["cswindows1258"]),
];

/// Lower-cased name or alias to preferred name.
static BY_LABEL: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut labels = HashMap::new();
    for &(preferred, aliases) in CHARSETS {
        labels.insert(preferred.to_ascii_lowercase(), preferred);
        for alias in aliases {
            labels.insert(alias.to_ascii_lowercase(), preferred);
        }
    }
    labels
});

/// Returns the preferred MIME name for a character set name or alias.
///
/// # Examples
///
/// ```
/// use media_type::charset::canonical_name;
///
/// assert_eq!(canonical_name("utf-8"), Some("UTF-8"));
/// assert_eq!(canonical_name("latin1"), Some("ISO-8859-1"));
/// assert_eq!(canonical_name("klingon"), None);
/// ```
pub fn canonical_name(label: &str) -> Option<&'static str> {
    BY_LABEL.get(&label.trim().to_ascii_lowercase()).copied()
}

impl MediaType {
    /// Returns the preferred name of the `charset` parameter. Returns `None`
    /// when there is no such parameter or the charset is not recognized.
    pub fn charset(&self) -> Option<&'static str> {
        self.parameter("charset").and_then(canonical_name)
    }

    /// Returns a media type with the given `charset` parameter, written in
    /// its preferred form when recognized.
    pub fn with_charset(&self, charset: &str) -> Self {
        let charset = canonical_name(charset).unwrap_or(charset);
        self.adding_parameter("charset", charset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name() {
        assert_eq!(canonical_name("UTF-8"), Some("UTF-8"));
        assert_eq!(canonical_name("utf-8"), Some("UTF-8"));
        assert_eq!(canonical_name("ISO_8859-1:1987"), Some("ISO-8859-1"));
        assert_eq!(canonical_name("ANSI_X3.4-1968"), Some("US-ASCII"));
        assert_eq!(canonical_name("shift_jis"), Some("Shift_JIS"));
        assert_eq!(canonical_name("unknown"), None);
        assert_eq!(canonical_name(""), None);
    }

    #[test]
    fn test_preferred_names_are_fixed_points() {
        for &(preferred, _) in CHARSETS {
            assert_eq!(canonical_name(preferred), Some(preferred));
        }
    }

    #[test]
    fn test_aliases_are_unique() {
        let total: usize = CHARSETS.iter().map(|(_, aliases)| aliases.len() + 1).sum();
        assert_eq!(BY_LABEL.len(), total);
    }

    #[test]
    fn test_media_type_charset() {
        assert_eq!(MediaType::from_static("text/plain").charset(), None);
        assert_eq!(MediaType::from_static("text/plain; charset=UTF-8").charset(), Some("UTF-8"));
        assert_eq!(MediaType::from_static("text/plain; charset=utf-8").charset(), Some("UTF-8"));
        assert_eq!(MediaType::from_static("text/plain; charset=bogus").charset(), None);
    }

    #[test]
    fn test_with_charset() {
        let mt = MediaType::from_static("text/plain").with_charset("utf-8");
        assert_eq!(mt, "text/plain; charset=UTF-8");
        let mt = MediaType::from_static("text/plain; charset=UTF-8").with_charset("x-bogus");
        assert_eq!(mt, "text/plain; charset=x-bogus");
    }
}
