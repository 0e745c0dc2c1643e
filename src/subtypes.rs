//! Well-known subtypes of the registered top-level types.
//!
//! Each enumeration carries the registered spelling of its subtypes, which
//! may include a facet and suffix (`vnd.apple.installer+xml`). The
//! `MediaType::<type>` factories accept either an enumeration value or any
//! other subtype string.

use crate::media_type::MediaType;
use crate::top_level_type::TopLevelType;
use std::fmt;

macro_rules! subtypes {
    (
        $(#[$meta:meta])*
        $name:ident, $factory:ident => $ty:ident {
            $($variant:ident => $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Returns the registered subtype string.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl MediaType {
            #[doc = concat!("Returns the `", stringify!($factory), "/<subtype>` media type.")]
            pub fn $factory(subtype: impl AsRef<str>) -> MediaType {
                MediaType::with_subtype(TopLevelType::$ty, subtype.as_ref())
            }
        }
    };
}

subtypes! {
    /// Subtypes of `application`.
    ApplicationSubtype, application => Application {
        AppleInstallerPackage => "vnd.apple.installer+xml",
        AppleKeynote => "vnd.apple.keynote",
        AppleNumbers => "vnd.apple.numbers",
        ApplePages => "vnd.apple.pages",
        BzipArchive => "x-bzip",
        Bzip2Archive => "x-bzip2",
        CShellScript => "x-csh",
        Dns => "dns",
        DnsJson => "dns+json",
        DnsMessage => "dns-message",
        EcmaScript => "ecmascript",
        EpubBook => "epub+zip",
        Gzip => "gzip",
        Http => "http",
        JavaArchive => "java-archive",
        JavaScript => "javascript",
        Json => "json",
        JsonLd => "ld+json",
        MicrosoftWord => "msword",
        MicrosoftWordXml => "vnd.openxmlformats-officedocument.wordprocessingml.document",
        MicrosoftEmbeddedFont => "vnd.ms-fontobject",
        MicrosoftExcel => "vnd.ms-excel",
        MicrosoftPowerpoint => "vnd.ms-powerpoint",
        MicrosoftProject => "vnd.ms-project",
        OctetStream => "octet-stream",
        Ogg => "ogg",
        OpenDocumentChart => "vnd.oasis.opendocument.chart",
        OpenDocumentDatabase => "vnd.oasis.opendocument.database",
        OpenDocumentFormula => "vnd.oasis.opendocument.formula",
        OpenDocumentGraphics => "vnd.oasis.opendocument.graphics",
        OpenDocumentImage => "vnd.oasis.opendocument.image",
        OpenDocumentPresentation => "vnd.oasis.opendocument.presentation",
        OpenDocumentSpreadsheet => "vnd.oasis.opendocument.spreadsheet",
        OpenDocumentText => "vnd.oasis.opendocument.text",
        Pdf => "pdf",
        PgpEncrypted => "pgp-encrypted",
        PgpKeys => "pgp-keys",
        PgpSignature => "pgp-signature",
        Pkcs10 => "pkcs10",
        Pkcs7Mime => "pkcs7-mime",
        Pkcs7Signature => "pkcs7-signature",
        Pkcs8 => "pkcs8",
        Pkcs8Encrypted => "pkcs8-encrypted",
        Pkcs12 => "pkcs12",
        Postscript => "postscript",
        QuarkXPress => "vnd.Quark.QuarkXPress",
        Rar => "vnd.rar",
        RarCompressed => "x-rar-compressed",
        RestfulJson => "vnd.restful+json",
        Rtf => "rtf",
        Sgml => "SGML",
        SoapXml => "soap+xml",
        Sql => "sql",
        Tar => "x-tar",
        VcardJson => "vcard+json",
        VcardXml => "vcard+xml",
        Visio => "vnd.visio",
        Wasm => "wasm",
        WsdlXml => "wsdl+xml",
        Xml => "xml",
        XmlDtd => "xml-dtd",
        XsltXml => "xslt+xml",
        Zip => "zip",
        Zlib => "zlib",
    }
}

subtypes! {
    /// Subtypes of `audio`.
    AudioSubtype, audio => Audio {
        Aac => "aac",
        Ac3 => "ac3",
        Midi => "midi",
        Mp4 => "mp4",
        Mpeg => "mpeg",
        Ogg => "ogg",
        Pcma => "PCMA",
        Vorbis => "vorbis",
        Webm => "webm",
    }
}

subtypes! {
    /// Subtypes of `font`.
    FontSubtype, font => Font {
        Collection => "collection",
        Otf => "otf",
        Ttf => "ttf",
        Woff => "woff",
        Woff2 => "woff2",
    }
}

subtypes! {
    /// Subtypes of `haptics`.
    HapticsSubtype, haptics => Haptics {
        Ivs => "ivs",
        Hjif => "hjif",
        Hmpg => "hmpg",
    }
}

subtypes! {
    /// Subtypes of `image`.
    ImageSubtype, image => Image {
        Avif => "avif",
        AvifSequence => "avif-sequence",
        Bmp => "bmp",
        Gif => "gif",
        Heic => "heic",
        HeicSequence => "heic-sequence",
        Heif => "heif",
        HeifSequence => "heif-sequence",
        Icon => "vnd.microsoft.icon",
        Jpeg => "jpeg",
        Png => "png",
        AdobePhotoshop => "vnd.adobe.photoshop",
        Svg => "svg+xml",
        Tiff => "tiff",
        Webp => "webp",
    }
}

subtypes! {
    /// Subtypes of `message`.
    MessageSubtype, message => Message {
        Http => "http",
        Rfc822 => "rfc822",
        SecureHttp => "s-http",
    }
}

subtypes! {
    /// Subtypes of `model`.
    ModelSubtype, model => Model {
        Dwf => "vnd.dwf",
        Mesh => "mesh",
        Mtl => "mtl",
        Obj => "obj",
        Stl => "stl",
        Vrml => "vrml",
        X3dXml => "x3d+xml",
    }
}

subtypes! {
    /// Subtypes of `multipart`.
    MultipartSubtype, multipart => Multipart {
        Digest => "digest",
        Encrypted => "encrypted",
        FormData => "form-data",
        HeaderSet => "header-set",
        Mixed => "mixed",
        Multilingual => "multilingual",
        Parallel => "parallel",
        Related => "related",
        Report => "report",
        Signed => "signed",
    }
}

subtypes! {
    /// Subtypes of `text`.
    TextSubtype, text => Text {
        Calendar => "calendar",
        Css => "css",
        Csv => "csv",
        Directory => "directory",
        Dns => "dns",
        EcmaScript => "ecmascript",
        Html => "html",
        JavaScript => "javascript",
        Markdown => "markdown",
        Parameters => "parameters",
        Plain => "plain",
        RichText => "richtext",
        Rtf => "rtf",
        Sgml => "SGML",
        Strings => "strings",
        Vcard => "vcard",
        Xml => "xml",
    }
}

subtypes! {
    /// Subtypes of `video`.
    VideoSubtype, video => Video {
        Avi => "x-msvideo",
        H261 => "H261",
        H263 => "H263",
        H264 => "H264",
        H265 => "H265",
        Jpeg => "JPEG",
        Jpeg2000 => "jpeg2000",
        Mp4 => "mp4",
        Mpeg => "mpeg",
        Mpeg4Generic => "mpeg4-generic",
        Ogg => "ogg",
        Quicktime => "quicktime",
        Raw => "raw",
        Vp8 => "VP8",
    }
}
