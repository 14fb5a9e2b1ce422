//! Conversion between legacy code pages and Unicode text.
//!
//! The parser works on Unicode scalars only. Callers that receive path
//! strings in a legacy Windows code page convert them with a [`TextCodec`]
//! before parsing, and back again before handing them to legacy APIs.
//!
//! # Examples
//!
//! ```
//! use winpath::encoding::{TextCodec, Windows1252Codec};
//!
//! let codec = Windows1252Codec;
//! let text = codec.to_universal(b"hello \x80 world").unwrap();
//! assert_eq!(text, "hello \u{20ac} world");
//! assert_eq!(codec.from_universal(&text).unwrap(), b"hello \x80 world");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Converts between a byte encoding and Unicode text.
pub trait TextCodec {
    /// The code page this codec implements.
    fn code_page(&self) -> CodePage;

    /// Decode `bytes` into Unicode text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if `bytes` is not valid in this encoding.
    fn to_universal(&self, bytes: &[u8]) -> Result<String>;

    /// Encode Unicode `text` into bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if `text` contains a scalar this encoding
    /// cannot represent.
    fn from_universal(&self, text: &str) -> Result<Vec<u8>>;
}

/// Known Windows code page identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodePage {
    /// Western European (Windows).
    Cp1252,
    /// UTF-16 big endian.
    UnicodeFffe,
    /// Mac Roman.
    Macintosh,
    /// UTF-32 little endian.
    Utf32,
    /// UTF-32 big endian.
    Utf32Be,
    /// US-ASCII.
    UsAscii,
    /// ISO 8859-1 Latin 1.
    Iso88591,
    /// ISO 8859-2 Central European.
    Iso88592,
    /// UTF-7.
    Utf7,
    /// UTF-8.
    Utf8,
}

impl CodePage {
    const ALL: [Self; 10] = [
        Self::Cp1252,
        Self::UnicodeFffe,
        Self::Macintosh,
        Self::Utf32,
        Self::Utf32Be,
        Self::UsAscii,
        Self::Iso88591,
        Self::Iso88592,
        Self::Utf7,
        Self::Utf8,
    ];

    /// The numeric Windows identifier.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::Cp1252 => 1252,
            Self::UnicodeFffe => 1201,
            Self::Macintosh => 10000,
            Self::Utf32 => 12000,
            Self::Utf32Be => 12001,
            Self::UsAscii => 20127,
            Self::Iso88591 => 28591,
            Self::Iso88592 => 28592,
            Self::Utf7 => 65000,
            Self::Utf8 => 65001,
        }
    }

    /// A codec for this code page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for code pages without a built-in codec.
    pub fn codec(self) -> Result<Box<dyn TextCodec>> {
        match self {
            Self::Cp1252 => Ok(Box::new(Windows1252Codec)),
            Self::Utf8 => Ok(Box::new(Utf8Codec)),
            other => Err(Error::Unsupported {
                operation: format!("conversion for code page {}", other.id()),
            }),
        }
    }
}

impl TryFrom<u32> for CodePage {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|cp| cp.id() == id)
            .ok_or_else(|| Error::Validation {
                field: "code_page".to_string(),
                message: format!("unknown code page {id}"),
            })
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// UTF-8, the universal encoding. Decoding validates the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Codec;

impl TextCodec for Utf8Codec {
    fn code_page(&self) -> CodePage {
        CodePage::Utf8
    }

    fn to_universal(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec()).map_err(|e| Error::Encoding {
            code_page: CodePage::Utf8.id(),
            reason: e.to_string(),
        })
    }

    fn from_universal(&self, text: &str) -> Result<Vec<u8>> {
        Ok(text.as_bytes().to_vec())
    }
}

/// Windows code page 1252 (Western European).
#[derive(Debug, Clone, Copy, Default)]
pub struct Windows1252Codec;

// 0x80..=0x9F; the rest of the code page maps bytes to the same code point.
const CP1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

impl Windows1252Codec {
    fn decode_byte(b: u8) -> Option<char> {
        match b {
            0x80..=0x9F => CP1252_HIGH[usize::from(b - 0x80)],
            _ => Some(char::from(b)),
        }
    }

    fn encode_scalar(c: char) -> Option<u8> {
        let cp = u32::from(c);
        if cp < 0x80 || (0xA0..=0xFF).contains(&cp) {
            return u8::try_from(cp).ok();
        }
        CP1252_HIGH
            .iter()
            .position(|&mapped| mapped == Some(c))
            .and_then(|i| u8::try_from(0x80 + i).ok())
    }
}

impl TextCodec for Windows1252Codec {
    fn code_page(&self) -> CodePage {
        CodePage::Cp1252
    }

    fn to_universal(&self, bytes: &[u8]) -> Result<String> {
        bytes
            .iter()
            .enumerate()
            .map(|(i, &b)| {
                Self::decode_byte(b).ok_or_else(|| Error::Encoding {
                    code_page: CodePage::Cp1252.id(),
                    reason: format!("byte 0x{b:02X} at offset {i} is undefined"),
                })
            })
            .collect()
    }

    fn from_universal(&self, text: &str) -> Result<Vec<u8>> {
        text.chars()
            .map(|c| {
                Self::encode_scalar(c).ok_or_else(|| Error::Encoding {
                    code_page: CodePage::Cp1252.id(),
                    reason: format!("U+{:04X} cannot be represented", u32::from(c)),
                })
            })
            .collect()
    }
}
