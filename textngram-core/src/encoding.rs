//! Character encoding resolution and conversion
//!
//! Source text may arrive in any encoding the WHATWG Encoding Standard knows
//! about. Decoding is strict: malformed input is reported with its byte
//! position instead of being replaced.
//!
//! A single process-wide default encoding backs every construction that does
//! not name one. It is UTF-8 unless [`configure_default`] sets it once, and it
//! is read at construction time only.

use crate::error::{NgramError, Result};
use encoding_rs::{DecoderResult, Encoding};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Canonical names of commonly used encodings, for listing purposes
pub const COMMON_ENCODINGS: &[&str] = &[
    "UTF-8",
    "UTF-16LE",
    "UTF-16BE",
    "Shift_JIS",
    "EUC-JP",
    "ISO-2022-JP",
    "EUC-KR",
    "GBK",
    "gb18030",
    "Big5",
    "windows-1252",
    "ISO-8859-2",
    "KOI8-R",
];

static DEFAULT_ENCODING: OnceLock<TextEncoding> = OnceLock::new();

/// A character encoding understood by the decoding layer
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding {
    inner: &'static Encoding,
}

impl TextEncoding {
    /// UTF-8
    pub fn utf8() -> Self {
        Self {
            inner: encoding_rs::UTF_8,
        }
    }

    /// Resolve an encoding label such as `"utf8"`, `"Shift_JIS"` or `"latin1"`
    pub fn for_label(label: &str) -> Result<Self> {
        Encoding::for_label(label.trim().as_bytes())
            .map(|inner| Self { inner })
            .ok_or_else(|| NgramError::UnsupportedEncoding {
                label: label.to_string(),
            })
    }

    /// Canonical name of the encoding
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Whether this is UTF-8
    pub fn is_utf8(&self) -> bool {
        self.inner == encoding_rs::UTF_8
    }

    /// Encoding actually produced by [`TextEncoding::encode`]
    ///
    /// Identical to `self` except for UTF-16LE, UTF-16BE and the replacement
    /// encoding, which encode as UTF-8.
    pub fn output_encoding(&self) -> Self {
        Self {
            inner: self.inner.output_encoding(),
        }
    }

    /// Decode `bytes` into a string
    ///
    /// A leading byte order mark for this same encoding is skipped.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        let bom_len = match Encoding::for_bom(bytes) {
            Some((found, len)) if found == self.inner => len,
            _ => 0,
        };
        let body = &bytes[bom_len..];

        let mut decoder = self.inner.new_decoder_without_bom_handling();
        let mut out = String::with_capacity(utf8_capacity(&decoder, body.len()));
        let mut consumed = 0;

        loop {
            let (result, read) =
                decoder.decode_to_string_without_replacement(&body[consumed..], &mut out, true);
            consumed += read;

            match result {
                DecoderResult::InputEmpty => return Ok(out),
                DecoderResult::OutputFull => {
                    out.reserve(utf8_capacity(&decoder, body.len() - consumed));
                }
                DecoderResult::Malformed(bad, trailing) => {
                    return Err(NgramError::MalformedInput {
                        encoding: self.name(),
                        position: bom_len + consumed - bad as usize - trailing as usize,
                    });
                }
            }
        }
    }

    /// Encode `text` into this encoding's output encoding
    ///
    /// UTF-8 targets borrow the input unchanged.
    pub fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>> {
        let (bytes, used, unmappable) = self.inner.encode(text);
        if unmappable {
            return Err(NgramError::Unencodable { encoding: used.name() });
        }
        Ok(bytes)
    }
}

fn utf8_capacity(decoder: &encoding_rs::Decoder, remaining: usize) -> usize {
    decoder
        .max_utf8_buffer_length_without_replacement(remaining)
        .unwrap_or_else(|| remaining.saturating_mul(3))
        .max(4)
}

impl Default for TextEncoding {
    fn default() -> Self {
        default_encoding()
    }
}

impl fmt::Debug for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextEncoding").field(&self.name()).finish()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = NgramError;

    fn from_str(s: &str) -> Result<Self> {
        Self::for_label(s)
    }
}

/// The process-wide default encoding
pub fn default_encoding() -> TextEncoding {
    DEFAULT_ENCODING
        .get()
        .copied()
        .unwrap_or_else(TextEncoding::utf8)
}

/// Set the process-wide default encoding
///
/// May succeed at most once per process. Sequences built earlier keep the
/// encoding they were built with.
pub fn configure_default(encoding: TextEncoding) -> Result<()> {
    DEFAULT_ENCODING
        .set(encoding)
        .map_err(|_| NgramError::DefaultAlreadyConfigured)?;
    tracing::debug!(encoding = encoding.name(), "configured default encoding");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_resolution() {
        assert_eq!(TextEncoding::for_label("UTF-8").unwrap().name(), "UTF-8");
        assert_eq!(TextEncoding::for_label("utf8").unwrap().name(), "UTF-8");
        assert_eq!(
            TextEncoding::for_label("sjis").unwrap().name(),
            "Shift_JIS"
        );
        assert_eq!(
            TextEncoding::for_label(" latin1 ").unwrap().name(),
            "windows-1252"
        );
    }

    #[test]
    fn test_unknown_label() {
        let err = TextEncoding::for_label("klingon").unwrap_err();
        assert!(matches!(err, NgramError::UnsupportedEncoding { ref label } if label == "klingon"));
    }

    #[test]
    fn test_from_str() {
        let enc: TextEncoding = "euc-jp".parse().unwrap();
        assert_eq!(enc.name(), "EUC-JP");
        assert_eq!(enc.to_string(), "EUC-JP");
    }

    #[test]
    fn test_decode_utf8() {
        let text = TextEncoding::utf8().decode("こんにちは".as_bytes()).unwrap();
        assert_eq!(text, "こんにちは");
    }

    #[test]
    fn test_decode_skips_matching_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("abc".as_bytes());
        assert_eq!(TextEncoding::utf8().decode(&bytes).unwrap(), "abc");
    }

    #[test]
    fn test_decode_shift_jis() {
        // "日本" in Shift_JIS
        let bytes = [0x93, 0xFA, 0x96, 0x7B];
        let sjis = TextEncoding::for_label("Shift_JIS").unwrap();
        assert_eq!(sjis.decode(&bytes).unwrap(), "日本");
    }

    #[test]
    fn test_decode_malformed_reports_position() {
        let bytes = [b'a', b'b', 0xFF, b'c'];
        let err = TextEncoding::utf8().decode(&bytes).unwrap_err();
        match err {
            NgramError::MalformedInput { encoding, position } => {
                assert_eq!(encoding, "UTF-8");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(TextEncoding::utf8().decode(&[]).unwrap(), "");
    }

    #[test]
    fn test_encode_round_trip_shift_jis() {
        let sjis = TextEncoding::for_label("Shift_JIS").unwrap();
        let bytes = sjis.encode("日本").unwrap();
        assert_eq!(bytes.as_ref(), &[0x93, 0xFA, 0x96, 0x7B]);
    }

    #[test]
    fn test_encode_utf8_borrows() {
        let bytes = TextEncoding::utf8().encode("abc").unwrap();
        assert!(matches!(bytes, Cow::Borrowed(_)));
    }

    #[test]
    fn test_encode_unmappable() {
        let latin = TextEncoding::for_label("ISO-8859-1").unwrap();
        let err = latin.encode("日本").unwrap_err();
        assert!(matches!(err, NgramError::Unencodable { .. }));
    }

    #[test]
    fn test_utf16_output_encoding() {
        let utf16 = TextEncoding::for_label("UTF-16LE").unwrap();
        assert!(utf16.output_encoding().is_utf8());
        assert!(!utf16.is_utf8());
    }
}
