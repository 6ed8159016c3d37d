//! Narrow/wide text conversion
//!
//! "Narrow" text is a byte sequence in a single configured encoding (UTF-8 by
//! default, GBK for the Simplified Chinese locale). "Wide" text is Unicode held
//! as a Rust `String`. Conversions are strict: malformed input or characters
//! the narrow encoding cannot represent fail instead of being replaced.

use super::error::{LoggerError, Result};
use encoding_rs::Encoding;

pub const DEFAULT_ENCODING: &str = "UTF-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCodec {
    encoding: &'static Encoding,
}

impl TextCodec {
    /// UTF-8 codec, the default for every target.
    pub fn utf8() -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
        }
    }

    /// Look up a codec by label.
    ///
    /// Accepts the WHATWG labels known to `encoding_rs` plus a few locale
    /// spellings (`chs`, `cp936`, `utf8`). Encodings that `encoding_rs` can
    /// only decode (UTF-16, `replacement`) are rejected.
    pub fn for_label(label: &str) -> Result<Self> {
        let normalized = normalize_label(label);
        let encoding = Encoding::for_label(normalized.as_bytes())
            .ok_or_else(|| LoggerError::UnknownEncoding(label.to_string()))?;
        if encoding.output_encoding() != encoding {
            return Err(LoggerError::encoding(
                encoding.name(),
                format!("label '{}' cannot be used for output", label),
            ));
        }
        Ok(Self { encoding })
    }

    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode narrow bytes into wide text.
    pub fn narrow_to_wide(&self, bytes: &[u8]) -> Result<String> {
        let (decoded, had_errors) = self.encoding.decode_without_bom_handling(bytes);
        if had_errors {
            return Err(LoggerError::encoding(
                self.name(),
                format!("invalid {} byte sequence", self.name()),
            ));
        }
        Ok(decoded.into_owned())
    }

    /// Encode wide text into narrow bytes.
    pub fn wide_to_narrow(&self, text: &str) -> Result<Vec<u8>> {
        let (encoded, _, had_errors) = self.encoding.encode(text);
        if had_errors {
            let offending = text
                .chars()
                .find(|c| {
                    let mut buf = [0u8; 4];
                    self.encoding.encode(c.encode_utf8(&mut buf)).2
                })
                .map(|c| format!("cannot represent {:?}", c))
                .unwrap_or_else(|| "unmappable character".to_string());
            return Err(LoggerError::encoding(self.name(), offending));
        }
        Ok(encoded.into_owned())
    }
}

impl Default for TextCodec {
    fn default() -> Self {
        Self::utf8()
    }
}

fn normalize_label(label: &str) -> String {
    let lower = label.trim().to_ascii_lowercase();
    match lower.as_str() {
        "" | "." => DEFAULT_ENCODING.to_string(),
        "utf8" => "utf-8".to_string(),
        "chs" | "cp936" | "zh_cn" | "zh-cn" => "gbk".to_string(),
        _ => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_round_trip() {
        let codec = TextCodec::utf8();
        let text = "日志 log ✓";
        let narrow = codec.wide_to_narrow(text).unwrap();
        assert_eq!(narrow, text.as_bytes());
        assert_eq!(codec.narrow_to_wide(&narrow).unwrap(), text);
    }

    #[test]
    fn test_gbk_round_trip() {
        let codec = TextCodec::for_label("chs").unwrap();
        assert_eq!(codec.name(), "GBK");

        let text = "用于记录中文日志";
        let narrow = codec.wide_to_narrow(text).unwrap();
        assert_ne!(narrow, text.as_bytes());
        assert_eq!(narrow.len(), 16);
        assert_eq!(codec.narrow_to_wide(&narrow).unwrap(), text);
    }

    #[test]
    fn test_invalid_utf8_is_error() {
        let codec = TextCodec::utf8();
        let err = codec.narrow_to_wide(&[0x66, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, LoggerError::Encoding { .. }));
    }

    #[test]
    fn test_unrepresentable_char_is_error() {
        let codec = TextCodec::for_label("gbk").unwrap();
        let err = codec.wide_to_narrow("ok 😀").unwrap_err();
        assert!(err.to_string().contains("😀"));
    }

    #[test]
    fn test_label_normalization() {
        assert_eq!(TextCodec::for_label("utf8").unwrap(), TextCodec::utf8());
        assert_eq!(TextCodec::for_label("").unwrap().name(), "UTF-8");
        assert_eq!(TextCodec::for_label("latin1").unwrap().name(), "windows-1252");
        assert!(matches!(
            TextCodec::for_label("klingon"),
            Err(LoggerError::UnknownEncoding(_))
        ));
    }

    #[test]
    fn test_decode_only_encodings_rejected() {
        for label in ["utf-16le", "UTF-16BE", "iso-2022-kr"] {
            let err = TextCodec::for_label(label).unwrap_err();
            assert!(
                matches!(err, LoggerError::Encoding { .. }),
                "{} accepted: {:?}",
                label,
                err
            );
        }
    }
}
