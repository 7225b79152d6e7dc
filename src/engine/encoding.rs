use encoding_rs::BIG5;

/// Decoded artifact text plus the label downstream auditing sees.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub text: String,
    pub encoding_used: String,
    pub lossy: bool,
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode raw artifact bytes against a fixed candidate order: strict
/// UTF-8 with BOM stripping first, then Big5 with U+FFFD replacement
/// for undecodable sequences. Total: never fails, empty input decodes
/// to an empty string under the primary encoding.
///
/// When replacement occurred the label carries a `(replace)` suffix,
/// which is the only channel telling consumers the text was altered.
pub fn decode_artifact(bytes: &[u8]) -> Decoded {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(body) {
        return Decoded {
            text: text.to_owned(),
            encoding_used: "utf-8-sig".to_string(),
            lossy: false,
        };
    }

    let (text, had_errors) = BIG5.decode_without_bom_handling(bytes);
    Decoded {
        text: text.into_owned(),
        encoding_used: if had_errors {
            "big5(replace)".to_string()
        } else {
            "big5".to_string()
        },
        lossy: had_errors,
    }
}
