// crates/tenc-core/src/codec/registry.rs
//
// Encoding-id resolution. Ids come in two forms: a decimal Windows code page
// ("932") or a WHATWG label ("shift_jis"). An empty id means UTF-8.

use encoding_rs::Encoding;

use crate::error::{Result, TencError};

/// Windows code pages this registry can express through the Encoding
/// Standard, ascending.
pub const KNOWN_CODE_PAGES: &[u16] = &[
    866, 874, 932, 936, 949, 950, 1200, 1201, 1250, 1251, 1252, 1253, 1254, 1255, 1256, 1257,
    1258, 10000, 10007, 20866, 21866, 28591, 28592, 28593, 28594, 28595, 28596, 28597, 28598,
    28600, 28603, 28604, 28605, 28606, 38598, 50220, 50222, 51932, 54936, 65001,
];

pub fn resolve(id: &str) -> Result<&'static Encoding> {
    let id = id.trim();
    if id.is_empty() {
        return Ok(encoding_rs::UTF_8);
    }
    if let Ok(cp) = id.parse::<u16>() {
        return by_code_page(cp).ok_or_else(|| TencError::UnknownEncoding(id.to_string()));
    }
    Encoding::for_label(id.as_bytes()).ok_or_else(|| TencError::UnknownEncoding(id.to_string()))
}

pub fn by_code_page(cp: u16) -> Option<&'static Encoding> {
    // 28591 (latin1) folds to windows-1252, the Encoding Standard's mapping.
    match cp {
        866 => Some(encoding_rs::IBM866),
        874 => Some(encoding_rs::WINDOWS_874),
        932 => Some(encoding_rs::SHIFT_JIS),
        936 => Some(encoding_rs::GBK),
        949 => Some(encoding_rs::EUC_KR),
        950 => Some(encoding_rs::BIG5),
        1200 => Some(encoding_rs::UTF_16LE),
        1201 => Some(encoding_rs::UTF_16BE),
        1250 => Some(encoding_rs::WINDOWS_1250),
        1251 => Some(encoding_rs::WINDOWS_1251),
        1252 | 28591 => Some(encoding_rs::WINDOWS_1252),
        1253 => Some(encoding_rs::WINDOWS_1253),
        1254 => Some(encoding_rs::WINDOWS_1254),
        1255 => Some(encoding_rs::WINDOWS_1255),
        1256 => Some(encoding_rs::WINDOWS_1256),
        1257 => Some(encoding_rs::WINDOWS_1257),
        1258 => Some(encoding_rs::WINDOWS_1258),
        10000 => Some(encoding_rs::MACINTOSH),
        10007 => Some(encoding_rs::X_MAC_CYRILLIC),
        20866 => Some(encoding_rs::KOI8_R),
        21866 => Some(encoding_rs::KOI8_U),
        28592 => Some(encoding_rs::ISO_8859_2),
        28593 => Some(encoding_rs::ISO_8859_3),
        28594 => Some(encoding_rs::ISO_8859_4),
        28595 => Some(encoding_rs::ISO_8859_5),
        28596 => Some(encoding_rs::ISO_8859_6),
        28597 => Some(encoding_rs::ISO_8859_7),
        28598 => Some(encoding_rs::ISO_8859_8),
        28600 => Some(encoding_rs::ISO_8859_10),
        28603 => Some(encoding_rs::ISO_8859_13),
        28604 => Some(encoding_rs::ISO_8859_14),
        28605 => Some(encoding_rs::ISO_8859_15),
        28606 => Some(encoding_rs::ISO_8859_16),
        38598 => Some(encoding_rs::ISO_8859_8_I),
        50220 | 50222 => Some(encoding_rs::ISO_2022_JP),
        51932 => Some(encoding_rs::EUC_JP),
        54936 => Some(encoding_rs::GB18030),
        65001 => Some(encoding_rs::UTF_8),
        _ => None,
    }
}

/// First code page mapping to `enc`, if any.
pub fn code_page_of(enc: &'static Encoding) -> Option<u16> {
    KNOWN_CODE_PAGES
        .iter()
        .copied()
        .find(|&cp| by_code_page(cp) == Some(enc))
}

/// Preamble bytes of an output encoding. Only UTF-8 output defines one;
/// UTF-16 destinations already encode as UTF-8 per the Encoding Standard.
pub fn preamble(enc: &'static Encoding) -> &'static [u8] {
    if enc == encoding_rs::UTF_8 {
        &[0xEF, 0xBB, 0xBF]
    } else {
        &[]
    }
}
