//! Whitespace tables. The ASCII sets follow HTML5 and exclude other control
//! characters.

pub const WHITESPACE_ASCII: &[u8] = b"\t\x0B\x0C \n\r";

pub const WHITESPACE_ASCII_NO_CR_LF: &[u8] = b"\t\x0B\x0C ";

/// <https://infra.spec.whatwg.org/#ascii-whitespace>
pub const WHITESPACE_INFRA_ASCII: &[u8] = b"\t\n\x0C\r ";

pub const UTF8_BYTE_ORDER_MARK: &[u8] = b"\xEF\xBB\xBF";

macro_rules! unicode_whitespace {
    (crlf) => {
        [
            0x0009, 0x000B, 0x000C, 0x0020, 0x000A, 0x000D, 0x0085, 0x00A0, 0x1680, 0x2000, 0x2001,
            0x2002, 0x2003, 0x2004, 0x2005, 0x2006, 0x2007, 0x2008, 0x2009, 0x200A, 0x2028, 0x2029,
            0x202F, 0x205F, 0x3000,
        ]
    };
    (no_crlf) => {
        [
            0x0009, 0x000B, 0x000C, 0x0020, 0x0085, 0x00A0, 0x1680, 0x2000, 0x2001, 0x2002, 0x2003,
            0x2004, 0x2005, 0x2006, 0x2007, 0x2008, 0x2009, 0x200A, 0x2028, 0x2029, 0x202F, 0x205F,
            0x3000,
        ]
    };
}

pub const WHITESPACE_UTF16: &[u16] = &unicode_whitespace!(crlf);
pub const WHITESPACE_UTF32: &[u32] = &unicode_whitespace!(crlf);
pub const WHITESPACE_UTF16_NO_CR_LF: &[u16] = &unicode_whitespace!(no_crlf);
pub const WHITESPACE_UTF32_NO_CR_LF: &[u32] = &unicode_whitespace!(no_crlf);

/// True for the 25 code points of [`WHITESPACE_UTF32`].
pub fn is_unicode_whitespace(code_point: u32) -> bool {
    WHITESPACE_UTF32.contains(&code_point)
}
