use std::fmt::Write;

use crate::{join_literals, Converter};

/// Emits every byte as a C character literal, e.g. `'a'`, `'\n'` or `'\x01'`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CharLiteralConverter;

impl Converter for CharLiteralConverter {
    fn to_c_array_literal(&self, bytes: &[u8]) -> String {
        join_literals(bytes, |out, byte| {
            out.push('\'');
            match byte {
                b'\'' => out.push_str("\\'"),
                b'\\' => out.push_str("\\\\"),
                b'\n' => out.push_str("\\n"),
                b'\t' => out.push_str("\\t"),
                b'\r' => out.push_str("\\r"),
                b'\0' => out.push_str("\\0"),
                b' '..=b'~' => out.push(byte as char),
                _ => {
                    let _ = write!(out, "\\x{:02x}", byte);
                }
            }
            out.push('\'');
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn printable_ascii() {
        let literal = CharLiteralConverter.to_c_array_literal(b"a \"b\"");
        assert_eq!(literal, r#"'a', ' ', '"', 'b', '"'"#);
    }

    #[test]
    fn escapes() {
        let literal = CharLiteralConverter.to_c_array_literal(b"'\\\n\t\r\0");
        assert_eq!(literal, r"'\'', '\\', '\n', '\t', '\r', '\0'");
    }

    #[test]
    fn other_bytes_use_hex() {
        let literal = CharLiteralConverter.to_c_array_literal(&[0x01, 0x7f, 0xe9]);
        assert_eq!(literal, r"'\x01', '\x7f', '\xe9'");
    }
}
