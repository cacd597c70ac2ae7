use std::fmt::Write;

use crate::{join_literals, Converter};

/// Emits ASCII bytes as decimal integers and every other byte as a hex
/// character escape, keeping the initializer valid for signed and unsigned
/// `char` alike.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AsciiArrayConverter;

impl Converter for AsciiArrayConverter {
    fn to_c_array_literal(&self, bytes: &[u8]) -> String {
        join_literals(bytes, |out, byte| {
            // Writing into a String never fails
            let _ = if byte.is_ascii() {
                write!(out, "{}", byte)
            } else {
                write!(out, "'\\x{:02x}'", byte)
            };
        })
    }
}
