//! Converters turn the bytes of a file into the initializer list of a C
//! `char` array.
//!
//! A converter is handed to the embedder as a value, so any type that
//! implements [`Converter`] can stand in for the built-in encodings as long as
//! every byte maps to exactly one literal that decodes back to that byte.

mod ascii;
mod char_literal;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use miette::Diagnostic;
use thiserror::Error;

pub use ascii::AsciiArrayConverter;
pub use char_literal::CharLiteralConverter;

#[derive(Error, Debug, Diagnostic)]
pub enum ConverterError {
    #[error("Unable to read source file '{}'", path.display())]
    #[diagnostic(help("check that the file exists and is readable"))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub trait Converter {
    /// Reads the raw content of the file to embed.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, ConverterError> {
        read_file(path)
    }

    /// Produces the comma separated literals for `bytes`, one per byte.
    /// Empty input produces an empty string.
    fn to_c_array_literal(&self, bytes: &[u8]) -> String;
}

impl<C: Converter + ?Sized> Converter for &C {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, ConverterError> {
        (**self).read_bytes(path)
    }

    fn to_c_array_literal(&self, bytes: &[u8]) -> String {
        (**self).to_c_array_literal(bytes)
    }
}

impl<C: Converter + ?Sized> Converter for Box<C> {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, ConverterError> {
        (**self).read_bytes(path)
    }

    fn to_c_array_literal(&self, bytes: &[u8]) -> String {
        (**self).to_c_array_literal(bytes)
    }
}

/// Reads the whole file at `path`.
pub fn read_file(path: &Path) -> Result<Vec<u8>, ConverterError> {
    let bytes = fs::read(path).map_err(|source| ConverterError::Read {
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "read source");
    Ok(bytes)
}

/// Joins one literal per byte with `", "`.
fn join_literals(bytes: &[u8], mut literal: impl FnMut(&mut String, u8)) -> String {
    let mut out = String::with_capacity(bytes.len() * 5);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        literal(&mut out, *byte);
    }
    out
}
