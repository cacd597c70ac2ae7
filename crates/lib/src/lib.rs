//! Generates a C source file that embeds the bytes of another file.
//!
//! The output holds a single declaration of the form
//!
//! ```c
//! static const char kGeneratedSource[] = { 102, 40, 41, 59, 0 };
//! ```
//!
//! where the elements come from a [`Converter`] and the trailing `0` is
//! always appended, so the array can be used as a C string.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, info};

pub use cembed_converter::{
    AsciiArrayConverter, CharLiteralConverter, Converter, ConverterError,
};

/// The name of the array in every file written by [`generate`].
pub const GENERATED_ARRAY_NAME: &str = "kGeneratedSource";

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Converter(#[from] ConverterError),

    #[error("Unable to write generated file '{}'", path.display())]
    #[diagnostic(help("the destination directory must exist and be writable"))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Formats the declaration for an already converted literal list.
pub fn render_declaration(name: &str, literal: &str) -> String {
    if literal.is_empty() {
        format!("static const char {}[] = {{ 0 }};\n", name)
    } else {
        format!("static const char {}[] = {{ {}, 0 }};\n", name, literal)
    }
}

/// Converts `bytes` with `converter` and formats the declaration.
pub fn embed<C>(converter: &C, name: &str, bytes: &[u8]) -> String
where
    C: Converter + ?Sized,
{
    render_declaration(name, &converter.to_c_array_literal(bytes))
}

/// Embeds files through a converter supplied by the caller.
#[derive(Debug, Clone)]
pub struct Embedder<C = AsciiArrayConverter> {
    converter: C,
    array_name: String,
}

impl Default for Embedder {
    fn default() -> Self {
        Embedder::new(AsciiArrayConverter)
    }
}

impl<C: Converter> Embedder<C> {
    pub fn new(converter: C) -> Self {
        Embedder {
            converter,
            array_name: GENERATED_ARRAY_NAME.to_owned(),
        }
    }

    pub fn with_array_name(mut self, name: impl Into<String>) -> Self {
        self.array_name = name.into();
        self
    }

    pub fn array_name(&self) -> &str {
        &self.array_name
    }

    /// Renders the declaration for the file at `source`.
    pub fn render(&self, source: &Path) -> Result<String, Error> {
        let bytes = self.converter.read_bytes(source)?;
        Ok(embed(&self.converter, &self.array_name, &bytes))
    }

    /// Writes the declaration for `source` to `dest`, replacing whatever
    /// `dest` held before. The source is fully read before `dest` is opened.
    pub fn generate(&self, source: &Path, dest: &Path) -> Result<(), Error> {
        debug!(
            source = %source.display(),
            dest = %dest.display(),
            array = %self.array_name,
            "generating"
        );
        let contents = self.render(source)?;

        fs::write(dest, &contents).map_err(|source| Error::Write {
            path: dest.to_owned(),
            source,
        })?;
        info!(dest = %dest.display(), len = contents.len(), "wrote generated source");
        Ok(())
    }
}

/// Writes `dest` as a `kGeneratedSource` declaration embedding `source`,
/// using the default converter.
pub fn generate(source: &Path, dest: &Path) -> Result<(), Error> {
    Embedder::new(AsciiArrayConverter).generate(source, dest)
}
