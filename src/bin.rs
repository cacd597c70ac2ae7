use std::{path::PathBuf, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cembed::Embedder;
use cembed_common::OkPretty;

/// Writes a C file declaring `kGeneratedSource`, a null terminated char
/// array holding the bytes of the source file.
#[derive(Parser, Debug)]
#[clap(name = "cembed", version, about)]
struct Arguments {
    /// File to embed, usually a JavaScript source
    #[clap(value_parser)]
    source: PathBuf,
    /// C file to create or overwrite
    #[clap(value_parser)]
    dest: PathBuf,
}

impl Arguments {
    fn run(&self) -> Option<()> {
        let embedder: Embedder = Embedder::default();
        embedder.generate(&self.source, &self.dest).ok_pretty()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let args = Arguments::parse();

    if args.run().is_none() {
        process::exit(1);
    }
}
