use cembed::{generate, ConverterError, Error, GENERATED_ARRAY_NAME};
use cembed_common::{make_source, render_plain, UnwrapPretty};
use cembed_reader::read_declaration;
use pretty_assertions::assert_eq;

use std::{fs, io::ErrorKind};

#[test]
fn test_generate_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("api.js");
    let first = dir.path().join("first.c");
    let second = dir.path().join("second.c");
    fs::write(&source, "exports.ping = function() { return 'pong'; };\n").unwrap();

    generate(&source, &first).unwrap_pretty();
    generate(&source, &second).unwrap_pretty();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_generated_file_decodes_to_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("api.js");
    let dest = dir.path().join("api.c");
    let bytes = b"var s = '\xe2\x9c\x93';\0\r\n".to_vec();
    fs::write(&source, &bytes).unwrap();

    generate(&source, &dest).unwrap_pretty();

    let output = fs::read_to_string(&dest).unwrap();
    assert!(output.starts_with("static const char kGeneratedSource[] = { "));
    assert!(output.ends_with(", 0 };\n"));
    assert_eq!(output.lines().count(), 1);

    let declaration = read_declaration(make_source("api.c", &output), &output).unwrap_pretty();
    assert_eq!(declaration.name, GENERATED_ARRAY_NAME);
    assert_eq!(declaration.values.len(), bytes.len() + 1);
    assert_eq!(declaration.payload(), Some(&bytes[..]));
}

#[test]
fn test_empty_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("empty.js");
    let dest = dir.path().join("empty.c");
    fs::write(&source, "").unwrap();

    generate(&source, &dest).unwrap_pretty();

    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        "static const char kGeneratedSource[] = { 0 };\n"
    );
}

#[test]
fn test_missing_source_leaves_dest_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("missing.js");
    let dest = dir.path().join("api.c");
    fs::write(&dest, "previous contents").unwrap();

    match generate(&source, &dest) {
        Err(Error::Converter(ConverterError::Read { path, source: err })) => {
            assert_eq!(path, source);
            assert_eq!(err.kind(), ErrorKind::NotFound);
        }
        other => panic!("Unexpected result {:?}", other),
    }

    assert_eq!(fs::read_to_string(&dest).unwrap(), "previous contents");
}

#[test]
fn test_missing_dest_directory() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("api.js");
    let dest = dir.path().join("missing").join("api.c");
    fs::write(&source, "A").unwrap();

    let error = match generate(&source, &dest) {
        Err(error) => error,
        Ok(()) => panic!("Generated into a missing directory"),
    };
    match &error {
        Error::Write { path, source } => {
            assert_eq!(path, &dest);
            assert_eq!(source.kind(), ErrorKind::NotFound);
        }
        other => panic!("Unexpected error {:?}", other),
    }

    assert!(!dest.exists());
    assert!(!dir.path().join("missing").exists());

    let rendered = render_plain(&error).unwrap();
    assert!(rendered.contains("Unable to write generated file"), "{}", rendered);
    assert!(rendered.contains("destination directory must exist"), "{}", rendered);
}

#[test]
fn test_rerun_replaces_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("api.js");
    let dest = dir.path().join("api.c");

    fs::write(&source, "a much longer script than the next one").unwrap();
    generate(&source, &dest).unwrap_pretty();

    fs::write(&source, "A").unwrap();
    generate(&source, &dest).unwrap_pretty();

    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        "static const char kGeneratedSource[] = { 65, 0 };\n"
    );
}
