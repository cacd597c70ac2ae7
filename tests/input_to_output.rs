use std::{fs, process::Command};

use pretty_assertions::assert_eq;

#[test]
fn test_sample_inputs() {
    let out_dir = tempfile::tempdir().unwrap();

    for entry in fs::read_dir("./tests/samples").unwrap() {
        let entry = entry.unwrap();
        // Skip the expectation files
        if !entry.file_name().to_str().unwrap().ends_with(".js") {
            continue;
        }

        let name = entry
            .path()
            .file_stem()
            .expect("File name not available")
            .to_str()
            .expect("File name not valid String")
            .to_string();
        println!("Testing case '{}'", name);

        let dest = out_dir.path().join(format!("{}.c", name));
        let status = Command::new(env!("CARGO_BIN_EXE_cembed"))
            .arg(entry.path())
            .arg(&dest)
            .status()
            .unwrap();
        assert!(status.success(), "Failed to embed '{}'", name);

        let expected_output = fs::read_to_string(entry.path().with_extension("c")).unwrap();
        let output = fs::read_to_string(&dest).unwrap();
        assert_eq!(output, expected_output);
    }
}
