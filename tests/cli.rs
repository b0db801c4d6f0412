use std::fs;
use std::process::{Command, Output};

use chronogrid_doc::content::OUTPUT_FILE_NAME;
use chronogrid_doc::fonts;

const SUCCESS_LINE: &str = "Fictional training PDF created: chronogrid_internal_document.pdf";

fn run_in(directory: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chronogrid"))
        .args(args)
        .current_dir(directory)
        .output()
        .expect("spawn chronogrid binary")
}

#[test]
fn writes_document_and_confirms_on_stdout() {
    if !fonts::fonts_available() {
        eprintln!("Skipping writes_document_and_confirms_on_stdout: no fonts found.");
        return;
    }

    let directory = tempfile::tempdir().expect("create temp dir");
    let output = run_in(directory.path(), &[]);

    assert!(
        output.status.success(),
        "binary failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), SUCCESS_LINE);

    let bytes = fs::read(directory.path().join(OUTPUT_FILE_NAME)).expect("output written");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn blocked_output_path_exits_non_zero_without_confirmation() {
    if !fonts::fonts_available() {
        eprintln!(
            "Skipping blocked_output_path_exits_non_zero_without_confirmation: no fonts found."
        );
        return;
    }

    let directory = tempfile::tempdir().expect("create temp dir");
    fs::create_dir(directory.path().join(OUTPUT_FILE_NAME)).expect("create directory in the way");

    let output = run_in(directory.path(), &[]);

    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Fictional training PDF created"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to write"), "{}", stderr);
    assert!(stderr.contains(OUTPUT_FILE_NAME), "{}", stderr);
}

#[test]
fn unexpected_arguments_are_rejected() {
    let directory = tempfile::tempdir().expect("create temp dir");
    let output = run_in(directory.path(), &["--output", "elsewhere.pdf"]);

    assert!(!output.status.success());
    assert!(!directory.path().join(OUTPUT_FILE_NAME).exists());
    assert!(!directory.path().join("elsewhere.pdf").exists());
}
