use std::fs;
use std::path::Path;
use std::process::{Command, Output};

// Run the binary with `dir` as working directory, where it looks for
// secrets.txt and src/secrets.h
fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fill-secrets"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run fill-secrets")
}

#[test]
fn generates_header_at_fixed_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(
        dir.path().join("secrets.txt"),
        "WIFI_SSID \"mezei\"\nWIFI_PASS \"hunter2\"\n",
    )
    .unwrap();

    let output = run_in(dir.path());

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("src/secrets.h")).unwrap(),
        "#define WIFI_SSID \"mezei\"\n#define WIFI_PASS \"hunter2\"\n"
    );
}

#[test]
fn empty_secrets_give_empty_header() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("secrets.txt"), "").unwrap();

    let output = run_in(dir.path());

    assert!(output.status.success());
    assert_eq!(fs::read(dir.path().join("src/secrets.h")).unwrap().len(), 0);
}

#[test]
fn missing_secrets_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();

    let output = run_in(dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to open input file secrets.txt"), "{stderr}");
    // The OS error is reported once, as the cause
    assert_eq!(stderr.matches("No such file or directory").count(), 1, "{stderr}");
    assert!(!dir.path().join("src/secrets.h").exists());
}

#[test]
fn missing_src_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("secrets.txt"), "FOO 1\n").unwrap();

    let output = run_in(dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to create output file"), "{stderr}");
}
