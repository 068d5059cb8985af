use std::io::Write;

use tempfile::NamedTempFile;

/// Write `content` to a temporary file with the given suffix.
pub fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("purchase-ledger-test-")
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

pub fn csv_file(content: &str) -> NamedTempFile {
    temp_file(".csv", content)
}

pub fn config_file(content: &str) -> NamedTempFile {
    temp_file(".toml", content)
}
