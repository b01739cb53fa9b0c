//! Fixture recording for offline tests (`test-mode` only).
//!
//! With `PULSE_RECORD=1`, every body read through `net::get_text` is written to
//! `<dir>/<endpoint>_<key>.<ext>`, where `<dir>` is `PULSE_FIXDIR` or `tests/fixtures`.

use std::path::PathBuf;

fn fixture_dir() -> PathBuf {
    std::env::var_os("PULSE_FIXDIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
        PathBuf::from,
    )
}

/// File name for a recorded body. Model ids contain `/`, and query strings contain
/// spaces, so both are flattened.
fn fixture_name(endpoint: &str, key: &str, ext: &str) -> String {
    let key: String = key
        .replace('/', "--")
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{endpoint}_{key}.{ext}")
}

pub(crate) fn record_fixture(
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> std::io::Result<PathBuf> {
    let dir = fixture_dir();
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(fixture_name(endpoint, key, ext));
    std::fs::write(&path, body)?;

    if std::env::var("PULSE_DEBUG").is_ok_and(|v| v == "1") {
        eprintln!("PULSE_RECORD: wrote {}", path.display());
    }
    Ok(path)
}
