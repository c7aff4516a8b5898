use std::fs;
use std::path::Path;

use tracing::warn;

const UTF8_BOM: char = '\u{feff}';

/// Reads raw sales lines from `path`.
///
/// Never fails: a missing or unreadable file yields an empty vector so the
/// pipeline can still emit its zero-record outputs.
pub fn read_sales_lines(path: &Path) -> Vec<String> {
    let bytes = match fs::read(path) {
        Ok(value) => value,
        Err(error) => {
            warn!(path = %path.display(), %error, "sales data file could not be read");
            return Vec::new();
        }
    };

    let content = decode_text(bytes);
    split_lines(&content)
}

fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(error) => {
            warn!("sales data is not valid UTF-8; decoding as Latin-1");
            latin1_to_string(error.as_bytes())
        }
    }
}

fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| char::from(*byte)).collect()
}

fn split_lines(content: &str) -> Vec<String> {
    let body = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    body.lines().map(ToString::to_string).collect()
}
