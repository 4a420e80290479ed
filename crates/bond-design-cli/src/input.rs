use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::{self, Read};
use std::path::Path;

/// Read a typed input document from disk. Files ending in `.yaml`/`.yml`
/// are parsed as YAML, everything else as JSON.
pub fn read_document<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    if !p.is_file() {
        return Err(format!("Input file not found: {}", path).into());
    }

    let contents = std::fs::read_to_string(p)
        .map_err(|e| format!("Failed to read '{}': {}", path, e))?;

    let parsed = if is_yaml(p) {
        serde_yaml::from_str(&contents).map_err(|e| format!("Failed to parse '{}': {}", path, e))?
    } else {
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse '{}': {}", path, e))?
    };
    Ok(parsed)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Attempt to read JSON from stdin if data is being piped.
/// Returns None if stdin is a TTY (interactive).
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(trimmed)?))
}
