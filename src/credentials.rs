use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Slack API token read from the key file
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Outcome of reading the key file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyLoad {
    /// The file was read; contents are trimmed.
    Present(ApiKey),
    /// No key file, or it only held whitespace.
    Absent,
    /// The file exists but could not be read.
    Warning(String),
}

/// Read the API token from `path`.
///
/// A missing file is not an error: the request goes out unauthenticated and
/// the API reports it. Any other failure is reported as [`KeyLoad::Warning`].
pub fn load_key(path: &Path) -> KeyLoad {
    match fs::read_to_string(path) {
        Ok(content) => {
            let key = content.trim();
            if key.is_empty() {
                KeyLoad::Absent
            } else {
                KeyLoad::Present(ApiKey::new(key))
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => KeyLoad::Absent,
        Err(e) => KeyLoad::Warning(format!(
            "key file {} exists but could not be opened: {}",
            path.display(),
            e
        )),
    }
}
