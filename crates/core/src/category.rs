use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Category assigned to files without an extension.
pub const NO_EXTENSION: &str = "no_extension";

/// Destination bucket for a file, derived from its extension.
///
/// The extension is the text after the last `.` of the file name, lower-cased.
/// Names with no dot, a trailing dot, or a single leading dot (`.gitignore`)
/// have no extension and fall into [`NO_EXTENSION`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .filter(|ext| !ext.is_empty())
            .map(Self)
            .unwrap_or_else(Self::no_extension)
    }

    pub fn from_file_name(name: &str) -> Self {
        Self::from_path(Path::new(name))
    }

    pub fn no_extension() -> Self {
        Self(NO_EXTENSION.to_string())
    }

    pub fn is_no_extension(&self) -> bool {
        self.0 == NO_EXTENSION
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for Category {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}
