use serde::{Deserialize, Serialize};

/// A named entry point (build target).
///
/// Entries are declared as an ordered array so declaration order survives
/// TOML, JSON and environment providers alike:
///
/// ```toml
/// [[bundle.entries]]
/// name = "main"
/// import = ["./frontend/javascript/main.ts"]
///
/// [[bundle.entries]]
/// name = "filingcabinet"
/// import = "@okfde/filingcabinet/frontend/javascript/filingcabinet.js"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPoint {
    pub name: String,

    /// One or more source module references
    pub import: EntryImport,
}

impl EntryPoint {
    pub fn new(name: impl Into<String>, import: impl Into<EntryImport>) -> Self {
        Self {
            name: name.into(),
            import: import.into(),
        }
    }

    pub fn sources(&self) -> &[String] {
        self.import.as_slice()
    }
}

/// Source modules of an entry: a bare string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryImport {
    Single(String),
    Many(Vec<String>),
}

impl EntryImport {
    pub fn as_slice(&self) -> &[String] {
        match self {
            EntryImport::Single(source) => std::slice::from_ref(source),
            EntryImport::Many(sources) => sources,
        }
    }
}

impl From<&str> for EntryImport {
    fn from(source: &str) -> Self {
        EntryImport::Single(source.to_string())
    }
}

impl From<String> for EntryImport {
    fn from(source: String) -> Self {
        EntryImport::Single(source)
    }
}

impl From<Vec<String>> for EntryImport {
    fn from(sources: Vec<String>) -> Self {
        EntryImport::Many(sources)
    }
}

impl From<Vec<&str>> for EntryImport {
    fn from(sources: Vec<&str>) -> Self {
        EntryImport::Many(sources.into_iter().map(str::to_string).collect())
    }
}
