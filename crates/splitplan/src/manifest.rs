//! Chunk manifest: the bundler's view of chunks and the modules inside them.
//!
//! ```json
//! {
//!   "chunks": [
//!     { "name": "document", "kind": "initial" },
//!     { "name": "viewer", "kind": "async" }
//!   ],
//!   "modules": [
//!     { "id": "node_modules/vue/dist/vue.runtime.esm.js", "size": 64000, "chunks": ["document", "viewer"] }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    /// Created from an entry point
    #[default]
    Initial,
    /// Created from a dynamic import
    Async,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkInfo {
    pub name: String,

    #[serde(default)]
    pub kind: ChunkKind,
}

impl ChunkInfo {
    pub fn initial(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ChunkKind::Initial,
        }
    }

    pub fn asynchronous(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ChunkKind::Async,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestModule {
    /// Module id, usually the resolved path
    pub id: String,

    /// Size in bytes
    #[serde(default)]
    pub size: u64,

    /// Names of the chunks that contain this module
    #[serde(default)]
    pub chunks: Vec<String>,
}

impl ManifestModule {
    pub fn new<I, S>(id: impl Into<String>, size: u64, chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            size,
            chunks: chunks.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkManifest {
    #[serde(default)]
    pub chunks: Vec<ChunkInfo>,

    #[serde(default)]
    pub modules: Vec<ManifestModule>,
}

impl ChunkManifest {
    pub fn from_json(content: &str) -> Result<Self> {
        let manifest: ChunkManifest = serde_json::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn with_chunk(mut self, chunk: ChunkInfo) -> Self {
        self.chunks.push(chunk);
        self
    }

    pub fn with_module(mut self, module: ManifestModule) -> Self {
        self.modules.push(module);
        self
    }

    pub fn chunk(&self, name: &str) -> Option<&ChunkInfo> {
        self.chunks.iter().find(|chunk| chunk.name == name)
    }

    /// Chunk names must be unique, and every module must name declared chunks, each at most once.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::with_capacity(self.chunks.len());
        for chunk in &self.chunks {
            if !names.insert(chunk.name.as_str()) {
                return Err(PlanError::DuplicateChunk {
                    name: chunk.name.clone(),
                });
            }
        }

        for module in &self.modules {
            let mut listed = HashSet::with_capacity(module.chunks.len());
            for chunk in &module.chunks {
                if !names.contains(chunk.as_str()) {
                    return Err(PlanError::UnknownChunk {
                        module: module.id.clone(),
                        chunk: chunk.clone(),
                    });
                }
                if !listed.insert(chunk.as_str()) {
                    return Err(PlanError::DuplicateChunkReference {
                        module: module.id.clone(),
                        chunk: chunk.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_manifest_with_defaults() {
        let manifest = ChunkManifest::from_json(
            r#"{
                "chunks": [{ "name": "document" }, { "name": "viewer", "kind": "async" }],
                "modules": [{ "id": "node_modules/vue/index.js", "size": 10, "chunks": ["document"] }]
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.chunk("document").unwrap().kind, ChunkKind::Initial);
        assert_eq!(manifest.chunk("viewer").unwrap().kind, ChunkKind::Async);
        assert_eq!(manifest.modules[0].size, 10);
    }

    #[test]
    fn rejects_duplicate_chunks() {
        let manifest = ChunkManifest::default()
            .with_chunk(ChunkInfo::initial("main"))
            .with_chunk(ChunkInfo::asynchronous("main"));

        assert!(matches!(
            manifest.validate().unwrap_err(),
            PlanError::DuplicateChunk { name } if name == "main"
        ));
    }

    #[test]
    fn rejects_unknown_chunk_reference() {
        let manifest = ChunkManifest::default()
            .with_chunk(ChunkInfo::initial("main"))
            .with_module(ManifestModule::new("a.js", 1, ["main", "ghost"]));

        assert!(matches!(
            manifest.validate().unwrap_err(),
            PlanError::UnknownChunk { chunk, .. } if chunk == "ghost"
        ));
    }

    #[test]
    fn rejects_repeated_chunk_reference() {
        let result = ChunkManifest::from_json(
            r#"{
                "chunks": [{ "name": "document" }, { "name": "request" }],
                "modules": [{ "id": "a.js", "chunks": ["document", "document"] }]
            }"#,
        );

        assert!(matches!(
            result.unwrap_err(),
            PlanError::DuplicateChunkReference { module, chunk } if module == "a.js" && chunk == "document"
        ));
    }

    #[test]
    fn malformed_json_is_a_manifest_error() {
        let result = ChunkManifest::from_json("{ \"chunks\": 3 }");
        assert!(matches!(result.unwrap_err(), PlanError::Manifest(_)));
    }
}
