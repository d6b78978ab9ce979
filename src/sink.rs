//! Output sinks for generated blockstate documents.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::document::BlockstateDocument;
use crate::error::Result;

/// Destination for finished blockstate documents.
///
/// The registry calls [`write`](Self::write) once per block, synchronously,
/// after serialization-ready assembly. Retries and caching are the
/// implementation's business, not the generator's.
pub trait StateSink {
    fn write(&mut self, namespace: &str, block_id: &str, document: &BlockstateDocument)
        -> Result<()>;
}

/// In-memory sink that keeps documents in write order. Useful for tests
/// and for embedding the generator in a larger pipeline.
#[derive(Debug, Default)]
pub struct MemorySink {
    order: Vec<String>,
    documents: BTreeMap<String, BlockstateDocument>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a document by full block name ("namespace:id").
    pub fn get(&self, name: &str) -> Option<&BlockstateDocument> {
        self.documents.get(name)
    }

    /// Iterate documents in the order they were written.
    pub fn documents(&self) -> impl Iterator<Item = (&str, &BlockstateDocument)> {
        self.order
            .iter()
            .filter_map(|name| self.documents.get(name).map(|doc| (name.as_str(), doc)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl StateSink for MemorySink {
    fn write(
        &mut self,
        namespace: &str,
        block_id: &str,
        document: &BlockstateDocument,
    ) -> Result<()> {
        let name = format!("{}:{}", namespace, block_id);
        if !self.documents.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.documents.insert(name, document.clone());
        Ok(())
    }
}

/// Writes pretty-printed JSON under the standard resource-pack layout:
/// `<root>/assets/<namespace>/blockstates/<block_id>.json`.
#[derive(Debug)]
pub struct DiskSink {
    root: PathBuf,
}

impl DiskSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The path a given block's document lands at.
    pub fn path_for(&self, namespace: &str, block_id: &str) -> PathBuf {
        self.root
            .join("assets")
            .join(namespace)
            .join("blockstates")
            .join(format!("{}.json", block_id))
    }
}

impl StateSink for DiskSink {
    fn write(
        &mut self,
        namespace: &str,
        block_id: &str,
        document: &BlockstateDocument,
    ) -> Result<()> {
        let path = self.path_for(namespace, block_id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(document)?;
        fs::write(&path, json)?;
        log::debug!("wrote blockstate {}", path.display());
        Ok(())
    }
}
