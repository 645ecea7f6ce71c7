//! Downloaded page storage.
//!
//! Pages are kept under the data directory so that the fetch stages can resume
//! where a previous run stopped and the parse stages never touch the network.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::{
    DATASET_FILE, DATASET_MIN_FILE, HTML_SUBDIR, INDEX_FILE, ITEMS_SUBDIR, ITEM_LIST_FILE,
    JSON_SUBDIR,
};

/// File locations under one data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DataPaths { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Raw catalog page.
    pub fn index_document(&self) -> PathBuf {
        self.root.join(HTML_SUBDIR).join(INDEX_FILE)
    }

    /// Directory of raw detail pages.
    pub fn items_dir(&self) -> PathBuf {
        self.root.join(HTML_SUBDIR).join(ITEMS_SUBDIR)
    }

    /// Raw detail page for one item.
    pub fn item_document(&self, id: &str) -> PathBuf {
        self.items_dir().join(format!("{id}.html"))
    }

    /// Parsed catalog (list of item stubs).
    pub fn item_list(&self) -> PathBuf {
        self.root.join(JSON_SUBDIR).join(ITEM_LIST_FILE)
    }

    /// Pretty-printed dataset.
    pub fn dataset(&self) -> PathBuf {
        self.root.join(JSON_SUBDIR).join(DATASET_FILE)
    }

    /// Compact dataset.
    pub fn dataset_min(&self) -> PathBuf {
        self.root.join(JSON_SUBDIR).join(DATASET_MIN_FILE)
    }
}

/// Read access to detail pages by item id.
pub trait DocumentSource {
    /// Whether the page for `id` is available.
    fn exists(&self, id: &str) -> bool;

    /// Loads the page for `id`.
    fn load(&self, id: &str) -> io::Result<String>;
}

/// Detail and catalog pages stored as files.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    paths: DataPaths,
}

impl DocumentStore {
    pub fn new(paths: DataPaths) -> Self {
        DocumentStore { paths }
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// Writes the page for `id` atomically, creating directories as needed.
    pub fn persist(&self, id: &str, document: &[u8]) -> io::Result<()> {
        write_atomic(&self.checked_path(id)?, document)
    }

    pub fn index_exists(&self) -> bool {
        self.paths.index_document().is_file()
    }

    pub fn load_index(&self) -> io::Result<String> {
        read_lossy(&self.paths.index_document())
    }

    pub fn persist_index(&self, document: &[u8]) -> io::Result<()> {
        write_atomic(&self.paths.index_document(), document)
    }

    /// Path for `id`, refusing ids that are not plain ASCII digits.
    fn checked_path(&self, id: &str) -> io::Result<PathBuf> {
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid item id {id:?}"),
            ));
        }
        Ok(self.paths.item_document(id))
    }
}

impl DocumentSource for DocumentStore {
    fn exists(&self, id: &str) -> bool {
        self.checked_path(id).is_ok_and(|path| path.is_file())
    }

    fn load(&self, id: &str) -> io::Result<String> {
        read_lossy(&self.checked_path(id)?)
    }
}

/// Reads a page, replacing invalid UTF-8 rather than failing.
fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes `contents` to a temporary file next to `path` and renames it into
/// place, creating parent directories as needed.
///
/// An interrupted write leaves no file at `path`, so a truncated page is never
/// mistaken for a stored one.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
