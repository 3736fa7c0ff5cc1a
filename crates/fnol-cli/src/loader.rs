//! Turning files on disk into documents.

use anyhow::{anyhow, bail, Context};
use fnol_engine::{Document, DocumentFailure};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions the loader understands, lowercase.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["txt", "pdf"];

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Name a document is reported under: its file name, or the path as given.
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read one file as a document.
///
/// `.txt` must be UTF-8. `.pdf` goes through `pdf-extract` when the `pdf`
/// feature is enabled. Anything else is an error.
pub fn load_document(path: &Path) -> anyhow::Result<Document> {
    let text = match extension_of(path).as_deref() {
        Some("txt") => fs::read_to_string(path)
            .with_context(|| format!("could not read {} as UTF-8 text", path.display()))?,
        Some("pdf") => read_pdf(path)?,
        Some(other) => bail!("unsupported file type '.{}': {}", other, path.display()),
        None => bail!("file has no extension: {}", path.display()),
    };
    debug!("Loaded {} ({} bytes of text)", path.display(), text.len());
    Ok(Document::new(document_name(path), text))
}

#[cfg(feature = "pdf")]
fn read_pdf(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path).with_context(|| format!("could not read {}", path.display()))?;
    pdf_extract::extract_text_from_mem(&bytes)
        .with_context(|| format!("could not extract text from {}", path.display()))
}

#[cfg(not(feature = "pdf"))]
fn read_pdf(path: &Path) -> anyhow::Result<String> {
    Err(anyhow!(
        "PDF support is not enabled in this build: {}",
        path.display()
    ))
}

/// Load several files; a file that cannot be loaded becomes a failure entry
/// in its original position.
pub fn load_all(paths: &[PathBuf]) -> Vec<Result<Document, DocumentFailure>> {
    paths
        .iter()
        .map(|path| {
            load_document(path).map_err(|e| DocumentFailure {
                document_name: document_name(path),
                reason: format!("{:#}", e),
            })
        })
        .collect()
}

/// Supported documents directly inside `dir`, sorted by file name.
pub fn discover(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(anyhow!("not a directory: {}", dir.display()));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("could not list {}", dir.display()))? {
        let path = entry?.path();
        let supported = extension_of(&path)
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()));
        if path.is_file() && supported {
            paths.push(path);
        }
    }
    paths.sort_by_key(|path| document_name(path));
    Ok(paths)
}
