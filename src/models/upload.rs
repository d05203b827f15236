use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Extensions the upload panel advertises, keyed by MIME type.
pub const ACCEPTED_TYPES: &[(&str, &[&str])] = &[
    ("image/jpeg", &["jpg", "jpeg"]),
    ("image/png", &["png"]),
    ("application/dicom", &["dcm"]),
];

pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Advertised per-file size limit (50 MB).
pub const MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// A user-supplied scan waiting to be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub path: PathBuf,
}

impl PendingFile {
    pub fn new(path: PathBuf, size_bytes: u64) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let mime_type = mime_type_for(&path).to_string();

        Self {
            name,
            size_bytes,
            mime_type,
            path,
        }
    }

    pub fn with_mime_type<S: Into<String>>(mut self, mime_type: S) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn is_accepted_type(&self) -> bool {
        self.mime_type != FALLBACK_MIME_TYPE
    }

    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }

    /// e.g. `scan.dcm (10.00 MB)`
    pub fn display_label(&self) -> String {
        format!("{} ({:.2} MB)", self.name, self.size_mb())
    }
}

pub fn mime_type_for(path: &Path) -> &'static str {
    let extension = match path.extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => return FALLBACK_MIME_TYPE,
    };

    ACCEPTED_TYPES
        .iter()
        .find(|(_, extensions)| extensions.contains(&extension.as_str()))
        .map(|(mime, _)| *mime)
        .unwrap_or(FALLBACK_MIME_TYPE)
}

pub fn accepted_extensions() -> Vec<String> {
    ACCEPTED_TYPES
        .iter()
        .flat_map(|(_, extensions)| extensions.iter().map(|ext| format!(".{}", ext)))
        .collect()
}

/// The ordered set of files currently picked for submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    files: Vec<PendingFile>,
}

impl FileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole selection. Previously selected files are dropped.
    pub fn replace(&mut self, files: Vec<PendingFile>) {
        self.files = files;
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[PendingFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size_bytes).sum()
    }
}
