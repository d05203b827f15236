// File intake - turns picked or dropped paths into pending uploads

use crate::error::BrainsightError;
use crate::models::{PendingFile, MAX_FILE_BYTES};
use std::io::BufRead;
use std::path::PathBuf;

/// Where a selection comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum FileSource {
    /// Paths picked explicitly, e.g. from the command line.
    Paths(Vec<PathBuf>),
    /// Newline-separated paths, e.g. piped in from another tool.
    DropList(String),
}

impl FileSource {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, BrainsightError> {
        let mut text = String::new();
        for line in reader.lines() {
            text.push_str(&line?);
            text.push('\n');
        }
        Ok(FileSource::DropList(text))
    }

    fn into_paths(self) -> Vec<PathBuf> {
        match self {
            FileSource::Paths(paths) => paths,
            FileSource::DropList(text) => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(PathBuf::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakePolicy {
    /// Accept anything that exists; type and size limits are advisory.
    #[default]
    Permissive,
    /// Reject files outside the accepted types or above the size limit.
    Strict,
}

#[derive(Debug, Clone, Default)]
pub struct FileIntake {
    policy: IntakePolicy,
    max_file_bytes: Option<u64>,
}

impl FileIntake {
    pub fn new(policy: IntakePolicy) -> Self {
        Self {
            policy,
            max_file_bytes: None,
        }
    }

    pub fn with_max_file_bytes(mut self, limit: u64) -> Self {
        self.max_file_bytes = Some(limit);
        self
    }

    pub fn policy(&self) -> IntakePolicy {
        self.policy
    }

    /// Resolves every entry of `source`, in source order.
    pub fn collect(&self, source: FileSource) -> Result<Vec<PendingFile>, BrainsightError> {
        source
            .into_paths()
            .into_iter()
            .map(|path| self.resolve(path))
            .collect()
    }

    fn resolve(&self, path: PathBuf) -> Result<PendingFile, BrainsightError> {
        let metadata = std::fs::metadata(&path).map_err(|source| BrainsightError::FileAccess {
            path: path.clone(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(BrainsightError::FileAccess {
                path,
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
            });
        }

        let file = PendingFile::new(path, metadata.len());
        self.check(&file)?;

        tracing::debug!(
            name = %file.name,
            size_bytes = file.size_bytes,
            mime_type = %file.mime_type,
            "file selected"
        );
        Ok(file)
    }

    pub fn check(&self, file: &PendingFile) -> Result<(), BrainsightError> {
        if self.policy == IntakePolicy::Permissive {
            if !file.is_accepted_type() {
                tracing::warn!("{} is not a JPG, PNG or DICOM file", file.name);
            }
            return Ok(());
        }

        if !file.is_accepted_type() {
            return Err(BrainsightError::UnsupportedFileType {
                name: file.name.clone(),
            });
        }

        let limit = self.max_file_bytes.unwrap_or(MAX_FILE_BYTES);
        if file.size_bytes > limit {
            return Err(BrainsightError::FileTooLarge {
                name: file.name.clone(),
                size_bytes: file.size_bytes,
                limit_bytes: limit,
            });
        }

        Ok(())
    }
}
