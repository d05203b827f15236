use crate::models::PendingFile;

/// Multipart field name shared by every uploaded file.
pub const FILE_FIELD_NAME: &str = "file";

#[derive(Debug, Clone, PartialEq)]
pub struct PayloadPart {
    pub field_name: &'static str,
    pub file: PendingFile,
}

/// Backend-agnostic description of one submission: one part per file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionPayload {
    parts: Vec<PayloadPart>,
}

impl SubmissionPayload {
    pub fn from_files(files: &[PendingFile]) -> Self {
        Self {
            parts: files
                .iter()
                .cloned()
                .map(|file| PayloadPart {
                    field_name: FILE_FIELD_NAME,
                    file,
                })
                .collect(),
        }
    }

    pub fn parts(&self) -> &[PayloadPart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn total_bytes(&self) -> u64 {
        self.parts.iter().map(|p| p.file.size_bytes).sum()
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.file.name.as_str()).collect()
    }
}
