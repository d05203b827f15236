pub mod display;
pub mod export;

pub use display::{render, ResultCard, PLACEHOLDER};
pub use export::{export_results, to_export_json, EXPORT_FILE_NAME};
