pub mod model_id;
pub mod progress;
pub mod result;
pub mod upload;

pub use model_id::{ModelId, ModelToggleSet};
pub use progress::{AnalysisPhase, AnalysisProgress};
pub use result::{ModelResult, ResultSet};
pub use upload::{FileSelection, PendingFile, ACCEPTED_TYPES, MAX_FILE_BYTES};
