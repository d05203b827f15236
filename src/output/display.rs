use crate::models::{ModelId, ModelResult, ResultSet};

/// Shown wherever a value is missing.
pub const PLACEHOLDER: &str = "—";

/// One rendered model card. All text fields are ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub model: ModelId,
    pub title: &'static str,
    pub prediction: String,
    pub confidence: String,
    pub time: String,
    pub heatmap_url: Option<String>,
    pub features: Vec<String>,
}

impl ResultCard {
    fn from_result(model: ModelId, result: Option<&ModelResult>) -> Self {
        let prediction = result
            .map(|r| r.prediction.as_str())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        let confidence = result
            .and_then(|r| r.confidence)
            .map(|c| format!("{}%", c))
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        let time = result
            .and_then(|r| r.time_ms)
            .filter(|ms| *ms > 0)
            .map(|ms| format!("{} ms", ms))
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        let heatmap_url = result
            .filter(|r| r.has_heatmap())
            .map(|r| r.heatmap_url.clone());

        let features = result.map(|r| r.features.clone()).unwrap_or_default();

        Self {
            model,
            title: model.title(),
            prediction,
            confidence,
            time,
            heatmap_url,
            features,
        }
    }

    pub fn has_result(&self) -> bool {
        self.prediction != PLACEHOLDER
    }
}

/// One card per known model, in canonical order, whether or not a result
/// exists for it.
pub fn render(results: Option<&ResultSet>) -> Vec<ResultCard> {
    ModelId::ALL
        .iter()
        .map(|id| ResultCard::from_result(*id, results.and_then(|set| set.get(*id))))
        .collect()
}
