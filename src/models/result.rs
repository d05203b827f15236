use crate::models::ModelId;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One model's verdict for a submission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub prediction: String,
    /// Percentage, 0-100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_ms: Option<u64>,
    /// Empty when no overlay is available.
    #[serde(default, deserialize_with = "null_as_default")]
    pub heatmap_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
}

/// Backends may send `null` for fields they have no value for.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ModelResult {
    pub fn new<S: Into<String>>(prediction: S) -> Self {
        Self {
            prediction: prediction.into(),
            ..Self::default()
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_time_ms(mut self, time_ms: u64) -> Self {
        self.time_ms = Some(time_ms);
        self
    }

    pub fn with_heatmap_url<S: Into<String>>(mut self, url: S) -> Self {
        self.heatmap_url = url.into();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_heatmap(&self) -> bool {
        !self.heatmap_url.is_empty()
    }
}

/// Per-model results of one completed run, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    entries: Vec<(ModelId, ModelResult)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces. A replaced entry keeps its original position.
    pub fn insert(&mut self, id: ModelId, result: ModelResult) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => *slot = result,
            None => self.entries.push((id, result)),
        }
    }

    pub fn with_result(mut self, id: ModelId, result: ModelResult) -> Self {
        self.insert(id, result);
        self
    }

    pub fn get(&self, id: ModelId) -> Option<&ModelResult> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, result)| result)
    }

    pub fn contains(&self, id: ModelId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModelId, &ModelResult)> {
        self.entries.iter().map(|(id, result)| (*id, result))
    }

    pub fn model_ids(&self) -> Vec<ModelId> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    pub fn missing_models(&self) -> Vec<ModelId> {
        ModelId::ALL
            .iter()
            .copied()
            .filter(|id| !self.contains(*id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, result) in &self.entries {
            map.serialize_entry(id, result)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ResultSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResultSetVisitor;

        impl<'de> Visitor<'de> for ResultSetVisitor {
            type Value = ResultSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object keyed by model identifier")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ResultSet, A::Error> {
                let mut set = ResultSet::new();
                while let Some((id, result)) = access.next_entry::<ModelId, ModelResult>()? {
                    if set.contains(id) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate model identifier `{}`",
                            id
                        )));
                    }
                    set.entries.push((id, result));
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(ResultSetVisitor)
    }
}
