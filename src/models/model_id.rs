use crate::error::BrainsightError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Classification architectures known to the backend. Declaration order is
/// the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelId {
    Lenet5,
    Resnet50,
    Vgg16,
    Densenet121,
}

impl ModelId {
    pub const ALL: [ModelId; 4] = [
        ModelId::Lenet5,
        ModelId::Resnet50,
        ModelId::Vgg16,
        ModelId::Densenet121,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Lenet5 => "lenet5",
            ModelId::Resnet50 => "resnet50",
            ModelId::Vgg16 => "vgg16",
            ModelId::Densenet121 => "densenet121",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ModelId::Lenet5 => "LeNet-5 (Custom)",
            ModelId::Resnet50 => "ResNet-50",
            ModelId::Vgg16 => "VGG-16",
            ModelId::Densenet121 => "DenseNet-121",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ModelId::Lenet5 => "Lightweight CNN baseline, fast inference, suitable for 2D slices.",
            ModelId::Resnet50 => "Deep residual network, robust to complex features and variations.",
            ModelId::Vgg16 => "Classic architecture with strong feature hierarchies.",
            ModelId::Densenet121 => "Feature reuse via dense connections for efficient learning.",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, BrainsightError> {
        match s.trim().to_lowercase().as_str() {
            "lenet5" => Ok(ModelId::Lenet5),
            "resnet50" => Ok(ModelId::Resnet50),
            "vgg16" => Ok(ModelId::Vgg16),
            "densenet121" => Ok(ModelId::Densenet121),
            other => Err(BrainsightError::UnknownModel(other.to_string())),
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-model "enabled" flags. The key set is always exactly [`ModelId::ALL`].
///
/// The selection is informational: submissions always request every model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelToggleSet {
    flags: BTreeMap<ModelId, bool>,
}

impl ModelToggleSet {
    pub fn new() -> Self {
        Self {
            flags: ModelId::ALL.iter().map(|id| (*id, true)).collect(),
        }
    }

    pub fn toggle_model(&mut self, id: ModelId, enabled: bool) {
        if let Some(flag) = self.flags.get_mut(&id) {
            *flag = enabled;
        }
    }

    pub fn is_enabled(&self, id: ModelId) -> bool {
        self.flags.get(&id).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModelId, bool)> + '_ {
        self.flags.iter().map(|(id, enabled)| (*id, *enabled))
    }

    pub fn enabled_models(&self) -> Vec<ModelId> {
        self.iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl Default for ModelToggleSet {
    fn default() -> Self {
        Self::new()
    }
}
