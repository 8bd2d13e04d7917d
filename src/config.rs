//! Configuration types for head losses.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::loss::LossType;

/// Agent/algorithm parameters handed to every head loss.
///
/// Head losses receive this so that all of them share one constructor
/// signature; the Q-value loss does not read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentParameters {
    #[serde(default)]
    pub algorithm: String,
    #[serde(default)]
    pub extra: serde_json::Value,
}

impl AgentParameters {
    pub fn new<S: Into<String>>(algorithm: S) -> Self {
        AgentParameters {
            algorithm: algorithm.into(),
            extra: serde_json::Value::Null,
        }
    }
}

/// Serialized form of a Q-value loss configuration.
///
/// The selector stays textual here; it is validated when the loss is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QLossConfig {
    #[serde(default = "default_loss_type")]
    pub loss_type: String,
    #[serde(default = "default_loss_weight")]
    pub loss_weight: f32,
}

fn default_loss_type() -> String {
    LossType::default().to_string()
}

fn default_loss_weight() -> f32 {
    1.0
}

impl Default for QLossConfig {
    fn default() -> Self {
        QLossConfig {
            loss_type: default_loss_type(),
            loss_weight: default_loss_weight(),
        }
    }
}

impl QLossConfig {
    pub fn new(loss_type: LossType, loss_weight: f32) -> Self {
        QLossConfig {
            loss_type: loss_type.to_string(),
            loss_weight,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
