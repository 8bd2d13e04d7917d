use crate::config::{AgentParameters, QLossConfig};
use crate::error::{QLossError, Result};
use crate::loss::{LossType, QLoss};

/// Builder for QLoss
pub struct QLossBuilder {
    network_name: Option<String>,
    head_idx: usize,
    agent_parameters: AgentParameters,
    config: QLossConfig,
}

impl QLossBuilder {
    /// Create a new Q-loss builder with mean squared error and weight 1.0
    pub fn new() -> Self {
        QLossBuilder {
            network_name: None,
            head_idx: 0,
            agent_parameters: AgentParameters::default(),
            config: QLossConfig::default(),
        }
    }

    /// Set the owning network's name
    pub fn network_name<S: Into<String>>(mut self, name: S) -> Self {
        self.network_name = Some(name.into());
        self
    }

    /// Set the head index
    pub fn head_idx(mut self, head_idx: usize) -> Self {
        self.head_idx = head_idx;
        self
    }

    /// Set the agent parameters passed through to the loss
    pub fn agent_parameters(mut self, agent_parameters: AgentParameters) -> Self {
        self.agent_parameters = agent_parameters;
        self
    }

    /// Use the given loss type
    pub fn loss_type(mut self, loss_type: LossType) -> Self {
        self.config.loss_type = loss_type.to_string();
        self
    }

    /// Use a loss type given by name, validated in `build`
    pub fn loss_type_name<S: Into<String>>(mut self, name: S) -> Self {
        self.config.loss_type = name.into();
        self
    }

    /// Use mean squared error
    pub fn mse(self) -> Self {
        self.loss_type(LossType::MeanSquaredError)
    }

    /// Use Huber loss
    pub fn huber(self) -> Self {
        self.loss_type(LossType::Huber)
    }

    /// Set the relative loss weight
    pub fn loss_weight(mut self, loss_weight: f32) -> Self {
        self.config.loss_weight = loss_weight;
        self
    }

    /// Build the Q-loss
    pub fn build(self) -> Result<QLoss> {
        let network_name = self.network_name.ok_or_else(|| QLossError::InvalidParameter {
            name: "network_name".to_string(),
            reason: "Network name not specified".to_string(),
        })?;

        QLoss::from_config(network_name, self.head_idx, &self.agent_parameters, &self.config)
    }
}

impl Default for QLossBuilder {
    fn default() -> Self {
        Self::new()
    }
}
