use ndarray::{Array1, Array2, ArrayView2};
use tracing::{debug, trace};

use super::functions::{ElementwiseLoss, LossType};
use super::head_loss::{required_input, HeadLoss, LossInputSchema, LossOutputs, LOSS_OUT_TYPE_LOSS};
use crate::config::{AgentParameters, QLossConfig};
use crate::error::{QLossError, Result};

/// Loss for a Q-value head.
///
/// Compares the action-values predicted by the head, shape `(batch_size, num_actions)`,
/// with externally computed targets of the same shape, and reports the mean
/// elementwise loss over the whole batch.
///
/// # Example
///
/// ```rust
/// use ndarray::array;
/// use qloss::config::AgentParameters;
/// use qloss::loss::{LossType, QLoss, LOSS_OUT_TYPE_LOSS};
///
/// let q_loss = QLoss::new("main", 0, &AgentParameters::default(), LossType::MeanSquaredError, 1.0)?;
/// let out = q_loss.forward(array![[1.0, 2.0]].view(), array![[0.0, 2.0]].view())?;
/// assert_eq!(out[LOSS_OUT_TYPE_LOSS], vec![0.5]);
/// # Ok::<(), qloss::error::QLossError>(())
/// ```
#[derive(Debug)]
pub struct QLoss {
    name: String,
    head_idx: usize,
    loss_type: LossType,
    loss_weight: f32,
    loss_fn: Box<dyn ElementwiseLoss>,
}

impl QLoss {
    pub fn new<S: Into<String>>(
        network_name: S,
        head_idx: usize,
        _agent_parameters: &AgentParameters,
        loss_type: LossType,
        loss_weight: f32,
    ) -> Result<Self> {
        if !loss_weight.is_finite() || loss_weight < 0.0 {
            return Err(QLossError::invalid_parameter(
                "loss_weight".to_string(),
                format!("must be finite and non-negative, got {}", loss_weight),
            ));
        }

        let name = network_name.into();
        debug!(
            network = %name,
            head_idx,
            loss_type = %loss_type,
            loss_weight,
            "created Q-value loss"
        );

        Ok(QLoss {
            name,
            head_idx,
            loss_type,
            loss_weight,
            loss_fn: loss_type.resolve(),
        })
    }

    /// Build from a serialized configuration, rejecting unsupported loss selectors
    pub fn from_config<S: Into<String>>(
        network_name: S,
        head_idx: usize,
        agent_parameters: &AgentParameters,
        config: &QLossConfig,
    ) -> Result<Self> {
        let loss_type = config.loss_type.parse::<LossType>()?;
        Self::new(network_name, head_idx, agent_parameters, loss_type, config.loss_weight)
    }

    pub fn loss_type(&self) -> LossType {
        self.loss_type
    }

    /// Mean loss over the batch, keyed as [`LOSS_OUT_TYPE_LOSS`].
    ///
    /// Shape checks are left to the elementwise loss.
    pub fn forward(&self, q_value_pred: ArrayView2<f32>, target: ArrayView2<f32>) -> Result<LossOutputs> {
        // TODO: return one loss per sample here so the aggregator can apply sample weights;
        // per_sample_loss already computes them but every caller expects a single mean.
        let loss = self.loss_fn.compute_batch(q_value_pred, target)?;
        trace!(head_idx = self.head_idx, shape = ?q_value_pred.dim(), loss, "Q-value loss forward");

        let mut outputs = LossOutputs::new();
        outputs.insert(LOSS_OUT_TYPE_LOSS, vec![loss]);
        Ok(outputs)
    }

    /// Loss of each sample, averaged over actions
    pub fn per_sample_loss(&self, q_value_pred: ArrayView2<f32>, target: ArrayView2<f32>) -> Result<Array1<f32>> {
        self.loss_fn.compute_per_sample(q_value_pred, target)
    }

    /// Gradient of the reported loss with respect to `q_value_pred`.
    ///
    /// The target is a constant; no gradient is produced for it.
    pub fn gradient(&self, q_value_pred: ArrayView2<f32>, target: ArrayView2<f32>) -> Result<Array2<f32>> {
        self.loss_fn.gradient_batch(q_value_pred, target)
    }
}

impl HeadLoss for QLoss {
    fn name(&self) -> &str {
        &self.name
    }

    fn head_idx(&self) -> usize {
        self.head_idx
    }

    fn loss_weight(&self) -> f32 {
        self.loss_weight
    }

    fn input_schema(&self) -> LossInputSchema {
        LossInputSchema::new(["q_value_pred"], ["target"])
    }

    fn loss_forward(
        &self,
        model_outputs: &[ArrayView2<f32>],
        non_trainable_args: &[ArrayView2<f32>],
    ) -> Result<LossOutputs> {
        let schema = self.input_schema();
        let q_value_pred = required_input(model_outputs, &schema.model_outputs, 0)?;
        let target = required_input(non_trainable_args, &schema.non_trainable_args, 0)?;
        self.forward(q_value_pred, target)
    }
}
