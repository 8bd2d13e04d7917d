use std::collections::BTreeMap;

use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::error::{QLossError, Result};

/// Key of the main loss term in [`LossOutputs`]
pub const LOSS_OUT_TYPE_LOSS: &str = "loss";

/// Named loss terms produced by a single forward pass.
///
/// Every term is a list so that several values of the same kind can be
/// reported by one head.
pub type LossOutputs = BTreeMap<&'static str, Vec<f32>>;

/// Names of the tensors a head loss expects, in the order `loss_forward` takes them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossInputSchema {
    /// Outputs of the head's network, gradients flow into these
    pub model_outputs: Vec<String>,
    /// Externally supplied values, never differentiated
    pub non_trainable_args: Vec<String>,
}

impl LossInputSchema {
    pub fn new<I, J, S>(model_outputs: I, non_trainable_args: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LossInputSchema {
            model_outputs: model_outputs.into_iter().map(Into::into).collect(),
            non_trainable_args: non_trainable_args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Interface shared by the losses attached to network heads
pub trait HeadLoss: Send + Sync {
    /// Scope label of the owning network
    fn name(&self) -> &str;

    /// Index of the head this loss belongs to
    fn head_idx(&self) -> usize;

    /// Relative weight applied when combined with sibling losses
    fn loss_weight(&self) -> f32;

    /// Tensors required by [`loss_forward`](Self::loss_forward)
    fn input_schema(&self) -> LossInputSchema;

    /// Forward pass over inputs ordered as declared by [`input_schema`](Self::input_schema)
    fn loss_forward(
        &self,
        model_outputs: &[ArrayView2<f32>],
        non_trainable_args: &[ArrayView2<f32>],
    ) -> Result<LossOutputs>;
}

/// Fetch the `idx`-th input, reporting the schema name when it is absent
pub(crate) fn required_input<'a, 'b>(
    inputs: &'b [ArrayView2<'a, f32>],
    names: &[String],
    idx: usize,
) -> Result<ArrayView2<'a, f32>> {
    inputs.get(idx).cloned().ok_or_else(|| QLossError::MissingInput {
        name: names.get(idx).cloned().unwrap_or_else(|| format!("#{}", idx)),
    })
}

/// Sum of every `"loss"` term scaled by the weight of the head that produced it
pub fn weighted_total<'a, I>(outputs: I) -> f32
where
    I: IntoIterator<Item = (&'a dyn HeadLoss, &'a LossOutputs)>,
{
    outputs
        .into_iter()
        .map(|(head_loss, out)| {
            let sum: f32 = out
                .get(LOSS_OUT_TYPE_LOSS)
                .map(|values| values.iter().sum())
                .unwrap_or(0.0);
            head_loss.loss_weight() * sum
        })
        .sum()
}
