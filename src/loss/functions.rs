use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2, ArrayView2, Axis, Zip};
use serde::{Deserialize, Serialize};

use crate::error::{QLossError, Result};

/// Default transition point between the quadratic and linear regions of [`Huber`]
pub const DEFAULT_HUBER_DELTA: f32 = 1.0;

/// Trait defining the interface for elementwise loss functions.
///
/// Implementors only describe the penalty for a single error `prediction - target`
/// and its derivative; the batch methods apply it over `(batch_size, num_actions)`
/// arrays and validate that both arrays have the same shape. No broadcasting is
/// performed.
pub trait ElementwiseLoss: Send + Sync + fmt::Debug {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Penalty for a single error value
    fn apply(&self, diff: f32) -> f32;

    /// Derivative of [`apply`](Self::apply) with respect to the prediction
    fn derivative(&self, diff: f32) -> f32;

    /// Loss for every element of the batch
    fn compute_elementwise(
        &self,
        predictions: ArrayView2<f32>,
        targets: ArrayView2<f32>,
    ) -> Result<Array2<f32>> {
        check_same_shape(predictions, targets)?;
        Ok(Zip::from(&predictions)
            .and(&targets)
            .map_collect(|&p, &t| self.apply(p - t)))
    }

    /// Loss for each sample, averaged over the action axis
    fn compute_per_sample(
        &self,
        predictions: ArrayView2<f32>,
        targets: ArrayView2<f32>,
    ) -> Result<Array1<f32>> {
        let elementwise = self.compute_elementwise(predictions, targets)?;
        let batch_size = elementwise.nrows();
        Ok(elementwise
            .mean_axis(Axis(1))
            .unwrap_or_else(|| Array1::zeros(batch_size)))
    }

    /// Mean loss over every element of the batch
    fn compute_batch(&self, predictions: ArrayView2<f32>, targets: ArrayView2<f32>) -> Result<f32> {
        let elementwise = self.compute_elementwise(predictions, targets)?;
        Ok(elementwise.mean().unwrap_or(0.0))
    }

    /// Gradient of [`compute_batch`](Self::compute_batch) with respect to the predictions
    fn gradient_batch(
        &self,
        predictions: ArrayView2<f32>,
        targets: ArrayView2<f32>,
    ) -> Result<Array2<f32>> {
        check_same_shape(predictions, targets)?;
        let n = predictions.len().max(1) as f32;
        Ok(Zip::from(&predictions)
            .and(&targets)
            .map_collect(|&p, &t| self.derivative(p - t) / n))
    }
}

fn check_same_shape(predictions: ArrayView2<f32>, targets: ArrayView2<f32>) -> Result<()> {
    if predictions.dim() != targets.dim() {
        return Err(QLossError::dimension_mismatch(
            format!("targets of shape {:?}", predictions.dim()),
            format!("{:?}", targets.dim()),
        ));
    }
    Ok(())
}

/// Mean Squared Error loss: `(p - t)^2`
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanSquaredError;

impl ElementwiseLoss for MeanSquaredError {
    fn name(&self) -> &'static str {
        "mean_squared_error"
    }

    fn apply(&self, diff: f32) -> f32 {
        diff * diff
    }

    fn derivative(&self, diff: f32) -> f32 {
        2.0 * diff
    }
}

/// Huber loss (smooth L1)
///
/// Quadratic (`0.5 * d^2`) while `|d| <= delta`, linear beyond it, so large
/// errors do not dominate the gradient.
#[derive(Debug, Clone, Copy)]
pub struct Huber {
    delta: f32,
}

impl Huber {
    pub fn new(delta: f32) -> Result<Self> {
        if !(delta.is_finite() && delta > 0.0) {
            return Err(QLossError::invalid_parameter(
                "delta".to_string(),
                format!("Huber delta must be positive and finite, got {}", delta),
            ));
        }
        Ok(Huber { delta })
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }
}

impl Default for Huber {
    fn default() -> Self {
        Huber { delta: DEFAULT_HUBER_DELTA }
    }
}

impl ElementwiseLoss for Huber {
    fn name(&self) -> &'static str {
        "huber"
    }

    fn apply(&self, diff: f32) -> f32 {
        let abs_diff = diff.abs();
        if abs_diff <= self.delta {
            0.5 * diff * diff
        } else {
            self.delta * (abs_diff - 0.5 * self.delta)
        }
    }

    fn derivative(&self, diff: f32) -> f32 {
        diff.clamp(-self.delta, self.delta)
    }
}

/// The elementwise losses a Q-value head can be trained with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    #[default]
    #[serde(alias = "mse", alias = "l2", alias = "l2_loss")]
    MeanSquaredError,
    #[serde(alias = "huber_loss")]
    Huber,
}

impl LossType {
    /// Resolve the selector into a concrete loss function
    pub fn resolve(self) -> Box<dyn ElementwiseLoss> {
        match self {
            LossType::MeanSquaredError => Box::new(MeanSquaredError),
            LossType::Huber => Box::new(Huber::default()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LossType::MeanSquaredError => "mean_squared_error",
            LossType::Huber => "huber",
        }
    }
}

impl fmt::Display for LossType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LossType {
    type Err = QLossError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean_squared_error" | "meansquarederror" | "mse" | "l2" | "l2_loss" | "l2loss" => {
                Ok(LossType::MeanSquaredError)
            }
            "huber" | "huber_loss" | "huberloss" => Ok(LossType::Huber),
            other => Err(QLossError::invalid_parameter(
                "loss_type".to_string(),
                format!("only mean_squared_error or huber are supported, got '{}'", other),
            )),
        }
    }
}
