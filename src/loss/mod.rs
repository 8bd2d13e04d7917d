//! Loss functions for Q-value heads.
//!
//! - [`functions`] - elementwise losses (mean squared error, Huber)
//! - [`head_loss`] - the interface head losses expose to the training driver
//! - [`q_loss`] - the Q-value head loss

pub mod functions;
pub mod head_loss;
pub mod q_loss;

pub use functions::{ElementwiseLoss, Huber, LossType, MeanSquaredError, DEFAULT_HUBER_DELTA};
pub use head_loss::{weighted_total, HeadLoss, LossInputSchema, LossOutputs, LOSS_OUT_TYPE_LOSS};
pub use q_loss::QLoss;
