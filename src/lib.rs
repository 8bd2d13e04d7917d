//! # qloss - Q-Value Head Loss
//!
//! The loss attached to the Q-value head of a value-based reinforcement
//! learning network. Predicted action-values are compared with externally
//! computed targets using either mean squared error or Huber loss, and the
//! result is averaged into a single scalar.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::array;
//! use qloss::builders::QLossBuilder;
//! use qloss::loss::{HeadLoss, LOSS_OUT_TYPE_LOSS};
//!
//! let q_loss = QLossBuilder::new()
//!     .network_name("online")
//!     .huber()
//!     .build()
//!     .unwrap();
//!
//! let schema = q_loss.input_schema();
//! assert_eq!(schema.model_outputs, vec!["q_value_pred"]);
//!
//! let predictions = array![[1.0, 2.0]];
//! let targets = array![[0.0, 2.0]];
//! let out = q_loss.loss_forward(&[predictions.view()], &[targets.view()]).unwrap();
//! assert_eq!(out[LOSS_OUT_TYPE_LOSS], vec![0.25]);
//! ```
//!
//! ## Module Organization
//!
//! - [`builders`] - Builder for the Q-value loss
//! - [`config`] - Serializable loss and agent configuration
//! - [`error`] - Error types and result handling
//! - [`loss`] - Elementwise losses, the head-loss interface and the Q-value loss

pub mod builders;
pub mod config;
pub mod error;
pub mod loss;

#[cfg(test)]
mod tests;
