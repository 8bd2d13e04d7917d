pub mod q_loss;

pub use q_loss::QLossBuilder;
