//! # deep recurrent survival analysis
//!
//! Recurrent survival models over event-terminated sequences: every training
//! sequence ends at the step where the tracked event (churn, failure, death)
//! fires, and the model predicts, for every step, the probability that the
//! event has not happened yet.
//!
//! Learned embeddings for the integer-coded feature columns are concatenated
//! with the continuous columns, fed through a stacked LSTM, and squashed to
//! per-step probabilities by a linear head. Two losses drive training — the
//! likelihood of the event firing exactly on the final step, and the cross
//! entropy of the cumulative event rate — blended by the training loop with a
//! convex weight.
//!
//! ```rust
//! use burn::backend::{Autodiff, NdArray};
//! use burn::tensor::{Distribution, Tensor};
//! use drsa::models::drsa::model::DeepRecurrentSurvivalModelConfig;
//! use drsa::models::drsa::training::combined_survival_loss;
//!
//! type B = Autodiff<NdArray>;
//!
//! # fn main() -> drsa::Result<()> {
//! let model = DeepRecurrentSurvivalModelConfig::new(11, 16)
//!     .with_n_layers(2)
//!     .with_cardinalities(vec![10])
//!     .with_embedding_dims(vec![5])
//!     .init::<B>()?;
//!
//! let batch = Tensor::<B, 3>::random([4, 25, 11], Distribution::Uniform(0.0, 1.0));
//! let preds = model.forward(batch)?; // [4, 25, 1], every value in (0, 1)
//! let loss = combined_survival_loss(preds, 0.5);
//! # Ok(())
//! # }
//! ```
//!
//! Dropout follows the backend: it masks stochastically on an autodiff
//! (training) backend and is the identity on an inference backend, so
//! evaluation is deterministic given fixed weights.

pub mod data;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{DrsaError, Result};
pub use models::drsa::model::{DeepRecurrentSurvivalModel, DeepRecurrentSurvivalModelConfig};
