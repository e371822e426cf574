use burn::tensor::{backend::Backend, Tensor};

/// One batch of event-terminated sequences; the tracked event fires at the
/// final step of every sequence.
#[derive(Clone, Debug)]
pub struct SurvivalBatch<B: Backend> {
    pub features: Tensor<B, 3>, // [N, T, F]
}
