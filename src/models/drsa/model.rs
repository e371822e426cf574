use burn::config::Config;
use burn::module::Module;
use burn::tensor::{backend::Backend, Tensor};

use crate::error::{DrsaError, Result as DrsaResult};

use super::embedder::{FeatureEmbedder, FeatureEmbedderConfig};
use super::encoder::{RecurrentSurvivalEncoder, RecurrentSurvivalEncoderConfig};
use super::head::{EmissionHead, EmissionHeadConfig};

#[derive(Module, Debug)]
pub struct DeepRecurrentSurvivalModel<B: Backend> {
    n_features: usize,
    embedder: Option<FeatureEmbedder<B>>,
    encoder: RecurrentSurvivalEncoder<B>,
    head: EmissionHead<B>,
}

impl<B: Backend> DeepRecurrentSurvivalModel<B> {
    /// Scores a batch of sequences: for every timestep, the probability that
    /// the tracked event has not yet occurred. Input is [batch, seq,
    /// n_features] with the categorical columns first; output is [batch, seq,
    /// d_output] with every value in (0, 1).
    pub fn forward(&self, features: Tensor<B, 3>) -> DrsaResult<Tensor<B, 3>> {
        let [batch, seq_len, width] = features.dims();
        if width != self.n_features {
            return Err(DrsaError::shape(format!(
                "input carries {width} feature columns, model was built for {}",
                self.n_features
            )));
        }

        let fused = match &self.embedder {
            Some(embedder) => {
                let n_cat = embedder.num_tables();
                let cat_block = features.clone().slice([0..batch, 0..seq_len, 0..n_cat]);
                let mut blocks = embedder.forward(cat_block)?;

                if n_cat < self.n_features {
                    blocks.push(features.slice([0..batch, 0..seq_len, n_cat..self.n_features]));
                }

                Tensor::cat(blocks, 2)
            }
            None => features,
        };

        let encodings = self.encoder.forward(fused);

        Ok(self.head.forward(encodings))
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }
}

#[derive(Config, Debug)]
pub struct DeepRecurrentSurvivalModelConfig {
    n_features: usize,
    d_hidden: usize,

    #[config(default = 1)]
    n_layers: usize,

    #[config(default = "vec![]")]
    cardinalities: Vec<usize>,

    #[config(default = "vec![]")]
    embedding_dims: Vec<usize>,

    /// Expected encoder input width; checked against the width derived from
    /// the embedding dims. Useful when weights come from a checkpoint.
    #[config(default = "None")]
    d_input: Option<usize>,

    #[config(default = 1)]
    d_output: usize,

    #[config(default = 0.0)]
    lstm_dropout: f64,

    #[config(default = 0.0)]
    linear_dropout: f64,
}

impl DeepRecurrentSurvivalModelConfig {
    pub fn init<B: Backend>(&self) -> DrsaResult<DeepRecurrentSurvivalModel<B>> {
        if self.n_features == 0 || self.d_hidden == 0 || self.n_layers == 0 || self.d_output == 0 {
            return Err(DrsaError::configuration(
                "n_features, d_hidden, n_layers and d_output must all be positive",
            ));
        }
        if !(0.0..1.0).contains(&self.lstm_dropout) || !(0.0..1.0).contains(&self.linear_dropout) {
            return Err(DrsaError::configuration(
                "dropout fractions must lie in [0, 1)",
            ));
        }
        if self.cardinalities.len() != self.embedding_dims.len() {
            return Err(DrsaError::configuration(format!(
                "{} vocabularies declared against {} embedding dims",
                self.cardinalities.len(),
                self.embedding_dims.len()
            )));
        }

        let n_cat = self.cardinalities.len();
        if n_cat > self.n_features {
            return Err(DrsaError::configuration(format!(
                "{n_cat} embedding tables declared for {} feature columns",
                self.n_features
            )));
        }

        let summed_dims: usize = self.embedding_dims.iter().sum();
        let d_input = summed_dims + self.n_features - n_cat;
        if let Some(declared) = self.d_input {
            if declared != d_input {
                return Err(DrsaError::configuration(format!(
                    "declared encoder input width {declared}, embeddings derive {d_input}"
                )));
            }
        }

        let embedder = if n_cat > 0 {
            Some(
                FeatureEmbedderConfig::new(self.cardinalities.clone(), self.embedding_dims.clone())
                    .init()?,
            )
        } else {
            None
        };

        let encoder = RecurrentSurvivalEncoderConfig::new(d_input, self.d_hidden)
            .with_n_layers(self.n_layers)
            .with_dropout(self.lstm_dropout)
            .init();

        let head = EmissionHeadConfig::new(self.d_hidden)
            .with_d_output(self.d_output)
            .with_dropout(self.linear_dropout)
            .init();

        Ok(DeepRecurrentSurvivalModel {
            n_features: self.n_features,
            embedder,
            encoder,
            head,
        })
    }
}
