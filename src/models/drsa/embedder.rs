use burn::config::Config;
use burn::module::Module;
use burn::nn::{Embedding, EmbeddingConfig};
use burn::tensor::{backend::Backend, ElementConversion, Int, Tensor};

use crate::error::{DrsaError, Result as DrsaResult};

#[derive(Module, Debug)]
pub struct FeatureEmbedder<B: Backend> {
    embedders: Vec<Embedding<B>>,
    cardinalities: Vec<usize>,
}

impl<B: Backend> FeatureEmbedder<B> {
    pub fn num_tables(&self) -> usize {
        self.embedders.len()
    }

    /// Looks up one embedding table per categorical column. The input is the
    /// raw real-valued categorical block [batch, seq, k]; codes are truncated
    /// toward zero and must stay inside each table's vocabulary.
    pub fn forward(&self, features: Tensor<B, 3>) -> DrsaResult<Vec<Tensor<B, 3>>> {
        let [batch, seq_len, n_cat] = features.dims();
        if n_cat != self.embedders.len() {
            return Err(DrsaError::shape(format!(
                "expected {} categorical columns, got {n_cat}",
                self.embedders.len()
            )));
        }

        let lowest: f32 = features.clone().min().into_scalar().elem();
        if lowest < 0.0 {
            return Err(DrsaError::index(format!(
                "categorical columns hold negative value {lowest}"
            )));
        }

        let codes = features.int();

        self.embedders
            .iter()
            .zip(self.cardinalities.iter())
            .enumerate()
            .map(|(i, (emb, cardinality))| {
                let column: Tensor<B, 2, Int> = codes
                    .clone()
                    .slice([0..batch, 0..seq_len, i..i + 1])
                    .reshape([batch, seq_len]);

                let highest: i64 = column.clone().max().into_scalar().elem();
                if highest >= *cardinality as i64 {
                    return Err(DrsaError::index(format!(
                        "column {i} holds code {highest}, vocabulary size is {cardinality}"
                    )));
                }

                Ok(emb.forward(column))
            })
            .collect()
        // Each output is [batch, seq, embedding_dim]
    }
}

#[derive(Config, Debug)]
pub struct FeatureEmbedderConfig {
    cardinalities: Vec<usize>,
    embedding_dims: Vec<usize>,
}

impl FeatureEmbedderConfig {
    pub fn init<B: Backend>(&self) -> DrsaResult<FeatureEmbedder<B>> {
        if self.cardinalities.len() != self.embedding_dims.len() {
            return Err(DrsaError::configuration(format!(
                "{} vocabularies declared against {} embedding dims",
                self.cardinalities.len(),
                self.embedding_dims.len()
            )));
        }
        if self.cardinalities.iter().any(|c| *c == 0)
            || self.embedding_dims.iter().any(|d| *d == 0)
        {
            return Err(DrsaError::configuration(
                "embedding vocabularies and dims must be positive",
            ));
        }

        let embedders: Vec<Embedding<B>> = self
            .cardinalities
            .iter()
            .zip(self.embedding_dims.iter())
            .map(|(c, e)| EmbeddingConfig::new(*c, *e).init())
            .collect();

        Ok(FeatureEmbedder {
            embedders,
            cardinalities: self.cardinalities.clone(),
        })
    }
}
