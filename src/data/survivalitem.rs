use burn::data::dataloader::batcher::Batcher;
use burn::data::dataset::InMemDataset;
use burn::tensor::backend::Backend;
use burn::tensor::{Data, Shape, Tensor};
use serde::{Deserialize, Serialize};

use crate::data::batchitem::SurvivalBatch;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SurvivalItem {
    pub item_id: String,
    /// One feature frame per observed step, categorical columns first; the
    /// event occurs at the last frame.
    pub features: Vec<Vec<f32>>,
}

pub struct DataBatcher<B: Backend> {
    device: B::Device,
    sequence_length: usize,
    n_features: usize,
}

impl<B: Backend> DataBatcher<B> {
    pub fn new(device: B::Device, sequence_length: usize, n_features: usize) -> Self {
        Self {
            device,
            sequence_length,
            n_features,
        }
    }
}

pub fn load_from_file(filename: &str) -> Result<InMemDataset<SurvivalItem>, std::io::Error> {
    InMemDataset::from_json_rows(filename)
}

impl<B: Backend> Batcher<SurvivalItem, SurvivalBatch<B>> for DataBatcher<B> {
    fn batch(&self, items: Vec<SurvivalItem>) -> SurvivalBatch<B> {
        let tensors: Vec<Tensor<B, 3>> = items
            .iter()
            .map(|item| {
                // Keep the trailing window so the event stays on the final
                // step; short sequences are left-padded with zero frames
                let steps = item.features.len();
                let take = steps.min(self.sequence_length);
                let offset = self.sequence_length - take;

                let mut values = vec![0.0f32; self.sequence_length * self.n_features];
                for (t, frame) in item.features[steps - take..].iter().enumerate() {
                    for (f, value) in frame.iter().take(self.n_features).enumerate() {
                        values[(offset + t) * self.n_features + f] = *value;
                    }
                }

                let data = Data::new(
                    values,
                    Shape::new([1, self.sequence_length, self.n_features]),
                );
                Tensor::from_data(data.convert()).to_device(&self.device)
            })
            .collect();

        SurvivalBatch {
            features: Tensor::cat(tensors, 0),
        }
    }
}
