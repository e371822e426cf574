use burn::config::Config;
use burn::module::Module;
use burn::nn::{Dropout, DropoutConfig, Lstm, LstmConfig};
use burn::tensor::{backend::Backend, Tensor};

#[derive(Module, Debug)]
pub struct RecurrentSurvivalEncoder<B: Backend> {
    layers: Vec<Lstm<B>>,
    dropout: Dropout,
}

impl<B: Backend> RecurrentSurvivalEncoder<B> {
    /// Runs the fused sequence through the stacked recurrent layers and
    /// exposes the last layer's per-timestep hidden states. Hidden and cell
    /// state start at zero on every call; nothing carries across batches.
    pub fn forward(&self, sequence: Tensor<B, 3>) -> Tensor<B, 3> {
        let last = self.layers.len() - 1;
        let mut output = sequence;

        for (i, lstm) in self.layers.iter().enumerate() {
            let (_, hidden_state) = lstm.forward(output, None);

            // Dropout sits between stacked layers only
            output = if i < last {
                self.dropout.forward(hidden_state)
            } else {
                hidden_state
            };
        }

        output
    }
}

#[derive(Config, Debug)]
pub struct RecurrentSurvivalEncoderConfig {
    d_input: usize,
    d_hidden: usize,

    #[config(default = 1)]
    n_layers: usize,

    #[config(default = 0.0)]
    dropout: f64,
}

impl RecurrentSurvivalEncoderConfig {
    pub fn init<B: Backend>(&self) -> RecurrentSurvivalEncoder<B> {
        let layers: Vec<Lstm<B>> = (0..self.n_layers)
            .map(|i| {
                let d_input = if i == 0 { self.d_input } else { self.d_hidden };
                LstmConfig::new(d_input, self.d_hidden, true).init()
            })
            .collect();

        RecurrentSurvivalEncoder {
            layers,
            dropout: DropoutConfig::new(self.dropout).init(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use burn::tensor::Distribution;

    type B = NdArray;

    #[test]
    fn encoder_keeps_the_sequence_layout() {
        let encoder = RecurrentSurvivalEncoderConfig::new(6, 4).init::<B>();
        let out = encoder.forward(Tensor::random([3, 7, 6], Distribution::Default));

        assert_eq!(out.dims(), [3, 7, 4]);
    }

    #[test]
    fn stacked_layers_narrow_to_the_hidden_width() {
        let encoder = RecurrentSurvivalEncoderConfig::new(9, 5)
            .with_n_layers(3)
            .with_dropout(0.2)
            .init::<B>();
        let out = encoder.forward(Tensor::random([2, 4, 9], Distribution::Default));

        assert_eq!(out.dims(), [2, 4, 5]);
    }
}
