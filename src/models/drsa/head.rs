use burn::config::Config;
use burn::module::Module;
use burn::nn::{Dropout, DropoutConfig, Linear, LinearConfig};
use burn::tensor::activation;
use burn::tensor::{backend::Backend, Tensor};

#[derive(Module, Debug)]
pub struct EmissionHead<B: Backend> {
    proj: Linear<B>,
    dropout: Dropout,
}

impl<B: Backend> EmissionHead<B> {
    /// Projects each hidden vector to logits, drops out during training and
    /// squashes into (0, 1).
    pub fn forward(&self, hidden: Tensor<B, 3>) -> Tensor<B, 3> {
        let logits = self.proj.forward(hidden);
        let logits = self.dropout.forward(logits);

        activation::sigmoid(logits)
    }
}

#[derive(Config, Debug)]
pub struct EmissionHeadConfig {
    d_hidden: usize,

    #[config(default = 1)]
    d_output: usize,

    #[config(default = 0.0)]
    dropout: f64,
}

impl EmissionHeadConfig {
    pub fn init<B: Backend>(&self) -> EmissionHead<B> {
        EmissionHead {
            proj: LinearConfig::new(self.d_hidden, self.d_output).init(),
            dropout: DropoutConfig::new(self.dropout).init(),
        }
    }
}
