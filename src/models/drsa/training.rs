use burn::config::Config;
use burn::module::Module;
use burn::optim::{AdamConfig, GradientsParams, Optimizer};
use burn::tensor::backend::{AutodiffBackend, Backend};
use burn::tensor::{ElementConversion, Tensor};
use burn::train::metric::{Adaptor, LossInput};
use burn::train::{TrainOutput, TrainStep, ValidStep};
use tracing::info;

use crate::data::batchitem::SurvivalBatch;
use crate::error::Result as DrsaResult;
use crate::utils::{event_rate_loss, event_time_loss};

use super::model::DeepRecurrentSurvivalModel;

/// Convex combination of the two survival losses; `alpha` weighs the
/// event-time likelihood against the event-rate cross entropy.
pub fn combined_survival_loss<B: Backend>(preds: Tensor<B, 3>, alpha: f64) -> Tensor<B, 1> {
    let time = event_time_loss(preds.clone()).mul_scalar(alpha);
    let rate = event_rate_loss(preds).mul_scalar(1.0 - alpha);

    time + rate
}

#[derive(Clone, Debug)]
pub struct SurvivalOutput<B: Backend> {
    pub loss: Tensor<B, 1>,
    pub preds: Tensor<B, 3>,
}

impl<B: Backend> Adaptor<LossInput<B>> for SurvivalOutput<B> {
    fn adapt(&self) -> LossInput<B> {
        LossInput::new(self.loss.clone())
    }
}

/// Bundles the model with the loss weighting so the optimizer can step the
/// whole trainable set at once. The weighting belongs to the training loop;
/// the model itself never sees it.
#[derive(Module, Debug)]
pub struct SurvivalObjective<B: Backend> {
    pub model: DeepRecurrentSurvivalModel<B>,
    alpha: f64,
}

impl<B: Backend> SurvivalObjective<B> {
    pub fn new(model: DeepRecurrentSurvivalModel<B>, alpha: f64) -> Self {
        Self { model, alpha }
    }

    pub fn forward_step(&self, batch: SurvivalBatch<B>) -> DrsaResult<SurvivalOutput<B>> {
        let preds = self.model.forward(batch.features)?;
        let loss = combined_survival_loss(preds.clone(), self.alpha);

        Ok(SurvivalOutput { loss, preds })
    }
}

impl<B: AutodiffBackend> TrainStep<SurvivalBatch<B>, SurvivalOutput<B>> for SurvivalObjective<B> {
    fn step(&self, batch: SurvivalBatch<B>) -> TrainOutput<SurvivalOutput<B>> {
        let item = self.forward_step(batch).unwrap();

        TrainOutput::new(self, item.loss.backward(), item)
    }
}

impl<B: Backend> ValidStep<SurvivalBatch<B>, SurvivalOutput<B>> for SurvivalObjective<B> {
    fn step(&self, batch: SurvivalBatch<B>) -> SurvivalOutput<B> {
        self.forward_step(batch).unwrap()
    }
}

#[derive(Config, Debug)]
pub struct SurvivalTrainingConfig {
    #[config(default = 0.5)]
    alpha: f64,

    #[config(default = 1e-3)]
    learning_rate: f64,

    #[config(default = 100)]
    num_iterations: usize,

    #[config(default = 10)]
    log_interval: usize,
}

/// Plain Adam loop over pre-assembled batches. Returns the trained model.
pub fn train<B: AutodiffBackend>(
    model: DeepRecurrentSurvivalModel<B>,
    batches: &[SurvivalBatch<B>],
    config: &SurvivalTrainingConfig,
) -> DrsaResult<DeepRecurrentSurvivalModel<B>> {
    let mut objective = SurvivalObjective::new(model, config.alpha);
    let mut optim = AdamConfig::new().init();

    for iteration in 0..config.num_iterations {
        for batch in batches {
            let item = objective.forward_step(batch.clone())?;

            if config.log_interval > 0 && iteration % config.log_interval == 0 {
                let loss: f32 = item.loss.clone().into_scalar().elem();
                info!("iteration {iteration}: loss {loss}");
            }

            let grads = GradientsParams::from_grads(item.loss.backward(), &objective);
            objective = optim.step(config.learning_rate, objective, grads);
        }
    }

    Ok(objective.model)
}
