use burn::tensor::{backend::Backend, Tensor};

const PROB_EPSILON: f64 = 1e-7;

/// Negative mean log-likelihood of the event firing exactly on the final
/// step, given per-step survival probabilities of shape [batch, seq, 1].
pub fn event_time_loss<B: Backend>(preds: Tensor<B, 3>) -> Tensor<B, 1> {
    let [batch, seq_len, _] = preds.dims();
    let steps: Tensor<B, 2> = preds.squeeze(2);
    let steps = steps.clamp(PROB_EPSILON, 1.0 - PROB_EPSILON);

    let final_step = steps.clone().slice([0..batch, seq_len - 1..seq_len]);
    let event_log_lik = (final_step.neg() + 1.0).log();

    // A length-one sequence has no survival prefix to account for
    let log_lik = if seq_len > 1 {
        let prefix = steps.slice([0..batch, 0..seq_len - 1]);
        prefix.log().sum_dim(1) + event_log_lik
    } else {
        event_log_lik
    };

    log_lik.neg().mean()
}

/// Cross entropy of the cumulative event rate against the ground truth that
/// the event has fired by the final step.
pub fn event_rate_loss<B: Backend>(preds: Tensor<B, 3>) -> Tensor<B, 1> {
    let steps: Tensor<B, 2> = preds.squeeze(2);
    let steps = steps.clamp(PROB_EPSILON, 1.0 - PROB_EPSILON);

    // P(no event through the final step), product taken in log space
    let survival = steps.log().sum_dim(1).exp();
    let event_rate = survival.neg() + 1.0;

    event_rate.clamp_min(PROB_EPSILON).log().neg().mean()
}

pub fn hazard_rates<B: Backend>(preds: Tensor<B, 3>) -> Tensor<B, 3> {
    preds.neg() + 1.0
}

/// Running product of the per-step probabilities: the probability of
/// surviving through each step, [batch, seq, 1].
pub fn survival_curve<B: Backend>(preds: Tensor<B, 3>) -> Tensor<B, 3> {
    let [batch, seq_len, d_output] = preds.dims();

    let mut running = preds.clone().slice([0..batch, 0..1, 0..d_output]);
    let mut curve = vec![running.clone()];

    for t in 1..seq_len {
        running = running * preds.clone().slice([0..batch, t..t + 1, 0..d_output]);
        curve.push(running.clone());
    }

    Tensor::cat(curve, 1)
}
