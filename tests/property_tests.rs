#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use qloss::config::AgentParameters;
    use qloss::loss::{LossType, QLoss, LOSS_OUT_TYPE_LOSS};
    use ndarray::Array2;

    // Strategy for generating a (batch_size, num_actions) batch
    fn batch_strategy() -> impl Strategy<Value = (Array2<f32>, Array2<f32>)> {
        (1usize..=8, 1usize..=6).prop_flat_map(|(rows, cols)| {
            let values = prop::collection::vec(-50.0f32..50.0, rows * cols);
            (values.clone(), values).prop_map(move |(p, t)| {
                (
                    Array2::from_shape_vec((rows, cols), p).unwrap(),
                    Array2::from_shape_vec((rows, cols), t).unwrap(),
                )
            })
        })
    }

    fn loss(loss_type: LossType) -> QLoss {
        QLoss::new("online", 0, &AgentParameters::default(), loss_type, 1.0).unwrap()
    }

    fn forward(q_loss: &QLoss, predictions: &Array2<f32>, targets: &Array2<f32>) -> f32 {
        q_loss.forward(predictions.view(), targets.view()).unwrap()[LOSS_OUT_TYPE_LOSS][0]
    }

    proptest! {
        #[test]
        fn test_loss_is_non_negative((predictions, targets) in batch_strategy()) {
            for loss_type in [LossType::MeanSquaredError, LossType::Huber] {
                let value = forward(&loss(loss_type), &predictions, &targets);
                prop_assert!(value >= 0.0);
                prop_assert!(value.is_finite());
            }
        }

        #[test]
        fn test_zero_loss_on_identical_batches((predictions, _) in batch_strategy()) {
            for loss_type in [LossType::MeanSquaredError, LossType::Huber] {
                prop_assert_eq!(forward(&loss(loss_type), &predictions, &predictions), 0.0);
            }
        }

        #[test]
        fn test_mse_is_mean_of_squared_differences((predictions, targets) in batch_strategy()) {
            let expected = (&predictions - &targets).mapv(|d| d * d).mean().unwrap();
            let value = forward(&loss(LossType::MeanSquaredError), &predictions, &targets);
            prop_assert!((value - expected).abs() <= 1e-4 * expected.max(1.0));
        }

        #[test]
        fn test_huber_is_half_mse_in_quadratic_region(
            (predictions, targets) in batch_strategy().prop_map(|(p, t)| (p / 100.0, t / 100.0))
        ) {
            let mse = forward(&loss(LossType::MeanSquaredError), &predictions, &targets);
            let huber = forward(&loss(LossType::Huber), &predictions, &targets);
            prop_assert!((huber - 0.5 * mse).abs() <= 1e-6);
        }

        #[test]
        fn test_huber_never_exceeds_half_mse((predictions, targets) in batch_strategy()) {
            let mse = forward(&loss(LossType::MeanSquaredError), &predictions, &targets);
            let huber = forward(&loss(LossType::Huber), &predictions, &targets);
            prop_assert!(huber <= 0.5 * mse * (1.0 + 1e-5) + 1e-6);
        }

        #[test]
        fn test_forward_is_deterministic((predictions, targets) in batch_strategy()) {
            let q_loss = loss(LossType::Huber);
            prop_assert_eq!(
                forward(&q_loss, &predictions, &targets),
                forward(&q_loss, &predictions, &targets)
            );
        }

        #[test]
        fn test_mismatched_action_dims_rejected(rows in 1usize..8, cols in 1usize..8, extra in 1usize..4) {
            let predictions = Array2::<f32>::zeros((rows, cols + extra));
            let targets = Array2::<f32>::zeros((rows, cols));
            let result = loss(LossType::MeanSquaredError).forward(predictions.view(), targets.view());
            prop_assert!(result.unwrap_err().is_shape_error());
        }
    }
}
