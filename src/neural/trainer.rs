use crate::{neural::Network, prelude::*};

/// Drives online training: every epoch calls [`Network::train`] once per sample,
/// in order.
pub struct Trainer {
    epochs: usize,
    epochs_per_log: Option<usize>,
}

impl Trainer {
    pub fn new(epochs: usize) -> Self {
        Self {
            epochs,
            epochs_per_log: None,
        }
    }

    /// Log the mean-squared error every `epochs_per_log` epochs. `Some(0)` is
    /// treated as `None`.
    pub fn with_log(mut self, epochs_per_log: Option<usize>) -> Self {
        self.epochs_per_log = epochs_per_log.filter(|&n| n > 0);
        self
    }

    pub fn set_epochs(&mut self, epochs: usize) {
        self.epochs = epochs;
    }

    /// Trains `net` on `samples` and returns the final mean-squared error.
    pub fn train<I, T>(&self, net: &mut Network, samples: &[(I, T)]) -> Result<f64>
    where
        I: AsRef<[f64]>,
        T: AsRef<[f64]>,
    {
        if samples.is_empty() {
            return Err(Error::DimensionErr);
        }

        for epoch in 0..self.epochs {
            for (input, target) in samples {
                net.train(input.as_ref(), target.as_ref())?;
            }
            if self.epochs_per_log.is_some_and(|epl| epoch % epl == 0) {
                let mse = net.mean_squared_error(samples)?;
                log::info!("Epoch {epoch} error: {mse}");
            }
        }

        let mse = net.mean_squared_error(samples)?;
        log::info!("finished {} epochs, error: {mse}", self.epochs);
        Ok(mse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neural::{
        activations::Activation,
        config::{NetworkConfig, WeightRange},
    };
    use rand::{rngs::StdRng, SeedableRng};

    fn random_net(node_counts: &[usize], seed: u64, learning_rate: f64) -> Network {
        let mut rng = StdRng::seed_from_u64(seed);
        Network::with_rng(
            NetworkConfig::new(node_counts, Activation::SIGMOID)
                .with_randomized_weights(WeightRange::default())
                .with_learning_rate(learning_rate),
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn train_or() {
        let mut net = random_net(&[2, 2, 1], 1, 0.5);

        let samples = [
            ([0.0, 0.0], [0.0]),
            ([0.0, 1.0], [1.0]),
            ([1.0, 0.0], [1.0]),
            ([1.0, 1.0], [1.0]),
        ];

        let start = net.mean_squared_error(&samples).unwrap();
        let fin = Trainer::new(10_000)
            .with_log(Some(1_000))
            .train(&mut net, &samples)
            .unwrap();

        println!("------------------");
        println!("Final cost: {fin}");

        for (inp, _) in &samples {
            println!("{:?} -> {}", inp, net.predict(inp).unwrap().get(0, 0).unwrap())
        }

        assert!(fin < start);
        assert!(fin < 0.1);
    }

    #[test]
    fn zero_epochs_leaves_weights() {
        let mut net = random_net(&[2, 3, 1], 9, 0.1);
        let before = net.weights().to_vec();

        let samples = [(vec![0.5, 0.5], vec![1.0])];
        Trainer::new(0).with_log(Some(0)).train(&mut net, &samples).unwrap();

        assert_eq!(net.weights(), &before[..]);
    }

    #[test]
    fn propagates_sample_errors() {
        let mut net = random_net(&[2, 3, 1], 5, 0.1);

        let samples = [(vec![0.5, 0.5], vec![1.0, 0.0])];
        let res = Trainer::new(3).train(&mut net, &samples);
        assert_eq!(res, Err(Error::DimensionErr));

        let empty: [(Vec<f64>, Vec<f64>); 0] = [];
        assert_eq!(
            Trainer::new(3).train(&mut net, &empty),
            Err(Error::DimensionErr)
        );
    }
}
