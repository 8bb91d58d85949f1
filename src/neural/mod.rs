pub mod activations;
pub mod config;
pub mod trainer;

use crate::prelude::*;
use rand::Rng;

use crate::matrix::{
    ops::{Dot, Transpose},
    Matrix2,
};

use self::{activations::Activation, config::NetworkConfig};

/// Everything one forward pass computes.
struct Trace {
    /// Input to each layer, starting with the network input: `a_0 .. a_{L-1}`.
    activations: Vec<Matrix2<f64>>,
    /// `z_k = W_k * [a_k; bias]`, one per weight matrix.
    pre_activations: Vec<Matrix2<f64>>,
    /// `y(z_{L-1})`
    output: Matrix2<f64>,
}

/// Fully connected feed-forward network.
///
/// Weight matrix `k` has shape `node_counts[k + 1] x (node_counts[k] + 1)`; its
/// last column holds the weights applied to the constant bias input.
#[derive(Debug, Clone)]
pub struct Network {
    node_counts: Vec<usize>,
    weights: Vec<Matrix2<f64>>,
    activation: Activation,
    bias: f64,
    learning_rate: f64,
}

impl Network {
    /// Builds a network, drawing any random weights from the thread rng.
    pub fn new(config: NetworkConfig) -> Result<Self> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(config: NetworkConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut weights = Vec::with_capacity(config.node_counts.len() - 1);
        for pair in config.node_counts.windows(2) {
            let (before, after) = (pair[0], pair[1]);
            // +1 for the bias at the end
            let mut matrix = Matrix2::<f64>::zeroed(after, before + 1);

            if let Some(range) = config.randomize_weights {
                matrix.randomize_with(rng, range.from, range.to, range.is_int)?;
            }
            if let Some(value) = config.weight_init_value {
                matrix.apply(|_| value);
            }
            weights.push(matrix);
        }

        log::debug!(
            "built network with layers {:?}, weight shapes {:?}",
            config.node_counts,
            weights.iter().map(Matrix2::dim).collect::<Vec<_>>()
        );

        Ok(Self {
            node_counts: config.node_counts,
            weights,
            activation: config.activation,
            bias: config.bias,
            learning_rate: config.learning_rate,
        })
    }

    pub fn node_counts(&self) -> &[usize] {
        &self.node_counts
    }

    pub fn weights(&self) -> &[Matrix2<f64>] {
        &self.weights
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }

    pub fn input_amount(&self) -> usize {
        self.node_counts[0]
    }

    pub fn output_amount(&self) -> usize {
        self.node_counts[self.node_counts.len() - 1]
    }

    fn forward(&self, input: &[f64]) -> Result<Trace> {
        if input.len() != self.input_amount() {
            return Err(Error::DimensionErr);
        }

        let mut activations = Vec::with_capacity(self.weights.len());
        let mut pre_activations = Vec::with_capacity(self.weights.len());

        let mut current = Matrix2::from_column(input.to_vec())?;
        for weights in &self.weights {
            let mut augmented = current.clone();
            augmented.push_row(&[self.bias])?;

            let z = weights.dot(&augmented)?;
            let mut a = z.clone();
            a.apply(self.activation.y);

            activations.push(current);
            pre_activations.push(z);
            current = a;
        }

        Ok(Trace {
            activations,
            pre_activations,
            output: current,
        })
    }

    /// Propagates an input through the network, returning the output column.
    pub fn predict(&self, input: &[f64]) -> Result<Matrix2<f64>> {
        Ok(self.forward(input)?.output)
    }

    /// Like [`Network::predict`] but returns every layer's activation, starting
    /// with the input itself and ending with the output.
    pub fn predict_layers(&self, input: &[f64]) -> Result<Vec<Matrix2<f64>>> {
        let Trace {
            mut activations,
            output,
            ..
        } = self.forward(input)?;
        activations.push(output);
        Ok(activations)
    }

    /// Performs one backpropagation step on a single sample.
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> Result<()> {
        let Trace {
            activations,
            pre_activations,
            output,
        } = self.forward(input)?;

        if target.len() != output.rows() {
            return Err(Error::DimensionErr);
        }
        let target = Matrix2::from_column(target.to_vec())?;

        let mut error = (&target - &output)?;
        log::trace!("training step, squared error {}", sum_of_squares(&error));

        for (l, weights) in self.weights.iter_mut().enumerate().rev() {
            let mut gradient = pre_activations[l].clone();
            gradient
                .apply(self.activation.dydx)
                .hadamard(&error)?
                .scale(self.learning_rate);

            let mut deltas = gradient.dot(&activations[l].transpose())?;
            deltas.push_col(&gradient.flatten())?;

            weights.add_elementwise(&deltas)?;

            if l > 0 {
                let mut without_bias = weights.clone();
                without_bias.remove_col(without_bias.cols() - 1)?;
                error = without_bias.transpose().dot(&error)?;
            }
        }

        Ok(())
    }

    /// Sum of squared differences between the prediction and `target`.
    pub fn squared_error(&self, input: &[f64], target: &[f64]) -> Result<f64> {
        let output = self.predict(input)?;
        if target.len() != output.rows() {
            return Err(Error::DimensionErr);
        }
        Ok(output
            .flatten()
            .iter()
            .zip(target)
            .map(|(o, t)| (o - t) * (o - t))
            .sum())
    }

    /// Mean-squared error over a set of (input, target) samples
    pub fn mean_squared_error<I, T>(&self, samples: &[(I, T)]) -> Result<f64>
    where
        I: AsRef<[f64]>,
        T: AsRef<[f64]>,
    {
        if samples.is_empty() {
            return Err(Error::DimensionErr);
        }

        let mut sum = 0.0;
        for (input, target) in samples {
            sum += self.squared_error(input.as_ref(), target.as_ref())?;
        }
        Ok(sum / (samples.len() * self.output_amount()) as f64)
    }
}

fn sum_of_squares(m: &Matrix2<f64>) -> f64 {
    m.flatten().iter().map(|x| x * x).sum()
}
