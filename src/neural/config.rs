use crate::prelude::*;

use super::activations::Activation;

pub const DEFAULT_BIAS: f64 = 1.0;
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Range that initial weights are drawn from: `[from, to)`, floored when `is_int`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightRange {
    pub from: f64,
    pub to: f64,
    pub is_int: bool,
}

impl WeightRange {
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            is_int: false,
        }
    }

    pub fn with_int(mut self, is_int: bool) -> Self {
        self.is_int = is_int;
        self
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        Self::new(-1.0, 1.0)
    }
}

/// Everything needed to build a [`Network`](super::Network).
///
/// Weights start zero-filled unless randomized or given an init value. If both
/// are set, the init value wins.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub node_counts: Vec<usize>,
    pub activation: Activation,
    pub bias: f64,
    pub learning_rate: f64,
    pub randomize_weights: Option<WeightRange>,
    pub weight_init_value: Option<f64>,
}

impl NetworkConfig {
    pub fn new(node_counts: impl Into<Vec<usize>>, activation: Activation) -> Self {
        Self {
            node_counts: node_counts.into(),
            activation,
            bias: DEFAULT_BIAS,
            learning_rate: DEFAULT_LEARNING_RATE,
            randomize_weights: None,
            weight_init_value: None,
        }
    }

    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_randomized_weights(mut self, range: WeightRange) -> Self {
        self.randomize_weights = Some(range);
        self
    }

    pub fn with_weight_init_value(mut self, value: f64) -> Self {
        self.weight_init_value = Some(value);
        self
    }

    /// Checks the layer layout: an input, at least one hidden and an output
    /// layer, none of them empty.
    pub fn validate(&self) -> Result<()> {
        if self.node_counts.len() < 3 {
            return Err(Error::ConfigErr(format!(
                "network needs 3 or more layers, got {}",
                self.node_counts.len()
            )));
        }
        if let Some(idx) = self.node_counts.iter().position(|&n| n == 0) {
            return Err(Error::ConfigErr(format!("layer {idx} has no nodes")));
        }
        Ok(())
    }
}
