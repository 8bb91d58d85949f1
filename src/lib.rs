pub mod matrix;
pub mod neural;
pub mod prelude;

pub use matrix::Matrix2;
pub use neural::{
    activations::Activation,
    config::{NetworkConfig, WeightRange},
    trainer::Trainer,
    Network,
};
