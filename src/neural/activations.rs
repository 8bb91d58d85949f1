/// The activation used by every layer of a [`Network`](super::Network): a
/// forward transform `y` and its derivative `dydx`.
///
/// `dydx` is the derivative with respect to the pre-activation. For example, the
/// sigmoid pair expresses it as `sigmoid(x) * (1 - sigmoid(x))`, evaluated at the
/// same `x` that `y` was.
#[derive(Debug, Clone, Copy)]
pub struct Activation {
    pub y: fn(f64) -> f64,
    pub dydx: fn(f64) -> f64,
}

fn identity(x: f64) -> f64 {
    x
}

fn one(_: f64) -> f64 {
    1.0
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn sigmoid_prime(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}

fn tanh_prime(x: f64) -> f64 {
    let t = x.tanh();
    1.0 - t * t
}

fn arctan_prime(x: f64) -> f64 {
    1.0 / (1.0 + x * x)
}

fn relu(x: f64) -> f64 {
    x.max(0.0)
}

fn step(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

impl Activation {
    pub const IDENTITY: Activation = Activation {
        y: identity,
        dydx: one,
    };
    pub const SIGMOID: Activation = Activation {
        y: sigmoid,
        dydx: sigmoid_prime,
    };
    pub const TANH: Activation = Activation {
        y: f64::tanh,
        dydx: tanh_prime,
    };
    pub const ARCTAN: Activation = Activation {
        y: f64::atan,
        dydx: arctan_prime,
    };
    pub const RELU: Activation = Activation {
        y: relu,
        dydx: step,
    };

    pub fn new(y: fn(f64) -> f64, dydx: fn(f64) -> f64) -> Self {
        Self { y, dydx }
    }

    /// Returns activation function at x
    pub fn call(&self, x: f64) -> f64 {
        (self.y)(x)
    }

    /// Returns derivative of activation function at the pre-activation x
    pub fn derivative(&self, x: f64) -> f64 {
        (self.dydx)(x)
    }
}

impl Default for Activation {
    fn default() -> Self {
        Self::SIGMOID
    }
}
