//! Gate activations for mogrification
//!
//! Burn ships `sigmoid` and `tanh`; the mogrifier additionally needs a sigmoid
//! rescaled to the open interval (0, 2) so that a gate can amplify as well as
//! suppress the vector it modulates.

use burn::tensor::{activation, backend::Backend, Tensor};

/// Sigmoid scaled by two.
///
/// This activation function is defined as:
/// `f(x) = 2 * sigmoid(x)`
///
/// `f(0) = 1`, so a zero pre-activation leaves the modulated vector unchanged.
///
/// # Example
///
/// ```rust
/// use burn::backend::NdArray;
/// use burn::tensor::Tensor;
/// use mogrifier::activation::ScaledSigmoid;
///
/// type Backend = NdArray<f32>;
/// let device = Default::default();
///
/// let x = Tensor::<Backend, 1>::from_floats([0.0, 1.0, -1.0], &device);
/// let gate = ScaledSigmoid::forward(x);
/// ```
pub struct ScaledSigmoid;

impl ScaledSigmoid {
    /// Applies `2 * sigmoid(x)` element-wise.
    pub fn forward<B: Backend, const D: usize>(x: Tensor<B, D>) -> Tensor<B, D> {
        activation::sigmoid(x) * 2.0f32
    }
}

/// Tensor extension for the mogrification gate.
pub trait MogrifyGate {
    /// Applies `2 * sigmoid(self)`
    fn mogrify_gate(self) -> Self;
}

impl<B: Backend, const D: usize> MogrifyGate for Tensor<B, D> {
    fn mogrify_gate(self) -> Self {
        ScaledSigmoid::forward(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use burn::tensor::Tensor;

    type Backend = NdArray<f32>;

    #[test]
    fn test_scaled_sigmoid_zero_is_identity_gate() {
        let device = Default::default();
        let x = Tensor::<Backend, 1>::zeros([5], &device);
        let y = ScaledSigmoid::forward(x);

        let values = y.into_data().to_vec::<f32>().unwrap();
        for v in values {
            assert!((v - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_scaled_sigmoid_values() {
        let device = Default::default();

        for &val in &[-10.0f32, -2.0, -0.5, 0.5, 2.0, 10.0] {
            let x = Tensor::<Backend, 1>::full([1], val, &device);
            let result = ScaledSigmoid::forward(x).into_scalar();
            let expected = 2.0 / (1.0 + (-val).exp());

            assert!(
                (result - expected).abs() < 1e-5,
                "scaled sigmoid incorrect at x={}",
                val
            );
        }
    }

    #[test]
    fn test_scaled_sigmoid_open_range() {
        let device = Default::default();
        let x = Tensor::<Backend, 2>::random(
            [8, 16],
            burn::tensor::Distribution::Uniform(-6.0, 6.0),
            &device,
        );

        let values = x.mogrify_gate().into_data().to_vec::<f32>().unwrap();
        assert!(values.iter().all(|&v| v > 0.0 && v < 2.0));
    }

    #[test]
    fn test_mogrify_gate_trait_matches_forward() {
        let device = Default::default();
        let x = Tensor::<Backend, 1>::from_floats([0.3f32, -1.2, 4.0], &device);

        let via_trait = x.clone().mogrify_gate().into_data().to_vec::<f32>().unwrap();
        let direct = ScaledSigmoid::forward(x).into_data().to_vec::<f32>().unwrap();

        assert_eq!(via_trait, direct);
    }
}
