//! Tests for the mogrification gate activation

use approx::assert_abs_diff_eq;
use burn::backend::NdArray;
use burn::tensor::Tensor;
use mogrifier::activation::{MogrifyGate, ScaledSigmoid};

type Backend = NdArray<f32>;

#[test]
fn test_scaled_sigmoid_at_zero() {
    let device = Default::default();
    let x = Tensor::<Backend, 1>::zeros([5], &device);
    let y = ScaledSigmoid::forward(x);

    // 2 * sigmoid(0) = 1
    assert_abs_diff_eq!(y.sum().into_scalar(), 5.0, epsilon = 1e-6);
}

#[test]
fn test_scaled_sigmoid_saturation() {
    let device = Default::default();

    let high = Tensor::<Backend, 1>::full([1], 50.0f32, &device).mogrify_gate();
    let low = Tensor::<Backend, 1>::full([1], -50.0f32, &device).mogrify_gate();

    assert_abs_diff_eq!(high.into_scalar(), 2.0, epsilon = 1e-5);
    assert_abs_diff_eq!(low.into_scalar(), 0.0, epsilon = 1e-5);
}

#[test]
fn test_scaled_sigmoid_is_symmetric() {
    let device = Default::default();
    let x = Tensor::<Backend, 1>::from_floats([0.25f32, 1.5, 3.0], &device);

    let pos = ScaledSigmoid::forward(x.clone()).into_data().to_vec::<f32>().unwrap();
    let neg = ScaledSigmoid::forward(x.neg()).into_data().to_vec::<f32>().unwrap();

    // f(x) + f(-x) = 2
    for (a, b) in pos.iter().zip(neg.iter()) {
        assert_abs_diff_eq!(a + b, 2.0, epsilon = 1e-6);
    }
}

#[test]
fn test_scaled_sigmoid_3d_tensor() {
    let device = Default::default();
    let x = Tensor::<Backend, 3>::random(
        [2, 3, 4],
        burn::tensor::Distribution::Uniform(-4.0, 4.0),
        &device,
    );

    let y = x.mogrify_gate();
    assert_eq!(y.dims(), [2, 3, 4]);

    let values = y.into_data().to_vec::<f32>().unwrap();
    assert!(values.iter().all(|&v| v > 0.0 && v < 2.0));
}
