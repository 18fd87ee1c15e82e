//! Mogrifier LSTM Cell Implementation
//!
//! Reference: Melis et al., "Mogrifier LSTM", ICLR 2020
//!
//! Before the usual LSTM update the input `x` and the previous hidden state `h`
//! take turns rescaling each other through `2 * sigmoid(affine(other))` gates.

use crate::activation::MogrifyGate;
use crate::error::{rejected, MogrifierError};
use burn::config::Config;
use burn::module::{Ignored, Module};
use burn::nn::{Initializer, Linear, LinearConfig};
use burn::tensor::activation;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Which vector a mogrify transform reads, and which one its gate rescales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TransformDirection {
    /// Reads `h`, gates `x`: hidden_size -> input_size
    HiddenToInput,
    /// Reads `x`, gates `h`: input_size -> hidden_size
    InputToHidden,
}

impl TransformDirection {
    /// Direction of the transform at `step`. Even steps gate `x`, odd steps gate `h`.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            TransformDirection::HiddenToInput
        } else {
            TransformDirection::InputToHidden
        }
    }

    /// `(d_input, d_output)` of the affine map for this direction
    pub fn dims(self, input_size: usize, hidden_size: usize) -> (usize, usize) {
        match self {
            TransformDirection::HiddenToInput => (hidden_size, input_size),
            TransformDirection::InputToHidden => (input_size, hidden_size),
        }
    }
}

/// One affine map of the mogrification chain, tagged with its direction.
#[derive(Module, Debug)]
pub struct MogrifyTransform<B: Backend> {
    linear: Linear<B>,
    direction: Ignored<TransformDirection>,
}

impl<B: Backend> MogrifyTransform<B> {
    /// Get the direction of this transform
    pub fn direction(&self) -> TransformDirection {
        self.direction.0
    }

    /// Gate in (0, 2) computed from the vector this transform reads
    pub fn gate(&self, source: Tensor<B, 2>) -> Tensor<B, 2> {
        self.linear.forward(source).mogrify_gate()
    }
}

/// Configuration for [`MogrifierCell`]
#[derive(Config, Debug)]
pub struct MogrifierCellConfig {
    /// Size of the input features
    pub input_size: usize,
    /// Size of the hidden and cell state
    pub hidden_size: usize,
    /// Number of alternating mogrification rounds (0 disables mogrification)
    pub mogrify_steps: usize,
    /// Parameter initializer. `None` draws every weight and bias from
    /// `Uniform(-1/sqrt(hidden_size), 1/sqrt(hidden_size))`.
    pub initializer: Option<Initializer>,
}

impl MogrifierCellConfig {
    /// Build a config from signed sizes, rejecting non-positive dimensions
    /// and negative step counts.
    pub fn from_signed(
        input_size: i64,
        hidden_size: i64,
        mogrify_steps: i64,
    ) -> crate::Result<Self> {
        let input_size = positive_dimension("input_size", input_size)?;
        let hidden_size = positive_dimension("hidden_size", hidden_size)?;
        let mogrify_steps = usize::try_from(mogrify_steps)
            .map_err(|_| MogrifierError::InvalidStepCount(mogrify_steps))?;

        Ok(Self::new(input_size, hidden_size, mogrify_steps))
    }

    /// Check that both dimensions are non-zero
    pub fn validate(&self) -> crate::Result<()> {
        if self.input_size == 0 {
            return Err(MogrifierError::InvalidDimension {
                name: "input_size",
                value: 0,
            });
        }
        if self.hidden_size == 0 {
            return Err(MogrifierError::InvalidDimension {
                name: "hidden_size",
                value: 0,
            });
        }
        Ok(())
    }

    /// Half-width of the default uniform initialization range
    pub fn init_bound(&self) -> f64 {
        1.0 / (self.hidden_size as f64).sqrt()
    }

    fn resolved_initializer(&self) -> Initializer {
        match &self.initializer {
            Some(initializer) => initializer.clone(),
            None => uniform_initializer(self.init_bound()),
        }
    }

    /// Initialize a new [`MogrifierCell`]
    pub fn init<B: Backend>(&self, device: &B::Device) -> crate::Result<MogrifierCell<B>> {
        self.validate()?;

        let initializer = self.resolved_initializer();
        let gate_size = 4 * self.hidden_size;

        let x2h = init_linear(self.input_size, gate_size, &initializer, device);
        let h2h = init_linear(self.hidden_size, gate_size, &initializer, device);

        let transforms = (0..self.mogrify_steps)
            .map(|step| {
                let direction = TransformDirection::for_step(step);
                let (d_input, d_output) = direction.dims(self.input_size, self.hidden_size);
                MogrifyTransform {
                    linear: init_linear(d_input, d_output, &initializer, device),
                    direction: Ignored(direction),
                }
            })
            .collect();

        tracing::debug!(
            input_size = self.input_size,
            hidden_size = self.hidden_size,
            mogrify_steps = self.mogrify_steps,
            default_init = self.initializer.is_none(),
            "initialized mogrifier cell"
        );

        Ok(MogrifierCell {
            input_size: self.input_size,
            hidden_size: self.hidden_size,
            x2h,
            h2h,
            transforms,
        })
    }
}

fn positive_dimension(name: &'static str, value: i64) -> crate::Result<usize> {
    if value <= 0 {
        return Err(MogrifierError::InvalidDimension { name, value });
    }
    Ok(value as usize)
}

fn uniform_initializer(bound: f64) -> Initializer {
    Initializer::Uniform {
        min: -bound,
        max: bound,
    }
}

/// Affine map whose weight and bias are both drawn from `initializer`
fn init_linear<B: Backend>(
    d_input: usize,
    d_output: usize,
    initializer: &Initializer,
    device: &B::Device,
) -> Linear<B> {
    LinearConfig::new(d_input, d_output)
        .with_bias(true)
        .with_initializer(initializer.clone())
        .init(device)
}

/// Activated LSTM gates of a single step, each `[batch, hidden_size]`
#[derive(Debug, Clone)]
pub struct CellGates<B: Backend> {
    /// sigmoid, in (0, 1)
    pub input: Tensor<B, 2>,
    /// sigmoid, in (0, 1)
    pub forget: Tensor<B, 2>,
    /// tanh, in (-1, 1)
    pub candidate: Tensor<B, 2>,
    /// sigmoid, in (0, 1)
    pub output: Tensor<B, 2>,
}

/// Mogrifier LSTM cell
///
/// Implements, for `i` in `0..mogrify_steps`:
/// - i even: x = 2σ(Q_i h) ⊙ x
/// - i odd:  h = 2σ(R_i x) ⊙ h
///
/// followed by the LSTM update with gate order (input, forget, new memory, output):
/// - c' = f ⊙ c + i ⊙ g
/// - h' = o ⊙ tanh(c')
///
/// The cell holds no recurrent state; `(h, c)` is threaded by the caller.
#[derive(Module, Debug)]
pub struct MogrifierCell<B: Backend> {
    #[module(skip)]
    input_size: usize,
    #[module(skip)]
    hidden_size: usize,
    x2h: Linear<B>, // input -> 4 * hidden
    h2h: Linear<B>, // hidden -> 4 * hidden
    transforms: Vec<MogrifyTransform<B>>,
}

impl<B: Backend> MogrifierCell<B> {
    /// Create a new Mogrifier cell with the default uniform initialization
    ///
    /// # Errors
    /// `InvalidDimension` if `input_size` or `hidden_size` is zero.
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        mogrify_steps: usize,
        device: &B::Device,
    ) -> crate::Result<Self> {
        MogrifierCellConfig::new(input_size, hidden_size, mogrify_steps).init(device)
    }

    /// Get the input size
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Get the hidden size
    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Get the number of mogrification rounds
    pub fn mogrify_steps(&self) -> usize {
        self.transforms.len()
    }

    /// Half-width of the default uniform initialization range, `1/sqrt(hidden_size)`
    pub fn init_bound(&self) -> f64 {
        1.0 / (self.hidden_size as f64).sqrt()
    }

    /// Directions of the mogrify transforms, in application order
    pub fn transform_directions(&self) -> Vec<TransformDirection> {
        self.transforms.iter().map(|t| t.direction()).collect()
    }

    /// Redraw every weight and bias from `Uniform(-1/sqrt(hidden_size), 1/sqrt(hidden_size))`
    pub fn reset_parameters(mut self) -> Self {
        let device = self.x2h.weight.device();
        let initializer = uniform_initializer(self.init_bound());
        let gate_size = 4 * self.hidden_size;

        self.x2h = init_linear(self.input_size, gate_size, &initializer, &device);
        self.h2h = init_linear(self.hidden_size, gate_size, &initializer, &device);
        for transform in self.transforms.iter_mut() {
            let (d_input, d_output) = transform
                .direction()
                .dims(self.input_size, self.hidden_size);
            transform.linear = init_linear(d_input, d_output, &initializer, &device);
        }

        tracing::debug!(bound = self.init_bound(), "reset mogrifier cell parameters");
        self
    }

    /// Zero-filled `(hidden, cell)` state for a batch
    pub fn zero_state(
        &self,
        batch_size: usize,
        device: &B::Device,
    ) -> (Tensor<B, 2>, Tensor<B, 2>) {
        (
            Tensor::zeros([batch_size, self.hidden_size], device),
            Tensor::zeros([batch_size, self.hidden_size], device),
        )
    }

    /// Mutually modulate `x` and `h`
    ///
    /// # Arguments
    /// * `input` - `[batch, input_size]`
    /// * `hidden` - `[batch, hidden_size]`
    ///
    /// # Returns
    /// The modulated `(input, hidden)` pair, shapes unchanged
    pub fn mogrify(
        &self,
        input: Tensor<B, 2>,
        hidden: Tensor<B, 2>,
    ) -> crate::Result<(Tensor<B, 2>, Tensor<B, 2>)> {
        let batch_size = self.check_input(&input)?;
        self.check_state("hidden", &hidden, batch_size)?;
        Ok(self.mogrify_unchecked(input, hidden))
    }

    fn mogrify_unchecked(
        &self,
        mut input: Tensor<B, 2>,
        mut hidden: Tensor<B, 2>,
    ) -> (Tensor<B, 2>, Tensor<B, 2>) {
        for transform in &self.transforms {
            match transform.direction() {
                TransformDirection::HiddenToInput => {
                    input = transform.gate(hidden.clone()) * input;
                }
                TransformDirection::InputToHidden => {
                    hidden = transform.gate(input.clone()) * hidden;
                }
            }
        }
        (input, hidden)
    }

    /// Activated gates for one step, after mogrification
    pub fn gates(&self, input: Tensor<B, 2>, hidden: Tensor<B, 2>) -> crate::Result<CellGates<B>> {
        let batch_size = self.check_input(&input)?;
        self.check_state("hidden", &hidden, batch_size)?;
        let (input, hidden) = self.mogrify_unchecked(input, hidden);
        Ok(self.activated_gates(input, hidden))
    }

    fn activated_gates(&self, input: Tensor<B, 2>, hidden: Tensor<B, 2>) -> CellGates<B> {
        let z = self.x2h.forward(input) + self.h2h.forward(hidden);

        // Split into 4 gates: input, forget, new memory, output
        let chunks = z.chunk(4, 1);

        CellGates {
            input: activation::sigmoid(chunks[0].clone()),
            forget: activation::sigmoid(chunks[1].clone()),
            candidate: chunks[2].clone().tanh(),
            output: activation::sigmoid(chunks[3].clone()),
        }
    }

    /// Perform one recurrence step
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape `[batch_size, input_size]`
    /// * `states` - Tuple of (hidden_state, cell_state), each of shape `[batch_size, hidden_size]`
    ///
    /// # Returns
    /// Tuple of (new_hidden_state, new_cell_state)
    ///
    /// # Errors
    /// `ShapeMismatch` if a feature axis disagrees with the configured sizes or
    /// the three batch dimensions differ.
    pub fn forward(
        &self,
        input: Tensor<B, 2>,
        states: (Tensor<B, 2>, Tensor<B, 2>),
    ) -> crate::Result<(Tensor<B, 2>, Tensor<B, 2>)> {
        let (hidden_state, cell_state) = states;

        let batch_size = self.check_input(&input)?;
        self.check_state("hidden", &hidden_state, batch_size)?;
        self.check_state("cell", &cell_state, batch_size)?;

        tracing::trace!(
            batch_size,
            mogrify_steps = self.mogrify_steps(),
            "mogrifier cell step"
        );

        let (input, hidden_state) = self.mogrify_unchecked(input, hidden_state);
        let gates = self.activated_gates(input, hidden_state);

        let new_cell = gates.forget * cell_state + gates.input * gates.candidate;
        let new_hidden = gates.output * new_cell.clone().tanh();

        Ok((new_hidden, new_cell))
    }

    /// Returns the batch size of a well-formed input. Empty batches are rejected.
    fn check_input(&self, input: &Tensor<B, 2>) -> crate::Result<usize> {
        let [batch_size, features] = input.dims();
        if batch_size == 0 || features != self.input_size {
            return Err(rejected(MogrifierError::shape(
                "input",
                &[batch_size.max(1), self.input_size],
                &[batch_size, features],
            )));
        }
        Ok(batch_size)
    }

    fn check_state(
        &self,
        name: &'static str,
        state: &Tensor<B, 2>,
        batch_size: usize,
    ) -> crate::Result<()> {
        let dims = state.dims();
        let expected = [batch_size, self.hidden_size];
        if dims != expected {
            return Err(rejected(MogrifierError::shape(name, &expected, &dims)));
        }
        Ok(())
    }
}
