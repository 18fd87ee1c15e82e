//! # RNN Cell Implementations
//!
//! Single-timestep cells. They are wrapped by the layer in [`crate::rnn`] for
//! sequence processing, or driven directly by a custom recurrence loop.
//!
//! ## Mogrifier Cell
//!
//! Each step first runs `mogrify_steps` rounds of mutual gating:
//! ```text
//! x = 2σ(Q_i h) ⊙ x     (i even)
//! h = 2σ(R_i x) ⊙ h     (i odd)
//! ```
//! and then the LSTM update:
//! ```text
//! [i, f, g, o] = x2h(x) + h2h(h)
//! c' = σ(f) ⊙ c + σ(i) ⊙ tanh(g)
//! h' = σ(o) ⊙ tanh(c')
//! ```
//!
//! ## Tensor Shapes
//!
//! | Tensor | Shape | Description |
//! |--------|-------|-------------|
//! | `input` | `[batch, input_size]` | Input features |
//! | `hidden_state` | `[batch, hidden_size]` | Previous hidden state |
//! | `cell_state` | `[batch, hidden_size]` | Previous memory |
//!
//! ## Example: Using MogrifierCell Directly
//!
//! ```rust
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//! use mogrifier::cells::MogrifierCell;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//! let cell = MogrifierCell::<Backend>::new(16, 32, 5, &device).unwrap();
//!
//! let input = Tensor::<Backend, 2>::zeros([4, 16], &device);
//! let state = cell.zero_state(4, &device);
//!
//! let (hidden, memory) = cell.forward(input, state).unwrap();
//! assert_eq!(hidden.dims(), [4, 32]);
//! assert_eq!(memory.dims(), [4, 32]);
//! ```

pub mod mogrifier_cell;

pub use mogrifier_cell::{
    CellGates, MogrifierCell, MogrifierCellConfig, MogrifyTransform, TransformDirection,
};
