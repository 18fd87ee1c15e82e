//! # RNN Layers for Sequence Processing
//!
//! This module provides the layer that drives a [`MogrifierCell`](crate::cells::MogrifierCell)
//! over a whole sequence, managing the `(hidden, cell)` pair between timesteps.
//!
//! ## Quick Start
//!
//! ```rust
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//! use mogrifier::rnn::MogrifierLstm;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! let rnn = MogrifierLstm::<Backend>::new(16, 32, 5, &device).unwrap();
//!
//! // Process sequence: [batch=4, seq_len=10, features=16]
//! let input = Tensor::<Backend, 3>::zeros([4, 10, 16], &device);
//! let (output, (hidden, cell)) = rnn.forward(input, None).unwrap();
//!
//! assert_eq!(output.dims(), [4, 10, 32]);
//! assert_eq!(hidden.dims(), [4, 32]);
//! assert_eq!(cell.dims(), [4, 32]);
//! ```
//!
//! ## Tensor Shapes
//!
//! | Format | Input shape | Default |
//! |--------|-------------|---------|
//! | Batch-first | `[batch, seq_len, features]` | ✓ Yes |
//! | Sequence-first | `[seq_len, batch, features]` | No |
//!
//! | Setting | Output shape |
//! |---------|--------------|
//! | `return_sequences=true` (default) | `[batch, seq_len, hidden_size]` |
//! | `return_sequences=false` | `[batch, 1, hidden_size]` |
//!
//! ### Stateful Processing (preserve state across batches)
//!
//! ```ignore
//! let (output1, state) = rnn.forward(batch1, None)?;
//! let (output2, state) = rnn.forward(batch2, Some(state))?;
//! ```

pub mod mogrifier;

pub use mogrifier::{MogrifierLstm, MogrifierLstmConfig};
