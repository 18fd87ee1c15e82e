//! # Mogrifier LSTM (Rust)
//!
//! A Mogrifier LSTM cell and sequence layer built on the Burn framework.
//!
//! ## Features
//!
//! - **MogrifierCell**: single-timestep cell with alternating input/hidden gating
//! - **MogrifierLstm**: sequence layer that threads `(hidden, cell)` over time
//! - **Config**: Burn `Config` types, JSON-serializable
//! - **Errors**: shape and dimension checks reported as [`MogrifierError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use burn::backend::NdArray;
//! use burn::tensor::Tensor;
//! use mogrifier::prelude::*;
//!
//! type Backend = NdArray<f32>;
//! let device = Default::default();
//!
//! let cell = MogrifierCellConfig::new(8, 16, 5)
//!     .init::<Backend>(&device)
//!     .unwrap();
//!
//! let x = Tensor::<Backend, 2>::zeros([2, 8], &device);
//! let (h, c) = cell.forward(x, cell.zero_state(2, &device)).unwrap();
//!
//! assert_eq!(h.dims(), [2, 16]);
//! assert_eq!(c.dims(), [2, 16]);
//! ```

pub mod activation;
pub mod cells;
pub mod error;
pub mod rnn;

pub use error::{MogrifierError, Result};

pub mod prelude {
    pub use crate::activation::{MogrifyGate, ScaledSigmoid};
    pub use crate::cells::{MogrifierCell, MogrifierCellConfig, TransformDirection};
    pub use crate::error::{MogrifierError, Result};
    pub use crate::rnn::{MogrifierLstm, MogrifierLstmConfig};
}
