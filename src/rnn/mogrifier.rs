//! Mogrifier LSTM RNN Layer
//!
//! Full RNN layer that handles sequence processing, batching, and state management
//! for Mogrifier cells.

use crate::cells::{MogrifierCell, MogrifierCellConfig};
use crate::error::{rejected, MogrifierError};
use burn::config::Config;
use burn::module::Module;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

/// Configuration for [`MogrifierLstm`]
#[derive(Config, Debug)]
pub struct MogrifierLstmConfig {
    /// Configuration of the underlying cell
    pub cell: MogrifierCellConfig,
    /// Input layout `[batch, seq, features]` when true, `[seq, batch, features]` otherwise
    #[config(default = true)]
    pub batch_first: bool,
    /// Return every timestep, or only the last one
    #[config(default = true)]
    pub return_sequences: bool,
}

impl MogrifierLstmConfig {
    /// Initialize a new [`MogrifierLstm`]
    pub fn init<B: Backend>(&self, device: &B::Device) -> crate::Result<MogrifierLstm<B>> {
        let cell = self.cell.init(device)?;

        tracing::debug!(
            batch_first = self.batch_first,
            return_sequences = self.return_sequences,
            "initialized mogrifier lstm layer"
        );

        Ok(MogrifierLstm {
            cell,
            batch_first: self.batch_first,
            return_sequences: self.return_sequences,
        })
    }
}

/// Mogrifier LSTM RNN Layer
///
/// Runs a [`MogrifierCell`] over a sequence, threading the `(hidden, cell)`
/// pair from one timestep to the next.
///
/// # Type Parameters
/// * `B` - The backend type
#[derive(Module, Debug)]
pub struct MogrifierLstm<B: Backend> {
    /// The cell applied at every timestep
    cell: MogrifierCell<B>,
    /// Whether input is batch-first
    #[module(skip)]
    batch_first: bool,
    /// Whether to return full sequence or just last timestep
    #[module(skip)]
    return_sequences: bool,
}

impl<B: Backend> MogrifierLstm<B> {
    /// Create a new layer with the default uniform initialization
    ///
    /// # Arguments
    /// * `input_size` - Number of input features
    /// * `hidden_size` - Number of hidden units
    /// * `mogrify_steps` - Number of mogrification rounds per timestep
    /// * `device` - Device to create the module on
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        mogrify_steps: usize,
        device: &B::Device,
    ) -> crate::Result<Self> {
        MogrifierLstmConfig::new(MogrifierCellConfig::new(
            input_size,
            hidden_size,
            mogrify_steps,
        ))
        .init(device)
    }

    /// Set whether input is batch-first (default: true)
    pub fn with_batch_first(mut self, batch_first: bool) -> Self {
        self.batch_first = batch_first;
        self
    }

    /// Set whether to return full sequences (default: true)
    pub fn with_return_sequences(mut self, return_sequences: bool) -> Self {
        self.return_sequences = return_sequences;
        self
    }

    /// The cell applied at every timestep
    pub fn cell(&self) -> &MogrifierCell<B> {
        &self.cell
    }

    /// Get the input size
    pub fn input_size(&self) -> usize {
        self.cell.input_size()
    }

    /// Get the hidden size
    pub fn hidden_size(&self) -> usize {
        self.cell.hidden_size()
    }

    /// Forward pass through the layer
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape:
    ///   - 3D: [batch, seq, features] if batch_first=true
    ///   - 3D: [seq, batch, features] if batch_first=false
    /// * `state` - Optional initial `(hidden, cell)` pair, each `[batch, hidden_size]`.
    ///   Zeros when `None`.
    ///
    /// # Returns
    /// Tuple of (output, final_state) where:
    /// - output: [batch, seq, hidden_size], or [batch, 1, hidden_size] when
    ///   return_sequences=false
    /// - final_state: `(hidden, cell)`, each [batch, hidden_size]
    pub fn forward(
        &self,
        input: Tensor<B, 3>,
        state: Option<(Tensor<B, 2>, Tensor<B, 2>)>,
    ) -> crate::Result<(Tensor<B, 3>, (Tensor<B, 2>, Tensor<B, 2>))> {
        let device = input.device();
        let dims = input.dims();

        let (batch_size, seq_len, features) = if self.batch_first {
            (dims[0], dims[1], dims[2])
        } else {
            (dims[1], dims[0], dims[2])
        };

        if batch_size == 0 || seq_len == 0 || features != self.input_size() {
            let (batch_size, seq_len) = (batch_size.max(1), seq_len.max(1));
            let expected = if self.batch_first {
                [batch_size, seq_len, self.input_size()]
            } else {
                [seq_len, batch_size, self.input_size()]
            };
            return Err(rejected(MogrifierError::shape("input", &expected, &dims)));
        }

        let (mut hidden, mut cell) =
            state.unwrap_or_else(|| self.cell.zero_state(batch_size, &device));

        let mut outputs: Vec<Tensor<B, 2>> = Vec::with_capacity(seq_len);

        for t in 0..seq_len {
            let step_input = if self.batch_first {
                // input[batch, t, features] -> [batch, features]
                input.clone().narrow(1, t, 1).squeeze(1)
            } else {
                // input[t, batch, features] -> [batch, features]
                input.clone().narrow(0, t, 1).squeeze(0)
            };

            (hidden, cell) = self.cell.forward(step_input, (hidden, cell))?;

            if self.return_sequences || t == seq_len - 1 {
                outputs.push(hidden.clone());
            }
        }

        tracing::trace!(batch_size, seq_len, "mogrifier lstm sequence");

        let output = Tensor::stack(outputs, 1); // [batch, seq, hidden_size]
        Ok((output, (hidden, cell)))
    }
}
