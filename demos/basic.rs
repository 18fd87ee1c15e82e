//! Basic usage example of the Mogrifier LSTM
//!
//! Run with `RUST_LOG=mogrifier=debug` to see the construction events.

use burn::backend::NdArray;
use burn::tensor::{Distribution, Tensor};
use mogrifier::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Mogrifier LSTM Basic Example ===\n");

    // Use the NdArray backend (CPU)
    type Backend = NdArray<f32>;
    let device = Default::default();

    // Example 1: A single cell driven by a hand-written loop
    println!("Example 1: Cell-level recurrence");
    let cell = MogrifierCellConfig::new(20, 50, 5).init::<Backend>(&device)?;

    println!("  Input size:    {}", cell.input_size());
    println!("  Hidden size:   {}", cell.hidden_size());
    println!("  Mogrify steps: {}", cell.mogrify_steps());
    println!("  Directions:    {:?}", cell.transform_directions());

    let mut state = cell.zero_state(4, &device);
    for _ in 0..10 {
        let x =
            Tensor::<Backend, 2>::random([4, 20], Distribution::Uniform(-1.0, 1.0), &device);
        state = cell.forward(x, state)?;
    }
    println!("  Final hidden shape: {:?}", state.0.dims());
    println!();

    // Example 2: Sequence layer, batch-first
    println!("Example 2: Sequence layer");
    let rnn =
        MogrifierLstmConfig::new(MogrifierCellConfig::new(20, 32, 5)).init::<Backend>(&device)?;

    // Input shape: [batch=4, seq=10, features=20]
    let input =
        Tensor::<Backend, 3>::random([4, 10, 20], Distribution::Uniform(-1.0, 1.0), &device);
    let (output, (hidden, memory)) = rnn.forward(input, None)?;

    println!("  Input shape:  [4, 10, 20]");
    println!("  Output shape: {:?}", output.dims());
    println!("  State shapes: {:?} / {:?}", hidden.dims(), memory.dims());
    println!();

    // Example 3: Shape errors are reported, not panicked on
    println!("Example 3: Shape checking");
    let wrong = Tensor::<Backend, 2>::zeros([4, 19], &device);
    match cell.forward(wrong, cell.zero_state(4, &device)) {
        Ok(_) => println!("  unexpected success"),
        Err(err) => println!("  rejected: {err}"),
    }
    println!();

    println!("=== Examples completed successfully! ===");
    Ok(())
}
