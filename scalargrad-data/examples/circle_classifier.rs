//! Trains a small network to tell whether a point of `[-1, 1]²` lies inside
//! a circle, then draws the learned decision boundary in ASCII.
//!
//! Run with `RUST_LOG=debug` for per-step details.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::NeuralNet;
use scalargrad_core::optim::Sgd;
use scalargrad_core::{ScalarGradError, TrainConfig};
use scalargrad_data::{CircleDataset, DataLoader, RandomSampler, Sample};

const GRID_STEPS: i32 = 20;

fn main() -> Result<(), ScalarGradError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TrainConfig::default();
    config.validate()?;
    log::info!("training with {:?}", config);

    let dataset = CircleDataset::from_config(&config)?;
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
    let mut net = NeuralNet::new(&config.layer_sizes, &mut rng)?;
    let mut optimizer = Sgd::new(config.learning_rate, config.momentum)?;
    let sampler = RandomSampler::new(false, None, Some(config.seed));
    let mut loader = DataLoader::new(dataset, config.batch_size, sampler, false)?;

    for epoch in 0..config.epochs {
        let mut total_loss = 0.0;
        let mut seen = 0usize;
        for batch in loader.iter() {
            let batch = batch?;
            let pairs: Vec<(&[f64], &[f64])> = batch.iter().map(Sample::as_pair).collect();
            total_loss += net.train_batch(&pairs, &mut optimizer)? * batch.len() as f64;
            seen += batch.len();
        }
        if config.log_every > 0 && epoch % config.log_every == 0 {
            log::info!("epoch {}, average loss: {:.4}", epoch, total_loss / seen as f64);
        }
    }

    println!("{}", render_boundary(&net)?);

    let inside = net.predict(&[0.1, 0.1])?[0];
    let outside = net.predict(&[0.9, 0.9])?[0];
    println!("{}", "-".repeat(30));
    println!("Point (0.1, 0.1) [Target 1.0]: {:.4}", inside);
    println!("Point (0.9, 0.9) [Target 0.0]: {:.4}", outside);
    println!("{}", "-".repeat(30));
    Ok(())
}

/// One character per grid point, top row `y = 1`: `.` confidently inside,
/// `#` confidently outside, blank otherwise.
fn render_boundary(net: &NeuralNet) -> Result<String, ScalarGradError> {
    let mut out = String::from("Legend: '.' = Inside Circle, '#' = Outside, ' ' = Unsure\n");
    for y in (-GRID_STEPS..=GRID_STEPS).rev() {
        for x in -GRID_STEPS..=GRID_STEPS {
            let point = [f64::from(x) / f64::from(GRID_STEPS), f64::from(y) / f64::from(GRID_STEPS)];
            let pred = net.predict(&point)?[0];
            let c = if pred > 0.8 {
                '.'
            } else if pred < 0.2 {
                '#'
            } else {
                ' '
            };
            out.push(c);
            out.push(' ');
        }
        out.push('\n');
    }
    Ok(out)
}
