use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Activation, NeuralNet, Neuron};
use scalargrad_core::optim::Sgd;
use scalargrad_core::{ScalarGradError, TrainConfig};
use scalargrad_data::{CircleDataset, DataLoader, Dataset, RandomSampler, Sample, SequentialSampler};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ReLU hidden layer, linear output so the output unit cannot die.
fn circle_net(rng: &mut StdRng) -> Result<NeuralNet, ScalarGradError> {
    let hidden = (0..8)
        .map(|_| Neuron::new(2, Activation::Relu, &mut *rng))
        .collect::<Result<Vec<_>, _>>()?;
    let output = vec![Neuron::new(8, Activation::Identity, &mut *rng)?];
    NeuralNet::from_layers(vec![hidden, output])
}

fn epoch_loss<S: scalargrad_data::Sampler>(
    net: &mut NeuralNet,
    loader: &mut DataLoader<CircleDataset, S>,
    optimizer: &mut Sgd,
) -> Result<f64, ScalarGradError> {
    let mut total = 0.0;
    let mut seen = 0;
    for batch in loader.iter() {
        let batch = batch?;
        let pairs: Vec<(&[f64], &[f64])> = batch.iter().map(Sample::as_pair).collect();
        total += net.train_batch(&pairs, &mut *optimizer)? * batch.len() as f64;
        seen += batch.len();
    }
    Ok(total / seen as f64)
}

#[test]
fn test_training_on_circle_reduces_loss() -> Result<(), ScalarGradError> {
    init_logging();
    let config = TrainConfig {
        samples: 200,
        epochs: 15,
        batch_size: 4,
        learning_rate: 0.05,
        ..Default::default()
    };
    config.validate()?;

    let dataset = CircleDataset::from_config(&config)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut net = circle_net(&mut rng)?;
    let mut optimizer = Sgd::new(config.learning_rate, config.momentum)?;
    let sampler = RandomSampler::new(false, None, Some(config.seed));
    let mut loader = DataLoader::new(dataset, config.batch_size, sampler, false)?;

    let first = epoch_loss(&mut net, &mut loader, &mut optimizer)?;
    let mut last = first;
    for _ in 1..config.epochs {
        last = epoch_loss(&mut net, &mut loader, &mut optimizer)?;
    }
    assert!(last < first, "loss did not decrease: {} -> {}", first, last);
    Ok(())
}

#[test]
fn test_momentum_training_runs_over_sequential_batches() -> Result<(), ScalarGradError> {
    init_logging();
    let config = TrainConfig {
        samples: 64,
        batch_size: 8,
        momentum: 0.9,
        ..Default::default()
    };
    let dataset = CircleDataset::from_config(&config)?;
    let len = dataset.len();
    let mut rng = StdRng::seed_from_u64(1);
    let mut net = circle_net(&mut rng)?;
    let mut optimizer = Sgd::new(config.learning_rate, config.momentum)?;
    let mut loader = DataLoader::new(dataset, config.batch_size, SequentialSampler::new(), true)?;
    assert_eq!(loader.num_batches(), len / config.batch_size);

    for _ in 0..3 {
        let loss = epoch_loss(&mut net, &mut loader, &mut optimizer)?;
        assert!(loss.is_finite());
    }
    Ok(())
}
