use super::*;
use crate::optim::Sgd;
use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fixed_net() -> NeuralNet {
    NeuralNet::from_layers(vec![
        vec![
            Neuron::from_weights(vec![0.5, -1.0], 0.0, Activation::Relu),
            Neuron::from_weights(vec![1.0, 1.0], 0.0, Activation::Relu),
        ],
        vec![Neuron::from_weights(vec![1.0, -1.0], 0.0, Activation::Relu)],
    ])
    .unwrap()
}

#[test]
fn test_flow_fixed_weights() {
    let net = fixed_net();
    let graph = Graph::new();
    let bound = net.bind(&graph);
    let xs = vec![graph.constant(1.0), graph.constant(2.0)];
    let outputs = bound.flow(&xs).unwrap();
    assert_eq!(outputs.len(), 1);
    assert_abs_diff_eq!(outputs[0].value(), 0.0, epsilon = 1e-6);
}

#[test]
fn test_predict_fixed_weights() {
    let net = fixed_net();
    // hidden = [0.5, 4.0], out = relu(0.5 - 4.0)
    assert_eq!(net.predict(&[3.0, 1.0]).unwrap(), vec![0.0]);
    // hidden = [5.0, relu(-2.0)], out = 5.0
    assert_eq!(net.predict(&[2.0, -4.0]).unwrap(), vec![5.0]);
}

#[test]
fn test_layer_sizes() {
    let mut rng = StdRng::seed_from_u64(3);
    let net = NeuralNet::new(&[3, 4, 2], &mut rng).unwrap();
    assert_eq!(net.layer_sizes(), vec![3, 4, 2]);
    assert_eq!(net.input_size(), 3);
    assert_eq!(net.output_size(), 2);
    assert_eq!(net.num_parameters(), 4 * 4 + 2 * 5);
    assert_eq!(net.layers().len(), 2);
}

#[test]
fn test_new_rejects_bad_sizes() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        NeuralNet::new(&[3], &mut rng),
        Err(ScalarGradError::InvalidLayerSizes { .. })
    ));
    assert!(matches!(
        NeuralNet::new(&[3, 0, 1], &mut rng),
        Err(ScalarGradError::InvalidLayerSizes { .. })
    ));
}

#[test]
fn test_from_layers_rejects_width_mismatch() {
    let result = NeuralNet::from_layers(vec![
        vec![Neuron::from_weights(vec![1.0, 1.0], 0.0, Activation::Relu)],
        vec![Neuron::from_weights(vec![1.0, 1.0], 0.0, Activation::Relu)],
    ]);
    assert!(matches!(result, Err(ScalarGradError::InvalidLayerSizes { .. })));
    assert!(NeuralNet::from_layers(Vec::new()).is_err());
}

#[test]
fn test_predict_rejects_wrong_input_count() {
    let net = fixed_net();
    assert_eq!(
        net.predict(&[1.0]),
        Err(ScalarGradError::InputSizeMismatch {
            expected: 2,
            actual: 1
        })
    );
}

#[test]
fn test_train_single_step_updates_and_clears() {
    // One identity neuron: y = w*x + b, loss = (y - t)^2
    let mut net = NeuralNet::from_layers(vec![vec![Neuron::from_weights(
        vec![1.0],
        0.0,
        Activation::Identity,
    )]])
    .unwrap();
    let mut sgd = Sgd::new(0.1, 0.0).unwrap();

    // y = 2, t = 1: loss 1, dL/dw = 2(y-t)x = 4, dL/db = 2
    let loss = net.train(&[2.0], &[1.0], &mut sgd).unwrap();
    assert_abs_diff_eq!(loss, 1.0, epsilon = 1e-12);

    let params = net.parameters();
    assert_abs_diff_eq!(params[0].value(), 0.6, epsilon = 1e-12);
    assert_abs_diff_eq!(params[1].value(), -0.2, epsilon = 1e-12);
    assert!(params.iter().all(|p| p.grad() == 0.0));
}

#[test]
fn test_train_batch_averages_loss() {
    let mut net = NeuralNet::from_layers(vec![vec![Neuron::from_weights(
        vec![1.0],
        0.0,
        Activation::Identity,
    )]])
    .unwrap();
    let mut sgd = Sgd::new(0.1, 0.0).unwrap();
    let batch = vec![(vec![1.0], vec![0.0]), (vec![3.0], vec![0.0])];
    // losses 1 and 9
    let loss = net.train_batch(&batch, &mut sgd).unwrap();
    assert_abs_diff_eq!(loss, 5.0, epsilon = 1e-12);
}

#[test]
fn test_train_batch_rejects_empty_batch() {
    let mut net = fixed_net();
    let mut sgd = Sgd::new(0.1, 0.0).unwrap();
    let batch: Vec<(Vec<f64>, Vec<f64>)> = Vec::new();
    assert_eq!(
        net.train_batch(&batch, &mut sgd),
        Err(ScalarGradError::EmptyBatch)
    );
}

#[test]
fn test_train_rejects_wrong_target_count() {
    let mut net = fixed_net();
    let mut sgd = Sgd::new(0.1, 0.0).unwrap();
    assert_eq!(
        net.train(&[1.0, 2.0], &[1.0, 0.0], &mut sgd),
        Err(ScalarGradError::TargetSizeMismatch {
            expected: 1,
            actual: 2
        })
    );
}

#[test]
fn test_training_reduces_loss() {
    let mut rng = StdRng::seed_from_u64(11);
    let hidden = (0..6)
        .map(|_| Neuron::new(2, Activation::Relu, &mut rng))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let output = vec![Neuron::new(6, Activation::Identity, &mut rng).unwrap()];
    let mut net = NeuralNet::from_layers(vec![hidden, output]).unwrap();
    let mut sgd = Sgd::new(0.02, 0.0).unwrap();
    let data = [
        ([0.1, 0.2], [0.5]),
        ([0.4, 0.1], [0.7]),
        ([0.3, 0.9], [1.3]),
        ([0.8, 0.5], [1.5]),
    ];
    let eval = |net: &NeuralNet| -> f64 {
        data.iter()
            .map(|(x, t)| (net.predict(x).unwrap()[0] - t[0]).powi(2))
            .sum()
    };

    let before = eval(&net);
    for _ in 0..200 {
        for (x, t) in &data {
            net.train(x, t, &mut sgd).unwrap();
        }
    }
    let after = eval(&net);
    assert!(after < before, "loss did not decrease: {} -> {}", before, after);
}
