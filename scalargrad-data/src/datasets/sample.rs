/// One supervised example: network inputs and the expected outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub inputs: Vec<f64>,
    pub targets: Vec<f64>,
}

impl Sample {
    pub fn new(inputs: Vec<f64>, targets: Vec<f64>) -> Self {
        Sample { inputs, targets }
    }

    /// Borrowed `(inputs, targets)` pair, the shape `NeuralNet::train_batch`
    /// consumes.
    pub fn as_pair(&self) -> (&[f64], &[f64]) {
        (&self.inputs, &self.targets)
    }
}
