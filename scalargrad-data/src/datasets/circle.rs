use super::sample::Sample;
use super::traits::Dataset;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalargrad_core::{ScalarGradError, TrainConfig};

/// Points drawn uniformly from `[-1, 1]²`, labelled `1.0` when they fall
/// within `radius` of the origin and `0.0` otherwise.
#[derive(Debug, Clone)]
pub struct CircleDataset {
    radius: f64,
    samples: Vec<Sample>,
}

impl CircleDataset {
    /// Draws `len` labelled points from `rng`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `radius` is not positive and finite.
    pub fn new<R: Rng + ?Sized>(len: usize, radius: f64, rng: &mut R) -> Result<Self, ScalarGradError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "circle radius must be positive and finite, got {}",
                radius
            )));
        }
        let samples = (0..len)
            .map(|_| {
                let x = rng.gen_range(-1.0..=1.0);
                let y = rng.gen_range(-1.0..=1.0);
                Sample::new(vec![x, y], vec![Self::label(x, y, radius)])
            })
            .collect();
        log::debug!("generated {} circle samples with radius {}", len, radius);
        Ok(CircleDataset { radius, samples })
    }

    /// Builds the dataset described by `config`, seeded with `config.seed`.
    pub fn from_config(config: &TrainConfig) -> Result<Self, ScalarGradError> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        Self::new(config.samples, config.radius, &mut rng)
    }

    /// `1.0` inside or on the circle, `0.0` outside.
    pub fn label(x: f64, y: f64, radius: f64) -> f64 {
        if (x * x + y * y).sqrt() <= radius {
            1.0
        } else {
            0.0
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

impl Dataset for CircleDataset {
    type Item = Sample;

    fn get(&self, index: usize) -> Result<Sample, ScalarGradError> {
        self.samples
            .get(index)
            .cloned()
            .ok_or(ScalarGradError::IndexOutOfBounds {
                index,
                len: self.samples.len(),
            })
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
#[path = "circle_test.rs"]
mod tests;
