//! Batching over a [`Dataset`] in the order chosen by a [`Sampler`].
//!
//! ```
//! use scalargrad_data::{DataLoader, SequentialSampler, VecDataset};
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
//! let mut loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
//! let batches: Vec<Vec<i32>> = loader.iter().collect::<Result<_, _>>().unwrap();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use scalargrad_core::ScalarGradError;

/// Groups dataset items into batches of `batch_size`.
///
/// Every call to [`DataLoader::iter`] starts a new epoch and asks the
/// sampler for a fresh index order.
#[derive(Debug)]
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new `DataLoader`.
    ///
    /// With `drop_last`, a trailing batch shorter than `batch_size` is
    /// skipped.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `batch_size` is zero.
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Result<Self, ScalarGradError> {
        if batch_size == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "batch_size must be non-zero".to_string(),
            ));
        }
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
        })
    }

    /// Iterator over one epoch of batches.
    pub fn iter(&mut self) -> Batches<'_, D> {
        let indices = self.sampler.iter(self.dataset.len());
        Batches {
            dataset: &self.dataset,
            indices,
            batch_size: self.batch_size,
            drop_last: self.drop_last,
        }
    }

    /// Number of batches one epoch yields.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            (samples + self.batch_size - 1) / self.batch_size
        }
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

/// One epoch of batches from a [`DataLoader`].
pub struct Batches<'a, D: Dataset> {
    dataset: &'a D,
    indices: Box<dyn Iterator<Item = usize>>,
    batch_size: usize,
    drop_last: bool,
}

impl<D: Dataset> Iterator for Batches<'_, D> {
    type Item = Result<Vec<D::Item>, ScalarGradError>;

    /// Returns the next batch, or an error if an index could not be fetched.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
