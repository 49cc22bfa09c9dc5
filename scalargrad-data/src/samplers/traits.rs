use std::fmt::Debug;

/// Defines the order in which a `DataLoader` visits dataset indices.
pub trait Sampler: Debug {
    /// Returns the indices for one pass over a dataset of `dataset_len`
    /// items.
    ///
    /// Takes `&mut self` so that stateful samplers advance between epochs.
    fn iter(&mut self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>>;

    /// Returns the total number of indices [`Sampler::iter`] will yield.
    ///
    /// This might differ from `dataset_len` for samplers drawing a fixed
    /// number of samples or sampling with replacement.
    fn len(&self, dataset_len: usize) -> usize;
}
