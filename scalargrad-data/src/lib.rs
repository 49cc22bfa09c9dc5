//! # scalargrad-data
//!
//! Datasets, index samplers and a batching [`DataLoader`] for feeding
//! `scalargrad-core` networks.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

pub use dataloader::DataLoader;
pub use datasets::{CircleDataset, Dataset, Sample, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
