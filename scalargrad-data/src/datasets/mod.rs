pub mod circle;
pub mod sample;
pub mod traits;
pub mod vec_dataset;

pub use circle::CircleDataset;
pub use sample::Sample;
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
