//! Labeled data for benchmarking
//!
//! - `sample_set`: the fixed dataset and its deterministic training/evaluation split
//! - `provider`: sources of labeled data (in-memory, synthetic digits)

mod provider;
mod sample_set;


pub use provider::{DatasetProvider, InMemoryProvider, LabeledData, SyntheticDigits};
pub use sample_set::{Partition, SampleSet, SplitPoint};
