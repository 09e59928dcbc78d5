//! Struct `Sample` represents a batch of categorical records.

// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;

// Provides the slices consumed by the progressive loop.
pub(crate) mod slices;


pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
pub use slices::Slices;
