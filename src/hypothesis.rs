//! The core library for `Classifier` trait.

pub(crate) mod hypothesis_traits;


pub use hypothesis_traits::Classifier;
