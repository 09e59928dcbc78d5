//! Frequency tries and their probability-annotated counterparts.
//!
//! A [`FrequencyTrie`] is a prefix tree over records.
//! Each node stores how many records passed through it.
//! Two tries built from disjoint slices are combined by [`merge`],
//! so a model is updated without retraining from scratch.
//! [`annotate`] turns the counts into conditional probabilities,
//! and [`ProbabilityTrie::classify`] walks the result.
//!
//! # Example
//! ```
//! use minitrie::prelude::*;
//!
//! let schema = Schema::with_arity(2);
//! let first = build(&schema, [["A", "X", "yes"]]).unwrap();
//! let second = build(&schema, [["A", "X", "no"]]).unwrap();
//!
//! let merged = merge(&first, &second).unwrap();
//! let trie = annotate(&merged);
//!
//! let prediction = trie.classify(&["A", "X"], Mode::Distribution, "NA")
//!     .unwrap();
//! let dist = prediction.distribution().unwrap();
//! assert_eq!(dist.get("yes"), Some(0.5));
//! assert_eq!(dist.get("no"), Some(0.5));
//! ```

/// Defines the count nodes and [`FrequencyTrie`].
mod node;
/// Builds a trie from records.
mod builder;
/// Merges two tries.
mod merge;
/// Annotates a trie with conditional probabilities.
mod probability;
/// Classification over a probability trie.
mod classifier;
/// Graphviz export.
mod dot;


pub use node::{TrieNode, FrequencyTrie};
pub use builder::build;
pub use merge::{merge, merge_in_place};
pub use probability::{annotate, ProbabilityNode, ProbabilityTrie};
pub use classifier::{
    Mode,
    Prediction,
    LabelDistribution,
    TrieClassifier,
};
