#![warn(missing_docs)]

//! 
//! A crate that provides progressive frequency-trie classifiers.
//! 
//! A frequency trie is a prefix tree over categorical records
//! where each node counts the records that passed through it.
//! The classifier in this crate is **progressive**:
//! a trie built from a new data slice is merged into the
//! accumulated one, so the model is updated without retraining
//! from scratch and without forgetting earlier slices.
//! 
//! The pieces, from the leaves up:
//! 
//! - [`build`] constructs a [`FrequencyTrie`] from records.
//! - [`merge`] sums the counts of two tries path by path.
//!     The result does not depend on the order of merging.
//! - [`annotate`] turns counts into conditional probabilities,
//!     giving a [`ProbabilityTrie`].
//! - [`ProbabilityTrie::classify`] returns the most probable label
//!     ([`Mode::Decision`]) or every candidate label with its probability
//!     ([`Mode::Distribution`]), falling back to a default label for
//!     unseen attribute paths.
//! - [`ProgressiveLearner`] runs the loop over data slices and
//!     evaluates the model on a held-out sample after every slice.
//! 
//! # Example
//! ```
//! use minitrie::prelude::*;
//! 
//! let schema = Schema::with_arity(2);
//! let records = vec![
//!     vec!["A", "X", "yes"],
//!     vec!["A", "Y", "no"],
//!     vec!["A", "X", "yes"],
//! ];
//! let trie = annotate(&build(&schema, &records).unwrap());
//! 
//! let yes = trie.classify(&["A", "X"], Mode::Decision, "NA").unwrap();
//! assert_eq!(yes.label(), Some("yes"));
//! 
//! let unseen = trie.classify(&["A", "Z"], Mode::Decision, "NA").unwrap();
//! assert_eq!(unseen.label(), Some("NA"));
//! ```

pub mod errors;
pub mod schema;
pub mod sample;
pub mod hypothesis;
pub mod trie;
pub mod evaluation;
pub mod progressive;
pub mod prelude;


pub use errors::{Result, TrieError};
pub use schema::{Schema, Record, MISSING_SYMBOL};
pub use sample::{Sample, SampleReader, Slices};
pub use hypothesis::Classifier;

pub use trie::{
    FrequencyTrie,
    TrieNode,
    ProbabilityTrie,
    ProbabilityNode,
    TrieClassifier,
    Mode,
    Prediction,
    LabelDistribution,
    build,
    merge,
    merge_in_place,
    annotate,
};

pub use evaluation::{
    Evaluation,
    ConfusionMatrix,
    RocPoint,
    roc_curve,
    auc,
};

pub use progressive::{
    ProgressiveBuilder,
    ProgressiveLearner,
    LearnerState,
    IterationReport,
};
