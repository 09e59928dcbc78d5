//! Exports the standard structs, functions and traits.
//! 
pub use crate::schema::{
    Schema,
    Record,
    MISSING_SYMBOL,
};


pub use crate::sample::{
    Sample,
    SampleReader,
    Slices,
};


pub use crate::trie::{
    // Count tries ------------------------------
    FrequencyTrie,
    build,
    merge,
    merge_in_place,


    // Probability tries ------------------------
    ProbabilityTrie,
    annotate,


    // Classification ---------------------------
    Mode,
    Prediction,
    LabelDistribution,
    TrieClassifier,
};


pub use crate::hypothesis::Classifier;


pub use crate::evaluation::{
    Evaluation,
    ConfusionMatrix,
};


pub use crate::progressive::{
    ProgressiveBuilder,
    ProgressiveLearner,
    LearnerState,
    IterationReport,
};


pub use crate::errors::TrieError;
