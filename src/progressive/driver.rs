use serde::{Serialize, Deserialize};

use crate::{Schema, Record};
use crate::errors::Result;
use crate::evaluation::Evaluation;
use crate::trie::{
    FrequencyTrie,
    ProbabilityTrie,
    TrieClassifier,
    annotate,
    build,
    merge_in_place,
};
use super::report::IterationReport;

use std::time::Instant;


/// The state of a [`ProgressiveLearner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearnerState {
    /// No slice has been consumed.
    Empty,
    /// A slice is being folded into the accumulator.
    Accumulating,
    /// The probability trie reflects every slice consumed so far.
    Ready,
}


/// The driver of the progressive loop.
///
/// Owns the accumulated frequency trie and the evaluation history.
/// Each call of [`ProgressiveLearner::advance`] builds a trie from one
/// slice, merges it into the accumulator, re-annotates the result
/// and evaluates it against the full test set.
/// Counts of earlier slices are never discarded.
///
/// Construct it with [`ProgressiveBuilder`](super::ProgressiveBuilder).
#[derive(Debug)]
pub struct ProgressiveLearner {
    pub(super) schema: Schema,
    pub(super) state: LearnerState,
    pub(super) accumulator: Option<FrequencyTrie>,
    pub(super) probability: Option<ProbabilityTrie>,
    pub(super) test: Vec<Record>,
    pub(super) default_label: String,
    pub(super) positive_label: String,
    pub(super) history: Vec<IterationReport>,
    pub(super) time_acc: u128,
    pub(super) print_every: usize,
}


impl ProgressiveLearner {
    pub(super) fn from_components(
        schema: Schema,
        test: Vec<Record>,
        default_label: String,
        positive_label: String,
        print_every: usize,
    ) -> Self
    {
        Self {
            schema,
            state: LearnerState::Empty,
            accumulator: None,
            probability: None,
            test,
            default_label,
            positive_label,
            history: Vec::new(),
            time_acc: 0,
            print_every,
        }
    }


    /// Consume one slice and return the updated metrics.
    ///
    /// Slices must be given in order;
    /// slice `i + 1` is processed only after slice `i`
    /// has been merged and evaluated.
    /// A malformed record fails the whole slice
    /// and leaves the accumulator untouched.
    pub fn advance<R, S>(&mut self, slice: &[R]) -> Result<&IterationReport>
        where R: AsRef<[S]>,
              S: AsRef<str>,
    {
        let now = Instant::now();

        let trie = build(&self.schema, slice)?;
        self.state = LearnerState::Accumulating;
        let acc = match self.accumulator {
            Some(ref mut acc) => {
                merge_in_place(acc, &trie)?;
                acc
            },
            None => self.accumulator.insert(trie),
        };

        let total_records = acc.n_records();
        let n_nodes = acc.node_count();
        let probability = annotate(acc);
        self.time_acc += now.elapsed().as_millis();
        self.state = LearnerState::Ready;

        let evaluation = Evaluation::of(
            &probability,
            &self.test,
            &self.default_label,
            &self.positive_label,
        )?;
        self.probability = Some(probability);

        let report = IterationReport {
            iteration: self.history.len() + 1,
            slice_records: slice.len(),
            total_records,
            n_nodes,
            accuracy: evaluation.accuracy,
            confusion: evaluation.confusion,
            roc: evaluation.roc,
            auc: evaluation.auc,
            time_millis: self.time_acc,
        };
        self.history.push(report);
        Ok(&self.history[self.history.len() - 1])
    }


    /// Returns the current state.
    #[inline]
    pub fn state(&self) -> LearnerState {
        self.state
    }


    /// Returns the schema every slice must follow.
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }


    /// Returns the accumulated frequency trie.
    #[inline]
    pub fn accumulator(&self) -> Option<&FrequencyTrie> {
        self.accumulator.as_ref()
    }


    /// Returns the probability trie annotated after the last slice.
    #[inline]
    pub fn probability_trie(&self) -> Option<&ProbabilityTrie> {
        self.probability.as_ref()
    }


    /// Returns the reports of every iteration so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[IterationReport] {
        &self.history[..]
    }


    /// Returns the label predicted for unseen paths.
    #[inline]
    pub fn default_label(&self) -> &str {
        &self.default_label
    }


    /// Returns the label scored for the ROC curve.
    #[inline]
    pub fn positive_label(&self) -> &str {
        &self.positive_label
    }


    /// Returns the current model as a [`TrieClassifier`].
    /// `None` before the first slice.
    pub fn classifier(&self) -> Option<TrieClassifier> {
        self.probability.as_ref()
            .map(|trie| TrieClassifier::new(trie.clone(), &self.default_label))
    }
}
