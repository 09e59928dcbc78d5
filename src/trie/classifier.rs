//! Classification over a [`ProbabilityTrie`].
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{Classifier, Sample};
use crate::errors::Result;
use super::probability::{ProbabilityNode, ProbabilityTrie};

use std::collections::HashMap;
use std::fmt;


/// The output type of [`ProbabilityTrie::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Returns the most probable label.
    Decision,
    /// Returns the probability of every candidate label.
    Distribution,
}


/// Candidate labels with their probabilities,
/// in the order the labels were first observed.
///
/// Labels never observed at the stopping node are absent.
/// An empty distribution carries the default label it fell back to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDistribution {
    probabilities: Vec<(String, f64)>,
    fallback: Option<String>,
}


impl LabelDistribution {
    fn new(probabilities: Vec<(String, f64)>) -> Self {
        Self { probabilities, fallback: None }
    }


    fn fallback_to(default: &str) -> Self {
        Self { probabilities: Vec::new(), fallback: Some(default.to_string()) }
    }


    /// Returns the probability of `label`, if it was observed.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.probabilities.iter()
            .find(|(l, _)| l == label)
            .map(|(_, p)| *p)
    }


    /// Iterate over `(label, probability)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probabilities.iter()
            .map(|(l, p)| (l.as_str(), *p))
    }


    /// Returns the number of candidate labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }


    /// Returns `true` if no label was observed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }


    /// Returns the default label this distribution fell back to.
    /// `None` unless the distribution is empty.
    #[inline]
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }


    /// Returns the label with the largest probability.
    /// Ties go to the label observed first.
    pub fn most_probable(&self) -> Option<&str> {
        let mut best: Option<&(String, f64)> = None;
        for candidate in &self.probabilities {
            match best {
                Some(b) if b.1 >= candidate.1 => {},
                _ => { best = Some(candidate); },
            }
        }
        best.map(|(l, _)| l.as_str())
    }


    /// Returns the label and its probability as a map.
    pub fn to_map(&self) -> HashMap<String, f64> {
        self.probabilities.iter().cloned().collect()
    }
}


impl fmt::Display for LabelDistribution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(default) = &self.fallback {
            return write!(f, "{{}} (default: {default})");
        }
        let body = self.probabilities.iter()
            .map(|(l, p)| format!("{l}: {p:.4}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{body}}}")
    }
}


/// The result of [`ProbabilityTrie::classify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Prediction {
    /// A single label, from [`Mode::Decision`].
    Label(String),
    /// Every candidate label, from [`Mode::Distribution`].
    Distribution(LabelDistribution),
}


impl Prediction {
    /// Returns the label of a [`Prediction::Label`].
    pub fn label(&self) -> Option<&str> {
        match self {
            Prediction::Label(label) => Some(label.as_str()),
            Prediction::Distribution(_) => None,
        }
    }


    /// Returns the distribution of a [`Prediction::Distribution`].
    pub fn distribution(&self) -> Option<&LabelDistribution> {
        match self {
            Prediction::Label(_) => None,
            Prediction::Distribution(dist) => Some(dist),
        }
    }
}


impl ProbabilityTrie {
    /// Classify a record missing its label.
    ///
    /// The trie is walked from the root following `partial`.
    /// The walk stops when `partial` is exhausted or
    /// when the next symbol has no matching child.
    ///
    /// - If a symbol has no matching child, the path is unseen:
    ///   [`Mode::Decision`] returns `default`,
    ///   [`Mode::Distribution`] returns an empty distribution
    ///   tagged with `default`.
    /// - If `partial` holds every attribute,
    ///   the children of the stopping node are the candidate labels.
    /// - If `partial` is shorter, every label below the stopping node
    ///   votes with its count, divided by the stopping node's count.
    ///
    /// Unseen symbols never fail. A `partial` longer than the attributes
    /// fails with [`TrieError::SchemaMismatch`](crate::TrieError::SchemaMismatch).
    pub fn classify<S>(&self, partial: &[S], mode: Mode, default: &str)
        -> Result<Prediction>
        where S: AsRef<str>,
    {
        self.schema.check_partial(partial)?;
        let dist = self.lookup(partial, default);
        let prediction = match mode {
            Mode::Decision => {
                let label = dist.most_probable().unwrap_or(default);
                Prediction::Label(label.to_string())
            },
            Mode::Distribution => Prediction::Distribution(dist),
        };
        Ok(prediction)
    }


    /// Returns the most probable label for `partial`, or `default`.
    #[inline]
    pub fn decide<S>(&self, partial: &[S], default: &str) -> Result<String>
        where S: AsRef<str>,
    {
        self.schema.check_partial(partial)?;
        let dist = self.lookup(partial, default);
        Ok(dist.most_probable().unwrap_or(default).to_string())
    }


    /// Returns the probability of `label` for `partial`.
    /// An unseen path or an unobserved label gives `0`.
    pub fn probability_of<S>(&self, partial: &[S], label: &str) -> Result<f64>
        where S: AsRef<str>,
    {
        self.schema.check_partial(partial)?;
        let dist = self.lookup(partial, label);
        Ok(dist.get(label).unwrap_or(0.0))
    }


    /// Classify independent records in parallel.
    /// The trie is only read.
    pub fn classify_all<R, S>(&self, partials: &[R], mode: Mode, default: &str)
        -> Result<Vec<Prediction>>
        where R: AsRef<[S]> + Sync,
              S: AsRef<str>,
    {
        partials.par_iter()
            .map(|partial| self.classify(partial.as_ref(), mode, default))
            .collect()
    }


    /// Walk and collect candidate labels.
    /// `partial` must not be longer than the attributes.
    pub(crate) fn lookup<S>(&self, partial: &[S], default: &str)
        -> LabelDistribution
        where S: AsRef<str>,
    {
        let node = partial.iter()
            .try_fold(&self.root, |node, symbol| node.child(symbol.as_ref()));
        let node = match node {
            Some(node) => node,
            None => return LabelDistribution::fallback_to(default),
        };

        let remaining = self.schema.n_attributes() - partial.len();
        let probabilities = if remaining == 0 {
            node.children.iter()
                .map(|c| (c.key.clone(), c.probability))
                .collect::<Vec<_>>()
        } else {
            let mut votes = Vec::new();
            collect_votes(node, remaining, &mut votes);
            let total = node.count;
            votes.into_iter()
                .map(|(label, n)| {
                    let p = if total == 0 { 0.0 } else { n as f64 / total as f64 };
                    (label, p)
                })
                .collect::<Vec<_>>()
        };

        if probabilities.is_empty() {
            LabelDistribution::fallback_to(default)
        } else {
            LabelDistribution::new(probabilities)
        }
    }
}


/// Descend `remaining` attribute levels and count each label below,
/// in first-encountered depth-first order.
fn collect_votes(
    node: &ProbabilityNode,
    remaining: usize,
    votes: &mut Vec<(String, u64)>,
)
{
    if remaining == 0 {
        for label in &node.children {
            match votes.iter_mut().find(|(l, _)| *l == label.key) {
                Some((_, n)) => { *n += label.count; },
                None => votes.push((label.key.clone(), label.count)),
            }
        }
        return;
    }
    for child in &node.children {
        collect_votes(child, remaining - 1, votes);
    }
}


/// A [`ProbabilityTrie`] paired with the default label,
/// usable through the [`Classifier`] trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrieClassifier {
    trie: ProbabilityTrie,
    default: String,
}


impl TrieClassifier {
    /// Construct a new classifier that falls back to `default`.
    pub fn new<S: AsRef<str>>(trie: ProbabilityTrie, default: S) -> Self {
        Self { trie, default: default.as_ref().to_string() }
    }


    /// Returns the underlying probability trie.
    #[inline]
    pub fn trie(&self) -> &ProbabilityTrie {
        &self.trie
    }


    /// Check that `sample` follows the schema of the trie:
    /// the same attributes in the same order, and the same label.
    #[inline]
    pub fn check(&self, sample: &Sample) -> Result<()> {
        self.trie.schema.check_same(sample.schema())
    }
}


impl Classifier for TrieClassifier {
    fn distribution(&self, sample: &Sample, row: usize)
        -> Result<LabelDistribution>
    {
        self.check(sample)?;
        let attributes = sample.attributes_of(row);
        Ok(self.trie.lookup(attributes, &self.default))
    }


    #[inline]
    fn default_label(&self) -> &str {
        &self.default
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{annotate, build, Schema, TrieError};

    fn survey() -> ProbabilityTrie {
        let schema = Schema::with_arity(2);
        let records = [
            ["A", "X", "yes"],
            ["A", "Y", "no"],
            ["A", "X", "yes"],
            ["B", "X", "no"],
        ];
        annotate(&build(&schema, records).unwrap())
    }


    #[test]
    fn decision_picks_the_most_probable_label() {
        let trie = survey();
        let prediction = trie.classify(&["A", "X"], Mode::Decision, "NA").unwrap();
        assert_eq!(prediction.label(), Some("yes"));
    }


    #[test]
    fn unseen_symbol_falls_back_to_default() {
        let trie = survey();
        let prediction = trie.classify(&["A", "Z"], Mode::Decision, "unknown")
            .unwrap();
        assert_eq!(prediction.label(), Some("unknown"));

        let prediction = trie.classify(&["C", "X"], Mode::Distribution, "unknown")
            .unwrap();
        let dist = prediction.distribution().unwrap();
        assert!(dist.is_empty());
        assert_eq!(dist.fallback(), Some("unknown"));
    }


    #[test]
    fn short_partial_votes_over_the_subtree() {
        let trie = survey();
        let prediction = trie.classify(&["A"], Mode::Distribution, "NA").unwrap();
        let dist = prediction.distribution().unwrap();
        assert!((dist.get("yes").unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((dist.get("no").unwrap() - 1.0 / 3.0).abs() < 1e-12);

        let labels = dist.iter().map(|(l, _)| l).collect::<Vec<_>>();
        assert_eq!(labels, vec!["yes", "no"]);

        let empty: [&str; 0] = [];
        let prediction = trie.classify(&empty, Mode::Distribution, "NA").unwrap();
        let dist = prediction.distribution().unwrap();
        assert_eq!(dist.get("yes"), Some(0.5));
        assert_eq!(dist.get("no"), Some(0.5));
    }


    #[test]
    fn ties_go_to_the_first_observed_label() {
        let schema = Schema::with_arity(1);
        let trie = annotate(
            &build(&schema, [["x", "b"], ["x", "a"]]).unwrap()
        );
        assert_eq!(trie.decide(&["x"], "NA").unwrap(), "b");
    }


    #[test]
    fn partial_with_label_is_rejected() {
        let trie = survey();
        assert!(trie.classify(&["A", "X", "yes"], Mode::Decision, "NA").is_err());
    }


    #[test]
    fn probability_of_a_label() {
        let trie = survey();
        assert_eq!(trie.probability_of(&["A", "X"], "yes").unwrap(), 1.0);
        assert_eq!(trie.probability_of(&["A", "X"], "no").unwrap(), 0.0);
        assert_eq!(trie.probability_of(&["Q", "X"], "yes").unwrap(), 0.0);
    }


    #[test]
    fn parallel_classification_matches_sequential() {
        let trie = survey();
        let partials = vec![
            vec!["A", "X"],
            vec!["A", "Y"],
            vec!["B", "X"],
            vec!["B", "Y"],
        ];
        let all = trie.classify_all(&partials, Mode::Decision, "NA").unwrap();
        let labels = all.iter()
            .map(|p| p.label().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["yes", "no", "no", "NA"]);
    }


    fn titanic_classifier() -> TrieClassifier {
        let schema = Schema::new(["class", "sex"], "survived");
        let records = [
            ["1st", "female", "yes"],
            ["3rd", "male", "no"],
            ["1st", "male", "no"],
        ];
        let trie = annotate(&build(&schema, records).unwrap());
        TrieClassifier::new(trie, "NA")
    }


    #[test]
    fn classifier_predicts_samples_of_the_same_schema() {
        let f = titanic_classifier();
        let sample = Sample::from_records(
            Schema::new(["class", "sex"], "survived"),
            [["1st", "female", "yes"], ["2nd", "male", "no"]],
        ).unwrap();

        assert_eq!(f.predict(&sample, 0).unwrap(), "yes");
        assert_eq!(f.predict(&sample, 1).unwrap(), "NA");
        assert_eq!(f.predict_all(&sample).unwrap(), vec!["yes", "NA"]);
        assert_eq!(f.confidence_all(&sample, "yes").unwrap(), vec![1.0, 0.0]);
    }


    #[test]
    fn classifier_rejects_samples_of_another_schema() {
        let f = titanic_classifier();
        let reordered = Sample::from_records(
            Schema::new(["sex", "class"], "survived"),
            [["female", "1st", "yes"]],
        ).unwrap();
        let wider = Sample::from_records(
            Schema::new(["class", "sex", "age"], "survived"),
            [["1st", "female", "adult", "yes"]],
        ).unwrap();
        let narrower = Sample::from_records(
            Schema::new(["class"], "survived"),
            [["1st", "yes"]],
        ).unwrap();

        for sample in [&reordered, &wider, &narrower] {
            assert!(matches!(
                f.predict(sample, 0),
                Err(TrieError::SchemaMismatch { .. })
            ));
            assert!(matches!(
                f.predict_all(sample),
                Err(TrieError::SchemaMismatch { .. })
            ));
            assert!(matches!(
                f.confidence(sample, 0, "yes"),
                Err(TrieError::SchemaMismatch { .. })
            ));
            assert!(f.check(sample).is_err());
        }
    }
}
