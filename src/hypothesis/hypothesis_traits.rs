use rayon::prelude::*;

use crate::Sample;
use crate::errors::Result;
use crate::trie::LabelDistribution;


/// A trait that defines the behavor of classifier.
/// You only need to implement `distribution` and `default_label`.
///
/// Every method fails with
/// [`TrieError::SchemaMismatch`](crate::TrieError::SchemaMismatch)
/// if `sample` does not follow the schema the classifier was trained on.
pub trait Classifier {
    /// Computes the probability of each candidate label
    /// for the `row`'th record of `sample`.
    fn distribution(&self, sample: &Sample, row: usize)
        -> Result<LabelDistribution>;


    /// The label predicted when no candidate label exists.
    fn default_label(&self) -> &str;


    /// Predicts the label of the `row`'th record of `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> Result<String> {
        let dist = self.distribution(sample, row)?;
        let label = dist.most_probable()
            .unwrap_or(self.default_label())
            .to_string();
        Ok(label)
    }


    /// Computes the probability that the `row`'th record
    /// of `sample` has `label`.
    fn confidence(&self, sample: &Sample, row: usize, label: &str)
        -> Result<f64>
    {
        let dist = self.distribution(sample, row)?;
        Ok(dist.get(label).unwrap_or(0.0))
    }


    /// Predicts the labels of `sample`.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<String>>
        where Self: Sync
    {
        let n_sample = sample.shape().0;
        (0..n_sample).into_par_iter()
            .map(|row| self.predict(sample, row))
            .collect::<Result<Vec<_>>>()
    }


    /// Computes the probability of `label` for every record of `sample`.
    fn confidence_all(&self, sample: &Sample, label: &str) -> Result<Vec<f64>>
        where Self: Sync
    {
        let n_sample = sample.shape().0;
        (0..n_sample).into_par_iter()
            .map(|row| self.confidence(sample, row, label))
            .collect::<Result<Vec<_>>>()
    }
}
