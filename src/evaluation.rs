//! Evaluation of a probability trie against held-out records:
//! accuracy, confusion table, ROC curve and its area.

mod confusion;
mod roc;


pub use confusion::ConfusionMatrix;
pub use roc::{RocPoint, roc_curve, auc};


use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::Record;
use crate::errors::Result;
use crate::trie::ProbabilityTrie;


/// The evaluation of a probability trie on a test set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Ratio of correctly classified test records.
    pub accuracy: f64,
    /// Actual against predicted labels.
    pub confusion: ConfusionMatrix,
    /// ROC curve for the positive label.
    pub roc: Vec<RocPoint>,
    /// Area under `roc`.
    pub auc: f64,
}


impl Evaluation {
    /// Classify every test record in Decision mode and
    /// score it with the probability of `positive`.
    ///
    /// Each record in `test` is a full record, label last.
    /// Records are classified in parallel; the trie is only read.
    pub fn of(
        trie: &ProbabilityTrie,
        test: &[Record],
        default: &str,
        positive: &str,
    ) -> Result<Self>
    {
        let schema = trie.schema();
        test.iter().try_for_each(|record| schema.check_record(record))?;

        let n_attributes = schema.n_attributes();
        let (predicted, scores): (Vec<String>, Vec<f64>) = test.par_iter()
            .map(|record| {
                let dist = trie.lookup(&record[..n_attributes], default);
                let label = dist.most_probable()
                    .unwrap_or(default)
                    .to_string();
                let score = dist.get(positive).unwrap_or(0.0);
                (label, score)
            })
            .unzip();

        let actual = test.iter()
            .map(|record| record[n_attributes].as_str())
            .collect::<Vec<_>>();
        let positives = actual.iter()
            .map(|&label| label == positive)
            .collect::<Vec<_>>();

        let confusion = ConfusionMatrix::new(&actual, &predicted);
        let accuracy = confusion.accuracy();
        let roc = roc_curve(&scores, &positives);
        let auc = auc(&roc);

        Ok(Self { accuracy, confusion, roc, auc })
    }
}
