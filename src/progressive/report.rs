use serde::{Serialize, Deserialize};

use crate::evaluation::{ConfusionMatrix, RocPoint};
use crate::errors::Result;


/// The metrics emitted after one slice of the progressive loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationReport {
    /// The iteration number, starting at `1`.
    pub iteration: usize,
    /// Records in the slice of this iteration.
    pub slice_records: usize,
    /// Records accumulated so far, this slice included.
    pub total_records: u64,
    /// Nodes in the accumulated trie, root included.
    pub n_nodes: usize,
    /// Test accuracy.
    pub accuracy: f64,
    /// Actual against predicted test labels.
    pub confusion: ConfusionMatrix,
    /// ROC curve for the positive label on the test set.
    pub roc: Vec<RocPoint>,
    /// Area under `roc`.
    pub auc: f64,
    /// Cumulative time spent building, merging and annotating,
    /// in milliseconds.
    pub time_millis: u128,
}


impl IterationReport {
    /// Returns the CSV line logged for this iteration.
    pub(crate) fn csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{}\n",
            self.iteration,
            self.total_records,
            self.accuracy,
            self.auc,
            self.n_nodes,
            self.time_millis,
        )
    }


    /// Serialize `self` into a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }


    /// Deserialize a report from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
