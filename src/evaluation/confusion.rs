use serde::{Serialize, Deserialize};

use std::fmt;


/// Cross tabulation of actual against predicted labels.
/// Labels are listed in the order they first appear,
/// actual labels before predicted ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    labels: Vec<String>,
    //          actual  predicted
    //            |      /
    //            v     v
    counts: Vec<Vec<u64>>,
}


impl ConfusionMatrix {
    /// Count every `(actual, predicted)` pair.
    ///
    /// # Panics
    /// Panics if `actual` and `predicted` have different lengths.
    pub fn new<A, P>(actual: &[A], predicted: &[P]) -> Self
        where A: AsRef<str>,
              P: AsRef<str>,
    {
        assert_eq!(
            actual.len(), predicted.len(),
            "actual and predicted labels must have the same length"
        );
        let mut labels: Vec<String> = Vec::new();
        for label in actual.iter().map(|a| a.as_ref())
            .chain(predicted.iter().map(|p| p.as_ref()))
        {
            if !labels.iter().any(|l| l == label) {
                labels.push(label.to_string());
            }
        }

        let n_labels = labels.len();
        let mut counts = vec![vec![0_u64; n_labels]; n_labels];
        for (a, p) in actual.iter().zip(predicted) {
            let i = position(&labels, a.as_ref());
            let j = position(&labels, p.as_ref());
            counts[i][j] += 1;
        }

        Self { labels, counts }
    }


    /// Returns the labels indexing the rows and the columns.
    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels[..]
    }


    /// Returns the number of records with label `actual`
    /// predicted as `predicted`.
    pub fn count(&self, actual: &str, predicted: &str) -> u64 {
        let i = self.labels.iter().position(|l| l == actual);
        let j = self.labels.iter().position(|l| l == predicted);
        match (i, j) {
            (Some(i), Some(j)) => self.counts[i][j],
            _ => 0,
        }
    }


    /// Returns the number of records.
    pub fn total(&self) -> u64 {
        self.counts.iter()
            .flat_map(|row| row.iter())
            .sum()
    }


    /// Returns the number of correctly classified records.
    pub fn correct(&self) -> u64 {
        (0..self.labels.len())
            .map(|i| self.counts[i][i])
            .sum()
    }


    /// Returns the ratio of correctly classified records.
    /// An empty table has accuracy `0`.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 { return 0.0; }
        self.correct() as f64 / total as f64
    }
}


#[inline(always)]
fn position(labels: &[String], label: &str) -> usize {
    labels.iter()
        .position(|l| l == label)
        .unwrap_or_default()
}


impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.labels.iter()
            .map(|l| l.len())
            .chain(self.counts.iter().flatten().map(|c| c.to_string().len()))
            .chain(std::iter::once("actual".len()))
            .max()
            .unwrap_or(0);

        write!(f, "{:>width$}", "actual")?;
        for label in &self.labels {
            write!(f, " {label:>width$}")?;
        }
        writeln!(f)?;
        for (label, row) in self.labels.iter().zip(&self.counts) {
            write!(f, "{label:>width$}")?;
            for count in row {
                write!(f, " {count:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
