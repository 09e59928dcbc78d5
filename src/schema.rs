//! Defines [`Schema`], the ordered attribute names plus the label name
//! that every record of one progressive run must follow.

use serde::{Serialize, Deserialize};

use crate::errors::{Result, TrieError};

use std::fmt;


/// The symbol used for missing values.
/// A missing value is an ordinary symbol with its own branch.
pub const MISSING_SYMBOL: &str = "NA";


/// A record is an ordered sequence of symbols.
/// The last symbol is the class label.
pub type Record = Vec<String>;


/// Ordered attribute names and the name of the class label.
///
/// # Example
/// ```
/// use minitrie::Schema;
///
/// let schema = Schema::new(["class", "sex", "age"], "survived");
/// assert_eq!(schema.n_attributes(), 3);
/// assert_eq!(schema.record_len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schema {
    attributes: Vec<String>,
    label: String,
}


impl Schema {
    /// Construct a new schema from the ordered attribute names
    /// and the label name.
    pub fn new<I, S, T>(attributes: I, label: T) -> Self
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
              T: AsRef<str>,
    {
        let attributes = attributes.into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>();
        let label = label.as_ref().to_string();
        Self { attributes, label }
    }


    /// Construct a schema with `n_attributes` attributes named
    /// `V1`, `V2`, ..., and the label named `Label`.
    pub fn with_arity(n_attributes: usize) -> Self {
        let attributes = (1..=n_attributes)
            .map(|i| format!("V{i}"))
            .collect::<Vec<_>>();
        Self { attributes, label: "Label".to_string() }
    }


    /// Returns the attribute names in order.
    #[inline]
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }


    /// Returns the label name.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }


    /// Returns the number of attributes, not counting the label.
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.attributes.len()
    }


    /// Returns the length of a full record, label included.
    #[inline]
    pub fn record_len(&self) -> usize {
        self.attributes.len() + 1
    }


    /// Returns all column names, label last.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter()
            .map(|s| s.as_str())
            .chain(std::iter::once(self.label.as_str()))
    }


    /// Check that `record` has one symbol per attribute plus the label.
    #[inline]
    pub fn check_record<S>(&self, record: &[S]) -> Result<()> {
        if record.len() != self.record_len() {
            return Err(TrieError::length("record", self.record_len(), record.len()));
        }
        Ok(())
    }


    /// Check that `partial` does not run past the attributes.
    #[inline]
    pub fn check_partial<S>(&self, partial: &[S]) -> Result<()> {
        if partial.len() > self.n_attributes() {
            return Err(TrieError::SchemaMismatch {
                expected: format!(
                    "partial record of length <= {}", self.n_attributes()
                ),
                found: format!("partial record of length {}", partial.len()),
            });
        }
        Ok(())
    }


    /// Check that `other` is the same schema.
    #[inline]
    pub fn check_same(&self, other: &Schema) -> Result<()> {
        if self != other {
            return Err(TrieError::SchemaMismatch {
                expected: self.to_string(),
                found: other.to_string(),
            });
        }
        Ok(())
    }
}


impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] -> {}", self.attributes.join(", "), self.label)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_length_is_checked() {
        let schema = Schema::with_arity(2);
        assert!(schema.check_record(&["A", "X", "yes"]).is_ok());
        assert!(matches!(
            schema.check_record(&["A", "yes"]),
            Err(TrieError::SchemaMismatch { .. })
        ));
    }


    #[test]
    fn partial_may_be_shorter() {
        let schema = Schema::with_arity(2);
        assert!(schema.check_partial::<&str>(&[]).is_ok());
        assert!(schema.check_partial(&["A"]).is_ok());
        assert!(schema.check_partial(&["A", "X", "yes"]).is_err());
    }


    #[test]
    fn display() {
        let schema = Schema::new(["a", "b"], "y");
        assert_eq!(schema.to_string(), "[a, b] -> y");
        assert_eq!(schema.columns().collect::<Vec<_>>(), vec!["a", "b", "y"]);
    }
}
