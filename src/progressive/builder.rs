use crate::{Sample, Schema, Record, MISSING_SYMBOL};
use crate::errors::{Result, TrieError};
use super::driver::ProgressiveLearner;


/// The interval of printing set as default.
pub const DEFAULT_PRINT_EVERY: usize = 1;


/// `ProgressiveBuilder` is a struct to construct [`ProgressiveLearner`].
/// You need to specify the followings:
///
/// - Test records (held out, evaluated after every slice),
/// - Schema (taken from the test sample if not given),
/// - Default label (predicted for unseen paths),
/// - Positive label (scored for the ROC curve), and
/// - Round (the log line is printed every **round** slices).
///
/// # Example
/// ```no_run
/// use minitrie::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/titanic.csv")
///     .has_header(true)
///     .attributes(["class", "sex", "age"])
///     .target_feature("survived")
///     .read()
///     .unwrap();
/// let (train, test) = sample.random_split(0.7, 1);
///
/// let mut learner = ProgressiveBuilder::new()
///     .test_sample(&test)
///     .default_label("no")
///     .positive_label("yes")
///     .print_every(5)
///     .build()
///     .unwrap();
///
/// let slices = Slices::new(&train).n_slices(20);
/// learner.run(slices).unwrap();
/// ```
pub struct ProgressiveBuilder {
    schema: Option<Schema>,
    test: Option<Vec<Record>>,
    test_schema: Option<Schema>,
    default_label: String,
    positive_label: Option<String>,
    print_every: usize,
}


impl Default for ProgressiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}


impl ProgressiveBuilder {
    /// Construct a new instance of [`ProgressiveBuilder`].
    /// By default, [`ProgressiveBuilder`] sets the parameters as follows;
    /// ```text
    /// default_label: "NA",
    /// positive_label: the first label of the test sample,
    /// print_every: DEFAULT_PRINT_EVERY == 1,
    /// ```
    pub fn new() -> Self {
        Self {
            schema: None,
            test: None,
            test_schema: None,
            default_label: MISSING_SYMBOL.to_string(),
            positive_label: None,
            print_every: DEFAULT_PRINT_EVERY,
        }
    }


    /// Set the schema every slice must follow.
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }


    /// Set the held-out test sample.
    /// Its schema is used unless [`ProgressiveBuilder::schema`] is called,
    /// in which case the two schemas must agree.
    pub fn test_sample(mut self, test: &Sample) -> Self {
        self.test_schema = Some(test.schema().clone());
        self.test = Some(test.records().to_vec());
        self
    }


    /// Set the held-out test records directly.
    pub fn test_records<I, R, S>(mut self, test: I) -> Self
        where I: IntoIterator<Item = R>,
              R: AsRef<[S]>,
              S: AsRef<str>,
    {
        let test = test.into_iter()
            .map(|record| {
                record.as_ref()
                    .iter()
                    .map(|s| s.as_ref().to_string())
                    .collect::<Record>()
            })
            .collect();
        self.test = Some(test);
        self.test_schema = None;
        self
    }


    /// Set the label predicted for unseen attribute paths.
    /// Default is `"NA"`.
    pub fn default_label<S: AsRef<str>>(mut self, label: S) -> Self {
        self.default_label = label.as_ref().to_string();
        self
    }


    /// Set the label treated as positive for the ROC curve.
    pub fn positive_label<S: AsRef<str>>(mut self, label: S) -> Self {
        self.positive_label = Some(label.as_ref().to_string());
        self
    }


    /// Set the interval to print the current status.
    /// If you don't want to print the log, set `usize::MAX`.
    pub fn print_every(mut self, round: usize) -> Self {
        assert!(round > 0, "The printing interval must be positive");
        self.print_every = round;
        self
    }


    /// Build a [`ProgressiveLearner`].
    /// This method consumes `self`.
    pub fn build(self) -> Result<ProgressiveLearner> {
        let schema = match (self.schema, self.test_schema) {
            (Some(schema), Some(test_schema)) => {
                schema.check_same(&test_schema)?;
                schema
            },
            (Some(schema), None) | (None, Some(schema)) => schema,
            (None, None) => return Err(TrieError::MissingSchema),
        };
        let test = self.test.ok_or(TrieError::MissingTestSample)?;
        test.iter().try_for_each(|record| schema.check_record(record))?;

        let n_attributes = schema.n_attributes();
        let positive_label = self.positive_label
            .or_else(|| test.first().map(|record| record[n_attributes].clone()))
            .unwrap_or_else(|| self.default_label.clone());

        Ok(ProgressiveLearner::from_components(
            schema,
            test,
            self.default_label,
            positive_label,
            self.print_every,
        ))
    }
}
