use polars::prelude::{CsvReader, SerReader};

use std::path::Path;
use std::io;

use crate::Schema;
use crate::errors::Result;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format file to [`Sample`].
/// Other formats are not supported yet.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use minitrie::SampleReader;
///
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .attributes(["class", "sex", "age"])
///     .target_feature("survived")
///     .read()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    attributes: Option<Vec<String>>,
    target: Option<String>,
}


impl<P> SampleReader<P> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the column name that is used for target label.
    pub fn target_feature<S: AsRef<str>>(mut self, column: S) -> Self {
        self.target = Some(column.as_ref().to_string());
        self
    }


    /// Set the attribute columns in the order they are walked in the trie.
    /// By default, every column except the target is used in file order.
    pub fn attributes<I, S>(mut self, columns: I) -> Self
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        let columns = columns.into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        self.attributes = Some(columns);
        self
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "The file name for csv is not set. Use `SampleReader::file`.",
            )
        })?;
        let target = self.target.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "The target column is not set. Use `SampleReader::target_feature`.",
            )
        })?;

        let data = CsvReader::from_path(file.as_ref())?
            .has_header(self.has_header)
            .finish()?;

        let attributes = match self.attributes {
            Some(attributes) => attributes,
            None => data.get_column_names()
                .into_iter()
                .filter(|name| *name != target)
                .map(|name| name.to_string())
                .collect(),
        };

        let schema = Schema::new(attributes, target);
        Sample::from_dataframe(&data, schema)
    }
}
