use polars::prelude::*;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::schema::{Schema, Record, MISSING_SYMBOL};
use crate::errors::{Result, TrieError};

use std::path::Path;


/// Struct `Sample` holds categorical records that follow one [`Schema`].
/// Each record lists the attributes in schema order, label last.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub(super) schema: Schema,
    pub(super) records: Vec<Record>,
}


impl Sample {
    /// Construct a sample from in-memory records.
    /// Every record must have `schema.record_len()` symbols.
    pub fn from_records<I, R, S>(schema: Schema, records: I) -> Result<Self>
        where I: IntoIterator<Item = R>,
              R: AsRef<[S]>,
              S: AsRef<str>,
    {
        let records = records.into_iter()
            .map(|record| {
                let record = record.as_ref();
                schema.check_record(record)?;
                let record = record.iter()
                    .map(|s| s.as_ref().to_string())
                    .collect::<Record>();
                Ok(record)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { schema, records })
    }


    /// Convert `polars::DataFrame` into `Sample`.
    /// The columns named by `schema` are read in schema order;
    /// other columns are ignored.
    /// Every cell is converted to its string form,
    /// and a null cell becomes the symbol `"NA"`.
    pub fn from_dataframe(data: &DataFrame, schema: Schema) -> Result<Self> {
        let columns = schema.columns()
            .map(|name| {
                let series = data.column(name)
                    .map_err(|_| TrieError::MissingColumn(name.to_string()))?;
                symbols_of(series)
            })
            .collect::<Result<Vec<_>>>()?;

        let n_sample = data.height();
        let records = (0..n_sample)
            .map(|row| {
                columns.iter()
                    .map(|column| column[row].clone())
                    .collect::<Record>()
            })
            .collect::<Vec<_>>();

        Ok(Self { schema, records })
    }


    /// Read a CSV format file to [`Sample`] type.
    /// If the file has no header row,
    /// `polars` names the columns `column_1`, `column_2`, ...
    pub fn from_csv<P>(file: P, has_header: bool, schema: Schema)
        -> Result<Self>
        where P: AsRef<Path>,
    {
        let data = CsvReader::from_path(file.as_ref())?
            .has_header(has_header)
            .finish()?;
        Self::from_dataframe(&data, schema)
    }


    /// Returns the schema of this sample.
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }


    /// Returns the records.
    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records[..]
    }


    /// Returns the `(# of records, # of attributes)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.schema.n_attributes())
    }


    /// Returns `true` if the sample holds no record.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }


    /// Returns the attributes of the `row`'th record, label excluded.
    #[inline]
    pub fn attributes_of(&self, row: usize) -> &[String] {
        let record = &self.records[row];
        &record[..record.len() - 1]
    }


    /// Returns the label of the `row`'th record.
    #[inline]
    pub fn label_of(&self, row: usize) -> &str {
        let record = &self.records[row];
        &record[record.len() - 1]
    }


    /// Returns the labels of all records.
    pub fn labels(&self) -> Vec<&str> {
        (0..self.records.len())
            .map(|row| self.label_of(row))
            .collect()
    }


    /// Returns the distinct labels in the order they first appear.
    pub fn distinct_labels(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        for row in 0..self.records.len() {
            let label = self.label_of(row);
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        labels
    }


    /// Split `self` into a training sample holding
    /// `ratio` of the records and a test sample holding the rest.
    /// The records are shuffled with `seed` before splitting.
    pub fn random_split(&self, ratio: f64, seed: u64) -> (Sample, Sample) {
        assert!(
            (0f64..=1f64).contains(&ratio),
            "The split ratio must be in [0, 1]"
        );
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ix = (0..self.records.len()).collect::<Vec<_>>();
        ix.shuffle(&mut rng);

        let n_train = (self.records.len() as f64 * ratio).round() as usize;
        let (train_ix, test_ix) = ix.split_at(n_train);

        (self.subset(train_ix), self.subset(test_ix))
    }


    /// Returns a sample holding the records at `ix`.
    pub fn subset(&self, ix: &[usize]) -> Sample {
        let records = ix.iter()
            .map(|&i| self.records[i].clone())
            .collect::<Vec<_>>();
        Sample { schema: self.schema.clone(), records }
    }
}


/// Returns the string form of each cell of `series`.
fn symbols_of(series: &Series) -> Result<Vec<String>> {
    let series = series.cast(&DataType::Utf8)?;
    let symbols = series.utf8()?
        .into_iter()
        .map(|x| x.unwrap_or(MISSING_SYMBOL).to_string())
        .collect::<Vec<_>>();
    Ok(symbols)
}
