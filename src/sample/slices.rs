use rand::prelude::*;
use rand::rngs::StdRng;
use colored::Colorize;

use crate::Record;
use super::sample_struct::Sample;

const WIDTH: usize = 9;


/// A struct that splits a sample into consecutive slices,
/// the data chunks the progressive loop consumes one at a time.
/// The slices are disjoint and cover every record.
/// # Example
/// ```no_run
/// use minitrie::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("titanic.csv")
///     .has_header(true)
///     .target_feature("survived")
///     .read()
///     .unwrap();
/// let (train, test) = sample.random_split(0.7, 42);
///
/// let mut learner = ProgressiveBuilder::new()
///     .test_sample(&test)
///     .build()
///     .unwrap();
///
/// let slices = Slices::new(&train)
///     .n_slices(10)
///     .seed(777)
///     .shuffle();
/// for slice in slices {
///     let report = learner.advance(&slice).unwrap();
///     println!("accuracy: {}", report.accuracy);
/// }
/// ```
pub struct Slices<'a> {
    current: usize,
    n_slices: usize,
    seed: u64,
    sample: &'a Sample,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> Slices<'a> {
    /// Construct a new instance of `Slices.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            current: 0,
            n_slices: 10,
            seed: 1234,
            verbose: false,
            sample,
            ix,
        }
    }


    /// Set the number of slices.
    /// Default value is `10.`
    #[inline]
    pub fn n_slices(mut self, n_slices: usize) -> Self {
        assert!(n_slices > 0, "The number of slices must be positive");
        self.n_slices = n_slices;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `Slices` prints the size of each slice it yields.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the records before slicing.
    /// By default, `Slices` keeps the sample order.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the records of the `i`th slice.
    /// Slice `i` holds positions `[i * n / k, (i + 1) * n / k)`.
    #[inline]
    fn slice_at(&self, i: usize) -> Vec<&'a Record> {
        let n_sample = self.ix.len();
        let start = i * n_sample / self.n_slices;
        let end = (i + 1) * n_sample / self.n_slices;
        let sample: &'a Sample = self.sample;
        let records = sample.records();
        self.ix[start..end].iter()
            .map(|&j| &records[j])
            .collect()
    }
}


impl<'a> Iterator for Slices<'a> {
    type Item = Vec<&'a Record>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.n_slices { return None; }

        let output = self.slice_at(self.current);
        self.current += 1;

        if self.verbose {
            println!(
                "{}    {}",
                format!("  [{: >3}'th slice]", self.current).bold().red(),
                format!("[RECORDS {:>WIDTH$}]", output.len()).bold().green(),
            );
        }

        Some(output)
    }


    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.n_slices - self.current;
        (rest, Some(rest))
    }
}


impl ExactSizeIterator for Slices<'_> {}
