use crate::{Schema, Sample};
use crate::errors::Result;
use super::node::FrequencyTrie;


/// Build a [`FrequencyTrie`] from `records`.
///
/// For each record, the path from the root is created as needed
/// and every visited node's count is incremented, root included.
/// An empty input gives a root with count `0` and no children.
///
/// Returns [`TrieError::SchemaMismatch`](crate::TrieError::SchemaMismatch)
/// if a record does not have `schema.record_len()` symbols.
///
/// # Example
/// ```
/// use minitrie::{build, Schema};
///
/// let schema = Schema::with_arity(2);
/// let records = vec![
///     vec!["A", "X", "yes"],
///     vec!["A", "Y", "no"],
///     vec!["A", "X", "yes"],
/// ];
/// let trie = build(&schema, &records).unwrap();
/// assert_eq!(trie.n_records(), 3);
/// assert_eq!(trie.count_at(&["A", "X", "yes"]), 2);
/// ```
pub fn build<I, R, S>(schema: &Schema, records: I) -> Result<FrequencyTrie>
    where I: IntoIterator<Item = R>,
          R: AsRef<[S]>,
          S: AsRef<str>,
{
    let mut trie = FrequencyTrie::new(schema.clone());
    for record in records {
        trie.insert(record.as_ref())?;
    }
    Ok(trie)
}


impl FrequencyTrie {
    /// Build a trie from `records`. See [`build`].
    #[inline]
    pub fn build<I, R, S>(schema: &Schema, records: I) -> Result<Self>
        where I: IntoIterator<Item = R>,
              R: AsRef<[S]>,
              S: AsRef<str>,
    {
        build(schema, records)
    }


    /// Build a trie from every record of `sample`.
    #[inline]
    pub fn from_sample(sample: &Sample) -> Result<Self> {
        build(sample.schema(), sample.records())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_an_empty_root() {
        let schema = Schema::with_arity(3);
        let records: Vec<Vec<&str>> = Vec::new();
        let trie = build(&schema, &records).unwrap();

        assert_eq!(trie.n_records(), 0);
        assert!(trie.root().is_leaf());
    }


    #[test]
    fn root_count_equals_number_of_records() {
        let schema = Schema::with_arity(2);
        let records = vec![
            vec!["A", "X", "yes"],
            vec!["A", "Y", "no"],
            vec!["B", "X", "yes"],
        ];
        let trie = build(&schema, &records).unwrap();

        assert_eq!(trie.n_records(), 3);
        assert_eq!(trie.count_at(&["A"]), 2);
        assert_eq!(trie.count_at(&["B", "X", "yes"]), 1);
    }


    #[test]
    fn a_bad_record_fails_the_whole_build() {
        let schema = Schema::with_arity(2);
        let records = vec![
            vec!["A", "X", "yes"],
            vec!["A", "no"],
        ];
        assert!(build(&schema, &records).is_err());
    }
}
