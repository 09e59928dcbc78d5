use std::env;
use minitrie::prelude::*;



/// Tests for `SampleReader` and `Slices`.
#[cfg(test)]
pub mod sample_tests {
    use super::*;

    fn titanic() -> Sample {
        let mut path = env::current_dir().unwrap();
        path.push("tests/dataset/titanic.csv");

        SampleReader::default()
            .file(path)
            .has_header(true)
            .attributes(["class", "sex", "age"])
            .target_feature("survived")
            .read()
            .unwrap()
    }


    #[test]
    fn read_titanic() {
        let sample = titanic();

        assert_eq!(sample.shape(), (48, 3));
        assert_eq!(sample.schema().attributes(), &["class", "sex", "age"]);
        assert_eq!(sample.schema().label(), "survived");
        assert_eq!(sample.distinct_labels(), vec!["yes", "no"]);
        assert_eq!(sample.records()[0], vec!["1st", "female", "child", "yes"]);
    }


    #[test]
    fn attributes_default_to_the_other_columns() {
        let mut path = env::current_dir().unwrap();
        path.push("tests/dataset/titanic.csv");

        let sample = SampleReader::default()
            .file(path)
            .has_header(true)
            .target_feature("survived")
            .read()
            .unwrap();
        assert_eq!(sample.schema(), titanic().schema());
    }


    #[test]
    fn unknown_target_is_reported() {
        let mut path = env::current_dir().unwrap();
        path.push("tests/dataset/titanic.csv");

        let err = SampleReader::default()
            .file(path)
            .has_header(true)
            .attributes(["class", "sex"])
            .target_feature("fare")
            .read()
            .unwrap_err();
        assert!(matches!(err, TrieError::MissingColumn(name) if name == "fare"));
    }


    #[test]
    fn target_must_be_set() {
        let mut path = env::current_dir().unwrap();
        path.push("tests/dataset/titanic.csv");

        let err = SampleReader::default()
            .file(path)
            .has_header(true)
            .read()
            .unwrap_err();
        match err {
            TrieError::Io(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::InvalidInput);
                assert!(e.to_string().contains("target_feature"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }


    #[test]
    fn slices_cover_the_sample_once() {
        let sample = titanic();
        let slices = Slices::new(&sample).n_slices(5);
        assert_eq!(slices.len(), 5);

        let sizes = slices.map(|slice| slice.len()).collect::<Vec<_>>();
        assert_eq!(sizes, vec![9, 10, 9, 10, 10]);

        let records = Slices::new(&sample)
            .n_slices(5)
            .flatten()
            .cloned()
            .collect::<Vec<_>>();
        assert_eq!(records, sample.records());
    }


    #[test]
    fn shuffled_slices_are_a_permutation() {
        let sample = titanic();
        let mut shuffled = Slices::new(&sample)
            .n_slices(4)
            .seed(42)
            .shuffle()
            .flatten()
            .cloned()
            .collect::<Vec<_>>();
        let mut original = sample.records().to_vec();

        shuffled.sort();
        original.sort();
        assert_eq!(shuffled, original);
    }


    #[test]
    fn trie_from_sample_counts_every_record() {
        let sample = titanic();
        let trie = FrequencyTrie::from_sample(&sample).unwrap();
        assert_eq!(trie.n_records(), 48);

        let first_class = sample.records()
            .iter()
            .filter(|r| r[0] == "1st")
            .count() as u64;
        assert_eq!(trie.count_at(&["1st"]), first_class);
    }
}
