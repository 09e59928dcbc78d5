use minitrie::prelude::*;
use minitrie::ProbabilityNode;
use proptest::prelude::*;



/// Property tests over randomly generated slices.
#[cfg(test)]
pub mod properties_tests {
    use super::*;

    fn record() -> impl Strategy<Value = Vec<String>> {
        ("[a-c]", "(NA|[a-c])", "(yes|no)")
            .prop_map(|(a, b, label)| vec![a, b, label])
    }


    fn slice() -> impl Strategy<Value = Vec<Vec<String>>> {
        prop::collection::vec(record(), 0..24)
    }


    fn partial() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("(NA|[a-e])", 0..=2)
    }


    fn sorted_paths(trie: &FrequencyTrie) -> Vec<(Vec<String>, u64)> {
        let mut paths = trie.paths();
        paths.sort();
        paths
    }


    fn check_conservation(node: &ProbabilityNode) -> bool {
        let through = node.children().iter()
            .map(|c| c.count())
            .sum::<u64>();
        let conserved = if node.children().is_empty() || through != node.count() {
            true
        } else {
            let total = node.children().iter()
                .map(|c| c.probability())
                .sum::<f64>();
            (total - 1.0).abs() < 1e-9
        };
        conserved && node.children().iter().all(check_conservation)
    }


    proptest! {
        #[test]
        fn merge_is_associative(a in slice(), b in slice(), c in slice()) {
            let schema = Schema::with_arity(2);
            let a = build(&schema, &a).unwrap();
            let b = build(&schema, &b).unwrap();
            let c = build(&schema, &c).unwrap();

            let left = merge(&merge(&a, &b).unwrap(), &c).unwrap();
            let right = merge(&a, &merge(&b, &c).unwrap()).unwrap();
            prop_assert_eq!(sorted_paths(&left), sorted_paths(&right));
            prop_assert_eq!(left.n_records(), right.n_records());
        }


        #[test]
        fn merge_equals_a_single_build(a in slice(), b in slice()) {
            let schema = Schema::with_arity(2);
            let merged = merge(
                &build(&schema, &a).unwrap(),
                &build(&schema, &b).unwrap(),
            ).unwrap();
            let whole = build(&schema, a.iter().chain(b.iter())).unwrap();
            prop_assert_eq!(sorted_paths(&merged), sorted_paths(&whole));
        }


        #[test]
        fn merge_is_commutative_on_counts(a in slice(), b in slice()) {
            let schema = Schema::with_arity(2);
            let a = build(&schema, &a).unwrap();
            let b = build(&schema, &b).unwrap();
            prop_assert_eq!(
                sorted_paths(&merge(&a, &b).unwrap()),
                sorted_paths(&merge(&b, &a).unwrap()),
            );
        }


        #[test]
        fn probabilities_are_conserved(records in slice()) {
            let schema = Schema::with_arity(2);
            let trie = annotate(&build(&schema, &records).unwrap());
            prop_assert!(check_conservation(trie.root()));
        }


        #[test]
        fn classifier_is_total(records in slice(), partial in partial()) {
            let schema = Schema::with_arity(2);
            let trie = annotate(&build(&schema, &records).unwrap());

            let label = trie.decide(&partial, "default").unwrap();
            let observed = records.iter().any(|r| r[2] == label);
            prop_assert!(label == "default" || observed);
        }


        #[test]
        fn re_annotation_is_idempotent(records in slice()) {
            let schema = Schema::with_arity(2);
            let once = annotate(&build(&schema, &records).unwrap());
            let twice = annotate(&once.counts());
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(annotate(&twice.counts()), twice);
        }
    }
}
