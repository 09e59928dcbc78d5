//! The progressive loop.
//!
//! [`ProgressiveLearner`] folds data slices into an accumulated
//! frequency trie one at a time, re-annotates it after every slice
//! and evaluates it against a fixed test set.
//! [`ProgressiveBuilder`] configures it.

/// Defines `ProgressiveBuilder`.
mod builder;
/// Defines `ProgressiveLearner` and its states.
mod driver;
/// Console and CSV logging of the loop.
mod logger;
/// Defines the metrics emitted per slice.
mod report;


pub use builder::{ProgressiveBuilder, DEFAULT_PRINT_EVERY};
pub use driver::{ProgressiveLearner, LearnerState};
pub use report::IterationReport;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Schema, Mode};

    fn learner() -> ProgressiveLearner {
        ProgressiveBuilder::new()
            .schema(Schema::with_arity(2))
            .test_records([
                ["A", "X", "yes"],
                ["A", "Y", "no"],
                ["B", "X", "no"],
            ])
            .positive_label("yes")
            .print_every(usize::MAX)
            .build()
            .unwrap()
    }


    #[test]
    fn first_slice_becomes_the_accumulator() {
        let mut learner = learner();
        assert_eq!(learner.state(), LearnerState::Empty);
        assert!(learner.accumulator().is_none());

        let report = learner.advance(&[["A", "X", "yes"]]).unwrap();
        assert_eq!(report.iteration, 1);
        assert_eq!(report.total_records, 1);
        assert_eq!(learner.state(), LearnerState::Ready);
        assert_eq!(learner.accumulator().unwrap().n_records(), 1);
    }


    #[test]
    fn counts_of_earlier_slices_are_kept() {
        let mut learner = learner();
        learner.advance(&[["A", "X", "yes"], ["A", "Y", "no"]]).unwrap();
        learner.advance(&[["B", "X", "no"]]).unwrap();
        let report = learner.advance(&[["A", "X", "yes"]]).unwrap();

        assert_eq!(report.iteration, 3);
        assert_eq!(report.total_records, 4);
        assert_eq!(report.slice_records, 1);
        assert_eq!(report.accuracy, 1.0);

        let acc = learner.accumulator().unwrap();
        assert_eq!(acc.count_at(&["A", "X", "yes"]), 2);
        assert_eq!(acc.count_at(&["B"]), 1);
        assert_eq!(learner.history().len(), 3);
    }


    #[test]
    fn accuracy_improves_as_slices_arrive() {
        let mut learner = learner();
        let first = learner.advance(&[["A", "X", "yes"]]).unwrap().accuracy;
        let second = learner.advance(&[["A", "Y", "no"], ["B", "X", "no"]])
            .unwrap()
            .accuracy;
        assert!((first - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(second, 1.0);
    }


    #[test]
    fn malformed_slice_leaves_the_accumulator_untouched() {
        let mut learner = learner();
        learner.advance(&[["A", "X", "yes"]]).unwrap();
        assert!(learner.advance(&[["A", "yes"]]).is_err());

        assert_eq!(learner.accumulator().unwrap().n_records(), 1);
        assert_eq!(learner.history().len(), 1);
        assert_eq!(learner.state(), LearnerState::Ready);
    }


    #[test]
    fn classifier_reflects_the_last_slice() {
        let mut learner = learner();
        assert!(learner.classifier().is_none());
        learner.advance(&[["A", "X", "yes"]]).unwrap();

        let trie = learner.probability_trie().unwrap();
        let prediction = trie.classify(&["A", "X"], Mode::Decision, "NA").unwrap();
        assert_eq!(prediction.label(), Some("yes"));
    }


    #[test]
    fn run_returns_the_last_report() {
        let mut learner = learner();
        let slices = vec![
            vec![["A", "X", "yes"]],
            vec![["A", "Y", "no"]],
        ];
        let last = learner.run(&slices).unwrap().unwrap();
        assert_eq!(last.iteration, 2);
        assert_eq!(last.total_records, 2);

        let empty: Vec<Vec<[&str; 3]>> = Vec::new();
        assert!(learner.run(&empty).unwrap().is_none());
    }
}
