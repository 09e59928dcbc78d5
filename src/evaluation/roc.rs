use serde::{Serialize, Deserialize};

use std::cmp::Ordering;


/// A point of the receiver operating characteristic curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    /// The classification threshold.
    pub threshold: f64,
    /// The true positive rate for all scores >= threshold.
    pub true_positive_rate: f64,
    /// The false positive rate for all scores >= threshold.
    pub false_positive_rate: f64,
}


/// Computes the ROC curve by sweeping the decision threshold
/// over the distinct `scores`, from the largest to the smallest.
/// The curve starts at `(0, 0)` with a dummy threshold of `1.0`.
///
/// `positives[i]` tells whether the `i`th record has the positive label.
/// If the sample has no positive (negative) record,
/// the true (false) positive rate stays `0`.
///
/// # Panics
/// Panics if `scores` and `positives` have different lengths.
pub fn roc_curve(scores: &[f64], positives: &[bool]) -> Vec<RocPoint> {
    assert_eq!(
        scores.len(), positives.len(),
        "scores and labels must have the same length"
    );
    let n_positives = positives.iter().filter(|&&p| p).count();
    let n_negatives = positives.len() - n_positives;

    let rate = |n: usize, total: usize| {
        if total == 0 { 0.0 } else { n as f64 / total as f64 }
    };

    let mut curve = vec![RocPoint {
        threshold: 1.0,
        true_positive_rate: 0.0,
        false_positive_rate: 0.0,
    }];

    let (mut tp, mut fp) = (0_usize, 0_usize);
    for (threshold, tps, fps) in tps_fps_by_threshold(scores, positives) {
        tp += tps;
        fp += fps;
        curve.push(RocPoint {
            threshold,
            true_positive_rate: rate(tp, n_positives),
            false_positive_rate: rate(fp, n_negatives),
        });
    }
    curve
}


/// Computes the area under `curve` using the trapezoid method.
pub fn auc(curve: &[RocPoint]) -> f64 {
    curve.windows(2)
        .map(|w| {
            let (left, right) = (&w[0], &w[1]);
            let y_average = (left.true_positive_rate + right.true_positive_rate) / 2.0;
            let dx = right.false_positive_rate - left.false_positive_rate;
            y_average * dx
        })
        .sum()
}


/// Counts of true and false positives at each distinct threshold,
/// largest threshold first.
fn tps_fps_by_threshold(scores: &[f64], positives: &[bool])
    -> Vec<(f64, usize, usize)>
{
    let mut pairs = scores.iter()
        .copied()
        .zip(positives.iter().copied())
        .collect::<Vec<_>>();
    pairs.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let mut out: Vec<(f64, usize, usize)> = Vec::new();
    for (score, positive) in pairs {
        let (tp, fp) = if positive { (1, 0) } else { (0, 1) };
        match out.last_mut() {
            Some(last) if last.0 == score => {
                last.1 += tp;
                last.2 += fp;
            },
            _ => out.push((score, tp, fp)),
        }
    }
    out
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_and_area() {
        let positives = [true, true, false, false];
        let scores = [0.9, 0.4, 0.4, 0.2];
        let curve = roc_curve(&scores, &positives);

        let expected = vec![
            (1.0, 0.0, 0.0),
            (0.9, 0.5, 0.0),
            (0.4, 1.0, 0.5),
            (0.2, 1.0, 1.0),
        ];
        assert_eq!(curve.len(), expected.len());
        for (point, (thr, tpr, fpr)) in curve.iter().zip(expected) {
            assert_eq!(point.threshold, thr);
            assert_eq!(point.true_positive_rate, tpr);
            assert_eq!(point.false_positive_rate, fpr);
        }

        assert!((auc(&curve) - 0.875).abs() < 1e-12);
    }


    #[test]
    fn perfect_separation_has_unit_area() {
        let positives = [true, false, true, false];
        let scores = [0.8, 0.1, 0.7, 0.3];
        let curve = roc_curve(&scores, &positives);
        assert!((auc(&curve) - 1.0).abs() < 1e-12);
    }


    #[test]
    fn no_negative_record_keeps_rates_finite() {
        let curve = roc_curve(&[0.5, 0.2], &[true, true]);
        assert!(curve.iter().all(|p| p.false_positive_rate == 0.0));
        assert_eq!(auc(&curve), 0.0);
    }


    #[test]
    #[should_panic(expected = "scores and labels must have the same length")]
    fn scores_and_labels_must_pair_up() {
        roc_curve(&[0.9, 0.1], &[true]);
    }
}
