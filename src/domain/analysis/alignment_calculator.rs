//! Alignment Calculator - Aggregates element scores into one alignment score.

use crate::domain::foundation::{Fraction, SevenSElement};

/// Calculator for the aggregate alignment score.
pub struct AlignmentCalculator;

impl AlignmentCalculator {
    /// Computes the overall score as the arithmetic mean rounded to two decimals.
    ///
    /// # Edge Cases
    /// - Empty scores: Returns 0.0
    /// - Single score: Returns that score, rounded
    pub fn compute_overall(scores: &[f64]) -> f64 {
        if scores.is_empty() {
            return 0.0;
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        Self::round_to_hundredths(mean)
    }

    /// Rounds half away from zero at the second decimal.
    pub fn round_to_hundredths(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    /// Returns the lowest-scoring element. Ties go to the earlier element.
    pub fn weakest(scores: &[(SevenSElement, Fraction)]) -> Option<(SevenSElement, Fraction)> {
        scores.iter().copied().fold(None, |lowest, candidate| match lowest {
            Some(current) if current.1 <= candidate.1 => Some(current),
            _ => Some(candidate),
        })
    }

    /// Returns the highest-scoring element. Ties go to the earlier element.
    pub fn strongest(scores: &[(SevenSElement, Fraction)]) -> Option<(SevenSElement, Fraction)> {
        scores.iter().copied().fold(None, |highest, candidate| match highest {
            Some(current) if current.1 >= candidate.1 => Some(current),
            _ => Some(candidate),
        })
    }

    /// Returns the spread between strongest and weakest element.
    pub fn spread(scores: &[(SevenSElement, Fraction)]) -> f64 {
        match (Self::weakest(scores), Self::strongest(scores)) {
            (Some(low), Some(high)) => Self::round_to_hundredths(high.1.value() - low.1.value()),
            _ => 0.0,
        }
    }
}
