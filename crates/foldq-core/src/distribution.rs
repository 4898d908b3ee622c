//! Measurement distributions.

use serde::Serialize;
use std::collections::BTreeMap;

use foldq_hal::Counts;

use crate::error::{AnalyzerError, CoreResult};

/// Probability distribution over measured bitstrings.
///
/// Keys are ordered lexicographically. Probabilities are raw counts divided
/// by the shot total, so they sum to 1 up to rounding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementDistribution {
    num_qubits: u32,
    shots: u64,
    counts: BTreeMap<String, u64>,
    probabilities: BTreeMap<String, f64>,
}

impl MeasurementDistribution {
    /// Normalize `counts` from a run of `shots` on `num_qubits` qubits.
    ///
    /// # Errors
    ///
    /// [`AnalyzerError::SimulationFailed`] when the counts are empty, do not
    /// add up to `shots`, or contain a key that is not a bitstring of length
    /// `num_qubits`.
    pub fn from_counts(counts: &Counts, num_qubits: u32, shots: u64) -> CoreResult<Self> {
        if counts.is_empty() {
            return Err(AnalyzerError::SimulationFailed(
                "simulator returned no outcomes".into(),
            ));
        }

        let total = counts.total_shots();
        if total != shots {
            return Err(AnalyzerError::SimulationFailed(format!(
                "simulator returned {total} outcomes for {shots} shots"
            )));
        }

        let width = num_qubits as usize;
        if let Some((bad, _)) = counts
            .iter()
            .find(|(b, _)| b.len() != width || !b.bytes().all(|c| c == b'0' || c == b'1'))
        {
            return Err(AnalyzerError::SimulationFailed(format!(
                "outcome '{bad}' is not a {width}-bit string"
            )));
        }

        let counts: BTreeMap<String, u64> = counts.iter().map(|(b, n)| (b.clone(), *n)).collect();
        let probabilities = counts
            .iter()
            .map(|(b, n)| (b.clone(), *n as f64 / shots as f64))
            .collect();

        Ok(Self {
            num_qubits,
            shots,
            counts,
            probabilities,
        })
    }

    /// Bitstring width.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of shots the distribution was built from.
    pub fn shots(&self) -> u64 {
        self.shots
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// True if no outcome was recorded.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Probability of `bitstring` (0 if never measured).
    pub fn probability(&self, bitstring: &str) -> f64 {
        self.probabilities.get(bitstring).copied().unwrap_or(0.0)
    }

    /// Raw count of `bitstring`.
    pub fn count(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// `(bitstring, probability)` in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probabilities.iter().map(|(b, p)| (b.as_str(), *p))
    }

    /// Sum of all probabilities.
    pub fn total_probability(&self) -> f64 {
        self.probabilities.values().sum()
    }

    /// The most probable outcome; ties go to the smallest bitstring.
    pub fn most_probable(&self) -> Option<(&str, f64)> {
        // Lexicographic iteration plus a strict comparison keeps the
        // smallest bitstring among equal maxima.
        self.iter().fold(None, |best, (b, p)| match best {
            Some((_, bp)) if p <= bp => best,
            _ => Some((b, p)),
        })
    }

    /// The `n` most probable outcomes as `(bitstring, count, probability)`,
    /// ties in lexicographic order.
    pub fn top(&self, n: usize) -> Vec<(&str, u64, f64)> {
        let mut rows: Vec<_> = self
            .counts
            .iter()
            .map(|(b, c)| (b.as_str(), *c, self.probability(b)))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows.truncate(n);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> Counts {
        pairs.iter().map(|(b, n)| (b.to_string(), *n)).collect()
    }

    #[test]
    fn test_normalizes() {
        let d = MeasurementDistribution::from_counts(&counts(&[("00", 3), ("11", 1)]), 2, 4).unwrap();
        assert_eq!(d.probability("00"), 0.75);
        assert_eq!(d.probability("11"), 0.25);
        assert_eq!(d.probability("01"), 0.0);
        assert_eq!(d.count("00"), 3);
        assert!((d.total_probability() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tie_break_smallest_bitstring() {
        let d = MeasurementDistribution::from_counts(
            &counts(&[("110", 4), ("011", 4), ("000", 2)]),
            3,
            10,
        )
        .unwrap();
        assert_eq!(d.most_probable(), Some(("011", 0.4)));
    }

    #[test]
    fn test_top() {
        let d = MeasurementDistribution::from_counts(
            &counts(&[("10", 2), ("01", 5), ("11", 2), ("00", 1)]),
            2,
            10,
        )
        .unwrap();
        let top: Vec<&str> = d.top(3).into_iter().map(|(b, _, _)| b).collect();
        assert_eq!(top, ["01", "10", "11"]);
    }

    #[test]
    fn test_rejects_bad_counts() {
        let wrong_total = MeasurementDistribution::from_counts(&counts(&[("00", 3)]), 2, 4);
        assert!(matches!(wrong_total, Err(AnalyzerError::SimulationFailed(_))));

        let wrong_width = MeasurementDistribution::from_counts(&counts(&[("000", 4)]), 2, 4);
        assert!(matches!(wrong_width, Err(AnalyzerError::SimulationFailed(_))));

        let not_bits = MeasurementDistribution::from_counts(&counts(&[("0x", 4)]), 2, 4);
        assert!(matches!(not_bits, Err(AnalyzerError::SimulationFailed(_))));

        let empty = MeasurementDistribution::from_counts(&Counts::new(), 2, 4);
        assert!(matches!(empty, Err(AnalyzerError::SimulationFailed(_))));
    }
}
