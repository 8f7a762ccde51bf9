use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};
use crate::math::vector::argmax;
use crate::network::network::Network;

/// Square matrix of `(predicted, actual)` class counts.
///
/// `counts[p][a]` is the number of samples predicted as class `p` whose
/// target's arg-max is class `a`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    counts: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    pub fn new(classes: usize) -> Self {
        ConfusionMatrix {
            counts: vec![vec![0; classes]; classes],
        }
    }

    /// Wraps existing counts; the matrix must be square.
    pub fn from_counts(counts: Vec<Vec<usize>>) -> Result<Self> {
        let n = counts.len();
        if let Some(row) = counts.iter().find(|row| row.len() != n) {
            return Err(NetError::shape("confusion matrix row", n, row.len()));
        }
        Ok(ConfusionMatrix { counts })
    }

    /// Runs every sample through `network` and tallies its prediction.
    pub fn evaluate(network: &mut Network, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<Self> {
        network.check_dataset(inputs, targets)?;
        let mut matrix = ConfusionMatrix::new(network.output_size());
        for (input, target) in inputs.iter().zip(targets) {
            let predicted = network.classify(input).index;
            let actual = argmax(target).map_or(0, |(i, _)| i);
            matrix.record(predicted, actual)?;
        }
        Ok(matrix)
    }

    /// Tallies one sample. Both indices must be below `classes()`.
    pub fn record(&mut self, predicted: usize, actual: usize) -> Result<()> {
        let classes = self.classes();
        if let Some(&idx) = [predicted, actual].iter().find(|&&idx| idx >= classes) {
            return Err(NetError::shape("confusion matrix class", classes, idx));
        }
        self.counts[predicted][actual] += 1;
        Ok(())
    }

    pub fn classes(&self) -> usize {
        self.counts.len()
    }

    pub fn counts(&self) -> &[Vec<usize>] {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Fraction of samples on the diagonal; 0 for an empty matrix.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: usize = (0..self.classes()).map(|i| self.counts[i][i]).sum();
        correct as f64 / total as f64
    }

    /// Macro precision. Classes never predicted contribute 0 but still count
    /// toward the average.
    pub fn precision(&self) -> f64 {
        let n = self.classes();
        if n == 0 {
            return 0.0;
        }
        let sum: f64 = (0..n)
            .filter_map(|i| {
                let predicted: usize = self.counts[i].iter().sum();
                (predicted != 0).then(|| self.counts[i][i] as f64 / predicted as f64)
            })
            .sum();
        sum / n as f64
    }

    /// Macro recall. Classes absent from the targets contribute 0 but still
    /// count toward the average.
    pub fn recall(&self) -> f64 {
        let n = self.classes();
        if n == 0 {
            return 0.0;
        }
        let sum: f64 = (0..n)
            .filter_map(|j| {
                let actual: usize = self.counts.iter().map(|row| row[j]).sum();
                (actual != 0).then(|| self.counts[j][j] as f64 / actual as f64)
            })
            .sum();
        sum / n as f64
    }

    /// Harmonic mean of precision and recall; 0 when both are 0.
    pub fn f_measure(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        if p + r == 0.0 {
            return 0.0;
        }
        2.0 * p * r / (p + r)
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion matrix (rows = predicted, cols = actual):")?;
        for row in &self.counts {
            let cells: Vec<String> = row.iter().map(|c| format!("{c:>5}")).collect();
            writeln!(f, "  {}", cells.join(" "))?;
        }
        write!(
            f,
            "precision {:.4}, recall {:.4}, F-measure {:.4}",
            self.precision(),
            self.recall(),
            self.f_measure()
        )
    }
}
