use rand::Rng;
use serde::{Deserialize, Serialize};

/// Row-major dense matrix. Serializes as a plain nested array, `[[f64]]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Uniform samples in [0, 1).
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for row in res.data.iter_mut() {
            for x in row.iter_mut() {
                *x = rng.gen::<f64>();
            }
        }

        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix { data }
    }

    pub fn rows(&self) -> usize {
        self.data.len()
    }

    pub fn cols(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when every row has exactly `cols` entries.
    pub fn is_rectangular(&self, cols: usize) -> bool {
        self.data.iter().all(|row| row.len() == cols)
    }

    /// Matrix-vector product against values projected out of `items`.
    ///
    /// Lets the forward pass multiply directly against a layer's neurons
    /// without first collecting their activations into a temporary vector.
    pub fn dot_by<T, F>(&self, items: &[T], value: F) -> Vec<f64>
    where
        F: Fn(&T) -> f64,
    {
        self.data
            .iter()
            .map(|row| row.iter().zip(items).map(|(w, item)| w * value(item)).sum())
            .collect()
    }

    pub fn dot(&self, v: &[f64]) -> Vec<f64> {
        self.dot_by(v, |x| *x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_values_are_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random(8, 5, &mut rng);
        assert_eq!(m.rows(), 8);
        assert_eq!(m.cols(), 5);
        assert!(m.data.iter().flatten().all(|x| (0.0..1.0).contains(x)));
    }

    #[test]
    fn dot_multiplies_rows_against_vector() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![0.0, -1.0, 0.5]]);
        assert_eq!(m.dot(&[1.0, 1.0, 2.0]), vec![9.0, 0.0]);
    }

    #[test]
    fn serializes_as_nested_array() {
        let m = Matrix::from_data(vec![vec![0.5, 1.0]]);
        assert_eq!(serde_json::to_string(&m).unwrap(), "[[0.5,1.0]]");
    }

    #[test]
    fn empty_matrix_has_no_columns() {
        let m = Matrix::default();
        assert!(m.is_empty());
        assert_eq!(m.cols(), 0);
        assert!(m.is_rectangular(4));
    }
}
