/// Element-wise sum; the result has the length of the shorter operand.
pub fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

/// Index and value of the largest element. Ties keep the lowest index.
///
/// Starts from the first element rather than zero, so an all-negative
/// vector still reports its true maximum.
pub fn argmax(v: &[f64]) -> Option<(usize, f64)> {
    let (&first, rest) = v.split_first()?;
    let mut best = (0, first);
    for (i, &x) in rest.iter().enumerate() {
        if x > best.1 {
            best = (i + 1, x);
        }
    }
    Some(best)
}
