/// Returns `n` evenly spaced samples over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i + 1 == n { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn includes_both_ends() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(100.0, 460.0, 2), vec![100.0, 460.0]);
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert!(linspace(3.0, 7.0, 0).is_empty());
    }

    #[test]
    fn descending() {
        assert_eq!(linspace(2.0, 0.0, 3), vec![2.0, 1.0, 0.0]);
    }
}
