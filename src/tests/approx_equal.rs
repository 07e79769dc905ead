use approx::assert_abs_diff_eq;

/// Should pass if the two sample buffers agree sample-by-sample.
pub fn assert_similar(expected: &[f64], actual: &[f64]) {
    assert_eq!(expected.len(), actual.len(), "buffers differ in length");
    for (e, a) in expected.iter().zip(actual.iter()) {
        assert_abs_diff_eq!(e, a, epsilon = 1e-9);
    }
}
