// Note: several tests log through the `log` facade; nothing is printed
// unless a logger is installed.

mod approx_equal;
mod test_transform;
