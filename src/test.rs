/// Check two integral estimates for equality, allowing for the rounding
/// differences of summing in another order.
macro_rules! assert_integral_eq {
    ($actual:expr, $expected:expr) => {{
        approx::assert_relative_eq!($actual, $expected, epsilon = 1.0e-12, max_relative = 1.0e-9);
    }};
}
