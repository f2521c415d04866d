///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of floats with a certain tolerance.
///Two FPAs are considered equal if they are within a certain tolerance of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, epsilon = 1e-9, ulps = 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_rounding_only() {
        assert_eq!(FPA(0.1 + 0.2), FPA(0.3));
        assert_ne!(FPA(1.0), FPA(1.0 + 1e-6));
    }
}
