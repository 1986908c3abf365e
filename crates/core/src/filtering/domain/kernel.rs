use crate::shared::error::FilterError;

/// A 3x3 convolution kernel with a separate scalar multiplier.
///
/// Coefficients are row-major and centered on the target pixel: entry
/// `(dy + 1) * 3 + (dx + 1)` weights the neighbor at offset `(dx, dy)`,
/// `dx, dy` in `{-1, 0, 1}`. The multiplier scales every coefficient
/// uniformly; it is the usual normalization slot (1/9 for a box blur).
/// Passing pre-scaled coefficients with multiplier 1.0 produces identical
/// results to passing the raw kernel plus the multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kernel3x3 {
    coefficients: [f32; 9],
    multiplier: f32,
}

impl Kernel3x3 {
    /// Builds a kernel, rejecting any NaN or infinite value.
    pub fn new(coefficients: [f32; 9], multiplier: f32) -> Result<Self, FilterError> {
        for (index, &value) in coefficients.iter().enumerate() {
            if !value.is_finite() {
                return Err(FilterError::NonFiniteCoefficient { index, value });
            }
        }
        if !multiplier.is_finite() {
            return Err(FilterError::NonFiniteMultiplier { value: multiplier });
        }
        Ok(Self {
            coefficients,
            multiplier,
        })
    }

    /// Builds a kernel whose coefficients already carry their normalization.
    pub fn pre_scaled(coefficients: [f32; 9]) -> Result<Self, FilterError> {
        Self::new(coefficients, 1.0)
    }

    pub fn coefficients(&self) -> &[f32; 9] {
        &self.coefficients
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Coefficients with the multiplier folded in, ready for the inner loop.
    ///
    /// Each coefficient is multiplied exactly once, so a pre-scaled kernel
    /// and a (kernel, multiplier) pair that agree numerically yield
    /// bitwise-equal effective coefficients.
    pub fn effective(&self) -> [f32; 9] {
        self.coefficients.map(|c| c * self.multiplier)
    }

    /// No-op kernel: output equals input.
    pub fn identity() -> Self {
        Self {
            coefficients: [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
            multiplier: 1.0,
        }
    }

    /// Uniform 3x3 average.
    pub fn box_blur() -> Self {
        Self {
            coefficients: [1.0; 9],
            multiplier: 1.0 / 9.0,
        }
    }

    /// 3x3 Gaussian approximation (binomial weights).
    pub fn gaussian_blur() -> Self {
        Self {
            coefficients: [1.0, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 1.0],
            multiplier: 1.0 / 16.0,
        }
    }

    /// 4-neighbor unsharp kernel.
    pub fn sharpen() -> Self {
        Self {
            coefficients: [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0],
            multiplier: 1.0,
        }
    }

    /// 8-connectivity Laplacian; uniform areas go to zero.
    pub fn edge_detect() -> Self {
        Self {
            coefficients: [-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0],
            multiplier: 1.0,
        }
    }

    /// Diagonal relief effect.
    pub fn emboss() -> Self {
        Self {
            coefficients: [-2.0, -1.0, 0.0, -1.0, 1.0, 1.0, 0.0, 1.0, 2.0],
            multiplier: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_effective_folds_multiplier() {
        let kernel = Kernel3x3::new([1.0; 9], 0.5).unwrap();
        for c in kernel.effective() {
            assert_relative_eq!(c, 0.5);
        }
    }

    #[test]
    fn test_pre_scaled_matches_multiplier_form() {
        let raw = [0.0, 1.0, 0.0, 1.0, 4.0, 1.0, 0.0, 1.0, 0.0];
        let with_multiplier = Kernel3x3::new(raw, 0.125).unwrap();
        let scaled = raw.map(|c| c * 0.125);
        let pre_scaled = Kernel3x3::pre_scaled(scaled).unwrap();
        assert_eq!(with_multiplier.effective(), pre_scaled.effective());
    }

    #[rstest]
    #[case(f32::NAN)]
    #[case(f32::INFINITY)]
    #[case(f32::NEG_INFINITY)]
    fn test_non_finite_coefficient_rejected(#[case] bad: f32) {
        let mut coefficients = [0.0f32; 9];
        coefficients[4] = bad;
        let err = Kernel3x3::new(coefficients, 1.0).unwrap_err();
        assert!(matches!(
            err,
            FilterError::NonFiniteCoefficient { index: 4, .. }
        ));
    }

    #[rstest]
    #[case(f32::NAN)]
    #[case(f32::INFINITY)]
    fn test_non_finite_multiplier_rejected(#[case] bad: f32) {
        let err = Kernel3x3::new([1.0; 9], bad).unwrap_err();
        assert!(matches!(err, FilterError::NonFiniteMultiplier { .. }));
    }

    #[test]
    fn test_identity_effective() {
        let effective = Kernel3x3::identity().effective();
        assert_eq!(effective[4], 1.0);
        let off_center: f32 = effective
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 4)
            .map(|(_, c)| c.abs())
            .sum();
        assert_eq!(off_center, 0.0);
    }

    #[rstest]
    #[case(Kernel3x3::box_blur())]
    #[case(Kernel3x3::gaussian_blur())]
    #[case(Kernel3x3::sharpen())]
    fn test_smoothing_and_sharpen_presets_preserve_brightness(#[case] kernel: Kernel3x3) {
        // Effective weights sum to 1, so uniform areas keep their level.
        let sum: f32 = kernel.effective().iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_edge_detect_zeroes_uniform_areas() {
        let sum: f32 = Kernel3x3::edge_detect().effective().iter().sum();
        assert_relative_eq!(sum, 0.0, epsilon = 1e-6);
    }
}
