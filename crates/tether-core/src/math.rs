//! Scalar helpers for the camera smoothing model

use crate::types::FovAxis;

/// Default tolerance for [`almost_equal`]
pub const DEFAULT_EPSILON: f32 = 0.0001;

/// Move `from` toward `to` by `fraction`, with the fraction clamped to `[0, 1]`.
///
/// Feeding `dt * rate` as the fraction gives a frame-rate dependent exponential
/// decay; the clamp keeps long frames from overshooting the target.
#[inline]
pub fn lerp_to(from: f32, to: f32, fraction: f32) -> f32 {
    let t = fraction.clamp(0.0, 1.0);
    from + (to - from) * t
}

/// Check whether two values are within `epsilon` of each other
#[inline]
pub fn almost_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Convert a field-of-view preference (degrees) to a vertical field of view
/// (degrees) for the given viewport aspect ratio (width / height).
pub fn vertical_fov(preference: f32, axis: FovAxis, aspect_ratio: f32) -> f32 {
    if aspect_ratio <= 0.0 {
        return preference;
    }

    let half = (preference * 0.5).to_radians().tan();
    let divisor = match axis {
        FovAxis::Horizontal => aspect_ratio,
        FovAxis::Diagonal => (1.0 + aspect_ratio * aspect_ratio).sqrt(),
    };

    (half / divisor).atan().to_degrees() * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_to_clamps_fraction() {
        assert_eq!(lerp_to(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp_to(0.0, 10.0, 3.0), 10.0);
        assert_eq!(lerp_to(0.0, 10.0, -1.0), 0.0);
    }

    #[test]
    fn test_lerp_to_target_is_fixed_point() {
        assert_eq!(lerp_to(42.0, 42.0, 0.3), 42.0);
    }

    #[test]
    fn test_almost_equal() {
        assert!(almost_equal(1.0, 1.00005, DEFAULT_EPSILON));
        assert!(!almost_equal(1.0, 1.001, DEFAULT_EPSILON));
    }

    #[test]
    fn test_vertical_fov_square_viewport() {
        let fov = vertical_fov(90.0, FovAxis::Horizontal, 1.0);
        assert!((fov - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_vertical_fov_widescreen_is_narrower() {
        let fov = vertical_fov(90.0, FovAxis::Horizontal, 16.0 / 9.0);
        assert!((fov - 58.7155).abs() < 1e-2);
    }

    #[test]
    fn test_vertical_fov_diagonal_is_narrower_than_horizontal() {
        let horizontal = vertical_fov(90.0, FovAxis::Horizontal, 16.0 / 9.0);
        let diagonal = vertical_fov(90.0, FovAxis::Diagonal, 16.0 / 9.0);
        assert!(diagonal < horizontal);
    }

    #[test]
    fn test_vertical_fov_degenerate_aspect() {
        assert_eq!(vertical_fov(75.0, FovAxis::Horizontal, 0.0), 75.0);
    }
}
