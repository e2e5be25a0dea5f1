use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Cubic Bezier curve defined by four control points.
///
/// `t` is expected in `[0, 1]`. Values outside that range are not an error:
/// the polynomial simply extrapolates past the end points, so callers that
/// need the curve itself should clamp first.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub points: [Vec3; 4],
}

impl CubicBezier {
    pub const fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// The S-shaped road the car drives along
    pub const fn road() -> Self {
        Self::new(
            Vec3::new(-50.0, 0.0, 0.0),
            Vec3::new(-25.0, 0.0, 0.0),
            Vec3::new(25.0, 0.0, 50.0),
            Vec3::new(50.0, 0.0, 50.0),
        )
    }

    pub fn position(&self, t: f32) -> Vec3 {
        let [p0, p1, p2, p3] = self.points;
        let u = 1.0 - t;
        let uu = u * u;
        let tt = t * t;

        p0 * (uu * u) + p1 * (3.0 * uu * t) + p2 * (3.0 * u * tt) + p3 * (tt * t)
    }

    /// First derivative with respect to `t` (not normalized)
    pub fn derivative(&self, t: f32) -> Vec3 {
        let [p0, p1, p2, p3] = self.points;
        let u = 1.0 - t;
        let uu = u * u;
        let tt = t * t;

        p0 * (-3.0 * uu)
            + p1 * (3.0 * (uu - 2.0 * u * t))
            + p2 * (3.0 * (2.0 * u * t - tt))
            + p3 * (3.0 * tt)
    }

    /// Unit direction of travel at `t`.
    ///
    /// Returns `Vec3::ZERO` where the derivative vanishes (coincident control
    /// points); the road curve has no such point.
    pub fn tangent(&self, t: f32) -> Vec3 {
        self.derivative(t).normalize_or_zero()
    }

    /// Unit vector lying in the ground plane, perpendicular to the tangent.
    /// Points to the right of the direction of travel.
    pub fn horizontal_normal(&self, t: f32) -> Vec3 {
        self.tangent(t).cross(Vec3::Y).normalize_or_zero()
    }

    pub fn sample_at(&self, t: f32) -> CurveSample {
        CurveSample {
            t,
            position: self.position(t),
            tangent: self.tangent(t),
            normal: self.horizontal_normal(t),
        }
    }

    /// Samples `segments + 1` evenly spaced parameters from 0 to 1 inclusive
    pub fn sample(&self, segments: usize) -> impl Iterator<Item = CurveSample> + '_ {
        (0..=segments).map(move |i| self.sample_at(i as f32 / segments.max(1) as f32))
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::road()
    }
}

/// Position and local frame of the curve at one parameter value
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveSample {
    pub t: f32,
    pub position: Vec3,
    pub tangent: Vec3,
    pub normal: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_interpolates_end_points() {
        let curve = CubicBezier::road();
        assert_eq!(curve.position(0.0), Vec3::new(-50.0, 0.0, 0.0));
        assert_eq!(curve.position(1.0), Vec3::new(50.0, 0.0, 50.0));
    }

    #[test]
    fn test_position_midpoint_of_symmetric_curve() {
        // Road curve is point-symmetric around (0, 0, 25)
        let curve = CubicBezier::road();
        let mid = curve.position(0.5);
        assert_relative_eq!(mid.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(mid.z, 25.0, epsilon = 1e-5);
    }

    #[test]
    fn test_derivative_at_start_points_to_second_control_point() {
        let curve = CubicBezier::road();
        // B'(0) = 3 (P1 - P0)
        assert_eq!(curve.derivative(0.0), Vec3::new(75.0, 0.0, 0.0));
        // B'(1) = 3 (P3 - P2)
        assert_eq!(curve.derivative(1.0), Vec3::new(75.0, 0.0, 0.0));
    }

    #[test]
    fn test_tangent_is_unit_length() {
        let curve = CubicBezier::road();
        for sample in curve.sample(64) {
            assert_relative_eq!(sample.tangent.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_degenerate_curve_has_zero_tangent() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let curve = CubicBezier::new(p, p, p, p);
        assert_eq!(curve.tangent(0.5), Vec3::ZERO);
        assert!(!curve.horizontal_normal(0.5).is_nan());
    }

    #[test]
    fn test_horizontal_normal_is_flat_and_perpendicular() {
        let curve = CubicBezier::road();
        for sample in curve.sample(20) {
            assert_relative_eq!(sample.normal.y, 0.0, epsilon = 1e-6);
            assert_relative_eq!(sample.normal.dot(sample.tangent), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_extrapolates_outside_unit_range() {
        let curve = CubicBezier::road();
        let before = curve.position(-0.1);
        assert!(before.x < -50.0);
    }

    #[test]
    fn test_sample_includes_both_ends() {
        let curve = CubicBezier::road();
        let samples: Vec<_> = curve.sample(4).collect();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0].t, 0.0);
        assert_eq!(samples[4].t, 1.0);
    }
}
