use foundation::math::Vec3;

/// Quadratic Bézier curve: start, one pull point, end.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadraticBezier {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
}

impl QuadraticBezier {
    pub fn new(start: Vec3, control: Vec3, end: Vec3) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    pub fn point_at(&self, t: f64) -> Vec3 {
        let u = 1.0 - t;
        self.start * (u * u) + self.control * (2.0 * u * t) + self.end * (t * t)
    }

    /// Unit tangent. Degenerate curves (all control points coincident) yield
    /// the zero vector.
    pub fn tangent_at(&self, t: f64) -> Vec3 {
        let d = (self.control - self.start) * (2.0 * (1.0 - t))
            + (self.end - self.control) * (2.0 * t);
        d.normalize()
    }

    /// `segments + 1` points at uniform parameter steps from 0 to 1.
    pub fn sample(&self, segments: usize) -> Vec<Vec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|k| self.point_at(k as f64 / segments as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::QuadraticBezier;
    use foundation::math::Vec3;

    fn arc() -> QuadraticBezier {
        QuadraticBezier::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(5.0, 10.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        )
    }

    #[test]
    fn endpoints_are_exact() {
        let c = arc();
        assert_eq!(c.point_at(0.0), c.start);
        assert_eq!(c.point_at(1.0), c.end);
    }

    #[test]
    fn midpoint_mixes_the_control() {
        let c = arc();
        // B(0.5) = s/4 + c/2 + e/4
        assert_eq!(c.point_at(0.5), Vec3::new(5.0, 5.0, 0.0));
    }

    #[test]
    fn tangent_leaves_toward_the_control() {
        let c = arc();
        let t0 = c.tangent_at(0.0);
        let toward_control = (c.control - c.start).normalize();
        assert!((t0 - toward_control).length() < 1e-12);
    }

    #[test]
    fn sample_is_inclusive_of_both_ends() {
        let pts = arc().sample(4);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], arc().start);
        assert_eq!(*pts.last().unwrap(), arc().end);
    }
}
