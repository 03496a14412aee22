use fastrand::Rng;

/// Produces the per-tick `(d_lat, d_lon)` offset for the simulated drone.
pub trait DeltaSource: Send {
    fn next_delta(&mut self, step: f64) -> (f64, f64);
}

/// Uniform random walk in `[-step, step]` on both axes.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    rng: Rng,
}

impl RandomWalk {
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    fn sample(&mut self, step: f64) -> f64 {
        (self.rng.f64() - 0.5) * 2.0 * step
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self::new()
    }
}

impl DeltaSource for RandomWalk {
    fn next_delta(&mut self, step: f64) -> (f64, f64) {
        let d_lat = self.sample(step);
        let d_lon = self.sample(step);
        (d_lat, d_lon)
    }
}

/// Always returns the same offset, ignoring the configured step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDelta {
    pub d_lat: f64,
    pub d_lon: f64,
}

impl FixedDelta {
    pub fn new(d_lat: f64, d_lon: f64) -> Self {
        Self { d_lat, d_lon }
    }
}

impl DeltaSource for FixedDelta {
    fn next_delta(&mut self, _step: f64) -> (f64, f64) {
        (self.d_lat, self.d_lon)
    }
}

/// Compass heading of a movement vector, in `[0, 360)`.
pub fn heading_from_offset(d_lat: f64, d_lon: f64) -> f64 {
    let mut heading = d_lon.atan2(d_lat).to_degrees();
    if heading < 0.0 {
        heading += 360.0;
    }
    // tiny negative angles round up to exactly 360
    if heading >= 360.0 {
        heading = 0.0;
    }
    // fold -0.0 into +0.0
    if heading == 0.0 {
        heading = 0.0;
    }
    heading
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn cardinal_headings() {
        assert!((heading_from_offset(0.0, 1.0) - 90.0).abs() < EPS);
        assert!((heading_from_offset(1.0, 0.0) - 0.0).abs() < EPS);
        assert!((heading_from_offset(-1.0, 0.0) - 180.0).abs() < EPS);
        assert!((heading_from_offset(0.0, -1.0) - 270.0).abs() < EPS);
        assert!((heading_from_offset(1.0, -1.0) - 315.0).abs() < EPS);
    }

    #[test]
    fn degenerate_offsets_stay_in_range() {
        for (d_lat, d_lon) in [(0.0, 0.0), (-0.0, -0.0), (1.0, -1e-300), (-1.0, -0.0)] {
            let heading = heading_from_offset(d_lat, d_lon);
            assert!((0.0..360.0).contains(&heading), "{heading}");
            assert!(heading.is_sign_positive());
        }
    }

    #[test]
    fn negative_zero_heading_is_folded() {
        let heading = heading_from_offset(1.0, -0.0);
        assert_eq!(heading, 0.0);
        assert!(heading.is_sign_positive());
    }

    #[test]
    fn random_walk_respects_step() {
        let mut walk = RandomWalk::with_seed(7);
        for _ in 0..1000 {
            let (d_lat, d_lon) = walk.next_delta(0.00005);
            assert!(d_lat.abs() <= 0.00005);
            assert!(d_lon.abs() <= 0.00005);
        }
    }

    #[test]
    fn seeded_walks_repeat() {
        let mut a = RandomWalk::with_seed(42);
        let mut b = RandomWalk::with_seed(42);
        for _ in 0..16 {
            assert_eq!(a.next_delta(1.0), b.next_delta(1.0));
        }
    }
}
