/// Range of ray parameters accepted by an intersection test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub const fn new(min: f32, max: f32) -> Interval {
        Interval { min, max }
    }

    /// Strict containment. Every intersection test accepts roots with this,
    /// so a ray never hits the surface it starts on at `t == min`.
    pub fn surrounds(&self, t: f32) -> bool {
        self.min < t && t < self.max
    }

    pub fn clamp(&self, t: f32) -> f32 {
        t.max(self.min).min(self.max)
    }

    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }
}
