use glam::Vec2;

/// A single drifting orb in the ambient background field.
#[derive(Debug, Clone)]
pub struct Orb {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Glow radius in pixels, fixed at creation. Always positive.
    pub radius: f32,
}

impl Orb {
    /// Advance one frame and reflect off the surface edges.
    ///
    /// Position is moved first, then each axis that crossed its boundary has
    /// its velocity component inverted. The position itself is not clamped,
    /// so an orb may overshoot by at most one frame's displacement before
    /// drifting back in.
    pub fn step(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
        }
    }
}
