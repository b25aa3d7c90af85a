//! Ambient background field: eight drifting glow orbs with proximity edges.

use glam::Vec2;

use super::orb::Orb;
use super::Field;
use crate::core::clock::PulseClock;
use crate::core::rng::Rng;
use crate::renderer::color::Rgba;
use crate::renderer::draw;
use crate::renderer::surface::PixelSurface;

pub struct AmbientField {
    orbs: Vec<Orb>,
}

impl AmbientField {
    /// Fixed orb count for the lifetime of a mounted instance.
    pub const ORB_COUNT: usize = 8;
    /// Per-axis drift speed range, px per frame.
    pub const MAX_DRIFT: f32 = 0.25;
    /// Glow radius band, px.
    pub const MIN_RADIUS: f32 = 20.0;
    pub const MAX_RADIUS: f32 = 60.0;
    /// Pair distance below which a connecting edge is drawn, px.
    pub const EDGE_RANGE: f32 = 300.0;
    /// Edge opacity at zero distance.
    pub const EDGE_MAX_ALPHA: f32 = 0.3;
    /// Trailing-fade alpha composited over the previous frame.
    pub const FADE_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self { orbs: Vec::new() }
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    /// Opacity of the edge between two orbs at distance `d`.
    /// Linearly proportional to `1 - d / range`; zero at and beyond range.
    pub fn edge_alpha(d: f32) -> f32 {
        if d < Self::EDGE_RANGE {
            (1.0 - d / Self::EDGE_RANGE) * Self::EDGE_MAX_ALPHA
        } else {
            0.0
        }
    }

    fn orb_stops(&self) -> [(f32, Rgba); 3] {
        [
            (0.0, Rgba::rgb8(168, 85, 247).with_alpha(0.4)),
            (0.5, Rgba::rgb8(139, 92, 246).with_alpha(0.2)),
            (1.0, Rgba::rgb8(168, 85, 247).with_alpha(0.0)),
        ]
    }
}

impl Default for AmbientField {
    fn default() -> Self {
        Self::new()
    }
}

impl Field for AmbientField {
    fn init(&mut self, bounds: Vec2, rng: &mut Rng) {
        self.orbs.clear();
        for _ in 0..Self::ORB_COUNT {
            self.orbs.push(Orb {
                pos: Vec2::new(rng.range(0.0, bounds.x), rng.range(0.0, bounds.y)),
                vel: Vec2::new(
                    rng.range(-Self::MAX_DRIFT, Self::MAX_DRIFT),
                    rng.range(-Self::MAX_DRIFT, Self::MAX_DRIFT),
                ),
                radius: rng.range(Self::MIN_RADIUS, Self::MAX_RADIUS),
            });
        }
    }

    fn relayout(&mut self, _bounds: Vec2) {
        // Orb positions are free-moving state, not derived from the surface;
        // a resize only changes the bounds the next step reflects against.
    }

    fn update(&mut self, bounds: Vec2, _clock: &PulseClock) {
        for orb in &mut self.orbs {
            orb.step(bounds);
        }
    }

    fn render(&self, surface: &mut PixelSurface, _clock: &PulseClock) {
        surface.fill(Rgba::BLACK.with_alpha(Self::FADE_ALPHA));

        let stops = self.orb_stops();
        for orb in &self.orbs {
            draw::fill_radial_gradient(surface, orb.pos, orb.radius, &stops);
        }

        // O(n^2) over a fixed set of 8
        let edge = Rgba::rgb8(168, 85, 247);
        for i in 0..self.orbs.len() {
            for j in (i + 1)..self.orbs.len() {
                let a = self.orbs[i].pos;
                let b = self.orbs[j].pos;
                let alpha = Self::edge_alpha(a.distance(b));
                if alpha > 0.0 {
                    draw::stroke_line(surface, a, b, edge.with_alpha(alpha));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(bounds: Vec2) -> AmbientField {
        let mut field = AmbientField::new();
        let mut rng = Rng::new(42);
        field.init(bounds, &mut rng);
        field
    }

    #[test]
    fn init_seeds_eight_orbs_within_bounds() {
        let bounds = Vec2::new(640.0, 480.0);
        let field = seeded(bounds);
        assert_eq!(field.orbs().len(), AmbientField::ORB_COUNT);
        for orb in field.orbs() {
            assert!(orb.pos.x >= 0.0 && orb.pos.x < bounds.x);
            assert!(orb.pos.y >= 0.0 && orb.pos.y < bounds.y);
            assert!(orb.vel.x.abs() <= AmbientField::MAX_DRIFT);
            assert!(orb.vel.y.abs() <= AmbientField::MAX_DRIFT);
            assert!(orb.radius >= AmbientField::MIN_RADIUS);
            assert!(orb.radius < AmbientField::MAX_RADIUS);
        }
    }

    #[test]
    fn relayout_preserves_orb_positions() {
        let mut field = seeded(Vec2::new(640.0, 480.0));
        let before: Vec<Vec2> = field.orbs().iter().map(|o| o.pos).collect();
        field.relayout(Vec2::new(320.0, 240.0));
        let after: Vec<Vec2> = field.orbs().iter().map(|o| o.pos).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn edge_alpha_strictly_decreases_with_distance() {
        let mut last = AmbientField::edge_alpha(0.0);
        assert!((last - AmbientField::EDGE_MAX_ALPHA).abs() < 1e-6);
        for d in [50.0, 100.0, 200.0, 299.0] {
            let a = AmbientField::edge_alpha(d);
            assert!(a < last, "alpha must decrease: {} at d={}", a, d);
            assert!(a > 0.0);
            last = a;
        }
    }

    #[test]
    fn edge_alpha_is_zero_at_and_beyond_range() {
        assert_eq!(AmbientField::edge_alpha(AmbientField::EDGE_RANGE), 0.0);
        assert_eq!(AmbientField::edge_alpha(500.0), 0.0);
    }

    #[test]
    fn update_advances_every_orb() {
        let bounds = Vec2::new(640.0, 480.0);
        let mut field = seeded(bounds);
        let before: Vec<Vec2> = field.orbs().iter().map(|o| o.pos).collect();
        field.update(bounds, &PulseClock::new());
        for (orb, prev) in field.orbs().iter().zip(&before) {
            assert_eq!(orb.pos, *prev + orb.vel);
        }
    }

    #[test]
    fn render_paints_onto_surface() {
        let bounds = Vec2::new(128.0, 128.0);
        let field = seeded(bounds);
        let mut surface = PixelSurface::new(128, 128);
        field.render(&mut surface, &PulseClock::new());
        let painted = surface
            .pixels()
            .iter()
            .any(|p| p.r > 0 || p.g > 0 || p.b > 0 || p.a > 0);
        assert!(painted, "orb gradients should reach the buffer");
    }
}
