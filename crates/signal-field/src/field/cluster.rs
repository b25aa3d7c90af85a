//! Lead cluster map: six named nodes on a polar layout around a central hub,
//! with pulsing glow and dashed connection arcs.

use glam::Vec2;

use super::dataset::ClusterDataset;
use super::Field;
use crate::core::clock::PulseClock;
use crate::core::rng::Rng;
use crate::input::hover::HoverTarget;
use crate::renderer::color::Rgba;
use crate::renderer::draw;
use crate::renderer::surface::PixelSurface;

/// A cluster node. Position is derived from the layout rule, never stored
/// independently of the surface dimensions.
#[derive(Debug, Clone)]
pub struct ClusterNode {
    pub pos: Vec2,
    pub label: String,
    pub count: u32,
    pub angle: f32,
    pub radius_frac: f32,
}

pub struct ClusterField {
    nodes: Vec<ClusterNode>,
}

impl ClusterField {
    /// Layout radius as a fraction of the surface's minor dimension.
    pub const BASE_FRACTION: f32 = 0.3;
    /// Node glow radius before pulse modulation, px.
    pub const NODE_RADIUS: f32 = 20.0;
    /// Solid core dot radius, px.
    pub const CORE_RADIUS: f32 = 8.0;
    /// Pointer hit-test radius, px.
    pub const HIT_RADIUS: f32 = 20.0;
    /// Central hub globe radius, px.
    pub const HUB_RADIUS: f32 = 80.0;
    /// Upward offset of the arc control point from the chord midpoint, px.
    pub const ARC_LIFT: f32 = 50.0;
    /// Dash pattern for connection arcs, px.
    pub const DASH: [f32; 2] = [5.0, 5.0];
    /// Trailing-fade alpha composited over the previous frame.
    pub const FADE_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self::from_dataset(ClusterDataset::default())
    }

    /// Build a field from a dataset. Node positions stay at the origin until
    /// the first layout pass.
    pub fn from_dataset(dataset: ClusterDataset) -> Self {
        let nodes = dataset
            .regions
            .into_iter()
            .map(|region| ClusterNode {
                pos: Vec2::ZERO,
                label: region.label,
                count: region.count,
                angle: region.angle,
                radius_frac: region.radius_frac,
            })
            .collect();
        Self { nodes }
    }

    pub fn nodes(&self) -> &[ClusterNode] {
        &self.nodes
    }

    /// Derive every node anchor from the surface dimensions.
    /// Pure in the dimensions plus the fixed angle/fraction table, so
    /// calling it twice with the same bounds yields identical anchors.
    fn layout(&mut self, bounds: Vec2) {
        let center = bounds * 0.5;
        let base = bounds.min_element() * Self::BASE_FRACTION;
        for node in &mut self.nodes {
            let dir = Vec2::new(node.angle.cos(), node.angle.sin());
            node.pos = center + dir * base * node.radius_frac;
        }
    }

    fn hub_stops() -> [(f32, Rgba); 3] {
        let hub = Rgba::rgb8(60, 13, 87);
        [
            (0.0, hub.with_alpha(0.8)),
            (0.7, hub.with_alpha(0.4)),
            (1.0, hub.with_alpha(0.0)),
        ]
    }

    fn node_stops(pulse: f32) -> [(f32, Rgba); 3] {
        [
            (0.0, Rgba::rgb8(168, 85, 247).with_alpha(0.6 * pulse)),
            (0.5, Rgba::rgb8(139, 92, 246).with_alpha(0.3 * pulse)),
            (1.0, Rgba::rgb8(168, 85, 247).with_alpha(0.0)),
        ]
    }
}

impl Default for ClusterField {
    fn default() -> Self {
        Self::new()
    }
}

impl Field for ClusterField {
    fn init(&mut self, bounds: Vec2, _rng: &mut Rng) {
        self.layout(bounds);
    }

    fn relayout(&mut self, bounds: Vec2) {
        self.layout(bounds);
    }

    fn update(&mut self, _bounds: Vec2, _clock: &PulseClock) {
        // Anchors are fixed between resizes; all motion comes from the
        // pulse factor applied at render time.
    }

    fn render(&self, surface: &mut PixelSurface, clock: &PulseClock) {
        surface.fill(Rgba::rgb8(10, 5, 20).with_alpha(Self::FADE_ALPHA));

        let center = surface.size() * 0.5;
        let purple = Rgba::rgb8(168, 85, 247);

        // Central hub globe with radial grid spokes
        draw::fill_radial_gradient(surface, center, Self::HUB_RADIUS, &Self::hub_stops());
        for i in 0..6 {
            let angle = i as f32 * std::f32::consts::PI / 3.0;
            let tip = center + Vec2::new(angle.cos(), angle.sin()) * Self::HUB_RADIUS;
            draw::stroke_line(surface, center, tip, purple.with_alpha(0.2));
        }

        for (index, node) in self.nodes.iter().enumerate() {
            let pulse = clock.pulse(index);

            // Dashed arc bowing upward from the hub to the node
            let mid = (center + node.pos) * 0.5;
            let ctrl = Vec2::new(mid.x, mid.y - Self::ARC_LIFT);
            draw::stroke_quadratic_dashed(
                surface,
                center,
                ctrl,
                node.pos,
                2.0,
                Self::DASH[0],
                Self::DASH[1],
                purple.with_alpha(0.3 * pulse),
            );

            // Pulsing glow disc plus the steady core dot
            draw::fill_radial_gradient(
                surface,
                node.pos,
                Self::NODE_RADIUS * pulse,
                &Self::node_stops(pulse),
            );
            draw::fill_circle(
                surface,
                node.pos,
                Self::CORE_RADIUS,
                purple.with_alpha(0.8 * pulse),
            );
        }
    }

    /// First node in table order within the hit radius wins; the fixed
    /// enumeration keeps tie-breaking deterministic for overlapping nodes.
    fn hit_test(&self, local: Vec2) -> Option<HoverTarget> {
        self.nodes
            .iter()
            .enumerate()
            .find(|(_, node)| node.pos.distance(local) < Self::HIT_RADIUS)
            .map(|(index, node)| HoverTarget {
                index,
                label: node.label.clone(),
                count: node.count,
            })
    }
}
