//! The two field variants and the contract the runner drives them through.

mod ambient;
mod cluster;
mod dataset;
mod orb;

pub use ambient::AmbientField;
pub use cluster::{ClusterField, ClusterNode};
pub use dataset::{ClusterDataset, RegionEntry};
pub use orb::Orb;

use glam::Vec2;

use crate::core::clock::PulseClock;
use crate::core::rng::Rng;
use crate::input::hover::HoverTarget;
use crate::renderer::surface::PixelSurface;

/// The contract every field variant fulfills.
///
/// A field owns its particle set exclusively; the runner passes the surface
/// dimensions and shared clock in rather than letting fields capture them.
pub trait Field {
    /// Populate the particle set for a freshly sized surface.
    /// Called once when the runner first sees nonzero dimensions.
    fn init(&mut self, bounds: Vec2, rng: &mut Rng);

    /// Recompute size-derived layout after a resize.
    /// Variants with derived anchor positions rebuild them here; variants
    /// with free-moving particles keep their positions.
    fn relayout(&mut self, bounds: Vec2);

    /// Advance particle state by one frame.
    fn update(&mut self, bounds: Vec2, clock: &PulseClock);

    /// Composite one frame onto the surface, including the trailing fade.
    fn render(&self, surface: &mut PixelSurface, clock: &PulseClock);

    /// Resolve the particle under a surface-local pointer position, if any.
    fn hit_test(&self, _local: Vec2) -> Option<HoverTarget> {
        None
    }
}
