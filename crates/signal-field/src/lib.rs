pub mod core;
pub mod field;
pub mod input;
pub mod renderer;
pub mod runtime;

// Re-export key types at crate root for convenience
pub use crate::core::clock::PulseClock;
pub use crate::core::rng::Rng;
pub use field::{AmbientField, ClusterDataset, ClusterField, ClusterNode, Field, Orb, RegionEntry};
pub use input::hover::{Hover, HoverTarget};
pub use input::queue::{PointerEvent, PointerQueue};
pub use renderer::color::{Pixel, Rgba};
pub use renderer::surface::PixelSurface;
pub use runtime::runner::{FieldRunner, Phase};
