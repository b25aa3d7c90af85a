//! Generic runner that wires a field variant to a surface and a host loop.
//!
//! The host owns the actual frame scheduling (vsync callback, rAF bridge,
//! or a plain loop) and calls `tick()` once per display refresh. The runner
//! models the "request next frame, forever" pattern as an explicit phase
//! check at the top of each iteration, so a callback that fires after
//! teardown is a guaranteed no-op.

use glam::Vec2;
use log::{debug, warn};

use crate::core::clock::PulseClock;
use crate::core::rng::Rng;
use crate::field::Field;
use crate::input::hover::Hover;
use crate::input::queue::{PointerEvent, PointerQueue};
use crate::renderer::surface::PixelSurface;

/// Lifecycle of one mounted renderer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No usable surface yet; waiting for nonzero dimensions.
    Uninitialized,
    /// Loop active; `tick()` advances and renders.
    Running,
    /// Terminal. Nothing mutates after this.
    Destroyed,
}

pub struct FieldRunner<F: Field> {
    field: F,
    surface: PixelSurface,
    pointer: PointerQueue,
    hover: Option<Hover>,
    clock: PulseClock,
    rng: Rng,
    /// Viewport origin of the surface (its bounding-rect offset), used to
    /// convert pointer coordinates to surface-local space.
    origin: Vec2,
    phase: Phase,
    frames: u64,
}

impl<F: Field> FieldRunner<F> {
    pub fn new(field: F, seed: u64) -> Self {
        Self {
            field,
            surface: PixelSurface::new(0, 0),
            pointer: PointerQueue::new(),
            hover: None,
            clock: PulseClock::new(),
            rng: Rng::new(seed),
            origin: Vec2::ZERO,
            phase: Phase::Uninitialized,
            frames: 0,
        }
    }

    /// Bind the runner to a displayed surface.
    ///
    /// With zero dimensions this is a silent no-op guard, not an error: the
    /// runner stays `Uninitialized` and the next nonzero resize starts it.
    pub fn mount(&mut self, width: u32, height: u32, origin: Vec2) {
        debug!("mount {}x{}", width, height);
        self.resize(width, height, origin);
    }

    /// Apply new surface dimensions before the next frame renders.
    /// Promotes an uninitialized runner once dimensions become nonzero;
    /// a running field recomputes its size-derived layout.
    pub fn resize(&mut self, width: u32, height: u32, origin: Vec2) {
        if self.phase == Phase::Destroyed {
            warn!("resize after teardown ignored");
            return;
        }
        self.surface.resize(width, height);
        self.origin = origin;
        if self.surface.is_empty() {
            return;
        }
        match self.phase {
            Phase::Uninitialized => {
                self.field.init(self.surface.size(), &mut self.rng);
                self.phase = Phase::Running;
                debug!("field initialized at {}x{}", width, height);
            }
            Phase::Running => self.field.relayout(self.surface.size()),
            Phase::Destroyed => unreachable!(),
        }
    }

    /// Queue a pointer event from the host. Drained on the next tick.
    pub fn push_pointer(&mut self, event: PointerEvent) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.pointer.push(event);
    }

    /// Run one frame: resolve hover, advance the clock and particle state,
    /// composite onto the surface. Strictly sequential; never re-entrant.
    pub fn tick(&mut self) {
        if self.phase != Phase::Running || self.surface.is_empty() {
            return;
        }

        self.process_pointer();

        self.clock.advance();
        self.field.update(self.surface.size(), &self.clock);
        self.field.render(&mut self.surface, &self.clock);
        self.frames += 1;
    }

    /// Hit-test pending pointer events and publish hover state.
    /// Writes only the hover value, never the pixel buffer.
    fn process_pointer(&mut self) {
        for event in self.pointer.drain() {
            match event {
                PointerEvent::Moved { x, y } => {
                    let viewport = Vec2::new(x, y);
                    let local = viewport - self.origin;
                    self.hover = self
                        .field
                        .hit_test(local)
                        .map(|target| Hover { target, pointer: viewport });
                }
                PointerEvent::Left => self.hover = None,
            }
        }
    }

    /// Stop the loop and detach. Terminal: subsequent ticks, resizes, and
    /// pointer events mutate nothing.
    pub fn teardown(&mut self) {
        if self.phase == Phase::Destroyed {
            return;
        }
        debug!("teardown after {} frames", self.frames);
        self.pointer.drain();
        self.hover = None;
        self.phase = Phase::Destroyed;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Frames rendered since mount.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Current hover state for the tooltip overlay, if any.
    pub fn hover(&self) -> Option<&Hover> {
        self.hover.as_ref()
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    pub fn field(&self) -> &F {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{AmbientField, ClusterField};

    fn mounted_cluster(w: u32, h: u32) -> FieldRunner<ClusterField> {
        let mut runner = FieldRunner::new(ClusterField::new(), 1);
        runner.mount(w, h, Vec2::ZERO);
        runner
    }

    #[test]
    fn zero_sized_mount_waits_for_resize() {
        let mut runner = FieldRunner::new(AmbientField::new(), 7);
        runner.mount(0, 0, Vec2::ZERO);
        assert_eq!(runner.phase(), Phase::Uninitialized);
        runner.tick();
        assert_eq!(runner.frames(), 0);

        // The next nonzero resize re-attempts sizing and starts the loop
        runner.resize(320, 240, Vec2::ZERO);
        assert_eq!(runner.phase(), Phase::Running);
        runner.tick();
        assert_eq!(runner.frames(), 1);
        assert_eq!(runner.field().orbs().len(), AmbientField::ORB_COUNT);
    }

    #[test]
    fn ambient_resize_keeps_positions() {
        let mut runner = FieldRunner::new(AmbientField::new(), 7);
        runner.mount(640, 480, Vec2::ZERO);
        let before: Vec<Vec2> = runner.field().orbs().iter().map(|o| o.pos).collect();
        runner.resize(320, 240, Vec2::ZERO);
        let after: Vec<Vec2> = runner.field().orbs().iter().map(|o| o.pos).collect();
        assert_eq!(before, after, "orbs are not re-seeded on resize");
    }

    #[test]
    fn cluster_mount_lays_out_on_circles() {
        let runner = mounted_cluster(800, 600);
        let center = Vec2::new(400.0, 300.0);
        let base = 600.0 * ClusterField::BASE_FRACTION;
        for (i, node) in runner.field().nodes().iter().enumerate() {
            let angle = i as f32 * std::f32::consts::PI / 3.0;
            let expected = center + Vec2::new(angle.cos(), angle.sin()) * base * node.radius_frac;
            assert!(node.pos.distance(expected) < 1e-3, "{}", node.label);
        }
    }

    #[test]
    fn cluster_resize_recenters_and_rescales() {
        let mut runner = mounted_cluster(800, 600);
        runner.tick();
        runner.resize(400, 300, Vec2::ZERO);
        let center = Vec2::new(200.0, 150.0);
        let base = 300.0 * ClusterField::BASE_FRACTION;
        for node in runner.field().nodes() {
            let ring = (node.pos - center).length();
            assert!((ring - base * node.radius_frac).abs() < 1e-3, "{}", node.label);
        }
    }

    #[test]
    fn hover_publishes_and_clears() {
        let mut runner = mounted_cluster(800, 600);
        runner.tick();
        let node = runner.field().nodes()[0].clone();

        runner.push_pointer(PointerEvent::Moved { x: node.pos.x, y: node.pos.y });
        runner.tick();
        let hover = runner.hover().expect("node under pointer");
        assert_eq!(hover.target.label, node.label);
        assert_eq!(hover.target.count, node.count);
        assert_eq!(hover.pointer, node.pos);

        runner.push_pointer(PointerEvent::Moved { x: 1.0, y: 1.0 });
        runner.tick();
        assert!(runner.hover().is_none());
    }

    #[test]
    fn hover_respects_viewport_origin() {
        let mut runner = FieldRunner::new(ClusterField::new(), 1);
        let origin = Vec2::new(100.0, 50.0);
        runner.mount(800, 600, origin);
        let node = runner.field().nodes()[3].clone();

        let viewport = node.pos + origin;
        runner.push_pointer(PointerEvent::Moved { x: viewport.x, y: viewport.y });
        runner.tick();
        let hover = runner.hover().expect("origin-adjusted hit");
        assert_eq!(hover.target.index, 3);
        assert_eq!(hover.pointer, viewport);
    }

    #[test]
    fn pointer_leave_clears_hover() {
        let mut runner = mounted_cluster(800, 600);
        let node = runner.field().nodes()[0].clone();
        runner.push_pointer(PointerEvent::Moved { x: node.pos.x, y: node.pos.y });
        runner.tick();
        assert!(runner.hover().is_some());
        runner.push_pointer(PointerEvent::Left);
        runner.tick();
        assert!(runner.hover().is_none());
    }

    #[test]
    fn teardown_freezes_all_state() {
        let mut runner = mounted_cluster(800, 600);
        for _ in 0..100 {
            runner.tick();
        }
        assert_eq!(runner.frames(), 100);

        runner.teardown();
        assert_eq!(runner.phase(), Phase::Destroyed);

        let pixels = runner.surface().as_bytes().to_vec();
        let anchors: Vec<Vec2> = runner.field().nodes().iter().map(|n| n.pos).collect();

        runner.tick();
        runner.resize(100, 100, Vec2::ZERO);
        runner.push_pointer(PointerEvent::Moved { x: 400.0, y: 300.0 });
        runner.tick();

        assert_eq!(runner.frames(), 100, "no frame may fire after teardown");
        assert_eq!(runner.surface().as_bytes(), pixels.as_slice());
        let after: Vec<Vec2> = runner.field().nodes().iter().map(|n| n.pos).collect();
        assert_eq!(anchors, after);
        assert!(runner.hover().is_none());
    }

    #[test]
    fn independent_runners_do_not_interfere() {
        let mut ambient = FieldRunner::new(AmbientField::new(), 11);
        let mut cluster = FieldRunner::new(ClusterField::new(), 12);
        ambient.mount(320, 240, Vec2::ZERO);
        cluster.mount(320, 240, Vec2::ZERO);

        for _ in 0..10 {
            ambient.tick();
            cluster.tick();
        }
        cluster.teardown();
        ambient.tick();
        assert_eq!(ambient.frames(), 11);
        assert_eq!(cluster.frames(), 10);
    }

    #[test]
    fn ticks_mutate_the_surface_while_running() {
        let mut runner = mounted_cluster(200, 200);
        runner.tick();
        let first = runner.surface().as_bytes().to_vec();
        for _ in 0..20 {
            runner.tick();
        }
        assert_ne!(
            runner.surface().as_bytes(),
            first.as_slice(),
            "pulse should change the composite across frames"
        );
    }
}
