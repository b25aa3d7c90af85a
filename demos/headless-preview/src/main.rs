//! Renders both SignalX field variants off-screen and writes PNG snapshots.
//!
//! Stands in for the browser canvas: mounts each runner, ticks it for a few
//! seconds' worth of frames, then dumps the composited surface.

use anyhow::{Context, Result};
use glam::Vec2;
use image::RgbaImage;
use log::info;
use signal_field::{AmbientField, ClusterField, FieldRunner, PointerEvent};

const WIDTH: u32 = 960;
const HEIGHT: u32 = 540;
const FRAMES: u32 = 240;

fn main() -> Result<()> {
    env_logger::init();

    let mut ambient = FieldRunner::new(AmbientField::new(), 0x5EED);
    ambient.mount(WIDTH, HEIGHT, Vec2::ZERO);
    for _ in 0..FRAMES {
        ambient.tick();
    }
    save_surface(&ambient, "ambient-field.png")?;
    ambient.teardown();

    let mut cluster = FieldRunner::new(ClusterField::new(), 0);
    cluster.mount(WIDTH, HEIGHT, Vec2::ZERO);
    for _ in 0..FRAMES {
        cluster.tick();
    }

    // Hover the first node so the tooltip contract is exercised end to end
    let node = cluster.field().nodes()[0].clone();
    cluster.push_pointer(PointerEvent::Moved { x: node.pos.x, y: node.pos.y });
    cluster.tick();
    if let Some(hover) = cluster.hover() {
        info!("hovering {}: {} new leads this week", hover.target.label, hover.target.count);
    }

    save_surface(&cluster, "cluster-map.png")?;
    cluster.teardown();

    Ok(())
}

fn save_surface<F: signal_field::Field>(runner: &FieldRunner<F>, path: &str) -> Result<()> {
    let surface = runner.surface();
    let img = RgbaImage::from_raw(surface.width(), surface.height(), surface.as_bytes().to_vec())
        .context("surface buffer does not match its dimensions")?;
    img.save(path).with_context(|| format!("writing {path}"))?;
    info!("wrote {path} after {} frames", runner.frames());
    Ok(())
}
