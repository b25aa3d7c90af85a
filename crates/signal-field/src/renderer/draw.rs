//! CPU rasterization primitives for the field renderers.
//!
//! Everything here composites onto a [`PixelSurface`] with source-over
//! blending. Shapes are rasterized from signed distances with a half-pixel
//! soft edge, which is close enough to canvas antialiasing for glow work.
//! Quadratic arcs are flattened with lyon before stroking.

use glam::Vec2;
use lyon::geom::QuadraticBezierSegment;
use lyon::math::point;

use super::color::Rgba;
use super::surface::PixelSurface;

/// Flattening tolerance for curve-to-polyline conversion, in pixels.
const CURVE_TOLERANCE: f32 = 0.25;

/// Fill a disc with a radial gradient.
///
/// `stops` are (offset, color) pairs with offsets ascending in [0, 1];
/// offset 0 is the center, offset 1 the rim. Matches the canvas
/// `createRadialGradient(cx, cy, 0, cx, cy, r)` contract the dashboards
/// were written against.
pub fn fill_radial_gradient(
    surface: &mut PixelSurface,
    center: Vec2,
    radius: f32,
    stops: &[(f32, Rgba)],
) {
    if radius <= 0.0 || stops.is_empty() {
        return;
    }
    let (x0, y0, x1, y1) = clipped_bbox(surface, center - Vec2::splat(radius), center + Vec2::splat(radius));
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let d = p.distance(center);
            if d <= radius {
                surface.blend(x, y, sample_stops(stops, d / radius));
            }
        }
    }
}

/// Evaluate a gradient stop list at offset `t` in [0, 1].
pub fn sample_stops(stops: &[(f32, Rgba)], t: f32) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    let first = stops[0];
    if t <= first.0 {
        return first.1;
    }
    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let span = t1 - t0;
            if span <= f32::EPSILON {
                return c1;
            }
            return c0.lerp(c1, (t - t0) / span);
        }
    }
    stops[stops.len() - 1].1
}

/// Fill a solid antialiased disc.
pub fn fill_circle(surface: &mut PixelSurface, center: Vec2, radius: f32, color: Rgba) {
    if radius <= 0.0 {
        return;
    }
    let pad = radius + 1.0;
    let (x0, y0, x1, y1) = clipped_bbox(surface, center - Vec2::splat(pad), center + Vec2::splat(pad));
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let coverage = (radius + 0.5 - p.distance(center)).clamp(0.0, 1.0);
            if coverage > 0.0 {
                surface.blend(x, y, color.with_alpha(color.a * coverage));
            }
        }
    }
}

/// Stroke a straight segment with the given line width.
pub fn stroke_segment(surface: &mut PixelSurface, a: Vec2, b: Vec2, width: f32, color: Rgba) {
    let half = width.max(0.0) * 0.5;
    let pad = Vec2::splat(half + 1.0);
    let lo = a.min(b) - pad;
    let hi = a.max(b) + pad;
    let (x0, y0, x1, y1) = clipped_bbox(surface, lo, hi);
    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let coverage = (half + 0.5 - distance_to_segment(p, a, b)).clamp(0.0, 1.0);
            if coverage > 0.0 {
                surface.blend(x, y, color.with_alpha(color.a * coverage));
            }
        }
    }
}

/// Stroke a hairline (1 px) segment.
pub fn stroke_line(surface: &mut PixelSurface, a: Vec2, b: Vec2, color: Rgba) {
    stroke_segment(surface, a, b, 1.0, color);
}

/// Stroke a dashed quadratic Bezier curve.
///
/// The curve is flattened to a polyline, then dashed by arc length with the
/// `[dash_on, dash_off]` pattern starting in the "on" phase at `from`.
pub fn stroke_quadratic_dashed(
    surface: &mut PixelSurface,
    from: Vec2,
    ctrl: Vec2,
    to: Vec2,
    width: f32,
    dash_on: f32,
    dash_off: f32,
    color: Rgba,
) {
    let segment = QuadraticBezierSegment {
        from: point(from.x, from.y),
        ctrl: point(ctrl.x, ctrl.y),
        to: point(to.x, to.y),
    };
    let mut points = vec![from];
    points.extend(
        segment
            .flattened(CURVE_TOLERANCE)
            .map(|p| Vec2::new(p.x, p.y)),
    );

    if dash_on <= 0.0 || dash_off <= 0.0 {
        for pair in points.windows(2) {
            stroke_segment(surface, pair[0], pair[1], width, color);
        }
        return;
    }

    let mut travelled = 0.0;
    for pair in points.windows(2) {
        emit_dashes(surface, pair[0], pair[1], width, dash_on, dash_off, &mut travelled, color);
    }
}

/// Dash one flattened segment, carrying the arc-length position across calls.
fn emit_dashes(
    surface: &mut PixelSurface,
    a: Vec2,
    b: Vec2,
    width: f32,
    dash_on: f32,
    dash_off: f32,
    travelled: &mut f32,
    color: Rgba,
) {
    let len = a.distance(b);
    if len <= f32::EPSILON {
        return;
    }
    let dir = (b - a) / len;
    let period = dash_on + dash_off;
    let mut t = 0.0;
    while t < len {
        let in_pattern = *travelled % period;
        let (drawing, run) = if in_pattern < dash_on {
            (true, (dash_on - in_pattern).min(len - t))
        } else {
            (false, (period - in_pattern).min(len - t))
        };
        if run <= 0.0 {
            break;
        }
        if drawing {
            stroke_segment(surface, a + dir * t, a + dir * (t + run), width, color);
        }
        t += run;
        *travelled += run;
    }
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Bounding box clipped to the surface, as half-open pixel ranges.
fn clipped_bbox(surface: &PixelSurface, lo: Vec2, hi: Vec2) -> (i32, i32, i32, i32) {
    let x0 = (lo.x.floor() as i32).max(0);
    let y0 = (lo.y.floor() as i32).max(0);
    let x1 = (hi.x.ceil() as i32 + 1).min(surface.width() as i32);
    let y1 = (hi.y.ceil() as i32 + 1).min(surface.height() as i32);
    (x0, y0, x1, y1)
}
