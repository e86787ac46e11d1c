use crate::domain::chart::{ChartSurface, Viewport};
use crate::domain::drawing::{DrawingId, Point};
use crate::infrastructure::rendering::gpu_structures::OverlayVertex;
use crate::infrastructure::rendering::overlay_world::{
    LinePrimitive, LineStyle, MarkerPrimitive, OverlayWorld, OwnerTag, PreviewTag,
};

/// Fraction of one bar slot occupied by the candle body.
const BODY_WIDTH_FRAC: f32 = 0.7;
/// Stroke thickness for overlay and preview lines, pixels.
const LINE_THICKNESS_PX: f32 = 1.5;
/// Wick thickness, pixels.
const WICK_THICKNESS_PX: f32 = 1.0;
/// Dash pattern for preview lines, pixels.
const DASH_LENGTH_PX: f32 = 6.0;
const DASH_GAP_PX: f32 = 4.0;
/// Half side of a pattern point marker, pixels.
const MARKER_HALF_PX: f32 = 4.0;

/// Build the full vertex list for one frame: base candles, then finalized
/// overlays in insertion order, then the transient preview on top.
///
/// Returns an empty list while the surface is not ready or the viewport has
/// no usable area - rendering is suspended, never attempted.
pub fn build_frame(surface: &ChartSurface, overlay: &OverlayWorld) -> Vec<OverlayVertex> {
    if !surface.is_ready() || !surface.viewport.is_renderable() {
        return Vec::new();
    }

    let mut vertices = Vec::new();
    build_candles(surface, &mut vertices);
    build_overlays(&surface.viewport, overlay, &mut vertices);
    vertices
}

fn build_candles(surface: &ChartSurface, out: &mut Vec<OverlayVertex>) {
    let viewport = &surface.viewport;
    let count = surface.candle_count();
    if count == 0 {
        return;
    }
    let slot_px = viewport.width as f32 / count as f32;
    let half_body = (slot_px * BODY_WIDTH_FRAC / 2.0).max(0.5);

    for candle in surface.series().get_candles() {
        let x = viewport.time_to_x(candle.timestamp.as_f64());
        let bullish = candle.is_bullish();

        // Wick spans high to low.
        let high_y = viewport.price_to_y(candle.ohlcv.high.value());
        let low_y = viewport.price_to_y(candle.ohlcv.low.value());
        push_rect(
            out,
            viewport,
            x - WICK_THICKNESS_PX / 2.0,
            high_y,
            x + WICK_THICKNESS_PX / 2.0,
            low_y,
            OverlayVertex::wick_vertex,
        );

        // Body spans open to close; flat bars keep a one-pixel sliver.
        let open_y = viewport.price_to_y(candle.ohlcv.open.value());
        let close_y = viewport.price_to_y(candle.ohlcv.close.value());
        let (mut top, mut bottom) = if open_y < close_y { (open_y, close_y) } else { (close_y, open_y) };
        if bottom - top < 1.0 {
            let mid = (top + bottom) / 2.0;
            top = mid - 0.5;
            bottom = mid + 0.5;
        }
        push_rect(out, viewport, x - half_body, top, x + half_body, bottom, |vx, vy| {
            OverlayVertex::body_vertex(vx, vy, bullish)
        });
    }
}

fn build_overlays(viewport: &Viewport, overlay: &OverlayWorld, out: &mut Vec<OverlayVertex>) {
    // Finalized primitives first, in drawing insertion order (stable ids are
    // monotone), then the preview so it always sits on top.
    let mut lines: Vec<(DrawingId, LinePrimitive)> = overlay
        .world
        .query::<(&LinePrimitive, &OwnerTag)>()
        .iter()
        .map(|(_, (line, owner))| (owner.0, line.clone()))
        .collect();
    lines.sort_by_key(|(id, _)| *id);
    for (_, line) in &lines {
        push_polyline(out, viewport, &line.points, line.style, OverlayVertex::overlay_line_vertex);
    }

    let mut markers: Vec<(DrawingId, MarkerPrimitive)> = overlay
        .world
        .query::<(&MarkerPrimitive, &OwnerTag)>()
        .iter()
        .map(|(_, (marker, owner))| (owner.0, *marker))
        .collect();
    markers.sort_by_key(|(id, _)| *id);
    for (_, marker) in &markers {
        push_marker(out, viewport, &marker.point);
    }

    for (_, line) in overlay.world.query::<(&LinePrimitive, &PreviewTag)>().iter() {
        push_polyline(out, viewport, &line.0.points, line.0.style, OverlayVertex::preview_line_vertex);
    }
    for (_, marker) in overlay.world.query::<(&MarkerPrimitive, &PreviewTag)>().iter() {
        push_marker(out, viewport, &marker.0.point);
    }
}

fn push_polyline(
    out: &mut Vec<OverlayVertex>,
    viewport: &Viewport,
    points: &[Point],
    style: LineStyle,
    make: impl Fn(f32, f32) -> OverlayVertex + Copy,
) {
    for pair in points.windows(2) {
        let x0 = viewport.time_to_x(pair[0].time.as_f64());
        let y0 = viewport.price_to_y(pair[0].value.value());
        let x1 = viewport.time_to_x(pair[1].time.as_f64());
        let y1 = viewport.price_to_y(pair[1].value.value());
        match style {
            LineStyle::Solid => push_segment(out, viewport, x0, y0, x1, y1, make),
            LineStyle::Dashed => push_dashed_segment(out, viewport, x0, y0, x1, y1, make),
        }
    }
}

fn push_dashed_segment(
    out: &mut Vec<OverlayVertex>,
    viewport: &Viewport,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    make: impl Fn(f32, f32) -> OverlayVertex + Copy,
) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let length = (dx * dx + dy * dy).sqrt();
    if length <= f32::EPSILON {
        return;
    }
    let (ux, uy) = (dx / length, dy / length);

    let mut offset = 0.0f32;
    while offset < length {
        let end = (offset + DASH_LENGTH_PX).min(length);
        push_segment(
            out,
            viewport,
            x0 + ux * offset,
            y0 + uy * offset,
            x0 + ux * end,
            y0 + uy * end,
            make,
        );
        offset = end + DASH_GAP_PX;
    }
}

fn push_segment(
    out: &mut Vec<OverlayVertex>,
    viewport: &Viewport,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    make: impl Fn(f32, f32) -> OverlayVertex + Copy,
) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let length = (dx * dx + dy * dy).sqrt();
    if length <= f32::EPSILON {
        return;
    }
    // Perpendicular offset gives the segment its thickness.
    let nx = -dy / length * LINE_THICKNESS_PX / 2.0;
    let ny = dx / length * LINE_THICKNESS_PX / 2.0;

    let corners = [
        to_clip(viewport, x0 + nx, y0 + ny),
        to_clip(viewport, x1 + nx, y1 + ny),
        to_clip(viewport, x1 - nx, y1 - ny),
        to_clip(viewport, x0 - nx, y0 - ny),
    ];
    push_quad(out, corners, make);
}

fn push_marker(out: &mut Vec<OverlayVertex>, viewport: &Viewport, point: &Point) {
    let x = viewport.time_to_x(point.time.as_f64());
    let y = viewport.price_to_y(point.value.value());
    push_rect(
        out,
        viewport,
        x - MARKER_HALF_PX,
        y - MARKER_HALF_PX,
        x + MARKER_HALF_PX,
        y + MARKER_HALF_PX,
        OverlayVertex::marker_vertex,
    );
}

fn push_rect(
    out: &mut Vec<OverlayVertex>,
    viewport: &Viewport,
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    make: impl Fn(f32, f32) -> OverlayVertex + Copy,
) {
    let corners = [
        to_clip(viewport, left, top),
        to_clip(viewport, right, top),
        to_clip(viewport, right, bottom),
        to_clip(viewport, left, bottom),
    ];
    push_quad(out, corners, make);
}

fn push_quad(
    out: &mut Vec<OverlayVertex>,
    corners: [(f32, f32); 4],
    make: impl Fn(f32, f32) -> OverlayVertex + Copy,
) {
    let [a, b, c, d] = corners;
    for (x, y) in [a, b, c, a, c, d] {
        out.push(make(x, y));
    }
}

/// Pixel space to clip space. Y flips: pixel origin is top-left.
fn to_clip(viewport: &Viewport, x_px: f32, y_px: f32) -> (f32, f32) {
    let x = x_px / viewport.width as f32 * 2.0 - 1.0;
    let y = 1.0 - y_px / viewport.height as f32 * 2.0;
    (x, y)
}
