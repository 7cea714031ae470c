use crate::geometry::{Point, Rect};

/// Tolerance for treating the two axis scale factors as one uniform zoom.
const UNIFORM_SCALE_TOLERANCE: f64 = 0.05;

/// Everything needed to turn a surface-local point into an image pixel.
/// Rebuilt whenever the surface or image changes; immutable for the duration
/// of one pointer-move computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappingContext {
    /// The area of the surface actually showing image content, in the
    /// surface's local space. Equals the full surface when the image fills
    /// it; a centered sub-rectangle when letterboxed.
    pub surface_bounds: Rect,
    pub image_width: u32,
    pub image_height: u32,
    pub explicit_zoom: Option<f64>,
}

impl MappingContext {
    pub fn new(surface: Rect, image_width: u32, image_height: u32, zoom: Option<f64>) -> Self {
        Self {
            surface_bounds: compute_display_rect(surface, image_width, image_height, zoom),
            image_width: image_width.max(1),
            image_height: image_height.max(1),
            explicit_zoom: zoom,
        }
    }
}

/// Map a surface-local point to a source-image pixel.
///
/// Floor-pixel lookup, not interpolation: the readout reports the exact
/// source pixel under the cursor. Points outside the display area yield
/// `None` so the caller renders an empty readout rather than stale data.
pub fn map_to_pixel(point: Point, ctx: &MappingContext) -> Option<(u32, u32)> {
    // Degenerate surfaces are clamped to 1x1; the origin is kept so points
    // map correctly against letterboxed sub-rectangles.
    let bounds = Rect::new(
        ctx.surface_bounds.x,
        ctx.surface_bounds.y,
        ctx.surface_bounds.width.max(1),
        ctx.surface_bounds.height.max(1),
    );
    if !bounds.contains(point) {
        return None;
    }

    let sx = f64::from(bounds.width) / f64::from(ctx.image_width);
    let sy = f64::from(bounds.height) / f64::from(ctx.image_height);
    let fx = f64::from(point.x - bounds.x) / sx;
    let fy = f64::from(point.y - bounds.y) / sy;

    let px = (fx as i64).clamp(0, i64::from(ctx.image_width) - 1) as u32;
    let py = (fy as i64).clamp(0, i64::from(ctx.image_height) - 1) as u32;
    Some((px, py))
}

/// Resolve the rectangle of `surface` that displays image content.
///
/// With an explicit zoom the scaled image is centered when it fits and
/// anchored top-left when it overflows (cropped/scrolled display). Without
/// one, a near-uniform surface is taken to be the scaled image itself, and
/// anything else is letterboxed on the smaller axis scale.
pub fn compute_display_rect(
    surface: Rect,
    image_w: u32,
    image_h: u32,
    explicit_zoom: Option<f64>,
) -> Rect {
    let image_w = image_w.max(1);
    let image_h = image_h.max(1);

    if let Some(zoom) = explicit_zoom.filter(|z| *z > 0.0) {
        let scaled_w = ((f64::from(image_w) * zoom).round() as i32).max(1);
        let scaled_h = ((f64::from(image_h) * zoom).round() as i32).max(1);
        return if scaled_w <= surface.width && scaled_h <= surface.height {
            Rect::new(
                (surface.width - scaled_w) / 2,
                (surface.height - scaled_h) / 2,
                scaled_w,
                scaled_h,
            )
        } else {
            Rect::new(0, 0, scaled_w, scaled_h)
        };
    }

    let zx = f64::from(surface.width) / f64::from(image_w);
    let zy = f64::from(surface.height) / f64::from(image_h);
    if zx > 0.0 && zy > 0.0 && (zx - zy).abs() <= UNIFORM_SCALE_TOLERANCE * zx.max(zy) {
        return Rect::new(0, 0, surface.width, surface.height);
    }

    let scale = zx.min(zy).max(0.0001);
    let w = ((f64::from(image_w) * scale) as i32).max(1);
    let h = ((f64::from(image_h) * scale) as i32).max(1);
    Rect::new((surface.width - w) / 2, (surface.height - h) / 2, w, h)
}

/// Effective zoom of a surface that scales the image near-uniformly, when no
/// explicit zoom is known. `None` when the surface letterboxes or distorts.
pub fn infer_zoom(surface: Rect, image_w: u32, image_h: u32) -> Option<f64> {
    if surface.is_empty() || image_w == 0 || image_h == 0 {
        return None;
    }
    let zx = f64::from(surface.width) / f64::from(image_w);
    let zy = f64::from(surface.height) / f64::from(image_h);
    if zx > 0.0 && zy > 0.0 && (zx - zy).abs() <= UNIFORM_SCALE_TOLERANCE * zx.max(zy) {
        Some((zx + zy) / 2.0)
    } else {
        None
    }
}
