use crate::bitmap::Bitmap;
use crate::geometry::Point;
use crate::readout::discovery::{find_image_canvas, find_scrolled_content, resolve_viewing_surface};
use crate::readout::mapping::{infer_zoom, map_to_pixel, MappingContext};
use crate::readout::surface::SurfaceTree;
use crate::readout::tracking::{Readout, TrackingState};

/// Geometry of the currently attached display: the resolved rendering
/// surface and the mapping context derived from it. Rebuilt from scratch on
/// every attach; never cached across a detach.
#[derive(Debug, Clone)]
struct Attachment<N> {
    surface: N,
    ctx: MappingContext,
}

/// The readout core for one display at a time.
///
/// The host calls `attach` when an image display becomes active, forwards
/// pointer moves and lock toggles, and renders `readout_text` into whatever
/// status surface it owns. All entry points return whether the visible text
/// changed so the host only repaints when it did.
#[derive(Debug)]
pub struct PixelReadout<N> {
    attachment: Option<Attachment<N>>,
    tracking: TrackingState,
    text: String,
}

impl<N> Default for PixelReadout<N> {
    fn default() -> Self {
        Self {
            attachment: None,
            tracking: TrackingState::new(),
            text: Readout::EMPTY.text(),
        }
    }
}

impl<N: Clone + PartialEq> PixelReadout<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// The formatted status line for the current state.
    pub fn readout_text(&self) -> &str {
        &self.text
    }

    /// Attach to the display rooted at `root`.
    ///
    /// Resolves the rendering surface once: discovery starts inside the
    /// scrolled content when a scroll container is present, and falls back
    /// to `root` when nothing qualifies. When the host supplies no zoom it
    /// is inferred from a near-uniform surface. Any previous attachment is
    /// discarded first.
    pub fn attach<T, B>(&mut self, tree: &T, root: &N, bitmap: &B, explicit_zoom: Option<f64>) -> bool
    where
        T: SurfaceTree<Node = N>,
        B: Bitmap,
    {
        let changed = self.detach();

        let (image_w, image_h) = (bitmap.width(), bitmap.height());
        let base = find_scrolled_content(tree, root).unwrap_or_else(|| root.clone());
        let surface = find_image_canvas(tree, &base, image_w, image_h).unwrap_or(base);

        let bounds = tree.bounds(&surface);
        let zoom = explicit_zoom.or_else(|| infer_zoom(bounds, image_w, image_h));
        let ctx = MappingContext::new(bounds, image_w, image_h, zoom);
        tracing::debug!(
            surface_bounds = ?ctx.surface_bounds,
            image_w,
            image_h,
            zoom,
            "attached to image display"
        );

        self.attachment = Some(Attachment { surface, ctx });
        changed
    }

    /// Tear down the current attachment. Idempotent; clears all tracking
    /// state and restores the empty readout.
    pub fn detach(&mut self) -> bool {
        if self.attachment.take().is_some() {
            tracing::debug!("detached from image display");
        }
        self.tracking.reset();
        self.set_text(Readout::EMPTY.text())
    }

    /// Handle one physical pointer move, delivered in `source`'s local
    /// coordinate space.
    ///
    /// Exactly one mapping call per event. When the event source is not the
    /// attached surface (the host view was swapped out or the bitmap is
    /// rendered by an inner panel), the surface is re-resolved around the
    /// source and the attachment re-targeted before mapping.
    pub fn on_pointer_move<T, B>(&mut self, tree: &T, bitmap: &B, point: Point, source: &N) -> bool
    where
        T: SurfaceTree<Node = N>,
        B: Bitmap,
    {
        let Some(attachment) = self.attachment.as_mut() else {
            return self.set_text(Readout::EMPTY.text());
        };

        if attachment.surface != *source {
            let surface = resolve_viewing_surface(tree, source, bitmap.width(), bitmap.height());
            if surface != attachment.surface {
                let bounds = tree.bounds(&surface);
                let zoom = attachment
                    .ctx
                    .explicit_zoom
                    .or_else(|| infer_zoom(bounds, bitmap.width(), bitmap.height()));
                attachment.ctx =
                    MappingContext::new(bounds, bitmap.width(), bitmap.height(), zoom);
                attachment.surface = surface;
                tracing::debug!(surface_bounds = ?attachment.ctx.surface_bounds, "re-targeted surface");
            }
        }

        let pixel = map_to_pixel(point, &attachment.ctx);
        let color = pixel.and_then(|(x, y)| bitmap.sample(x, y));
        let readout = self.tracking.observe(pixel, color);
        self.set_text(readout.text())
    }

    /// Toggle the pixel lock. A toggle before any pixel has been observed is
    /// a silent no-op.
    pub fn on_lock_toggle(&mut self) -> bool {
        if self.attachment.is_none() {
            return false;
        }
        self.tracking.toggle_lock();
        self.set_text(self.tracking.readout().text())
    }

    fn set_text(&mut self, text: String) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text;
        true
    }
}
