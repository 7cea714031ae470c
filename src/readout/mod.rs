pub mod attachment;
pub mod color;
pub mod discovery;
pub mod mapping;
pub mod surface;
pub mod tracking;

pub use attachment::PixelReadout;
pub use color::format_color;
pub use discovery::{find_image_canvas, find_scrolled_content, resolve_viewing_surface};
pub use mapping::{compute_display_rect, infer_zoom, map_to_pixel, MappingContext};
pub use surface::SurfaceTree;
pub use tracking::{Readout, TrackingState};
