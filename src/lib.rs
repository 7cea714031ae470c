pub mod bitmap;
pub mod geometry;
pub mod logging;
pub mod readout;
pub mod settings;

pub use bitmap::{decode_file, is_image_file, Bitmap, DecodedBitmap};
pub use geometry::{Point, Rect};
pub use readout::{PixelReadout, SurfaceTree};
