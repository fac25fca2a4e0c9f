pub mod backend;
pub mod font;
pub mod geometry;
pub mod record;
pub mod surface;
pub mod transform;

pub use backend::{Backend, Raster, TextAlign};
pub use font::FontPolicy;
pub use record::{Command, RecordedImage, RecordingBackend};
pub use surface::{PaintState, RenderSurface};
pub use transform::{deg_to_rad, rad_to_deg};

// Re-export kurbo types so downstream crates don't need a direct dependency
pub use kurbo::{Point, Vec2};
