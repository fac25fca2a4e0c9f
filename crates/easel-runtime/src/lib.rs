pub mod config;
pub mod drawable;
pub mod input;
pub mod runtime;
pub mod scheduler;

pub use config::GameConfig;
pub use drawable::Drawable;
pub use input::{KeyEvent, Modifiers, MouseButton, MouseEvent};
pub use runtime::Runtime;
pub use scheduler::FrameScheduler;
