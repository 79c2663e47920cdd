// Console user interface: prompts, retry loops and rendering
pub mod app;
pub mod prompts;
pub mod render;
pub mod ui_text;

// Re-export main app
pub use app::{FareSniperApp, query_from_args};
pub use prompts::{Console, InputClosed};
pub use ui_text::UI_TEXT;
