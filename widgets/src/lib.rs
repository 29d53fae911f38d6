//! Graphical widgets which all live in a single window. This library doesn't know about the
//! session or the chart. The widgets report changes to their values and the application decides
//! what to do with them.

mod slider;
pub mod theme;
mod toggle_button;
mod window;

pub use slider::*;
pub use toggle_button::*;
pub use window::*;
