//! Individual pane render functions
//!
//! One pane per dashboard view. Each pane follows the same shape: an
//! optional pane-local state struct plus a `render` function that takes
//! the shared state and returns actions for the app to handle.

pub mod scatter;
pub mod source_bar;
pub mod table;
pub mod time_series;

pub use table::TablePaneState;
