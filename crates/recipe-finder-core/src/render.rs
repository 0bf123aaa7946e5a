//! The surface the view controller draws on.
//!
//! The controller knows nothing about the DOM. It hands a [`Screen`] to a
//! [`RenderTarget`], toggles the loading indicator, and raises alerts. The
//! app crate implements this over Dioxus signals; tests record the calls.

use crate::views::Screen;

pub trait RenderTarget {
    /// Shows or hides the loading overlay.
    fn set_loading(&mut self, visible: bool);

    /// Replaces the visible panel with `screen`.
    fn render(&mut self, screen: Screen);

    /// Shows a blocking message the user has to dismiss.
    fn alert(&mut self, message: &str);
}
