//! App shell components: AppBar, LoadingOverlay, AlertDialog, Footer
//!
//! These components form the persistent frame around whichever panel is visible.

mod alert_dialog;
mod appbar;
mod footer;
mod loading_overlay;

pub use alert_dialog::AlertDialog;
pub use appbar::AppBar;
pub use footer::Footer;
pub use loading_overlay::LoadingOverlay;
