//! UI layer for the desktop app: app shell and histogram binning.

pub mod app;
pub mod histogram;

pub use app::DesktopGuiApp;
