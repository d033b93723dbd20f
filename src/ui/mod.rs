mod app;
mod dialogs;
pub mod navigation;
mod sidebar;
pub mod state;
mod views;

pub use app::StudioApp;
