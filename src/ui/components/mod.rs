// UI Components
pub mod command_bar;
pub mod dialog;
pub mod guide_list;
pub mod status_bar;
pub mod warning;

// Re-export components for convenience
pub use command_bar::{CommandBar, CommandItem};
pub use dialog::{Dialog, JudgeDialog};
pub use guide_list::GuideList;
pub use status_bar::StatusBar;
pub use warning::WarningScreen;
