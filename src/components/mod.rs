//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components communicate through Actions rather than direct state
//! mutation; the document builders in here are pure functions of the model.

pub mod animation;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod splash;
pub mod sql_highlight;
pub mod table;

pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent};
pub use layout::{calculate_main_layout, centered_popup};
pub use splash::SplashComponent;
