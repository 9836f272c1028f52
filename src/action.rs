//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit the application
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Animation
    // ─────────────────────────────────────────────────────────────────────────
    /// Start, pause, or replay the join animation
    PlayPause,
    /// Stop the animation and rewind to the first step
    ResetAnimation,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to the next join example (wraps past the last)
    NextExample,
    /// Move to the previous join example (wraps before the first)
    PreviousExample,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll the guide panel up one line
    ScrollUp,
    /// Scroll the guide panel down one line
    ScrollDown,
    /// Scroll the guide panel up one page
    PageUp,
    /// Scroll the guide panel down one page
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Help
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the keyboard shortcut overlay
    OpenHelp,
    /// Close the keyboard shortcut overlay
    CloseHelp,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::PlayPause => write!(f, "PlayPause"),
            Action::ResetAnimation => write!(f, "ResetAnimation"),
            Action::NextExample => write!(f, "NextExample"),
            Action::PreviousExample => write!(f, "PreviousExample"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseHelp => write!(f, "CloseHelp"),
        }
    }
}
