//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to child
//! components. App owns the core `Session` and the one real timer: the
//! animation clock anchor, armed exactly while the session is playing.

use crate::action::Action;
use crate::component::Component;
use crate::components::{draw_home_screen, HelpDialog, HomeComponent, SplashComponent};
use crate::model::{Catalog, Session, TICK_PERIOD};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::time::Instant;

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// The behavioral core: catalog cursor plus animation state
    pub session: Session,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Whether the help overlay is open
    pub show_help: bool,

    /// When the last animation tick fired; `Some` exactly while playing.
    /// Clearing it is how a pending tick gets canceled.
    tick_anchor: Option<Instant>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub home: HomeComponent,
    pub help_dialog: HelpDialog,
}

impl App {
    /// Create a new App over a validated catalog
    pub fn new(catalog: Catalog) -> App {
        App {
            mode: AppMode::Splash,
            session: Session::new(catalog),
            should_quit: false,
            show_help: false,
            tick_anchor: None,
            splash: SplashComponent::new(),
            home: HomeComponent::new(),
            help_dialog: HelpDialog::default(),
        }
    }

    /// Re-arm or clear the animation clock to match the playing flag
    fn sync_animation_clock(&mut self) {
        self.tick_anchor = if self.session.is_playing() {
            Some(Instant::now())
        } else {
            None
        };
    }

    /// Advance the animation if the clock is armed and a period has elapsed
    fn drive_animation_clock(&mut self) {
        if let Some(anchor) = self.tick_anchor {
            if anchor.elapsed() >= TICK_PERIOD {
                self.session.tick();
                // Auto-stop at the terminal step disarms the clock
                self.sync_animation_clock();
            }
        }
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if self.show_help {
                    self.help_dialog.handle_key_event(key)
                } else {
                    self.home.handle_key_event(key)
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash && self.splash.is_complete() {
                    return Ok(Some(Action::SplashComplete));
                }
                self.drive_animation_clock();
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Animation
            // ─────────────────────────────────────────────────────────────────
            Action::PlayPause => {
                self.session.play_pause();
                self.sync_animation_clock();
            }
            Action::ResetAnimation => {
                self.session.reset();
                self.sync_animation_clock();
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation (implies an animation reset)
            // ─────────────────────────────────────────────────────────────────
            Action::NextExample => {
                self.session.next();
                self.sync_animation_clock();
                self.home.reset_scroll();
            }
            Action::PreviousExample => {
                self.session.previous();
                self.sync_animation_clock();
                self.home.reset_scroll();
            }

            // ─────────────────────────────────────────────────────────────────
            // Scrolling (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                self.home.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Help
            // ─────────────────────────────────────────────────────────────────
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.show_help = true;
            }
            Action::CloseHelp => {
                self.show_help = false;
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                draw_home_screen(frame, area, &mut self.home, &self.session)?;

                if self.show_help {
                    self.help_dialog.draw(frame, area)?;
                }
            }
        }
        Ok(())
    }
}
