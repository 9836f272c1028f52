//! Viewer session - catalog cursor plus animation state
//!
//! This is the in-process control surface the UI shell drives: four total
//! commands (play_pause, reset, next, previous) and the queries the renderer
//! needs. All state lives here; the shell owns no hidden state besides the
//! real clock.

use super::catalog::{Catalog, ExampleRecord};
use super::sequencer::Sequencer;

/// A single viewing session over a fixed catalog.
pub struct Session {
    catalog: Catalog,
    current_index: usize,
    sequencer: Sequencer,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current_index: 0,
            sequencer: Sequencer::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    pub fn current_example(&self) -> &ExampleRecord {
        self.catalog
            .get(self.current_index)
            .expect("cursor is always within catalog bounds")
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn catalog_size(&self) -> usize {
        self.catalog.len()
    }

    pub fn animation_step(&self) -> u8 {
        self.sequencer.step()
    }

    pub fn is_playing(&self) -> bool {
        self.sequencer.is_playing()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────

    pub fn play_pause(&mut self) {
        self.sequencer.play_pause();
    }

    pub fn reset(&mut self) {
        self.sequencer.reset();
    }

    /// Advance the animation one step; called by the host on each timer
    /// firing. Ignored while paused.
    pub fn tick(&mut self) {
        self.sequencer.tick();
    }

    /// Select the next example, wrapping past the end. The animation narrates
    /// one specific example, so every navigation implies a reset.
    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.catalog.len();
        self.sequencer.reset();
    }

    /// Select the previous example, wrapping before the start.
    pub fn previous(&mut self) {
        let n = self.catalog.len();
        self.current_index = (self.current_index + n - 1) % n;
        self.sequencer.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sequencer::MAX_STEP;

    fn session() -> Session {
        Session::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn test_next_wraps_around_the_catalog() {
        let mut s = session();
        let n = s.catalog_size();
        for _ in 0..n {
            s.next();
        }
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn test_previous_wraps_around_the_catalog() {
        let mut s = session();
        let n = s.catalog_size();
        for _ in 0..n {
            s.previous();
        }
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn test_previous_from_first_selects_last() {
        let mut s = session();
        assert_eq!(s.current_index(), 0);
        s.previous();
        assert_eq!(s.current_index(), s.catalog_size() - 1);
    }

    #[test]
    fn test_navigation_resets_animation() {
        let mut s = session();
        s.play_pause();
        s.tick();
        s.tick();
        assert_eq!(s.animation_step(), 2);

        s.next();
        assert_eq!(s.animation_step(), 0);
        assert!(!s.is_playing());

        s.play_pause();
        s.tick();
        s.previous();
        assert_eq!(s.animation_step(), 0);
        assert!(!s.is_playing());
    }

    #[test]
    fn test_full_playback_run() {
        let mut s = session();
        assert_eq!(s.animation_step(), 0);
        assert!(!s.is_playing());

        s.play_pause();
        assert!(s.is_playing());

        for _ in 0..MAX_STEP {
            s.tick();
        }
        assert_eq!(s.animation_step(), MAX_STEP);
        assert!(!s.is_playing());
    }

    #[test]
    fn test_replay_at_terminal_step() {
        let mut s = session();
        s.play_pause();
        for _ in 0..MAX_STEP {
            s.tick();
        }
        assert_eq!(s.animation_step(), MAX_STEP);
        assert!(!s.is_playing());

        s.play_pause();
        assert_eq!(s.animation_step(), 0);
        assert!(s.is_playing());
    }

    #[test]
    fn test_reset_leaves_cursor_alone() {
        let mut s = session();
        s.next();
        s.next();
        s.next();
        assert_eq!(s.current_index(), 3);

        s.play_pause();
        s.tick();
        s.reset();

        assert_eq!(s.current_index(), 3);
        assert_eq!(s.animation_step(), 0);
        assert!(!s.is_playing());
    }

    #[test]
    fn test_current_example_follows_cursor() {
        let mut s = session();
        let first = s.current_example().name.clone();
        s.next();
        assert_ne!(s.current_example().name, first);
        s.previous();
        assert_eq!(s.current_example().name, first);
    }
}
