//! Animation sequencer - the bounded step counter behind the join animation
//!
//! The sequencer is a plain state machine advanced by `tick()`; the host owns
//! the real clock and calls `tick()` on each firing. This keeps the machine
//! fully unit-testable without real time passing.

use std::time::Duration;

/// Terminal animation step.
pub const MAX_STEP: u8 = 5;

/// Wall-clock period between animation ticks while playing.
pub const TICK_PERIOD: Duration = Duration::from_millis(1800);

/// Narrative phase for a given animation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    LoadLeft,
    LoadRight,
    FindMatches,
    Join,
    ResultReady,
}

impl Phase {
    pub fn from_step(step: u8) -> Phase {
        match step {
            0 => Phase::Ready,
            1 => Phase::LoadLeft,
            2 => Phase::LoadRight,
            3 => Phase::FindMatches,
            4 => Phase::Join,
            _ => Phase::ResultReady,
        }
    }

    /// Caption shown in the animation strip.
    pub fn caption(&self) -> &'static str {
        match self {
            Phase::Ready => "Ready to start",
            Phase::LoadLeft => "Loading left table...",
            Phase::LoadRight => "Loading right table...",
            Phase::FindMatches => "Finding matches...",
            Phase::Join => "Joining data...",
            Phase::ResultReady => "Result created!",
        }
    }
}

/// Step counter over [0, MAX_STEP] plus the playing flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sequencer {
    step: u8,
    playing: bool,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn phase(&self) -> Phase {
        Phase::from_step(self.step)
    }

    /// Advance one step. A tick while paused is a no-op, so a stray timer
    /// firing after playback stopped can never move the state.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        if self.step < MAX_STEP {
            self.step += 1;
        }
        if self.step == MAX_STEP {
            // Auto-stop at the terminal step; no further ticks are due.
            self.playing = false;
        }
    }

    /// Toggle playback. At the terminal step this restarts from the
    /// beginning instead of toggling ("Replay" semantics).
    pub fn play_pause(&mut self) {
        if self.step == MAX_STEP {
            self.step = 0;
            self.playing = true;
        } else {
            self.playing = !self.playing;
        }
    }

    pub fn reset(&mut self) {
        self.step = 0;
        self.playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_bounded_progress() {
        let mut seq = Sequencer::new();
        seq.play_pause();
        assert!(seq.is_playing());

        for expected in 1..=MAX_STEP {
            seq.tick();
            assert_eq!(seq.step(), expected);
        }

        // Auto-stop after the final step, with no further command.
        assert_eq!(seq.step(), MAX_STEP);
        assert!(!seq.is_playing());
    }

    #[test]
    fn test_tick_while_paused_is_noop() {
        let mut seq = Sequencer::new();
        seq.play_pause();
        seq.tick();
        seq.play_pause(); // pause at step 1
        assert!(!seq.is_playing());

        seq.tick();
        seq.tick();
        assert_eq!(seq.step(), 1);
    }

    #[test]
    fn test_tick_after_auto_stop_is_noop() {
        let mut seq = Sequencer::new();
        seq.play_pause();
        for _ in 0..MAX_STEP {
            seq.tick();
        }
        assert!(!seq.is_playing());

        seq.tick();
        assert_eq!(seq.step(), MAX_STEP);
        assert!(!seq.is_playing());
    }

    #[test]
    fn test_replay_from_terminal_step() {
        let mut seq = Sequencer::new();
        seq.play_pause();
        for _ in 0..MAX_STEP {
            seq.tick();
        }
        assert_eq!(seq.step(), MAX_STEP);

        // Play at the terminal step restarts immediately, before any tick.
        seq.play_pause();
        assert_eq!(seq.step(), 0);
        assert!(seq.is_playing());
    }

    #[test]
    fn test_play_pause_is_a_toggle_below_terminal() {
        let mut seq = Sequencer::new();
        seq.play_pause();
        seq.tick();
        seq.play_pause();
        assert_eq!(seq.step(), 1);
        assert!(!seq.is_playing());

        seq.play_pause();
        assert_eq!(seq.step(), 1);
        assert!(seq.is_playing());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut seq = Sequencer::new();
        seq.play_pause();
        seq.tick();
        seq.tick();

        seq.reset();
        let first = seq;
        seq.reset();
        assert_eq!(seq, first);
        assert_eq!(seq.step(), 0);
        assert!(!seq.is_playing());
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(Phase::from_step(0), Phase::Ready);
        assert_eq!(Phase::from_step(1), Phase::LoadLeft);
        assert_eq!(Phase::from_step(2), Phase::LoadRight);
        assert_eq!(Phase::from_step(3), Phase::FindMatches);
        assert_eq!(Phase::from_step(4), Phase::Join);
        assert_eq!(Phase::from_step(5), Phase::ResultReady);
    }
}
