//! Fixed-cadence tick scheduling
//!
//! The session never owns a timer. Whoever drives it feeds elapsed wall time
//! into a [`Ticker`], calls `GameState::tick` once per due tick, and stops
//! once the session is over.

use crate::game_state::GameState;
use crate::rng::PieceSource;
use crate::types::TICK_MS;

/// Converts elapsed milliseconds into whole ticks at a fixed interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    interval_ms: u32,
    accumulated_ms: u32,
}

impl Ticker {
    /// A zero interval is treated as 1ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time left until the next tick is due
    pub fn remaining_ms(&self) -> u32 {
        self.interval_ms - self.accumulated_ms
    }

    /// Add elapsed time and return how many ticks are now due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.accumulated_ms as u64 + elapsed_ms as u64;
        let due = total / self.interval_ms as u64;
        self.accumulated_ms = (total % self.interval_ms as u64) as u32;
        due.min(u32::MAX as u64) as u32
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }

    /// Advance the clock and deliver due ticks to `game`.
    ///
    /// Delivery stops as soon as the session is over. Returns the number of
    /// ticks delivered.
    pub fn drive<S: PieceSource>(&mut self, game: &mut GameState<S>, elapsed_ms: u32) -> u32 {
        if !game.is_playing() {
            self.reset();
            return 0;
        }

        let due = self.advance(elapsed_ms);
        let mut delivered = 0;
        for _ in 0..due {
            if !game.is_playing() {
                break;
            }
            game.tick();
            delivered += 1;
        }
        delivered
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}
