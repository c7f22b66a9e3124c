//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule can be driven directly from a test
//! - **Portable**: Any renderer, input source or clock can sit on top of it
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of empty or colored cells
//! - [`pieces`]: The seven catalog shapes and clockwise matrix rotation
//! - [`collision`]: The single legality predicate for every placement
//! - [`active`]: The falling piece and its move/rotate/drop commands
//! - [`scoring`]: Full-row removal and the flat per-row bonus
//! - [`game_state`]: The session state machine (lock, spawn, game over)
//! - [`rng`]: Seeded piece sources
//! - [`snapshot`]: Render-ready copy of the session
//! - [`clock`]: Fixed-cadence tick scheduling for collaborators
//!
//! # Game Rules
//!
//! - Pieces spawn with their matrix's top-left cell at (4, 0)
//! - Moves and rotations that would collide are silently rejected
//! - Rotation is a plain 90° clockwise matrix turn, with no wall kicks
//! - A blocked downward move locks the piece into the board
//! - Each cleared row is worth 10 points
//! - A spawn that collides ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{Command, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! game.apply_command(Command::Right);
//! game.apply_command(Command::Rotate);
//! game.tick();
//!
//! assert_eq!(game.score(), 0);
//! ```

pub mod active;
pub mod board;
pub mod clock;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use active::{DropOutcome, Tetromino};
pub use board::Board;
pub use clock::Ticker;
pub use collision::collides;
pub use game_state::GameState;
pub use pieces::{catalog_piece, catalog_shape, random_piece, rotate_clockwise, Piece, Shape};
pub use rng::{PieceSequence, PieceSource, RandomPieces, SimpleRng};
pub use scoring::{clear_lines, line_clear_score, LineClear};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
