//! Game state module - the session state machine
//!
//! Ties together the board, the active piece, the piece source and the score.
//! Commands and ticks are the only ways in; each runs to completion before
//! the next is accepted. Once the status is `GameOver` nothing changes again.

use crate::active::{DropOutcome, Tetromino};
use crate::board::Board;
use crate::pieces::random_piece;
use crate::rng::{PieceSource, RandomPieces};
use crate::scoring::clear_lines;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, GameStatus, LockEvent};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomPieces> {
    board: Board,
    /// None only after the session ended.
    active: Option<Tetromino>,
    source: S,
    /// Monotonic count of successful spawns.
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    lines: u32,
    status: GameStatus,
}

impl GameState<RandomPieces> {
    /// Start a session on an empty board with a seeded uniform piece source
    pub fn new(seed: u32) -> Self {
        Self::with_source(RandomPieces::new(seed))
    }

    pub fn seed(&self) -> u32 {
        self.source.seed()
    }
}

impl Default for GameState<RandomPieces> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Start a session on an empty board
    pub fn with_source(source: S) -> Self {
        Self::with_board(Board::new(), source)
    }

    /// Start a session on a prepared board.
    ///
    /// The first piece spawns immediately; if it collides the session starts
    /// (and stays) in `GameOver`.
    pub fn with_board(board: Board, source: S) -> Self {
        let mut state = Self {
            board,
            active: None,
            source,
            piece_id: 0,
            last_event: None,
            score: 0,
            lines: 0,
            status: GameStatus::Playing,
        };
        state.spawn_piece();
        state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this session
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    /// The persisted board (locked cells only)
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply an input command. Returns true if the session changed.
    ///
    /// Rejected moves and any command after game over are silent no-ops.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::Left => self.move_left(),
            Command::Right => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::Down => self.soft_drop(),
        }
    }

    /// Apply a command given by its symbol (`left`, `right`, `rotate`, `down`).
    ///
    /// Unrecognized symbols are rejected without touching the session.
    pub fn apply_symbol(&mut self, symbol: &str) -> bool {
        match Command::from_str(symbol) {
            Some(command) => self.apply_command(command),
            None => false,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    pub fn rotate(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        active.try_rotate(&self.board)
    }

    /// One gravity step from the external clock.
    ///
    /// Same semantics as [`Command::Down`]: move down, or lock if blocked.
    pub fn tick(&mut self) -> bool {
        self.soft_drop()
    }

    /// Move the active piece down one row; lock it if the row below is blocked.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        match active.try_drop(&self.board) {
            DropOutcome::Moved => true,
            DropOutcome::Blocked => {
                self.lock_piece();
                true
            }
        }
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        active.try_shift(&self.board, dx)
    }

    /// Merge the active piece into the board, clear rows, and spawn the next piece.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        // Cells are known empty: the piece only ever occupies legal positions.
        let merged = self
            .board
            .lock_cells(active.shape.cells(), active.x, active.y, active.color());
        debug_assert!(merged, "active piece overlapped the board at lock");

        let cleared = clear_lines(&mut self.board);
        self.lines = self.lines.saturating_add(cleared.lines() as u32);
        self.score = self.score.saturating_add(cleared.score_delta);

        let piece_id = self.piece_id;
        let spawned = self.spawn_piece();

        self.last_event = Some(LockEvent {
            piece_id,
            kind: active.kind,
            lines_cleared: cleared.lines() as u32,
            score_delta: cleared.score_delta,
            game_over: !spawned,
        });
    }

    /// Draw a piece and place it at the spawn position.
    ///
    /// On collision the piece is discarded and the session ends.
    fn spawn_piece(&mut self) -> bool {
        let piece = Tetromino::spawn(random_piece(&mut self.source));

        if piece.collides(&self.board) {
            self.active = None;
            self.status = GameStatus::GameOver;
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        true
    }

    /// Fill a caller-owned snapshot (no allocation).
    ///
    /// The snapshot board shows the active piece overlaid on the locked cells;
    /// the persisted board itself is never modified.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        if let Some(active) = self.active {
            let color = Some(active.color());
            for (x, y) in active.cells() {
                if let Some(cell) = out
                    .board
                    .get_mut(y as usize)
                    .and_then(|row| row.get_mut(x as usize))
                {
                    *cell = color;
                }
            }
        }

        out.active = self.active.map(ActiveSnapshot::from);
        out.piece_id = self.piece_id;
        out.score = self.score;
        out.lines = self.lines;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PieceSequence;
    use crate::types::{Color, PieceKind, BOARD_WIDTH};

    fn session_of(kind: PieceKind) -> GameState<PieceSequence> {
        GameState::with_source(PieceSequence::repeat(kind))
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.piece_id, 1);
        assert_eq!(state.board.filled_count(), 0);

        let active = state.active.unwrap();
        assert_eq!((active.x, active.y), (4, 0));
        assert_eq!(state.seed(), 12345);
    }

    #[test]
    fn test_same_seed_same_pieces() {
        let mut a = GameState::new(777);
        let mut b = GameState::new(777);

        for _ in 0..200 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.board, b.board);
        assert_eq!(a.active, b.active);
        assert_eq!(a.piece_id, b.piece_id);
    }

    #[test]
    fn test_moves_are_gated_by_walls() {
        let mut state = session_of(PieceKind::I);

        // I is four wide; from x=4 it reaches x=6 after two steps.
        assert!(state.move_right());
        assert!(state.move_right());
        assert!(!state.move_right());
        assert_eq!(state.active.unwrap().x, 6);

        for _ in 0..6 {
            assert!(state.move_left());
        }
        assert!(!state.move_left());
        assert_eq!(state.active.unwrap().x, 0);
    }

    #[test]
    fn test_lock_writes_color_and_spawns() {
        let mut state = session_of(PieceKind::O);

        let mut ticks = 0;
        while state.piece_id == 1 {
            assert!(state.tick());
            ticks += 1;
        }
        // 18 moves down, then the blocked attempt that locks.
        assert_eq!(ticks, 19);

        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(state.board.get(x, y), Some(Some(Color::Yellow)));
        }
        assert_eq!(state.board.filled_count(), 4);

        let event = state.take_last_event().unwrap();
        assert_eq!(event.piece_id, 1);
        assert_eq!(event.kind, PieceKind::O);
        assert_eq!(event.lines_cleared, 0);
        assert!(!event.game_over);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_lock_clears_rows_and_scores() {
        let mut board = Board::new();
        // Bottom row full except columns 4..=7, which the I piece fills.
        for x in 0..BOARD_WIDTH as i8 {
            if !(4..=7).contains(&x) {
                board.set(x, 19, Some(Color::Red));
            }
        }
        board.set(0, 18, Some(Color::Blue));

        let mut state = GameState::with_board(board, PieceSequence::repeat(PieceKind::I));
        while state.piece_id == 1 {
            state.soft_drop();
        }

        assert_eq!(state.score, 10);
        assert_eq!(state.lines, 1);
        assert_eq!(state.board.get(0, 19), Some(Some(Color::Blue)));
        assert_eq!(state.board.filled_count(), 1);
        assert_eq!(state.take_last_event().unwrap().score_delta, 10);
    }

    #[test]
    fn test_spawn_collision_ends_game() {
        let mut board = Board::new();
        board.set(4, 2, Some(Color::Green));

        // O at (4,0) covers rows 0-1: lands on (4,2) immediately.
        let mut state = GameState::with_board(board, PieceSequence::repeat(PieceKind::O));
        assert!(state.is_playing());
        assert!(state.tick());
        assert!(state.is_game_over());
        assert!(state.active.is_none());

        let event = state.take_last_event().unwrap();
        assert!(event.game_over);
    }

    #[test]
    fn test_commands_are_noops_after_game_over() {
        let mut board = Board::new();
        board.set(5, 0, Some(Color::Green));
        let mut state = GameState::with_board(board, PieceSequence::repeat(PieceKind::O));
        assert!(state.is_game_over());

        let before_board = state.board.clone();
        for command in [Command::Left, Command::Right, Command::Rotate, Command::Down] {
            assert!(!state.apply_command(command));
        }
        assert!(!state.tick());
        assert_eq!(state.board, before_board);
        assert_eq!(state.score, 0);
        assert!(state.active.is_none());
    }

    #[test]
    fn test_apply_symbol_rejects_unknown() {
        let mut state = session_of(PieceKind::T);
        let before = state.active;

        assert!(!state.apply_symbol("hardDrop"));
        assert!(!state.apply_symbol(""));
        assert_eq!(state.active, before);

        assert!(state.apply_symbol("right"));
        assert_eq!(state.active.unwrap().x, 5);
    }

    #[test]
    fn test_snapshot_overlays_active_piece() {
        let mut state = session_of(PieceKind::T);
        state.board.set(0, 19, Some(Color::Blue));

        let snap = state.snapshot();
        // T: .#. / ### at (4,0)
        assert_eq!(snap.board[0][5], Some(Color::Purple));
        assert_eq!(snap.board[1][4], Some(Color::Purple));
        assert_eq!(snap.board[0][4], None);
        assert_eq!(snap.board[19][0], Some(Color::Blue));

        // The persisted board never sees the active piece.
        assert_eq!(state.board.get(5, 0), Some(None));
        assert_eq!(snap.active.unwrap().kind, PieceKind::T);
        assert_eq!(snap.status, GameStatus::Playing);
    }
}
