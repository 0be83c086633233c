// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only game view consumed by the display, and a reference engine.
//!
//! The display never owns rules. Everything it needs from an engine is
//! behind [`GameView`]; `Game` is a small reference implementation used
//! by the binary and the tests. Its movement oracle is deliberately
//! permissive (any square not blocked by a friendly piece) - full
//! variant legality belongs to a real engine behind the same trait.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::position::BOARD_SQUARES;
use crate::{Color, Piece, PieceType, Position};

/// What the display is allowed to ask a rules engine.
///
/// All methods are reads; the display never mutates engine state
/// through this trait.
pub trait GameView {
    /// The side to move.
    fn turn(&self) -> Color;

    /// The piece occupying a square, if any.
    fn piece_at(&self, pos: Position) -> Option<Piece>;

    /// Whether moving the piece on `from` to `to` is legal right now.
    fn is_legal_move(&self, from: Position, to: Position) -> bool;

    /// Pieces captured by a player, in capture order.
    fn captured(&self, by: Color) -> &[Piece];

    /// Remaining clock time for a player.
    fn time_left(&self, player: Color) -> Duration;

    /// The winner, once one is decided.
    fn winner(&self) -> Option<Color>;

    /// Whether the game has ended.
    fn game_over(&self) -> bool;

    /// Whether legal destinations of a selected piece should be marked.
    fn show_legal_moves(&self) -> bool;
}

/// Errors from applying a move to the reference engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game is already decided
    #[error("the game is already over")]
    GameOver,

    /// The source square holds no piece
    #[error("no piece on {0}")]
    EmptySource(Position),

    /// The source piece belongs to a player not on turn
    #[error("piece on {0} does not belong to the side to move")]
    OutOfTurn(Position),

    /// The movement oracle rejected the move
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },
}

/// Reference three-player game: piece layout, turn rotation, capture
/// bookkeeping, countdown clocks, and win by king capture.
pub struct Game {
    board: [Option<Piece>; BOARD_SQUARES],
    turn: Color,
    captured: [Vec<Piece>; 3],
    clocks: [Duration; 3],
    turn_started: Instant,
    winner: Option<Color>,
    show_legal_moves: bool,
}

/// Back-rank piece order along the files.
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

impl Game {
    /// New game with every player on `clock` and the given highlight
    /// preference.
    pub fn new(clock: Duration, show_legal_moves: bool) -> Self {
        let mut board = [None; BOARD_SQUARES];
        for sector in Color::ALL {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                let pos = Position::new(sector, 0, file as u8);
                board[pos.ordinal()] = Some(Piece::new(*kind, sector));
            }
            for file in 0..8 {
                let pos = Position::new(sector, 1, file);
                board[pos.ordinal()] = Some(Piece::new(PieceType::Pawn, sector));
            }
        }
        Self {
            board,
            turn: Color::Blue,
            captured: [Vec::new(), Vec::new(), Vec::new()],
            clocks: [clock; 3],
            turn_started: Instant::now(),
            winner: None,
            show_legal_moves,
        }
    }

    /// Apply a human-selected move: records captures, detects a king
    /// capture, charges the mover's clock, and rotates the turn.
    pub fn apply_move(&mut self, from: Position, to: Position) -> Result<(), GameError> {
        if self.game_over() {
            return Err(GameError::GameOver);
        }
        let piece = self.board[from.ordinal()].ok_or(GameError::EmptySource(from))?;
        if piece.owner != self.turn {
            return Err(GameError::OutOfTurn(from));
        }
        if !self.is_legal_move(from, to) {
            return Err(GameError::IllegalMove { from, to });
        }

        if let Some(taken) = self.board[to.ordinal()] {
            self.captured[self.turn.index()].push(taken);
            if taken.kind == PieceType::King {
                self.winner = Some(self.turn);
            }
        }
        self.board[to.ordinal()] = Some(piece);
        self.board[from.ordinal()] = None;

        let spent = self.turn_started.elapsed();
        let clock = &mut self.clocks[self.turn.index()];
        *clock = clock.saturating_sub(spent);
        self.turn_started = Instant::now();

        if self.winner.is_none() {
            self.turn = self.turn.next();
        }
        Ok(())
    }
}

impl GameView for Game {
    fn turn(&self) -> Color {
        self.turn
    }

    fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.board[pos.ordinal()]
    }

    fn is_legal_move(&self, from: Position, to: Position) -> bool {
        if self.game_over() || from == to {
            return false;
        }
        let Some(piece) = self.board[from.ordinal()] else {
            return false;
        };
        if piece.owner != self.turn {
            return false;
        }
        match self.board[to.ordinal()] {
            Some(blocker) => blocker.owner != self.turn,
            None => true,
        }
    }

    fn captured(&self, by: Color) -> &[Piece] {
        &self.captured[by.index()]
    }

    fn time_left(&self, player: Color) -> Duration {
        let base = self.clocks[player.index()];
        if player == self.turn && !self.game_over() {
            base.saturating_sub(self.turn_started.elapsed())
        } else {
            base
        }
    }

    fn winner(&self) -> Option<Color> {
        self.winner
    }

    fn game_over(&self) -> bool {
        self.winner.is_some()
    }

    fn show_legal_moves(&self) -> bool {
        self.show_legal_moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(Duration::from_secs(600), true)
    }

    #[test]
    fn initial_layout_has_kings_and_pawns() {
        let game = game();
        for sector in Color::ALL {
            let king = game.piece_at(Position::new(sector, 0, 4)).unwrap();
            assert_eq!(king.kind, PieceType::King);
            assert_eq!(king.owner, sector);
            for file in 0..8 {
                let pawn = game.piece_at(Position::new(sector, 1, file)).unwrap();
                assert_eq!(pawn.kind, PieceType::Pawn);
            }
            for rank in 2..4 {
                for file in 0..8 {
                    assert!(game.piece_at(Position::new(sector, rank, file)).is_none());
                }
            }
        }
        assert_eq!(game.turn(), Color::Blue);
        assert!(!game.game_over());
    }

    #[test]
    fn turn_rotates_blue_green_red() {
        let mut game = game();
        let step = |game: &mut Game, sector: Color| {
            let from = Position::new(sector, 1, 0);
            let to = Position::new(sector, 2, 0);
            game.apply_move(from, to).unwrap();
        };
        step(&mut game, Color::Blue);
        assert_eq!(game.turn(), Color::Green);
        step(&mut game, Color::Green);
        assert_eq!(game.turn(), Color::Red);
        step(&mut game, Color::Red);
        assert_eq!(game.turn(), Color::Blue);
    }

    #[test]
    fn out_of_turn_and_empty_sources_are_rejected() {
        let mut game = game();
        let green_pawn = Position::new(Color::Green, 1, 0);
        let empty = Position::new(Color::Blue, 3, 3);
        let target = Position::new(Color::Blue, 2, 0);
        assert_eq!(
            game.apply_move(green_pawn, target),
            Err(GameError::OutOfTurn(green_pawn))
        );
        assert_eq!(
            game.apply_move(empty, target),
            Err(GameError::EmptySource(empty))
        );
    }

    #[test]
    fn moving_onto_a_friendly_piece_is_illegal() {
        let mut game = game();
        let from = Position::new(Color::Blue, 0, 0);
        let to = Position::new(Color::Blue, 1, 0);
        assert!(!game.is_legal_move(from, to));
        assert_eq!(
            game.apply_move(from, to),
            Err(GameError::IllegalMove { from, to })
        );
    }

    #[test]
    fn captures_are_recorded_in_order() {
        let mut game = game();
        let blue_pawn = Position::new(Color::Blue, 1, 0);
        let green_pawn = Position::new(Color::Green, 1, 0);
        let green_knight = Position::new(Color::Green, 0, 1);
        game.apply_move(blue_pawn, green_pawn).unwrap();
        assert_eq!(game.turn(), Color::Green);
        game.apply_move(Position::new(Color::Green, 1, 3), Position::new(Color::Green, 2, 3))
            .unwrap();
        game.apply_move(Position::new(Color::Red, 1, 3), Position::new(Color::Red, 2, 3))
            .unwrap();
        game.apply_move(green_pawn, green_knight).unwrap();

        let taken = game.captured(Color::Blue);
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[0], Piece::new(PieceType::Pawn, Color::Green));
        assert_eq!(taken[1], Piece::new(PieceType::Knight, Color::Green));
        assert!(game.captured(Color::Green).is_empty());
    }

    #[test]
    fn capturing_a_king_ends_the_game() {
        let mut game = game();
        let from = Position::new(Color::Blue, 1, 4);
        let green_king = Position::new(Color::Green, 0, 4);
        game.apply_move(from, green_king).unwrap();
        assert_eq!(game.winner(), Some(Color::Blue));
        assert!(game.game_over());
        assert!(!game.is_legal_move(green_king, from));
        assert_eq!(
            game.apply_move(green_king, from),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn clocks_only_charge_the_side_to_move() {
        let mut game = game();
        let start = Duration::from_secs(600);
        game.apply_move(Position::new(Color::Blue, 1, 0), Position::new(Color::Blue, 2, 0))
            .unwrap();
        assert!(game.time_left(Color::Blue) <= start);
        assert_eq!(game.time_left(Color::Red), start);
    }
}
