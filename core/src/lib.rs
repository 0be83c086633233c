// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trichess Core - Board Vocabulary and Game View
//!
//! This crate provides the pieces shared between the display and any
//! rules engine:
//! - Player colors and piece types for a three-player chess board
//! - The 96-square position type
//! - The read-only `GameView` trait the display consumes
//! - A reference `Game` engine implementing it

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod game;
pub mod position;

use serde::{Deserialize, Serialize};

pub use game::{Game, GameError, GameView};
pub use position::Position;

/// Player color; also names the board sector belonging to that player.
///
/// Declaration order is the turn order and the index used for all
/// per-player tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Blue moves first and owns the top sector
    Blue,
    /// Green owns the lower-right sector
    Green,
    /// Red owns the lower-left sector
    Red,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Color; 3] = [Color::Blue, Color::Green, Color::Red];

    /// Index into per-player tables (0, 1, 2 in turn order).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The player to move after this one.
    pub fn next(self) -> Self {
        match self {
            Color::Blue => Color::Green,
            Color::Green => Color::Red,
            Color::Red => Color::Blue,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Red => "Red",
        };
        f.write_str(name)
    }
}

/// Kind of a chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Glyph drawn on the board and in the captured rosters.
    pub fn glyph(self) -> char {
        match self {
            PieceType::Pawn => '\u{2659}',
            PieceType::Knight => '\u{2658}',
            PieceType::Bishop => '\u{2657}',
            PieceType::Rook => '\u{2656}',
            PieceType::Queen => '\u{2655}',
            PieceType::King => '\u{2654}',
        }
    }

    /// Standard exchange value, for engines ranking captures. The king
    /// is never exchanged.
    pub fn value(self) -> u32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight | PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }
}

/// A piece on the board: its kind and the player owning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub owner: Color,
}

impl Piece {
    pub fn new(kind: PieceType, owner: Color) -> Self {
        Self { kind, owner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_order_cycles() {
        assert_eq!(Color::Blue.next(), Color::Green);
        assert_eq!(Color::Green.next(), Color::Red);
        assert_eq!(Color::Red.next(), Color::Blue);
    }

    #[test]
    fn color_indices_follow_turn_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn piece_glyphs_are_distinct() {
        let glyphs: std::collections::HashSet<char> = [
            PieceType::Pawn,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Rook,
            PieceType::Queen,
            PieceType::King,
        ]
        .iter()
        .map(|k| k.glyph())
        .collect();
        assert_eq!(glyphs.len(), 6);
    }

    #[test]
    fn minor_pieces_share_their_exchange_value() {
        assert_eq!(PieceType::Knight.value(), PieceType::Bishop.value());
        assert!(PieceType::Queen.value() > PieceType::Rook.value());
        assert_eq!(PieceType::King.value(), 0);
    }
}
