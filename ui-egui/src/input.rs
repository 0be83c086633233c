// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-click move selection.
//!
//! Pointer callbacks are reduced to explicit [`InputEvent`]s with the
//! clicked square already resolved, so the machine knows nothing about
//! the windowing toolkit. While no request is armed every event is
//! ignored; once armed, the first click on a friendly occupied square
//! records a source, and the second click either completes the move or
//! resets the selection.

use trichess_core::Position;

use crate::snapshot::BoardSnapshot;

/// Pointer button identity, decoupled from the toolkit's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Secondary,
    Middle,
}

/// A pointer event with its location resolved to a square (or not).
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The pointer moved; hover only, never changes the selection.
    PointerMoved(Option<Position>),
    /// A button was released over the surface.
    Released {
        button: Button,
        at: Option<Position>,
    },
}

/// What the caller has to act on after feeding an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Idle,
    /// A source square was recorded
    SourceChosen(Position),
    /// The selection was reset without producing a move
    SelectionCleared,
    /// The user picked a destination the oracle rejects
    IllegalAttempt { from: Position, to: Position },
    /// A complete, oracle-approved move; deliver it and disarm
    MoveChosen { from: Position, to: Position },
}

/// Cursor affordance derived from the hover location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Pointer,
}

/// Selection state of an in-progress move request.
#[derive(Debug, Default)]
pub struct MoveInput {
    source: Option<Position>,
}

impl MoveInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded source square, if one is chosen.
    pub fn source(&self) -> Option<Position> {
        self.source
    }

    /// Drop any recorded source (used when the request disarms).
    pub fn clear(&mut self) {
        self.source = None;
    }

    /// Advance the machine by one event.
    ///
    /// `snap` must have been captured with the current selection so its
    /// legal-destination mask matches `self.source()`.
    pub fn on_event(&mut self, armed: bool, event: InputEvent, snap: &BoardSnapshot) -> Outcome {
        if !armed {
            return Outcome::Idle;
        }
        let (button, at) = match event {
            InputEvent::PointerMoved(_) => return Outcome::Idle,
            InputEvent::Released { button, at } => (button, at),
        };

        // A miss, a repeat of the source, or a non-primary button all
        // reset the selection.
        let to = match at {
            Some(pos) if button == Button::Primary && self.source != Some(pos) => pos,
            _ => {
                return if self.source.take().is_some() {
                    Outcome::SelectionCleared
                } else {
                    Outcome::Idle
                };
            }
        };

        match self.source {
            None => {
                let friendly = snap
                    .piece_at(to)
                    .is_some_and(|piece| piece.owner == snap.turn);
                if friendly {
                    self.source = Some(to);
                    Outcome::SourceChosen(to)
                } else {
                    Outcome::Idle
                }
            }
            Some(from) => {
                self.source = None;
                if snap.legal_from_selection(to) {
                    Outcome::MoveChosen { from, to }
                } else {
                    Outcome::IllegalAttempt { from, to }
                }
            }
        }
    }

    /// Affordance for the hovered square: a pointing hand whenever a
    /// primary click there would advance the selection.
    pub fn cursor_hint(
        &self,
        armed: bool,
        hover: Option<Position>,
        snap: &BoardSnapshot,
    ) -> CursorHint {
        if !armed {
            return CursorHint::Default;
        }
        let Some(pos) = hover else {
            return CursorHint::Default;
        };
        if self.source == Some(pos) {
            return CursorHint::Default;
        }
        let would_progress = match self.source {
            None => snap
                .piece_at(pos)
                .is_some_and(|piece| piece.owner == snap.turn),
            Some(_) => snap.legal_from_selection(pos),
        };
        if would_progress {
            CursorHint::Pointer
        } else {
            CursorHint::Default
        }
    }
}
