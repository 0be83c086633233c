// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot handoff of a selected move to a waiting game loop.
//!
//! A game-loop thread arms the request and blocks on the returned
//! ticket; the UI thread completes it at most once. The slot holds the
//! sending half of a bounded(1) channel, so completing consumes the
//! sender and a second completion is impossible by construction.
//! Closing the request drops any armed sender, which releases a blocked
//! waiter with [`MoveCancelled`] instead of leaving it hung.

use crossbeam_channel::{bounded, Receiver, Sender};
use parking_lot::Mutex;
use thiserror::Error;
use trichess_core::Position;

type Pair = (Position, Position);

/// Misuse of the request protocol; a caller bug, not user input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    #[error("a move request is already armed")]
    AlreadyArmed,
    #[error("no move request is armed")]
    NotArmed,
    #[error("the requesting side dropped its ticket")]
    Disconnected,
    #[error("the display has shut down")]
    Closed,
}

/// The pending request was cancelled before a move arrived.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("move request cancelled before a move arrived")]
pub struct MoveCancelled;

enum Slot {
    Idle,
    Armed(Sender<Pair>),
    Closed,
}

/// Re-armable single-slot move request shared between the UI thread
/// and the game loop.
pub struct MoveRequest {
    slot: Mutex<Slot>,
}

/// Blocking handle for one armed request.
pub struct MoveTicket {
    rx: Receiver<Pair>,
}

impl MoveRequest {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot::Idle),
        }
    }

    /// Arm the request and hand back the ticket the caller will block
    /// on. Arming while already armed is a protocol error.
    pub fn arm(&self) -> Result<MoveTicket, RequestError> {
        let mut slot = self.slot.lock();
        match *slot {
            Slot::Armed(_) => return Err(RequestError::AlreadyArmed),
            Slot::Closed => return Err(RequestError::Closed),
            Slot::Idle => {}
        }
        let (tx, rx) = bounded(1);
        *slot = Slot::Armed(tx);
        Ok(MoveTicket { rx })
    }

    /// Whether a move is currently being solicited.
    pub fn is_armed(&self) -> bool {
        matches!(*self.slot.lock(), Slot::Armed(_))
    }

    /// Deliver the selected move and disarm. Exactly one completion per
    /// armed request; anything else is a protocol error.
    pub fn complete(&self, from: Position, to: Position) -> Result<(), RequestError> {
        let sender = {
            let mut slot = self.slot.lock();
            match std::mem::replace(&mut *slot, Slot::Idle) {
                Slot::Armed(tx) => tx,
                Slot::Idle => return Err(RequestError::NotArmed),
                Slot::Closed => {
                    *slot = Slot::Closed;
                    return Err(RequestError::Closed);
                }
            }
        };
        sender
            .send((from, to))
            .map_err(|_| RequestError::Disconnected)
    }

    /// Shut the request down: any blocked waiter is released with
    /// [`MoveCancelled`] and later `arm` calls fail with `Closed`.
    pub fn close(&self) {
        *self.slot.lock() = Slot::Closed;
    }
}

impl Default for MoveRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveTicket {
    /// Block until the move arrives or the request is cancelled.
    pub fn wait(self) -> Result<Pair, MoveCancelled> {
        self.rx.recv().map_err(|_| MoveCancelled)
    }
}
