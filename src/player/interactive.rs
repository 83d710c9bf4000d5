use alloc::{boxed::Box, collections::VecDeque, vec::Vec};

use crate::engine::{
    board::Board,
    common::{InputError, InvalidSlot, MoveError},
};

/// Input collaborator: yields raw slot values, possibly out of range.
pub trait SlotSource {
    /// Block until the next raw slot value is available.
    fn request_slot(&mut self) -> Result<i64, InputError>;

    /// Told why the last value was refused, before the next request.
    fn reject(&mut self, _reason: &InvalidSlot) {}
}

/// Move provider for a human: re-requests until the slot is valid and free.
pub struct InteractiveMove {
    source: Box<dyn SlotSource>,
}

impl InteractiveMove {
    pub fn new(source: impl SlotSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn next_move(&mut self, board: &Board) -> Result<usize, MoveError> {
        if board.is_full() {
            return Err(MoveError::NoFreeSlot);
        }
        loop {
            let reason = match self.source.request_slot() {
                Ok(raw) => match board.check_slot(raw) {
                    Ok(slot) => return Ok(slot),
                    Err(e) => InvalidSlot::from(e),
                },
                Err(InputError::Unreadable) => InvalidSlot::Unreadable,
                Err(InputError::Closed) => return Err(MoveError::InputClosed),
            };
            log::debug!("rejected slot request: {}", reason);
            self.source.reject(&reason);
        }
    }
}

/// [`SlotSource`] replaying a fixed sequence, then reporting closed input.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    slots: VecDeque<i64>,
    rejected: Vec<InvalidSlot>,
}

impl ScriptedSource {
    pub fn new(slots: impl IntoIterator<Item = i64>) -> Self {
        Self {
            slots: slots.into_iter().collect(),
            rejected: Vec::new(),
        }
    }

    /// Rejections received so far, oldest first.
    pub fn rejected(&self) -> &[InvalidSlot] {
        &self.rejected
    }

    /// Values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.slots.len()
    }
}

impl SlotSource for ScriptedSource {
    fn request_slot(&mut self) -> Result<i64, InputError> {
        self.slots.pop_front().ok_or(InputError::Closed)
    }

    fn reject(&mut self, reason: &InvalidSlot) {
        self.rejected.push(*reason);
    }
}
