use crate::config::APPLE_PHASE_STEP;

use super::types::Position;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Apple {
    pub pos: Position,
    /// Pulse phase; cosmetic only.
    pub phase: f32,
}

impl Apple {
    pub fn new(pos: Position) -> Self {
        Self { pos, phase: 0.0 }
    }

    pub fn advance_phase(&mut self) {
        self.phase = (self.phase + APPLE_PHASE_STEP) % std::f32::consts::TAU;
    }
}
