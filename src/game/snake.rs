use std::collections::VecDeque;

use super::types::Position;

/// Head-first body. Never empty and never holds the same cell twice;
/// `Game::step` checks occupancy before every `push_head`.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    pub fn new(head: Position) -> Self {
        Self { body: VecDeque::from([head]) }
    }

    pub fn head(&self) -> Position {
        // body is never empty
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, p: Position) -> bool {
        self.body.contains(&p)
    }

    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn push_head(&mut self, p: Position) {
        self.body.push_front(p);
    }

    pub(crate) fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: &[Position]) -> Self {
        assert!(!segments.is_empty());
        Self { body: segments.iter().copied().collect() }
    }
}
