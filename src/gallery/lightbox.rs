// SPDX-License-Identifier: MPL-2.0
//! Lightbox state for the open interval.
//!
//! A [`Lightbox`] only exists while the overlay is open. Everything scoped
//! to that interval (the current index, the touch gesture in progress, and
//! the scroll lock) lives inside it and disappears when it is dropped.

use super::scroll_lock::ScrollLockGuard;
use super::swipe::SwipeTracker;

/// Direction of lightbox navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Show the previous item.
    Previous,
    /// Show the next item.
    Next,
}

/// Returns the index reached by stepping once from `index` in a list of `len`.
///
/// Wraps circularly in both directions. An empty list always yields 0.
#[must_use]
pub fn step(index: usize, len: usize, direction: Direction) -> usize {
    if len == 0 {
        return 0;
    }
    match direction {
        Direction::Next => {
            if index + 1 >= len {
                0
            } else {
                index + 1
            }
        }
        Direction::Previous => {
            if index == 0 || index > len {
                len - 1
            } else {
                index - 1
            }
        }
    }
}

/// Open lightbox.
#[derive(Debug)]
pub struct Lightbox {
    index: usize,
    swipe: SwipeTracker,
    _scroll_lock: ScrollLockGuard,
}

impl Lightbox {
    pub(crate) fn open(index: usize, scroll_lock: ScrollLockGuard) -> Self {
        Self {
            index,
            swipe: SwipeTracker::default(),
            _scroll_lock: scroll_lock,
        }
    }

    /// Index of the displayed item in the full item list.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn advance(&mut self, direction: Direction, len: usize) {
        self.index = step(self.index, len, direction);
    }

    pub(crate) fn swipe_mut(&mut self) -> &mut SwipeTracker {
        &mut self.swipe
    }
}
