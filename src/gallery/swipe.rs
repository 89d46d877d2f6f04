// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection for the lightbox.
//!
//! A touch on the lightbox reaches the app twice when the finger lifts: once
//! as a touch event from the subscription and once as a release from the
//! backdrop widget. The two arrive in either order, so [`SwipeTracker`]
//! reconciles them: a release that belongs to a swipe never closes the
//! lightbox, while a tap or a mouse click does.

use super::lightbox::Direction;

/// Minimum horizontal travel, in logical pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Classifies a horizontal touch from `start_x` to `end_x`.
///
/// Moving left (start minus end above the threshold) shows the next item,
/// moving right shows the previous one. Anything shorter is not a swipe.
#[must_use]
pub fn classify(start_x: f32, end_x: f32) -> Option<Direction> {
    let distance = start_x - end_x;
    if distance > SWIPE_THRESHOLD {
        Some(Direction::Next)
    } else if distance < -SWIPE_THRESHOLD {
        Some(Direction::Previous)
    } else {
        None
    }
}

/// Outcome of a finished touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// The touch travelled past [`SWIPE_THRESHOLD`].
    Swipe(Direction),
    /// The touch was a tap released on the backdrop.
    Tap,
}

/// Tracks one touch gesture from start to end.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    end_x: Option<f32>,
    /// The backdrop reported its release before the touch ended.
    released_early: bool,
    /// A swipe ended before its backdrop release arrived.
    swallow_release: bool,
}

impl SwipeTracker {
    /// Records where a new touch began and forgets the previous gesture.
    pub fn start(&mut self, x: f32) {
        *self = Self {
            start_x: Some(x),
            ..Self::default()
        };
    }

    /// Records the latest position of the moving touch.
    pub fn update(&mut self, x: f32) {
        self.end_x = Some(x);
    }

    /// Finishes the touch.
    ///
    /// A touch that never moved is not a swipe. It only counts as a
    /// [`Gesture::Tap`] when the backdrop already reported its release.
    pub fn finish(&mut self) -> Option<Gesture> {
        let start = self.start_x.take()?;
        let end = self.end_x.take();
        let released = std::mem::take(&mut self.released_early);
        match end.and_then(|end| classify(start, end)) {
            Some(direction) => {
                self.swallow_release = !released;
                Some(Gesture::Swipe(direction))
            }
            None if released => Some(Gesture::Tap),
            None => None,
        }
    }

    /// Handles a release on the backdrop.
    ///
    /// Returns `true` when the lightbox should close right away, which is
    /// the case for a mouse click or a tap whose touch already ended. While
    /// a touch is in progress the decision is left to [`finish`](Self::finish),
    /// and the release that follows a finished swipe is swallowed.
    pub fn release(&mut self) -> bool {
        if self.is_tracking() {
            self.released_early = true;
            return false;
        }
        !std::mem::take(&mut self.swallow_release)
    }

    /// Drops any gesture in progress.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
