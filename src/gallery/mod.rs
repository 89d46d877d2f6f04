// SPDX-License-Identifier: MPL-2.0
//! Portfolio gallery state.
//!
//! The [`GalleryController`] is the single source of truth for the fetched
//! items, the current page, and the lightbox. Button presses, keyboard
//! keys, and touch gestures all mutate the lightbox index through the same
//! operations.

pub mod controller;
pub mod lightbox;
pub mod scroll_lock;
pub mod swipe;

pub use controller::{
    Effect, GalleryController, LightboxInput, LoadOutcome, LoadPhase, LoadTicket, Message,
    NavigationKey, Snapshot,
};
pub use lightbox::Direction;
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use swipe::SWIPE_THRESHOLD;

/// Number of placeholder cells shown while a category is loading.
pub const SKELETON_CELLS: usize = 6;
