// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`appwrite`]: Gallery items from an Appwrite collection (implements [`ItemFetcher`])
//!
//! [`ItemFetcher`]: crate::application::port::ItemFetcher

pub mod appwrite;

pub use appwrite::{AppwriteFetcher, AppwriteSettings};
