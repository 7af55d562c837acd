//! # takerate-tests
//! Shared helpers for the workspace's end-to-end and property tests.

pub mod helpers;
