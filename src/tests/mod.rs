//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the dashboard through key events and
//! a scripted directory worker.

mod acceptance_posts;
mod help_overlay_tests;
