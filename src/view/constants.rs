//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values so the layout and
//! the event loop agree on pane sizes.

use std::time::Duration;

/// Height of the header bar in lines.
///
/// Shows the user count, sort key, freshness stamp, loading and error text.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search bar in lines (border + input line).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
///
/// Single line for keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage of the user list; the post pane takes the rest.
pub const USER_LIST_WIDTH_PERCENT: u16 = 50;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// How long the event loop waits for input before draining the worker.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
