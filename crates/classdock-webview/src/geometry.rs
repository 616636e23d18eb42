//! Bounds of the active view inside the host window.
//!
//! The view sits below a fixed header strip and to the left of an optional
//! sidebar:
//!
//! ```text
//! +--------------------------------------+
//! |            header (height)           |
//! +---------------------------+----------+
//! |                           |          |
//! |        active view        | sidebar  |
//! |                           | (width)  |
//! +---------------------------+----------+
//! ```

use classdock_common::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Sidebar visibility plus its fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SidebarState {
    pub open: bool,
    pub width: f64,
}

impl SidebarState {
    pub fn new(open: bool, width: f64) -> Self {
        Self { open, width }
    }
}

/// Compute the rectangle of the active view. Negative extents clamp to zero.
pub fn compute_bounds(container: Size, header_height: f64, sidebar: SidebarState) -> Rect {
    let width = if sidebar.open {
        container.width - sidebar.width
    } else {
        container.width
    };
    let height = container.height - header_height;

    Rect {
        x: 0.0,
        y: header_height,
        width: width.max(0.0),
        height: height.max(0.0),
    }
}

// =============================================================================
// TESTS
// =============================================================================
