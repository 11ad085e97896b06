//! Popover placement values handed to the UI layer.

use serde::{Deserialize, Serialize};

/// Side and alignment a popover opens from, relative to its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    RightStart,
    RightEnd,
    LeftStart,
    LeftEnd,
    TopStart,
    TopEnd,
    Bottom,
    BottomStart,
    BottomEnd,
}

impl Placement {
    pub fn as_str(self) -> &'static str {
        match self {
            Placement::RightStart => "right-start",
            Placement::RightEnd => "right-end",
            Placement::LeftStart => "left-start",
            Placement::LeftEnd => "left-end",
            Placement::TopStart => "top-start",
            Placement::TopEnd => "top-end",
            Placement::Bottom => "bottom",
            Placement::BottomStart => "bottom-start",
            Placement::BottomEnd => "bottom-end",
        }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1-based row/column of a cell in the 6×7 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

/// Placement for a popover anchored on a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopoverPlacement {
    pub placement: Placement,
    pub row: usize,
    pub col: usize,
}

/// Which end of a dragged range the popover is anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeAnchor {
    Start,
    End,
}

/// Placement for a popover attached to a multi-day drag selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangePlacement {
    pub direction: RangeAnchor,
    pub placement: Placement,
}
