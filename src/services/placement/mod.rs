//! Popover placement from grid coordinates.
//!
//! Picks the side a detail popover opens from using only a cell's row and
//! column in the 6×7 grid, so the popover stays on screen without measuring
//! the rendered layout.

use crate::models::calendar_day::{DAYS_PER_WEEK, GRID_ROWS};
use crate::models::placement::{GridPosition, Placement, PopoverPlacement, RangeAnchor, RangePlacement};

/// Columns left of this open popovers to the right.
const RIGHT_SIDE_MAX_COL: usize = 3;

/// Range starts at or beyond this column have room on their left.
const LEFT_ROOM_MIN_COL: usize = 3;

/// Range ends at or before this column have room on their right.
const RIGHT_ROOM_MAX_COL: usize = 4;

/// Rows up to this one open range popovers downwards when there is no side room.
const DOWNWARD_MAX_ROW: usize = 2;

impl GridPosition {
    /// 1-based row and column of the cell at `date_index`.
    pub fn from_index(date_index: usize) -> Self {
        let ordinal = date_index + 1;
        let row = ordinal.div_ceil(DAYS_PER_WEEK);
        let col = match ordinal % DAYS_PER_WEEK {
            0 => DAYS_PER_WEEK,
            rest => rest,
        };
        Self { row, col }
    }

    pub fn is_last_row(&self) -> bool {
        self.row == GRID_ROWS
    }
}

/// Placement for a popover anchored on the cell at `date_index`.
///
/// Cells in the first two columns open to the right, the rest to the left;
/// the last row aligns the popover's end with the cell.
pub fn place_for(date_index: usize) -> PopoverPlacement {
    let position = GridPosition::from_index(date_index);
    let opens_right = position.col < RIGHT_SIDE_MAX_COL;

    let placement = match (opens_right, position.is_last_row()) {
        (true, false) => Placement::RightStart,
        (true, true) => Placement::RightEnd,
        (false, false) => Placement::LeftStart,
        (false, true) => Placement::LeftEnd,
    };

    PopoverPlacement {
        placement,
        row: position.row,
        col: position.col,
    }
}

/// Placement for a popover attached to a range dragged from `start_index`
/// to `end_index`.
///
/// Prefers opening to the left of the start cell, then to the right of the
/// end cell. A range touching the last row aligns ends instead of starts.
/// Without room on either side the popover opens below the start cell in
/// the top rows and above it elsewhere.
pub fn place_for_range(start_index: usize, end_index: usize) -> RangePlacement {
    let start = GridPosition::from_index(start_index);
    let end = GridPosition::from_index(end_index);

    let room_left = start.col >= LEFT_ROOM_MIN_COL;
    let room_right = end.col <= RIGHT_ROOM_MAX_COL;
    let touches_last_row = start.is_last_row() || end.is_last_row();

    if room_left {
        let placement = if start.is_last_row() {
            Placement::LeftEnd
        } else {
            Placement::LeftStart
        };
        return RangePlacement {
            direction: RangeAnchor::Start,
            placement,
        };
    }

    if room_right {
        let placement = if touches_last_row {
            Placement::RightEnd
        } else {
            Placement::RightStart
        };
        return RangePlacement {
            direction: RangeAnchor::End,
            placement,
        };
    }

    let placement = if start.row <= DOWNWARD_MAX_ROW {
        Placement::BottomStart
    } else {
        Placement::TopStart
    };
    RangePlacement {
        direction: RangeAnchor::Start,
        placement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 1, 1; "first cell")]
    #[test_case(6, 1, 7; "end of first row")]
    #[test_case(7, 2, 1; "start of second row")]
    #[test_case(20, 3, 7; "end of third row")]
    #[test_case(41, 6, 7; "last cell")]
    fn test_grid_position(index: usize, row: usize, col: usize) {
        assert_eq!(GridPosition::from_index(index), GridPosition { row, col });
    }

    #[test_case(0, Placement::RightStart; "top left opens right")]
    #[test_case(1, Placement::RightStart; "second column opens right")]
    #[test_case(2, Placement::LeftStart; "third column opens left")]
    #[test_case(36, Placement::RightEnd; "last row left side")]
    #[test_case(41, Placement::LeftEnd; "bottom right")]
    fn test_place_for(index: usize, expected: Placement) {
        assert_eq!(place_for(index).placement, expected);
    }

    #[test]
    fn test_place_for_reports_coordinates() {
        let result = place_for(41);
        assert_eq!((result.row, result.col), (6, 7));
    }

    #[test]
    fn test_range_prefers_start_side() {
        // Row 2, columns 3 to 4: room on both sides
        let result = place_for_range(9, 10);
        assert_eq!(result.direction, RangeAnchor::Start);
        assert_eq!(result.placement, Placement::LeftStart);
    }

    #[test]
    fn test_range_uses_end_side_when_start_is_at_left_edge() {
        // Row 1, columns 1 to 3
        let result = place_for_range(0, 2);
        assert_eq!(result.direction, RangeAnchor::End);
        assert_eq!(result.placement, Placement::RightStart);
    }

    #[test]
    fn test_range_in_last_row_aligns_end() {
        // Row 6, columns 4 to 6
        let left = place_for_range(38, 40);
        assert_eq!(left.direction, RangeAnchor::Start);
        assert_eq!(left.placement, Placement::LeftEnd);

        // Row 6, columns 1 to 2
        let right = place_for_range(35, 36);
        assert_eq!(right.direction, RangeAnchor::End);
        assert_eq!(right.placement, Placement::RightEnd);
    }

    #[test]
    fn test_range_ending_in_last_row_keeps_left_start() {
        // Starts row 5 column 4, ends row 6 column 6
        let result = place_for_range(31, 40);
        assert_eq!(result.direction, RangeAnchor::Start);
        assert_eq!(result.placement, Placement::LeftStart);
    }

    #[test]
    fn test_range_starting_in_last_row_forces_right_end() {
        // Starts row 5 column 1, ends row 6 column 2
        let result = place_for_range(28, 36);
        assert_eq!(result.direction, RangeAnchor::End);
        assert_eq!(result.placement, Placement::RightEnd);
    }

    #[test_case(0, 6, Placement::BottomStart; "full first row")]
    #[test_case(8, 13, Placement::BottomStart; "second row")]
    #[test_case(15, 20, Placement::TopStart; "third row")]
    #[test_case(29, 41, Placement::TopStart; "spanning into last row")]
    fn test_range_without_side_room(start: usize, end: usize, expected: Placement) {
        let result = place_for_range(start, end);
        assert_eq!(result.direction, RangeAnchor::Start);
        assert_eq!(result.placement, expected);
    }
}
