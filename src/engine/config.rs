/// Number of cells on the board, addressed as slots `1..=BOARD_SLOTS`.
pub const BOARD_SLOTS: usize = 9;

/// Width of a row on the 3×3 grid.
pub const BOARD_WIDTH: usize = 3;

/// Winning lines as 1-based slots: rows top to bottom, columns left to right,
/// then the two diagonals. Evaluation walks them in this order.
pub const LINES: [[usize; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

/// Display name given to automated players; they skip the identity step.
pub const AI_DISPLAY_NAME: &str = "AIPlayer";

/// Display name of a human player before identity resolution.
pub const UNNAMED: &str = "Unnamed";

/// Length in bytes of the random salt stored with each credential.
pub const SALT_LEN: usize = 16;

/// Convert a 1-based slot to its (row, col) on the grid.
///
/// # Panics
///
/// Slot 0 underflows and panics in debug builds. Slots above `BOARD_SLOTS`
/// yield rows past the grid, so callers must pass a slot in `1..=BOARD_SLOTS`.
pub const fn slot_to_coord(slot: usize) -> (usize, usize) {
    ((slot - 1) / BOARD_WIDTH, (slot - 1) % BOARD_WIDTH)
}
