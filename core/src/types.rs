/// Linear square index into the grid, row-major.
pub type Square = u8;

/// Single one-based column or row coordinate in a move description.
pub type Coord = u8;

/// One-based `(column, row)` pair naming where a move landed.
pub type GridPos = (Coord, Coord);

/// Squares per side of the grid.
pub const GRID_SIDE: Square = 3;

/// Total number of squares on the board.
pub const SQUARE_COUNT: usize = (GRID_SIDE * GRID_SIDE) as usize;

pub trait ToGridPos {
    fn to_grid_pos(self) -> GridPos;
}

impl ToGridPos for Square {
    fn to_grid_pos(self) -> GridPos {
        (self % GRID_SIDE + 1, self / GRID_SIDE + 1)
    }
}
