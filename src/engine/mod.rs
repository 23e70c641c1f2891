mod cell;
mod universe;

pub use cell::Cell;
pub use universe::Universe;

/// The simulation collaborator boundary. The session and renderer depend only
/// on this surface, never on a concrete engine.
///
/// Coordinates are (row, col) with row 0 at the top; the cell buffer is
/// row-major, one byte per cell, and remains owned by the engine.
pub trait Engine {
    /// Grid dimensions as (height, width); fixed for the engine's lifetime
    fn dimensions(&self) -> (u32, u32);

    /// Advance the automaton by one generation
    fn step(&mut self);

    /// Flip one cell's state; out-of-range coordinates are a no-op
    fn toggle_cell(&mut self, row: u32, col: u32);

    /// Boundary mode: toroidal edges when enabled, fixed edges otherwise
    fn set_wrap(&mut self, enabled: bool);

    /// Re-seed the grid with a random population
    fn randomize(&mut self);

    /// Read-only view of the current cell buffer
    fn cells(&self) -> &[Cell];

    /// Row-major offset of (row, col) into the cell buffer
    fn index_of(&self, row: u32, col: u32) -> usize;
}
