/// Cell is the fundamental unit of the automaton grid.
/// `repr(u8)` keeps the engine's buffer at one byte per cell so it can be
/// exposed to the renderer as a plain linear slice.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip the cell state
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Compute the next state under Conway's B3/S23 rule:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn next(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.next(0), Cell::Dead);
        assert_eq!(Cell::Alive.next(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.next(2), Cell::Alive);
        assert_eq!(Cell::Alive.next(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(Cell::Alive.next(4), Cell::Dead);
        assert_eq!(Cell::Alive.next(8), Cell::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::Dead.next(3), Cell::Alive);
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::Dead.toggle().toggle(), Cell::Dead);
        assert_eq!(Cell::Alive.toggle().toggle(), Cell::Alive);
    }
}
