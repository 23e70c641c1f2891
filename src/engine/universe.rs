use super::{Cell, Engine};
use rand::Rng;
use rayon::prelude::*;

/// Cell count above which a generation step runs on the rayon pool
const PARALLEL_THRESHOLD: usize = 32_768;

/// Universe is the default in-crate engine: Conway's Game of Life with
/// selectable boundary mode. All cells start dead; state only changes through
/// `step`, `toggle_cell`, and `randomize`.
pub struct Universe {
    height: u32,
    width: u32,
    cells: Vec<Cell>,
    wrap: bool,
}

impl Universe {
    /// Create a universe with all cells dead and fixed edges
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::Dead; (height * width) as usize],
            wrap: false,
        }
    }

    const fn idx(&self, row: u32, col: u32) -> usize {
        (row * self.width + col) as usize
    }

    /// Buffer offset of the neighbor at (row + dr, col + dc), honoring the
    /// boundary mode: wrapped toroidally, or None when it falls off a fixed edge
    fn neighbor_idx(&self, row: u32, col: u32, dr: i64, dc: i64) -> Option<usize> {
        let h = self.height as i64;
        let w = self.width as i64;
        let mut r = row as i64 + dr;
        let mut c = col as i64 + dc;

        if self.wrap {
            r = (r + h) % h;
            c = (c + w) % w;
        } else if r < 0 || r >= h || c < 0 || c >= w {
            return None;
        }

        Some((r * w + c) as usize)
    }

    fn live_neighbors(&self, row: u32, col: u32) -> u8 {
        (-1i64..=1)
            .flat_map(|dr| (-1i64..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| self.neighbor_idx(row, col, dr, dc))
            .map(|idx| self.cells[idx] as u8)
            .sum()
    }

    /// Serial evolution - builds the next buffer without touching the current one
    fn next_cells(&self) -> Vec<Cell> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| {
                self.cells[self.idx(row, col)].next(self.live_neighbors(row, col))
            })
            .collect()
    }

    /// Parallel evolution using rayon for large grids
    fn next_cells_parallel(&self) -> Vec<Cell> {
        (0..self.height)
            .into_par_iter()
            .flat_map(|row| (0..self.width).into_par_iter().map(move |col| (row, col)))
            .map(|(row, col)| {
                self.cells[self.idx(row, col)].next(self.live_neighbors(row, col))
            })
            .collect()
    }
}

impl Engine for Universe {
    fn dimensions(&self) -> (u32, u32) {
        (self.height, self.width)
    }

    fn step(&mut self) {
        self.cells = if self.cells.len() >= PARALLEL_THRESHOLD {
            self.next_cells_parallel()
        } else {
            self.next_cells()
        };
    }

    fn toggle_cell(&mut self, row: u32, col: u32) {
        if row < self.height && col < self.width {
            let idx = self.idx(row, col);
            self.cells[idx] = self.cells[idx].toggle();
        }
    }

    fn set_wrap(&mut self, enabled: bool) {
        self.wrap = enabled;
    }

    fn randomize(&mut self) {
        let mut rng = rand::rng();
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.3) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index_of(&self, row: u32, col: u32) -> usize {
        self.idx(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_at(u: &Universe, row: u32, col: u32) -> Cell {
        u.cells()[u.index_of(row, col)]
    }

    #[test]
    fn test_starts_all_dead() {
        let u = Universe::new(40, 80);
        assert_eq!(u.dimensions(), (40, 80));
        assert_eq!(u.cells().len(), 40 * 80);
        assert!(u.cells().iter().all(|c| !c.is_alive()));
    }

    #[test]
    fn test_index_is_row_major() {
        let u = Universe::new(40, 80);
        assert_eq!(u.index_of(0, 0), 0);
        assert_eq!(u.index_of(0, 79), 79);
        assert_eq!(u.index_of(1, 0), 80);
        assert_eq!(u.index_of(5, 5), 5 * 80 + 5);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut u = Universe::new(10, 10);
        u.toggle_cell(3, 4);
        assert_eq!(cell_at(&u, 3, 4), Cell::Alive);
        u.toggle_cell(3, 4);
        assert_eq!(cell_at(&u, 3, 4), Cell::Dead);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut u = Universe::new(10, 10);
        u.toggle_cell(10, 0);
        u.toggle_cell(0, 10);
        assert!(u.cells().iter().all(|c| !c.is_alive()));
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut u = Universe::new(10, 10);
        // Horizontal blinker centered at (5, 5)
        u.toggle_cell(5, 4);
        u.toggle_cell(5, 5);
        u.toggle_cell(5, 6);

        u.step();
        assert_eq!(cell_at(&u, 4, 5), Cell::Alive);
        assert_eq!(cell_at(&u, 5, 5), Cell::Alive);
        assert_eq!(cell_at(&u, 6, 5), Cell::Alive);
        assert_eq!(cell_at(&u, 5, 4), Cell::Dead);
        assert_eq!(cell_at(&u, 5, 6), Cell::Dead);

        u.step();
        assert_eq!(cell_at(&u, 5, 4), Cell::Alive);
        assert_eq!(cell_at(&u, 5, 5), Cell::Alive);
        assert_eq!(cell_at(&u, 5, 6), Cell::Alive);
    }

    #[test]
    fn test_wrap_mode_changes_edge_behavior() {
        // Blinker lying on the top edge: with fixed edges the cell below its
        // center is born and nothing appears on the bottom row; with toroidal
        // edges the bottom-row cell under the center is born as well.
        let seed = |wrap: bool| {
            let mut u = Universe::new(8, 8);
            u.set_wrap(wrap);
            u.toggle_cell(0, 3);
            u.toggle_cell(0, 4);
            u.toggle_cell(0, 5);
            u.step();
            u
        };

        let finite = seed(false);
        assert_eq!(cell_at(&finite, 1, 4), Cell::Alive);
        assert_eq!(cell_at(&finite, 7, 4), Cell::Dead);

        let wrapped = seed(true);
        assert_eq!(cell_at(&wrapped, 1, 4), Cell::Alive);
        assert_eq!(cell_at(&wrapped, 7, 4), Cell::Alive);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut u = Universe::new(16, 16);
        // Glider plus some edge clutter
        for &(r, c) in &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3), (0, 0), (15, 15)] {
            u.toggle_cell(r, c);
        }
        u.set_wrap(true);
        assert_eq!(u.next_cells(), u.next_cells_parallel());
    }

    #[test]
    fn test_randomize_populates_grid() {
        let mut u = Universe::new(40, 80);
        u.randomize();
        let alive = u.cells().iter().filter(|c| c.is_alive()).count();
        // 30% fill of 3200 cells; zero or full would mean the seeding is broken
        assert!(alive > 0 && alive < 3200);
    }
}
