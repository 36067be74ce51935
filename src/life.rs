/// Generate a pseudorandom seed for the game's PRNG.
pub fn generate_seed() -> (u64, u64) {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];

    getrandom(&mut seed).expect("failed to getrandom");

    (
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    )
}

#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

/// The Game of Life rule: survival on 2 or 3 neighbors, birth on exactly 3.
pub fn next_cell(cell: Cell, neighbors: usize) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// A fixed-size toroidal grid, stored row-major.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new_empty(rows: usize, cols: usize) -> Self {
        assert!(rows != 0 && cols != 0, "grid must have at least one cell");

        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    pub fn new_random(rows: usize, cols: usize, density: f32, rng: &mut randomize::PCG32) -> Self {
        let mut result = Self::new_empty(rows, cols);
        result.randomize(density, rng);
        result
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Flip one cell. Out-of-range coordinates leave the grid untouched.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = self.cells[i].toggled();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    pub fn randomize(&mut self, density: f32, rng: &mut randomize::PCG32) {
        for cell in self.cells.iter_mut() {
            let roll = randomize::f32_half_open_right(rng.next_u32());
            *cell = if roll < density { Cell::Alive } else { Cell::Dead };
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Alive cells among the 8 neighbors, wrapping each axis independently.
    pub fn live_neighbors(&self, row: usize, col: usize) -> usize {
        let up = (row + self.rows - 1) % self.rows;
        let down = (row + 1) % self.rows;
        let left = (col + self.cols - 1) % self.cols;
        let right = (col + 1) % self.cols;

        [
            (up, left), (up, col), (up, right),
            (row, left), (row, right),
            (down, left), (down, col), (down, right),
        ]
        .iter()
        .filter(|&&(r, c)| self.cells[r * self.cols + c].is_alive())
        .count()
    }

    /// Write the next generation into `next`, reading only from `self`.
    pub fn step_into(&self, next: &mut Grid) {
        assert_eq!((self.rows, self.cols), (next.rows, next.cols), "grid dimensions differ");

        for row in 0..self.rows {
            for col in 0..self.cols {
                let i = row * self.cols + col;
                next.cells[i] = next_cell(self.cells[i], self.live_neighbors(row, col));
            }
        }
    }

    pub fn step(&self) -> Grid {
        let mut next = Grid::new_empty(self.rows, self.cols);
        self.step_into(&mut next);
        next
    }
}
