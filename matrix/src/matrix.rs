use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of rows and columns.
pub const DIM: usize = 4;

/// A 4x4 grid of unsigned values, stored row-major.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Matrix {
    cells: [[u32; DIM]; DIM],
}

impl Matrix {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_fn(mut f: impl FnMut(usize, usize) -> u32) -> Self {
        let mut cells = [[0; DIM]; DIM];
        for (row, cells_row) in cells.iter_mut().enumerate() {
            for (col, cell) in cells_row.iter_mut().enumerate() {
                *cell = f(row, col);
            }
        }
        Self { cells }
    }

    /// Fills the matrix from a single counter running over `0..16`, where
    /// counter `n` lands on row `n / 4`, column `n % 4`.
    pub fn from_linear(mut f: impl FnMut(u32) -> u32) -> Self {
        let mut matrix = Self::zero();
        for n in 0..(DIM * DIM) as u32 {
            let index = n as usize;
            matrix[(index / DIM, index % DIM)] = f(n);
        }
        matrix
    }

    /// Left operand of the fixture: `a[i][j] = 4 * i + j`.
    pub fn input_a() -> Self {
        Self::from_linear(|n| n)
    }

    /// Right operand of the fixture: `b[i][j] = 4 * i + j + 16`.
    pub fn input_b() -> Self {
        Self::from_linear(|n| n + 16)
    }

    pub fn rows(&self) -> &[[u32; DIM]; DIM] {
        &self.cells
    }

    pub fn column(&self, col: usize) -> [u32; DIM] {
        std::array::from_fn(|row| self.cells[row][col])
    }

    /// Returns a value that renders the matrix as a named C-style initializer
    /// block:
    ///
    /// ```text
    /// c = {
    /// 	{  152,  158,  164,  170 },
    /// 	...
    /// }
    /// ```
    ///
    /// Cells are printed as their signed reinterpretation, right-aligned to
    /// width 4.
    pub fn display_as<'a>(&'a self, name: &'a str) -> Labeled<'a> {
        Labeled { name, matrix: self }
    }
}

impl From<[[u32; DIM]; DIM]> for Matrix {
    fn from(cells: [[u32; DIM]; DIM]) -> Self {
        Self { cells }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = u32;

    fn index(&self, (row, col): (usize, usize)) -> &u32 {
        &self.cells[row][col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut u32 {
        &mut self.cells[row][col]
    }
}

/// See [`Matrix::display_as`].
pub struct Labeled<'a> {
    name: &'a str,
    matrix: &'a Matrix,
}

impl fmt::Display for Labeled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} = {{", self.name)?;
        for row in self.matrix.rows() {
            let [c0, c1, c2, c3] = row.map(|value| value as i32);
            writeln!(f, "\t{{ {c0:4}, {c1:4}, {c2:4}, {c3:4} }},")?;
        }
        writeln!(f, "}}")
    }
}
