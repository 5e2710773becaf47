//! Bounded 2D arena of cells.

use crate::cell::Cell;
use ecogrid_core::{Error, Position, Result};

/// A fixed-size grid stored column-major: index = x * height + y
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidArgument(format!(
                "World dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for x in 0..width {
            for y in 0..height {
                cells.push(Cell::new(x, y));
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Get cell at position
    pub fn get(&self, pos: Position) -> Result<&Cell> {
        let index = self.pos_to_index(pos)?;
        Ok(&self.cells[index])
    }

    /// Get mutable cell at position
    pub fn get_mut(&mut self, pos: Position) -> Result<&mut Cell> {
        let index = self.pos_to_index(pos)?;
        Ok(&mut self.cells[index])
    }

    /// Iterator over all cells, outer loop x, inner loop y
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> + '_ {
        self.cells.iter_mut()
    }

    /// Cells within Chebyshev distance `radius` of `center`, center included.
    ///
    /// Order matches [`Grid::iter`].
    pub fn within(&self, center: Position, radius: i32) -> Vec<&Cell> {
        let radius = radius.max(0);
        let x_range = center.x.saturating_sub(radius).max(0)
            ..=center.x.saturating_add(radius).min(self.width - 1);
        let y_lo = center.y.saturating_sub(radius).max(0);
        let y_hi = center.y.saturating_add(radius).min(self.height - 1);

        let mut cells = Vec::new();
        for x in x_range {
            for y in y_lo..=y_hi {
                cells.push(&self.cells[self.index_unchecked(x, y)]);
            }
        }
        cells
    }

    fn pos_to_index(&self, pos: Position) -> Result<usize> {
        if !self.contains(pos) {
            return Err(Error::OutOfRange {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index_unchecked(pos.x, pos.y))
    }

    fn index_unchecked(&self, x: i32, y: i32) -> usize {
        x as usize * self.height as usize + y as usize
    }
}
