use std::ops::{Index, IndexMut};

/// Flat, row-major storage for the per-pixel working sets: the energy
/// field (`Grid<f64>`) and the shortest-path relaxation state
/// (`Grid<EnergyAndBackPointer<f64>>`).  The grid is scratch space, not
/// a cache; it is rebuilt from the current image for every query.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    /// A grid of the given dimensions, filled with the default value.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  The vector's length must be
    /// exactly `width * height`.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Self {
        assert_eq!(cells.len(), width as usize * height as usize);
        Grid {
            width,
            height,
            cells,
        }
    }

    /// The cells in row-major order.
    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn cell_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.cell_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.cell_index(x, y);
        &mut self.cells[index]
    }
}

/// One cell of the shortest-path scratch state: the cheapest cumulative
/// energy found so far, and the column (or row) of the upper neighbor
/// it came through.
#[derive(Default, Debug, Copy, Clone)]
pub struct EnergyAndBackPointer<P: Default + Copy> {
    pub energy: P,
    pub parent: u32,
}
