/// Row-major buffer of floating-point heights.
///
/// Used both as the square working grid the diamond-square pass writes into
/// and as the trimmed map handed back to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    cells: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

impl HeightGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![0.0; width * height],
            width,
            height,
        }
    }

    /// A `size` x `size` grid, the shape diamond-square works on.
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Copy of the first `height` rows and, within each, the first `width`
    /// columns. Requests larger than the grid are clamped to it.
    pub fn trimmed(&self, width: usize, height: usize) -> HeightGrid {
        let width = width.min(self.width);
        let height = height.min(self.height);
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            cells.extend_from_slice(&self.row(y)[..width]);
        }
        HeightGrid {
            cells,
            width,
            height,
        }
    }
}
