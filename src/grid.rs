//! Flat triangle stores.

use crate::types::RealScalar;
use std::collections::HashMap;

/// Builder for a [`TriangleGrid`].
pub struct TriangleGridBuilder<T: RealScalar> {
    point_ids_to_indices: HashMap<usize, usize>,
    coordinates: Vec<T>,
    cells: Vec<usize>,
}

impl<T: RealScalar> Default for TriangleGridBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealScalar> TriangleGridBuilder<T> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            point_ids_to_indices: HashMap::new(),
            coordinates: vec![],
            cells: vec![],
        }
    }

    /// Add a point with the given id.
    pub fn add_point(&mut self, id: usize, coordinates: [T; 3]) {
        if self
            .point_ids_to_indices
            .insert(id, self.point_ids_to_indices.len())
            .is_some()
        {
            panic!("Point with id {id} already added");
        }
        self.coordinates.extend_from_slice(&coordinates);
    }

    /// Add a triangle connecting three previously added point ids.
    pub fn add_cell(&mut self, vertex_ids: [usize; 3]) {
        for id in vertex_ids {
            self.cells.push(self.point_ids_to_indices[&id]);
        }
    }

    /// Build the grid, flattening each cell's corners into a contiguous buffer.
    pub fn create_grid(self) -> TriangleGrid<T> {
        let cell_count = self.cells.len() / 3;
        let mut corners = Vec::with_capacity(9 * cell_count);
        for vertex in &self.cells {
            corners.extend_from_slice(&self.coordinates[3 * vertex..3 * vertex + 3]);
        }
        TriangleGrid {
            corners,
            cell_count,
        }
    }
}

/// A store of flat triangles with corner lookup in single and lane-grouped form.
///
/// Corners are stored per cell, so cells may share points without aliasing
/// concerns during assembly; the store is immutable once built.
pub struct TriangleGrid<T: RealScalar> {
    /// Nine values per cell: the three corners in x, y, z order.
    corners: Vec<T>,
    cell_count: usize,
}

impl<T: RealScalar> TriangleGrid<T> {
    /// Number of triangles in the store.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Corner points of one triangle.
    pub fn corners(&self, index: usize) -> [[T; 3]; 3] {
        let data = &self.corners[9 * index..9 * index + 9];
        std::array::from_fn(|corner| std::array::from_fn(|coord| data[3 * corner + coord]))
    }

    /// Corner points of a lane group of triangles.
    ///
    /// The result is laid out corner-coordinate-lane, so each coordinate of a
    /// corner is a `[T; W]` lane vector.
    pub fn corners_group<const W: usize>(&self, indices: &[usize; W]) -> [[[T; W]; 3]; 3] {
        let mut result = [[[T::zero(); W]; 3]; 3];
        for (lane, index) in indices.iter().enumerate() {
            let data = &self.corners[9 * index..9 * index + 9];
            for corner in 0..3 {
                for coord in 0..3 {
                    result[corner][coord][lane] = data[3 * corner + coord];
                }
            }
        }
        result
    }

    /// A copy of the store with every point shifted by `shift`.
    pub fn translated(&self, shift: [T; 3]) -> TriangleGrid<T> {
        let corners = self
            .corners
            .iter()
            .enumerate()
            .map(|(i, value)| *value + shift[i % 3])
            .collect();
        TriangleGrid {
            corners,
            cell_count: self.cell_count,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn two_triangles() -> TriangleGrid<f64> {
        let mut b = TriangleGridBuilder::<f64>::new();
        b.add_point(1, [0.0, 0.0, 0.0]);
        b.add_point(2, [1.0, 0.0, 0.0]);
        b.add_point(3, [1.0, 1.0, 0.0]);
        b.add_point(4, [0.0, 1.0, 0.0]);
        b.add_cell([1, 2, 3]);
        b.add_cell([1, 3, 4]);
        b.create_grid()
    }

    #[test]
    fn test_corner_lookup() {
        let grid = two_triangles();
        assert_eq!(grid.cell_count(), 2);
        let corners = grid.corners(1);
        assert_eq!(corners[0], [0.0, 0.0, 0.0]);
        assert_eq!(corners[1], [1.0, 1.0, 0.0]);
        assert_eq!(corners[2], [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_grouped_lookup_matches_single() {
        let grid = two_triangles();
        let group = grid.corners_group(&[0, 1]);
        for (lane, index) in [0, 1].iter().enumerate() {
            let single = grid.corners(*index);
            for corner in 0..3 {
                for coord in 0..3 {
                    assert_eq!(group[corner][coord][lane], single[corner][coord]);
                }
            }
        }
    }

    #[test]
    fn test_translated() {
        let grid = two_triangles().translated([0.0, 0.0, 2.5]);
        let corners = grid.corners(0);
        assert_eq!(corners[0], [0.0, 0.0, 2.5]);
        assert_eq!(corners[2], [1.0, 1.0, 2.5]);
    }
}
