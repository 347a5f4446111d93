//! Dense assembly of regular element pairs.
//!
//! The engine approximates `∫_test ∫_trial K(x, y) dS(y) dS(x)` for a
//! piecewise-constant basis by a product Gauss rule, one test element against
//! a lane group of `W` trial elements at a time, and scatters the lane
//! results into a dense row-major matrix. Rows of the output are assembled in
//! parallel; each row is owned by exactly one task, so no output cell is
//! written twice.
//!
//! All element pairs of a launch must be regular: the kernels produce
//! infinities or NaNs for coincident points, and nothing downstream checks
//! for them. Singular and near-singular pairs belong to a separate
//! correction pass.

use crate::geometry::{
    global_point, global_points_group, jacobian, jacobian_group, normal_and_integration_element,
    normals_and_integration_elements_group,
};
use crate::grid::TriangleGrid;
use crate::kernels::RegularKernel;
use crate::quadrature::TriangleQuadratureRule;
use crate::types::{AssemblyError, RealScalar};
use itertools::izip;
use rayon::prelude::*;

/// A contiguous range of trial elements assembled by one launch.
///
/// The block starts at trial element `offset` and covers `columns` elements.
/// Groups are numbered from `offset` as well, so the trial elements of group
/// `g` at lane width `W` are `offset + W * (g - offset) + lane`. Launches
/// with disjoint blocks write disjoint output cells and may target the same
/// buffer from separate calls.
#[derive(Clone, Copy, Debug)]
pub struct ColumnBlock {
    /// First trial element of the block.
    pub offset: usize,
    /// Number of trial elements in the block; must be a multiple of the lane
    /// width of the launch.
    pub columns: usize,
}

/// Trial element indices of one lane group.
pub fn group_column_indices<const W: usize>(offset: usize, group: usize) -> [usize; W] {
    std::array::from_fn(|lane| offset + W * (group - offset) + lane)
}

/// Integrate a kernel over one test element and a lane group of trial
/// elements.
///
/// The same rule is applied on both sides. Trial-side contributions are
/// accumulated into a per-test-point temporary before the test weight is
/// applied, and the integration elements scale the finished sum once, so the
/// result for each lane is independent of the lane width.
pub fn assemble_pair_group<T: RealScalar, const C: usize, const W: usize>(
    kernel: &impl RegularKernel<T, C>,
    rule: &TriangleQuadratureRule<T>,
    test_corners: &[[T; 3]; 3],
    trial_corners: &[[[T; W]; 3]; 3],
) -> [[T; W]; C] {
    let test_jacobian = jacobian(test_corners);
    let (test_normal, test_integration_element) = normal_and_integration_element(&test_jacobian);
    let trial_jacobian = jacobian_group(trial_corners);
    let (trial_normals, trial_integration_elements) =
        normals_and_integration_elements_group(&trial_jacobian);

    let mut sum = [[T::zero(); W]; C];
    let mut values = [[T::zero(); W]; C];
    for (test_reference_point, test_weight) in
        izip!(rule.points.chunks_exact(2), rule.weights.iter())
    {
        let test_point = global_point(
            test_corners,
            &[test_reference_point[0], test_reference_point[1]],
        );
        let mut test_point_sum = [[T::zero(); W]; C];
        for (trial_reference_point, trial_weight) in
            izip!(rule.points.chunks_exact(2), rule.weights.iter())
        {
            let trial_points = global_points_group(
                trial_corners,
                &[trial_reference_point[0], trial_reference_point[1]],
            );
            kernel.evaluate(
                &test_point,
                &trial_points,
                &test_normal,
                &trial_normals,
                &mut values,
            );
            for component in 0..C {
                for lane in 0..W {
                    test_point_sum[component][lane] = test_point_sum[component][lane]
                        + *trial_weight * values[component][lane];
                }
            }
        }
        for component in 0..C {
            for lane in 0..W {
                sum[component][lane] =
                    sum[component][lane] + *test_weight * test_point_sum[component][lane];
            }
        }
    }
    for component in 0..C {
        for lane in 0..W {
            sum[component][lane] = sum[component][lane]
                * test_integration_element
                * trial_integration_elements[lane];
        }
    }
    sum
}

/// Dense assembler for regular element pairs.
///
/// `C` is the number of real output components per matrix entry: one for
/// real kernels, two (interleaved re, im) for complex kernels, six for the
/// Helmholtz gradient.
pub struct RegularAssembler<T: RealScalar, K: RegularKernel<T, C>, const C: usize> {
    kernel: K,
    rule: TriangleQuadratureRule<T>,
}

impl<T: RealScalar, K: RegularKernel<T, C>, const C: usize> RegularAssembler<T, K, C> {
    /// Create an assembler from a kernel and a triangle rule.
    pub fn new(kernel: K, rule: TriangleQuadratureRule<T>) -> Self {
        Self { kernel, rule }
    }

    /// The quadrature rule of this assembler.
    pub fn rule(&self) -> &TriangleQuadratureRule<T> {
        &self.rule
    }

    /// Assemble every test element of `test_grid` against the trial elements
    /// of `block` into `output` at lane width `W`.
    ///
    /// `output` is row-major with `C * number_of_cols` real entries per row
    /// and one row per test element; an entry sits at
    /// `C * (row * number_of_cols + col) + component`. `number_of_cols` may
    /// exceed the block width, in which case cells outside the block are left
    /// untouched and a larger matrix can be filled by several launches.
    pub fn assemble_into<const W: usize>(
        &self,
        test_grid: &TriangleGrid<T>,
        trial_grid: &TriangleGrid<T>,
        block: ColumnBlock,
        output: &mut [T],
        number_of_cols: usize,
    ) -> Result<(), AssemblyError> {
        if block.columns % W != 0 {
            return Err(AssemblyError::RaggedColumnBlock {
                columns: block.columns,
                lane_width: W,
            });
        }
        if block.columns > 0 && block.offset + block.columns > trial_grid.cell_count() {
            return Err(AssemblyError::ElementOutOfBounds {
                index: block.offset + block.columns - 1,
                cells: trial_grid.cell_count(),
            });
        }
        if block.columns > 0 && block.offset + block.columns > number_of_cols {
            return Err(AssemblyError::ColumnOutOfBounds {
                column: block.offset + block.columns - 1,
                number_of_cols,
            });
        }
        let rows = test_grid.cell_count();
        let row_stride = C * number_of_cols;
        let required = rows * row_stride;
        if output.len() < required {
            return Err(AssemblyError::OutputTooSmall {
                required,
                actual: output.len(),
            });
        }

        if rows == 0 || block.columns == 0 {
            return Ok(());
        }
        let number_of_groups = block.columns / W;
        log::debug!(
            "Assembling {} rows by {} columns at lane width {}",
            rows,
            block.columns,
            W
        );
        output[..required]
            .par_chunks_exact_mut(row_stride)
            .enumerate()
            .for_each(|(row, row_data)| {
                let test_corners = test_grid.corners(row);
                for group in block.offset..block.offset + number_of_groups {
                    let columns = group_column_indices::<W>(block.offset, group);
                    let trial_corners = trial_grid.corners_group(&columns);
                    let values = assemble_pair_group(
                        &self.kernel,
                        &self.rule,
                        &test_corners,
                        &trial_corners,
                    );
                    for (lane, column) in columns.iter().enumerate() {
                        for component in 0..C {
                            row_data[C * column + component] = values[component][lane];
                        }
                    }
                }
            });
        Ok(())
    }
}
