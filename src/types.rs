//! Types specific to bem-dense

use rlst::RlstScalar;
use thiserror::Error;

/// Real scalar types the assembly routines are generic over (f32 and f64).
pub trait RealScalar: num::Float + RlstScalar<Real = Self> + Send + Sync {}

impl<T: num::Float + RlstScalar<Real = T> + Send + Sync> RealScalar for T {}

/// Contract violations detected before a dense assembly launch is dispatched.
///
/// Once a launch has been dispatched no further errors are signalled; the
/// inner quadrature loops carry no error paths.
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// The output buffer cannot hold every row of the launch.
    #[error("output buffer holds {actual} entries but the launch needs {required}")]
    OutputTooSmall {
        /// Entries the launch would write or skip over.
        required: usize,
        /// Entries supplied by the caller.
        actual: usize,
    },
    /// The column block does not split into whole lane groups.
    #[error("column block of {columns} trial elements does not split into lanes of width {lane_width}")]
    RaggedColumnBlock {
        /// Trial elements in the block.
        columns: usize,
        /// Lane width of the launch.
        lane_width: usize,
    },
    /// A trial column does not fit inside the output row stride.
    #[error("trial column {column} does not fit a row of {number_of_cols} columns")]
    ColumnOutOfBounds {
        /// The offending column index.
        column: usize,
        /// Row stride supplied by the caller.
        number_of_cols: usize,
    },
    /// An element index is outside the grid.
    #[error("element {index} requested from a grid with {cells} cells")]
    ElementOutOfBounds {
        /// The offending element index.
        index: usize,
        /// Number of cells in the grid.
        cells: usize,
    },
}
