use thiserror::Error;

/// Errors reported by [`Grid`](crate::Grid) operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    /// The grid has no buffers yet; call `set_dimensions` first.
    #[error("grid is not initialized")]
    UninitializedGrid,

    /// Coordinates outside of `[0, width) x [0, height)`.
    #[error("cell ({i}, {j}) is outside of the {width}x{height} grid")]
    IndexOutOfRange {
        i: usize,
        j: usize,
        width: usize,
        height: usize,
    },

    /// The padded buffers cannot be sized or allocated.
    #[error("cannot allocate a {width}x{height} grid")]
    DimensionOverflow { width: usize, height: usize },

    /// Bulk load with the wrong number of cells.
    #[error("expected {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    /// Probability outside of `[0, 1]`.
    #[error("fill rate {0} is not a probability")]
    InvalidFillRate(f64),
}

pub type Result<T> = std::result::Result<T, GridError>;
