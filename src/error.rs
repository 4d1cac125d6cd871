use thiserror::Error;

/// Convenience alias for results of fallible `GrowVec` operations.
pub type Result<T> = core::result::Result<T, GrowVecError>;

/// Error types for `GrowVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Requested element count has no representable memory layout
    #[error("Capacity overflow: cannot lay out {elements} elements")]
    CapacityOverflow {
        /// Number of elements requested
        elements: usize,
    },
    /// The allocator refused to provide the requested memory
    #[error("Allocation failed: {elements} elements ({bytes} bytes)")]
    AllocationFailed {
        /// Number of elements requested
        elements: usize,
        /// Size of the failed allocation in bytes
        bytes: usize,
    },
}
