use std::alloc::{Layout, LayoutError};

/// Error of [`GrowableArray`] operations
///
/// [`GrowableArray`]: crate::GrowableArray
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Index is outside of the live range.
    ///
    /// # Examples
    ///
    /// ```
    /// use platform_vec::{Error, GrowableArray};
    ///
    /// let array: GrowableArray<u64> = [1, 2].into_iter().collect();
    ///
    /// assert_eq!(array.at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// `front`/`back`/`pop_back` on an array without live elements
    #[error("container is empty")]
    EmptyContainer,

    /// Error due to the computed capacity exceeding the maximum
    /// (usually `isize::MAX` bytes).
    #[error("exceeding the capacity maximum")]
    CapacityOverflow,

    /// The memory allocator returned an error
    #[error("memory allocation of {layout:?} failed")]
    AllocError {
        /// The layout of allocation request that failed
        layout: Layout,
    },
}

impl From<LayoutError> for Error {
    fn from(_: LayoutError) -> Self {
        Error::CapacityOverflow
    }
}

/// Alias for `Result<T, Error>` to return from [`GrowableArray`] methods
///
/// [`GrowableArray`]: crate::GrowableArray
pub type Result<T> = std::result::Result<T, Error>;
