use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Access past the nominal size of a mapped container.
///
/// Returned by the checked accessors
/// ([`try_element`](crate::MappedContainer::try_element),
/// [`try_element_mut`](crate::MappedContainer::try_element_mut)); the
/// indexing operators panic instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("mapped container index {index} is out of range (size: {size})")]
pub struct OutOfRangeError {
    /// The requested element index.
    pub index: usize,

    /// The nominal container size at the time of the access.
    pub size: usize,
}
