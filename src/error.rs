/// Failure signals shared by every [`List`](crate::List) implementation.
///
/// Operations return these before touching the list, so a list is left
/// unchanged whenever one is returned.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("the list is empty")]
    EmptyList,

    #[error("index {index} is out of bounds for a list of length {len}")]
    BadIndex { index: usize, len: usize },

    #[error("the list is out of space: capacity is {capacity}")]
    OutOfSpace { capacity: usize },

    /// Signalled by an implementation that leaves `operation` unsupported
    /// rather than corrupting its state.
    #[error("`{operation}` is not implemented for this list")]
    NotImplemented { operation: &'static str },

    #[error("chunk capacity must be at least 1")]
    ZeroCapacity,
}

pub type Result<T, E = ListError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::ListError;

    #[test]
    fn display_mentions_the_offending_values() {
        assert_eq!(ListError::EmptyList.to_string(), "the list is empty");
        assert_eq!(
            ListError::BadIndex { index: 5, len: 3 }.to_string(),
            "index 5 is out of bounds for a list of length 3"
        );
        assert_eq!(
            ListError::OutOfSpace { capacity: 4 }.to_string(),
            "the list is out of space: capacity is 4"
        );
        assert_eq!(
            ListError::NotImplemented { operation: "insert" }.to_string(),
            "`insert` is not implemented for this list"
        );
        assert_eq!(
            ListError::ZeroCapacity.to_string(),
            "chunk capacity must be at least 1"
        );
    }

    #[test]
    fn errors_are_std_errors() {
        fn _assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        _assert_error::<ListError>();
    }
}
