use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ListError {
    /// Nodes before `index` have already been released.
    #[error("node allocation failed at element {index} of {len}")]
    Alloc { index: usize, len: usize },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn message() {
        let err = ListError::Alloc { index: 3, len: 10 };
        assert_eq!(err.to_string(), "node allocation failed at element 3 of 10");
    }
}
