use std::fmt::Display;

/// Lifecycle of a screen's primary fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// Fetch failed; holds a message for display
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state: LoadState<Vec<u8>> = LoadState::default();
        assert_eq!(state, LoadState::Idle);
    }

    #[test]
    fn test_from_ok() {
        let state = LoadState::from_result::<String>(Ok(vec![1, 2]));
        assert_eq!(state, LoadState::Loaded(vec![1, 2]));
    }

    #[test]
    fn test_from_err_is_failed() {
        let state: LoadState<Vec<u8>> = LoadState::from_result(Err("connection refused"));
        assert_eq!(state, LoadState::Failed("connection refused".to_string()));
    }
}
