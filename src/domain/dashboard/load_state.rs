//! View state of a dashboard while its collections load.

/// Loading lifecycle of a dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T, E> {
    Loading,
    Ready(T),
    /// Retry by loading again.
    Failed(E),
}

impl<T, E> LoadState<T, E> {
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::Failed(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T, E> Default for LoadState<T, E> {
    fn default() -> Self {
        LoadState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        let state: LoadState<u8, String> = LoadState::default();
        assert!(state.is_loading());
        assert!(state.ready().is_none());
    }

    #[test]
    fn from_result_maps_both_arms() {
        let ok: LoadState<u8, String> = LoadState::from_result(Ok(3));
        assert_eq!(ok.ready(), Some(&3));

        let failed: LoadState<u8, String> = LoadState::from_result(Err("boom".into()));
        assert_eq!(failed.error().map(String::as_str), Some("boom"));
    }
}
