use crate::error::ApiError;

/// Render state of a data-driven screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> ViewState<T> {
    pub fn from_result(result: Option<Result<T, ApiError>>) -> Self {
        match result {
            None => ViewState::Loading,
            Some(Ok(value)) => ViewState::Ready(value),
            Some(Err(e)) => ViewState::Error(e.friendly_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Settle two concurrent fetches into one screen state.
///
/// Loading until both have finished. If either failed the screen shows an
/// error; when both failed the later one in request order wins.
pub fn combine<A, B>(
    first: Option<Result<A, ApiError>>,
    second: Option<Result<B, ApiError>>,
) -> ViewState<(A, B)> {
    match (first, second) {
        (None, _) | (_, None) => ViewState::Loading,
        (Some(_), Some(Err(e))) | (Some(Err(e)), Some(Ok(_))) => {
            ViewState::Error(e.friendly_message())
        }
        (Some(Ok(a)), Some(Ok(b))) => ViewState::Ready((a, b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_until_both_settle() {
        let state = combine::<u8, u8>(Some(Ok(1)), None);
        assert!(state.is_loading());
    }

    #[test]
    fn any_failure_is_an_error() {
        let state = combine::<u8, u8>(
            Some(Err(ApiError::transport("connection refused"))),
            Some(Ok(2)),
        );
        assert_eq!(state, ViewState::Error("connection refused".into()));
    }

    #[test]
    fn last_failure_wins() {
        let state = combine::<u8, u8>(
            Some(Err(ApiError::application("first"))),
            Some(Err(ApiError::application("second"))),
        );
        assert_eq!(state, ViewState::Error("second".into()));
    }

    #[test]
    fn both_ok_is_ready() {
        assert_eq!(
            combine::<u8, &str>(Some(Ok(1)), Some(Ok("a"))),
            ViewState::Ready((1, "a"))
        );
    }

    #[test]
    fn single_result() {
        assert!(ViewState::<u8>::from_result(None).is_loading());
        assert_eq!(
            ViewState::<u8>::from_result(Some(Err(ApiError::status(404)))),
            ViewState::Error("Request failed with status code 404".into())
        );
    }
}
