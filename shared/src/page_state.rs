//! Fetch lifecycle of a data-backed page: `Loading -> Ready | Error`, with a
//! manual retry that goes back to `Loading`.

use std::fmt::Display;

/// The one message users see when loading fails, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load apps data";

/// Current state of a page fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PageState<T> {
    /// Fetch in flight.
    #[default]
    Loading,
    /// Both queries succeeded.
    Ready(T),
    /// Something failed; carries the user-facing message.
    Error(String),
}

impl<T> PageState<T> {
    /// Settles a finished fetch. Every error collapses into
    /// [`FETCH_FAILED_MESSAGE`]; the cause is only logged.
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => {
                tracing::warn!("page data fetch failed: {err}");
                Self::Error(FETCH_FAILED_MESSAGE.to_string())
            },
        }
    }

    /// Settles the current fetch in place.
    pub fn resolve<E: Display>(&mut self, result: Result<T, E>) {
        *self = Self::from_result(result);
    }

    /// Starts over; the caller is expected to issue a fresh fetch.
    pub fn retry(&mut self) {
        *self = Self::Loading;
    }

    /// Still waiting.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The error message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Joins the two independent query results of one page load. Either failure
/// fails the whole load; there is no partial success.
pub fn join_results<A, B, E>(first: Result<A, E>, second: Result<B, E>) -> Result<(A, B), E> {
    Ok((first?, second?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        let state: PageState<u8> = PageState::default();
        assert!(state.is_loading());
        assert!(state.ready().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn failure_uses_fixed_message() {
        let state: PageState<u8> = PageState::from_result(Err("connection reset"));
        assert_eq!(state.error(), Some(FETCH_FAILED_MESSAGE));
    }

    #[test]
    fn retry_re_enters_loading() {
        let mut state: PageState<u8> = PageState::Error(FETCH_FAILED_MESSAGE.to_string());
        state.retry();
        assert!(state.is_loading());
        state.resolve(Ok::<_, String>(3));
        assert_eq!(state.ready(), Some(&3));
    }

    #[test]
    fn either_query_failing_fails_the_join() {
        let both = join_results::<_, _, String>(Ok(1), Ok("a"));
        assert_eq!(both, Ok((1, "a")));
        let first = join_results::<u8, &str, _>(Err("apps"), Ok("a"));
        assert_eq!(first, Err("apps"));
        let second = join_results::<u8, &str, _>(Ok(1), Err("categories"));
        assert_eq!(second, Err("categories"));
    }
}
