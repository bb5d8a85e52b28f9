use dioxus::prelude::*;
use services::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// Fetching or decoding the question set failed.
    LoadFailed,
    /// The question set was empty.
    NoQuestions,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::LoadFailed => "Could not load questions. Please try again.",
            Self::NoQuestions => "No questions available.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&SessionError> for ViewError {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::Empty => Self::NoQuestions,
            SessionError::Load(_) => Self::LoadFailed,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::LoadError;

    #[test]
    fn session_errors_map_to_user_messages() {
        assert_eq!(ViewError::from(&SessionError::Empty), ViewError::NoQuestions);
        let load = SessionError::Load(LoadError::Io(std::io::Error::other("offline")));
        assert_eq!(ViewError::from(&load), ViewError::LoadFailed);
        assert_eq!(
            ViewError::LoadFailed.message(),
            "Could not load questions. Please try again."
        );
        assert_eq!(ViewError::NoQuestions.message(), "No questions available.");
    }
}
