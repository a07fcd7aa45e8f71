use thiserror::Error;

/// Failure of a call to the remote user collection.
///
/// The text is for logs only; users see the generic [`store::Notice`] for the
/// action instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Status { status: u16 },
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            RemoteError::Status {
                status: status.as_u16(),
            }
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}
