pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure of an externally supplied follow/unfollow capability.
///
/// The interaction controller never returns these to its caller; they only
/// reach the diagnostic sink.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("authentication required")]
    Unauthorized,

    #[error("user profile not found")]
    ProfileNotFound,

    #[error("capability panicked: {0}")]
    Panicked(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Convert a payload caught from `catch_unwind` into an error.
    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        Self::Panicked(message)
    }
}
