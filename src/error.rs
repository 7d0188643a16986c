use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("instant out of range: {millis} ms since epoch")]
    InstantOutOfRange { millis: i64 },

    #[error("ephemeris failure: {message}")]
    Ephemeris { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn ephemeris(message: impl Into<String>) -> Self {
        Self::Ephemeris {
            message: message.into(),
        }
    }
}
