use std::process::ExitCode;

use thiserror::Error;

/// Fatal failures while talking to oeis.org. Both terminate the process.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error")]
    Network(#[source] reqwest::Error),

    #[error("Data returned from oeis.org not readable")]
    Body(#[source] reqwest::Error),
}

impl FetchError {
    pub const NETWORK_EXIT_STATUS: u8 = 255;
    pub const BODY_EXIT_STATUS: u8 = 254;

    pub fn exit_status(&self) -> u8 {
        match self {
            FetchError::Network(_) => Self::NETWORK_EXIT_STATUS,
            FetchError::Body(_) => Self::BODY_EXIT_STATUS,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
