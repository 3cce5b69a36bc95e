use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("failed to write stats snapshot: {source}")]
    Output {
        #[source]
        source: io::Error,
    },
}

impl From<io::Error> for MonitorError {
    fn from(source: io::Error) -> Self {
        MonitorError::Output { source }
    }
}
