use thiserror::Error;

use navkit_protocol::NavError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("cannot close the last open tab")]
    LastTab,

    #[error("no open tab for {0}")]
    NotFound(String),

    #[error("tab index {index} out of range ({len} tabs open)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Route(#[from] NavError),
}
