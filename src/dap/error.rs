#[derive(Debug, thiserror::Error)]
pub enum Error {
    // --------------------------------- envelope errors -------------------------------------------
    #[error("invalid message type: `{0}`")]
    InvalidMessageType(String),
    #[error("invalid command")]
    InvalidCommand,

    // --------------------------------- command errors --------------------------------------------
    #[error("missing required argument `{0}`")]
    MissingArgument(&'static str),
    #[error("`{0}` requires the debuggee to be paused")]
    NotPaused(String),
    #[error("`{0}` is not supported by the debugger session")]
    Unsupported(&'static str),
    #[error("session: {0:#}")]
    Session(anyhow::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True if the error means that the client sent something that is not a valid request.
    /// Such errors are reported back to the client and never retried.
    pub fn is_envelope(&self) -> bool {
        match self {
            Error::InvalidMessageType(_) => true,
            Error::InvalidCommand => true,

            Error::MissingArgument(_) => false,
            Error::NotPaused(_) => false,
            Error::Unsupported(_) => false,
            Error::Session(_) => false,
            Error::Json(_) => false,
        }
    }
}

#[macro_export]
macro_rules! _error {
    ($lvl: expr, $res: expr) => {
        match $res {
            Ok(value) => Some(value),
            Err(e) => {
                $crate::dap_log!($lvl, "{:#}", e);
                None
            }
        }
    };
    ($lvl: expr, $res: expr, $msg: tt) => {
        match $res {
            Ok(value) => Some(value),
            Err(e) => {
                $crate::dap_log!($lvl, concat!($msg, " {:#}"), e);
                None
            }
        }
    };
}

/// Transforms `Result` into `Option` and logs an error if it occurs.
#[macro_export]
macro_rules! weak_error {
    ($res: expr) => {
        $crate::_error!(::log::Level::Warn, $res)
    };
    ($res: expr, $msg: tt) => {
        $crate::_error!(::log::Level::Warn, $res, $msg)
    };
}
