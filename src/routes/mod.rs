pub mod authentication;
pub mod menu;
pub mod order;
pub mod profile;

use std::{
    error::Error,
    fmt::Debug,
    io::{self, BufRead, Write},
};

use thiserror::Error;

use crate::{
    console::Console,
    db_interaction::{PlaceOrderError, UserInsertError},
    gateway::GatewayError,
    utils::error_fmt_chain,
};

// Failure of a single menu command. Everything except `Terminal` is shown to
// the user and the menu loop carries on.
#[derive(Error)]
pub enum CommandError{
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0} is not supported yet")]
    Unsupported(&'static str),
    #[error("You need to log in first")]
    NotLoggedIn,
    #[error("{0}")]
    CreateUser(#[from] UserInsertError),
    #[error("{0}")]
    PlaceOrder(#[from] PlaceOrderError),
    #[error("{0}")]
    Gateway(#[from] GatewayError),
    #[error("Terminal input/output failed")]
    Terminal(#[from] io::Error)
}

impl Debug for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl CommandError {
    pub fn is_end_of_input(&self) -> bool{
        matches!(self, CommandError::Terminal(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

/// Shows a failed command to the user and logs it. Terminal failures are
/// handed back since there is nobody left to show them to.
pub fn report_failure<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    error: CommandError
) -> Result<(), CommandError>{
    match error {
        CommandError::Terminal(_) => Err(error),
        CommandError::Gateway(_) | CommandError::CreateUser(_) | CommandError::PlaceOrder(_) => {
            tracing::error!(error = ?error, "Command failed");
            console.say(&error.to_string())?;
            Ok(())
        }
        _ => {
            tracing::info!(%error, "Command rejected");
            console.say(&error.to_string())?;
            Ok(())
        }
    }
}
