use std::io::{BufRead, Write};

use crate::{routes::CommandError, startup::Application};

#[tracing::instrument(
    "Updating profile",
    skip(_app)
)]
pub fn update_profile<R: BufRead, W: Write>(_app: &mut Application<R, W>, login: &str) -> Result<(), CommandError>{
    Err(CommandError::Unsupported("Updating a profile"))
}
