use std::io::{BufRead, Write};

use secrecy::SecretString;

use crate::{
    db_interaction::{count_matching_credentials, get_user_type},
    domain::Role,
    routes::CommandError,
    session_state::BYPASS_LOGIN,
    startup::Application,
};

/// Authenticates against the stored plaintext password and records the
/// user's role in the session, so later commands never query it again.
#[tracing::instrument(
    "Logging in",
    skip_all
)]
pub fn log_in<R: BufRead, W: Write>(app: &mut Application<R, W>) -> Result<(), CommandError>{
    let login = app.console.prompt("\tEnter user login: ")?;
    let password = SecretString::from(app.console.prompt("\tEnter user password: ")?);

    if count_matching_credentials(&mut app.gateway, &login, &password)? == 0 {
        return Err(CommandError::InvalidInput("Login or password is incorrect".to_string()))
    }

    let role = get_user_type(&mut app.gateway, &login)?
        .ok_or_else(|| CommandError::InvalidInput(format!("User {} has no type", login)))?
        .parse::<Role>()
        .map_err(CommandError::InvalidInput)?;

    app.session.log_in(login.clone(), role);
    app.console.say(&format!("Welcome {}! You are logged in as {}", login, role))?;
    Ok(())
}

pub fn bypass_login<R: BufRead, W: Write>(app: &mut Application<R, W>) -> Result<(), CommandError>{
    app.session.bypass_login();
    app.console.say(&format!("Logged in as {} (Manager)", BYPASS_LOGIN))?;
    Ok(())
}
