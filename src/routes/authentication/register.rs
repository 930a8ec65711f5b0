use std::io::{BufRead, Write};

use secrecy::SecretString;

use crate::{
    db_interaction::insert_user_into_database,
    domain::{PhoneNumber, UserLogin},
    routes::CommandError,
    startup::Application,
};

#[tracing::instrument(
    "User registration started",
    skip_all
)]
pub fn create_user<R: BufRead, W: Write>(app: &mut Application<R, W>) -> Result<(), CommandError>{
    let login = app.console.prompt("\tEnter user login: ")?;
    let password = SecretString::from(app.console.prompt("\tEnter user password: ")?);
    let phone = app.console.prompt("\tEnter user phone: ")?;

    let login = UserLogin::parse(login).map_err(CommandError::InvalidInput)?;
    let phone = PhoneNumber::parse(phone).map_err(CommandError::InvalidInput)?;

    insert_user_into_database(&mut app.gateway, &login, &password, &phone)?;

    tracing::info!(%login, "User created");
    app.console.say("User successfully created!")?;
    Ok(())
}
