use std::{error::Error, fmt::Debug};

use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::{
    domain::{PhoneNumber, Role, UserLogin},
    gateway::{Gateway, GatewayError},
    models::User,
    schema::users,
    utils::error_fmt_chain,
};

// Error associated with inserting user to users table
#[derive(Error)]
pub enum UserInsertError{
    #[error("User {0} already exists")]
    LoginNotUnique(String),
    #[error("Failed to create user")]
    UnexpectedError(#[from] GatewayError)
}

impl Debug for UserInsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

/// New accounts are always customers with no favourite items.
#[tracing::instrument(
    "Inserting user into the database",
    skip(gateway, password)
)]
pub fn insert_user_into_database(
    gateway: &mut Gateway,
    login: &UserLogin,
    password: &SecretString,
    phone: &PhoneNumber
) -> Result<(), UserInsertError> {
    let user = User{
        login: login.as_ref().to_string(),
        password: password.expose_secret().to_string(),
        phone_num: phone.inner(),
        fav_items: Some(String::new()),
        user_type: Role::Customer.as_str().to_string()
    };

    gateway.execute_update(
        diesel::insert_into(users::table).values(user)
    )
    .map_err(|e| {
        match e {
            GatewayError::QueryError(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _
            )) => UserInsertError::LoginNotUnique(login.to_string()),
            e => UserInsertError::UnexpectedError(e)
        }
    })?;

    Ok(())
}

// Plaintext comparison against the stored password, as the schema stores it
#[tracing::instrument(
    "Counting users matching credentials",
    skip(gateway, password)
)]
pub fn count_matching_credentials(
    gateway: &mut Gateway,
    login: &str,
    password: &SecretString
) -> Result<usize, GatewayError> {
    gateway.execute_query::<User, _>(
        users::table
            .filter(users::login.eq(login.to_string()))
            .filter(users::password.eq(password.expose_secret().to_string()))
            .select(User::as_select())
    )
}

#[tracing::instrument(
    "Getting user type",
    skip(gateway)
)]
pub fn get_user_type(
    gateway: &mut Gateway,
    login: &str
) -> Result<Option<String>, GatewayError> {
    let types = gateway.query_rows::<String, _>(
        users::table
            .filter(users::login.eq(login.to_string()))
            .select(users::user_type)
    )?;

    Ok(types.into_iter().next())
}

#[tracing::instrument(
    "Checking user exists",
    skip(gateway)
)]
pub fn user_exists(
    gateway: &mut Gateway,
    login: &str
) -> Result<bool, GatewayError> {
    let matches = gateway.execute_query::<User, _>(
        users::table
            .filter(users::login.eq(login.to_string()))
            .select(User::as_select())
    )?;

    Ok(matches > 0)
}
