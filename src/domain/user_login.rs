const MAX_LOGIN_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogin(String);

impl UserLogin {
    pub fn parse(login: String) -> Result<UserLogin, String>{
        let is_empty = login.is_empty();
        let too_long = login.chars().count() > MAX_LOGIN_LENGTH;
        let has_blank = login.chars().any(|c| c.is_whitespace() || c.is_control());

        if is_empty || too_long || has_blank {
            Err(format!("{:?} is not a valid user login", login))
        } else {
            Ok(Self(login))
        }
    }
}

impl AsRef<str> for UserLogin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
