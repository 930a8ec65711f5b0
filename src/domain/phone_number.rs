const MAX_PHONE_LENGTH: usize = 16;

#[derive(Debug, Clone)]
pub struct PhoneNumber(String);

impl PhoneNumber{
    pub fn parse(number: String) -> Result<PhoneNumber, String>{
        let trimmed = number.trim();

        let allowed = trimmed.chars()
            .all(|c| c.is_ascii_digit() || " +-().".contains(c));
        let has_digit = trimmed.chars().any(|c| c.is_ascii_digit());

        if allowed && has_digit && trimmed.chars().count() <= MAX_PHONE_LENGTH {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(format!("{} is not a valid phone number", number))
        }
    }

    pub fn inner(&self) -> String {
        self.0.clone()
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
