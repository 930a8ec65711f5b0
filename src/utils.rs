use std::error::Error;

use diesel::PgConnection;

pub type DbConnection = PgConnection;

// Text used for NULL columns when rows are rendered for the terminal
pub const NULL_TEXT: &str = "null";

pub fn error_fmt_chain(f: &mut std::fmt::Formatter<'_>, source: &Option<impl Error>) -> std::fmt::Result{
    if let Some(error) = source{
        write!(f, "\n\tCaused By:\n\t")?;
        write!(f, "{:?}", &error)?;
        error_fmt_chain(f, &error.source())
    } else {
        Ok(())
    }
}

pub fn optional_text(value: &Option<String>) -> String {
    match value {
        Some(v) => v.clone(),
        None => NULL_TEXT.to_string()
    }
}
