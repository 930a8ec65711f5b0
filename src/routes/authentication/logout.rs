use std::io::{BufRead, Write};

use crate::{routes::CommandError, startup::Application};

pub fn log_out<R: BufRead, W: Write>(app: &mut Application<R, W>) -> Result<(), CommandError>{
    app.session.log_out();
    app.console.say("Logged out")?;
    Ok(())
}
