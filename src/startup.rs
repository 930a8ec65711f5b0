use std::io::{BufRead, Write};

use crate::{
    commands::{main_menu, MainCommand},
    console::Console,
    gateway::Gateway,
    routes::{
        authentication::{bypass_login, create_user, log_in, log_out},
        menu::goto_menu,
        order::{place_order, update_order},
        profile::update_profile,
        report_failure,
        CommandError,
    },
    session_state::Session,
};

const GREETING: &str = "\n\n*******************************************************\n              Cafe ordering terminal\n*******************************************************\n";

enum Flow{
    Continue,
    Exit
}

/// Owns everything a command handler needs: the database gateway, the
/// terminal and the session. Handlers receive it by mutable reference.
pub struct Application<R, W>{
    pub gateway: Gateway,
    pub console: Console<R, W>,
    pub session: Session
}

impl<R: BufRead, W: Write> Application<R, W> {
    pub fn new(gateway: Gateway, console: Console<R, W>) -> Self{
        Application{
            gateway,
            console,
            session: Session::default()
        }
    }

    /// Runs the main menu until the user exits or input ends, then closes
    /// the gateway. Only terminal failures escape.
    pub fn run(&mut self) -> Result<(), CommandError>{
        self.console.say(GREETING)?;

        let result = match self.main_loop() {
            Err(e) if e.is_end_of_input() => {
                tracing::info!("Input closed, leaving");
                Ok(())
            },
            other => other
        };

        write!(self.console.output(), "Disconnecting from database...")?;
        self.gateway.close();
        self.console.say("Done\n\nBye !")?;
        result
    }

    pub fn into_output(self) -> W{
        self.console.into_output()
    }

    fn main_loop(&mut self) -> Result<(), CommandError>{
        loop {
            let menu = main_menu(&self.session);
            menu.render(self.console.output())?;
            let choice = self.console.read_choice()?;

            let Some(command) = menu.command_for(choice) else {
                self.console.say("Unrecognized choice!")?;
                continue;
            };

            match self.dispatch(command) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {},
                Err(e) => report_failure(&mut self.console, e)?
            }
        }
    }

    #[tracing::instrument(
        "Running command",
        skip(self),
        fields(login = ?self.session.login())
    )]
    fn dispatch(&mut self, command: MainCommand) -> Result<Flow, CommandError>{
        let user = self.session.login()
            .map(str::to_string)
            .zip(self.session.role());

        match (command, user) {
            (MainCommand::CreateUser, _) => create_user(self)?,
            (MainCommand::LogIn, _) => log_in(self)?,
            (MainCommand::BypassLogin, _) => bypass_login(self)?,
            (MainCommand::Exit, _) => return Ok(Flow::Exit),
            (MainCommand::GotoMenu, Some((_, role))) => goto_menu(self, role)?,
            (MainCommand::UpdateProfile, Some((login, _))) => update_profile(self, &login)?,
            (MainCommand::PlaceOrder, Some(_)) => place_order(self)?,
            (MainCommand::UpdateOrder, Some((login, role))) => update_order(self, &login, role)?,
            (MainCommand::LogOut, Some(_)) => log_out(self)?,
            (_, None) => return Err(CommandError::NotLoggedIn)
        }

        Ok(Flow::Continue)
    }
}
