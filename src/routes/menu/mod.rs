pub mod browse;
pub mod manage;

use std::io::{BufRead, Write};

use crate::{
    commands::{item_menu, ItemCommand},
    domain::Role,
    routes::{report_failure, CommandError},
    startup::Application,
};

pub use browse::*;
pub use manage::*;

/// Prints the full menu, then loops on the item menu of `role` until the
/// user goes back. Failed commands are reported and the loop continues.
#[tracing::instrument(
    "Browsing the menu",
    skip(app)
)]
pub fn goto_menu<R: BufRead, W: Write>(app: &mut Application<R, W>, role: Role) -> Result<(), CommandError>{
    view_menu(app)?;

    let menu = item_menu(role);
    loop {
        menu.render(app.console.output())?;
        let choice = app.console.read_choice()?;

        let result = match menu.command_for(choice) {
            Some(ItemCommand::ViewMenu) => view_menu(app),
            Some(ItemCommand::SearchItemName) => search_item_name(app),
            Some(ItemCommand::SearchItemType) => search_item_type(app),
            Some(ItemCommand::ManageItems) => manage_items(app),
            Some(ItemCommand::Back) => return Ok(()),
            None => app.console.say("Unrecognized choice!").map_err(CommandError::from)
        };

        if let Err(e) = result {
            report_failure(&mut app.console, e)?;
        }
    }
}
