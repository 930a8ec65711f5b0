use std::io::{BufRead, Write};

use crate::{
    commands::{manage_menu, ManageCommand},
    db_interaction::delete_menu_item,
    routes::CommandError,
    startup::Application,
};

// Manager only; the item menu leaves this out for customers
pub fn manage_items<R: BufRead, W: Write>(app: &mut Application<R, W>) -> Result<(), CommandError>{
    let menu = manage_menu();
    menu.render(app.console.output())?;

    match menu.command_for(app.console.read_choice()?) {
        Some(ManageCommand::AddItem) => Err(CommandError::Unsupported("Adding menu items")),
        Some(ManageCommand::DeleteItem) => delete_item(app),
        Some(ManageCommand::ModifyItem) => Err(CommandError::Unsupported("Modifying menu items")),
        Some(ManageCommand::Back) => Ok(()),
        None => Ok(app.console.say("Unrecognized choice!")?)
    }
}

#[tracing::instrument(
    "Removing menu item",
    skip_all
)]
pub fn delete_item<R: BufRead, W: Write>(app: &mut Application<R, W>) -> Result<(), CommandError>{
    let item_name = app.console.prompt("\tItem to remove: ")?;

    match delete_menu_item(&mut app.gateway, &item_name)? {
        0 => Err(CommandError::InvalidInput(format!("No item named {}", item_name))),
        _ => {
            tracing::info!(%item_name, "Menu item removed");
            app.console.say(&format!("Item {} removed", item_name))?;
            Ok(())
        }
    }
}
