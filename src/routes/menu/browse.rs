use std::io::{BufRead, Write};

use crate::{
    db_interaction::{print_full_menu, print_items_named, print_items_of_type},
    routes::CommandError,
    startup::Application,
};

const SEPARATOR: &str = "-------------------------------------------------";

pub fn view_menu<R: BufRead, W: Write>(app: &mut Application<R, W>) -> Result<(), CommandError>{
    app.console.say(SEPARATOR)?;
    let rows = print_full_menu(&mut app.gateway, app.console.output())?;
    app.console.say(SEPARATOR)?;

    if rows == 0 {
        app.console.say("The menu is empty")?;
    }
    Ok(())
}

pub fn search_item_name<R: BufRead, W: Write>(app: &mut Application<R, W>) -> Result<(), CommandError>{
    let item_name = app.console.prompt("\tItem: ")?;

    app.console.say(SEPARATOR)?;
    let rows = print_items_named(&mut app.gateway, &item_name, app.console.output())?;
    app.console.say(SEPARATOR)?;

    if rows == 0 {
        app.console.say(&format!("No item named {}", item_name))?;
    }
    Ok(())
}

pub fn search_item_type<R: BufRead, W: Write>(app: &mut Application<R, W>) -> Result<(), CommandError>{
    let item_type = app.console.prompt("\tType: ")?;

    app.console.say(SEPARATOR)?;
    let rows = print_items_of_type(&mut app.gateway, &item_type, app.console.output())?;
    app.console.say(SEPARATOR)?;

    if rows == 0 {
        app.console.say(&format!("No items of type: {}", item_type))?;
    }
    Ok(())
}
