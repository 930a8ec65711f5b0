use std::io::{BufRead, Write};

use crate::{
    db_interaction::{insert_order, print_recent_orders, user_exists, PlaceOrderError, ORDER_HISTORY_LIMIT},
    domain::OrderTotal,
    routes::CommandError,
    startup::Application,
};

/// Records an order for any existing login. The history step only reads,
/// and every abort path returns before anything is inserted.
#[tracing::instrument(
    "Placing order",
    skip_all
)]
pub fn place_order<R: BufRead, W: Write>(app: &mut Application<R, W>) -> Result<(), CommandError>{
    let login = app.console.prompt("Enter the customer login: ")?;
    if !user_exists(&mut app.gateway, &login)? {
        return Err(PlaceOrderError::NonExistentLogin(login).into())
    }

    app.console.say(&format!("Browse order history of user? (Last {} purchases)", ORDER_HISTORY_LIMIT))?;
    app.console.say("1: Yes")?;
    app.console.say("2: No")?;
    if app.console.read_choice()? == 1 {
        let shown = print_recent_orders(&mut app.gateway, &login, app.console.output())?;
        if shown == 0 {
            app.console.say(&format!("No previous orders for {}", login))?;
        }

        app.console.say("Abort Order? (1: Yes)")?;
        if app.console.read_choice()? == 1 {
            app.console.say("Order aborted")?;
            return Ok(())
        }
    }

    app.console.say("Enter pay status (1 for paid, 0 for unpaid)")?;
    let paid = match app.console.read_choice()? {
        1 => true,
        0 => false,
        _ => {
            app.console.say("Invalid input! The order is recorded as unpaid")?;
            false
        }
    };

    let total = app.console.prompt("Enter total: ")?;
    let total = OrderTotal::parse(&total).map_err(CommandError::InvalidInput)?;

    let order_id = insert_order(&mut app.gateway, &login, paid, total)?;
    app.console.say(&format!("Order {} inputted", order_id))?;
    Ok(())
}
