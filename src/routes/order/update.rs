use std::io::{BufRead, Write};

use crate::{
    db_interaction::{count_orders, get_paid_status, get_user_type, print_recent_unpaid_orders, set_paid_status},
    domain::Role,
    routes::CommandError,
    startup::Application,
};

fn invalid_order_id() -> CommandError{
    CommandError::InvalidInput("Invalid order ID!".to_string())
}

// The stored type wins over the one cached at login. Logins without a
// users row (the bypass account) keep the session role.
fn current_role<R: BufRead, W: Write>(
    app: &mut Application<R, W>,
    login: &str,
    session_role: Role
) -> Result<Role, CommandError>{
    match get_user_type(&mut app.gateway, login)? {
        Some(user_type) => user_type.parse::<Role>().map_err(CommandError::InvalidInput),
        None => Ok(session_role)
    }
}

/// Updates the paid flag of an order. The user's role is looked up again
/// first. Ids are only range checked against the current row count;
/// ownership is not verified.
#[tracing::instrument(
    "Updating order",
    skip(app, session_role)
)]
pub fn update_order<R: BufRead, W: Write>(
    app: &mut Application<R, W>,
    login: &str,
    session_role: Role
) -> Result<(), CommandError>{
    let role = current_role(app, login, session_role)?;
    tracing::debug!(%role, "Role looked up");

    if role == Role::Manager {
        app.console.say("Output all unpaid orders from <= 24 hours?")?;
        app.console.say("1: Yes")?;
        if app.console.read_choice()? == 1 {
            let shown = print_recent_unpaid_orders(&mut app.gateway, app.console.output())?;
            if shown == 0 {
                app.console.say("No unpaid orders in the last 24 hours")?;
            }
        }
    }

    let answer = app.console.prompt("Input the order ID to update: ")?;
    let order_id = answer.trim().parse::<i32>().map_err(|_| invalid_order_id())?;

    let order_count = count_orders(&mut app.gateway)?;
    if order_id < 1 || i64::from(order_id) > order_count {
        return Err(invalid_order_id())
    }

    match role {
        Role::Customer => pay_order(app, order_id),
        Role::Manager => set_order_paid(app, order_id)
    }
}

fn pay_order<R: BufRead, W: Write>(app: &mut Application<R, W>, order_id: i32) -> Result<(), CommandError>{
    match get_paid_status(&mut app.gateway, order_id)? {
        None => Err(invalid_order_id()),
        Some(true) => Err(CommandError::InvalidInput("Cannot modify this order!".to_string())),
        Some(false) => {
            app.console.say("Modify Paid? (1 if yes)")?;
            if app.console.read_choice()? != 1 {
                return Ok(())
            }

            if set_paid_status(&mut app.gateway, order_id, true)? == 0 {
                return Err(invalid_order_id())
            }
            app.console.say(&format!("Order {} has been updated to be paid", order_id))?;
            Ok(())
        }
    }
}

fn set_order_paid<R: BufRead, W: Write>(app: &mut Application<R, W>, order_id: i32) -> Result<(), CommandError>{
    app.console.say("Please input 1 for paid or 2 for unpaid")?;
    let paid = match app.console.read_choice()? {
        1 => true,
        2 => false,
        _ => return Err(CommandError::InvalidInput("Invalid option".to_string()))
    };

    if set_paid_status(&mut app.gateway, order_id, paid)? == 0 {
        return Err(invalid_order_id())
    }

    tracing::info!(order_id, paid, "Order paid status changed");
    let status = if paid { "paid" } else { "unpaid" };
    app.console.say(&format!("Order {} has been updated to be {}", order_id, status))?;
    Ok(())
}
