use std::{error::Error, fmt::Debug, io::Write};

use diesel::{dsl::{now, IntervalDsl}, ExpressionMethods, QueryDsl, RunQueryDsl, SelectableHelper};
use thiserror::Error;

use crate::{
    domain::OrderTotal,
    gateway::{Gateway, GatewayError},
    models::Order,
    schema::{orders, users},
    utils::error_fmt_chain,
};

// How many previous orders are shown while placing a new one
pub const ORDER_HISTORY_LIMIT: i64 = 5;

// Error associated with placing an order
#[derive(Error)]
pub enum PlaceOrderError{
    #[error("Non existent login!")]
    NonExistentLogin(String),
    #[error("No order id left to assign")]
    OrderIdExhausted,
    #[error("Failed to run query")]
    RunQueryError(#[from] diesel::result::Error),
    #[error("Failed to place order")]
    GatewayError(#[from] GatewayError)
}

impl Debug for PlaceOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

/// Inserts an order whose id is the current row count plus one.
///
/// The count and the insert share a transaction that holds a lock on
/// `orders`, so concurrent front-ends queue up instead of handing out the
/// same id twice. The owning login is re-checked under the same lock.
#[tracing::instrument(
    "Creating order in orders table",
    skip(gateway)
)]
pub fn insert_order(
    gateway: &mut Gateway,
    login: &str,
    paid: bool,
    total: OrderTotal
) -> Result<i32, PlaceOrderError> {
    gateway.transaction::<i32, PlaceOrderError, _>(|conn| {
        diesel::sql_query("LOCK TABLE orders IN SHARE ROW EXCLUSIVE MODE")
            .execute(conn)?;

        let known_logins: i64 = users::table
            .filter(users::login.eq(login))
            .count()
            .get_result(conn)?;

        if known_logins == 0 {
            return Err(PlaceOrderError::NonExistentLogin(login.to_string()))
        }

        let order_count: i64 = orders::table
            .count()
            .get_result(conn)?;

        let order_id = i32::try_from(order_count + 1)
            .map_err(|_| PlaceOrderError::OrderIdExhausted)?;

        diesel::insert_into(orders::table)
            .values((
                orders::order_id.eq(order_id),
                orders::login.eq(login),
                orders::paid.eq(paid),
                orders::received_at.eq(now),
                orders::total.eq(total.value())
            ))
            .execute(conn)?;

        tracing::info!(order_id, "Order created");
        Ok(order_id)
    })
}

pub fn count_orders(gateway: &mut Gateway) -> Result<i64, GatewayError> {
    let counts = gateway.query_rows::<i64, _>(orders::table.count())?;
    Ok(counts.into_iter().next().unwrap_or(0))
}

#[tracing::instrument(
    "Printing recent orders of user",
    skip(gateway, out)
)]
pub fn print_recent_orders(
    gateway: &mut Gateway,
    login: &str,
    out: &mut dyn Write
) -> Result<usize, GatewayError> {
    gateway.execute_query_and_print_result::<Order, _>(
        orders::table
            .filter(orders::login.eq(login.to_string()))
            .order(orders::received_at.desc())
            .limit(ORDER_HISTORY_LIMIT)
            .select(Order::as_select()),
        out
    )
}

#[tracing::instrument(
    "Printing unpaid orders of the last day",
    skip_all
)]
pub fn print_recent_unpaid_orders(
    gateway: &mut Gateway,
    out: &mut dyn Write
) -> Result<usize, GatewayError> {
    gateway.execute_query_and_print_result::<Order, _>(
        orders::table
            .filter(orders::paid.eq(false))
            .filter(orders::received_at.ge(now - 1_i32.days()))
            .order(orders::received_at.desc())
            .select(Order::as_select()),
        out
    )
}

#[tracing::instrument(
    "Getting paid status of order",
    skip(gateway)
)]
pub fn get_paid_status(
    gateway: &mut Gateway,
    order_id: i32
) -> Result<Option<bool>, GatewayError> {
    let statuses = gateway.query_rows::<bool, _>(
        orders::table
            .find(order_id)
            .select(orders::paid)
    )?;

    Ok(statuses.into_iter().next())
}

#[tracing::instrument(
    "Updating paid status of order",
    skip(gateway)
)]
pub fn set_paid_status(
    gateway: &mut Gateway,
    order_id: i32,
    paid: bool
) -> Result<usize, GatewayError> {
    gateway.execute_update(
        diesel::update(orders::table.find(order_id))
            .set(orders::paid.eq(paid))
    )
}
