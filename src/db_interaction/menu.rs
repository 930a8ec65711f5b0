use std::io::Write;

use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};

use crate::{gateway::{Gateway, GatewayError}, models::MenuItem, schema::menu};

#[tracing::instrument(
    "Printing full menu",
    skip_all
)]
pub fn print_full_menu(
    gateway: &mut Gateway,
    out: &mut dyn Write
) -> Result<usize, GatewayError> {
    gateway.execute_query_and_print_result::<MenuItem, _>(
        menu::table
            .order(menu::item_name.asc())
            .select(MenuItem::as_select()),
        out
    )
}

#[tracing::instrument(
    "Printing menu items by name",
    skip(gateway, out)
)]
pub fn print_items_named(
    gateway: &mut Gateway,
    item_name: &str,
    out: &mut dyn Write
) -> Result<usize, GatewayError> {
    gateway.execute_query_and_print_result::<MenuItem, _>(
        menu::table
            .filter(menu::item_name.eq(item_name.to_string()))
            .select(MenuItem::as_select()),
        out
    )
}

#[tracing::instrument(
    "Printing menu items by type",
    skip(gateway, out)
)]
pub fn print_items_of_type(
    gateway: &mut Gateway,
    item_type: &str,
    out: &mut dyn Write
) -> Result<usize, GatewayError> {
    gateway.execute_query_and_print_result::<MenuItem, _>(
        menu::table
            .filter(menu::item_type.eq(item_type.to_string()))
            .order(menu::item_name.asc())
            .select(MenuItem::as_select()),
        out
    )
}

#[tracing::instrument(
    "Deleting menu item",
    skip(gateway)
)]
pub fn delete_menu_item(
    gateway: &mut Gateway,
    item_name: &str
) -> Result<usize, GatewayError> {
    gateway.execute_update(
        diesel::delete(menu::table.filter(menu::item_name.eq(item_name.to_string())))
    )
}
