use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable, Selectable};

use crate::schema::{menu, orders, users};
use crate::utils::optional_text;

// A row that can be shown on the terminal: column names in select order and
// each value rendered as text.
pub trait TableRow {
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User{
    pub login: String,
    // Stored and compared in plaintext, as the existing database does
    pub password: String,
    pub phone_num: String,
    pub fav_items: Option<String>,
    pub user_type: String
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = menu)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MenuItem{
    pub item_name: String,
    pub item_type: String,
    pub price: f64,
    pub description: Option<String>,
    pub image_url: Option<String>
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order{
    pub order_id: i32,
    pub login: String,
    pub paid: bool,
    pub received_at: NaiveDateTime,
    pub total: f64
}

impl TableRow for User {
    const COLUMNS: &'static [&'static str] = &["login", "password", "phonenum", "favitems", "type"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.login.clone(),
            self.password.clone(),
            self.phone_num.clone(),
            optional_text(&self.fav_items),
            self.user_type.clone()
        ]
    }
}

impl TableRow for MenuItem {
    const COLUMNS: &'static [&'static str] = &["itemname", "type", "price", "description", "imageurl"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.item_name.clone(),
            self.item_type.clone(),
            self.price.to_string(),
            optional_text(&self.description),
            optional_text(&self.image_url)
        ]
    }
}

impl TableRow for Order {
    const COLUMNS: &'static [&'static str] = &["orderid", "login", "paid", "timestamprecieved", "total"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.order_id.to_string(),
            self.login.clone(),
            self.paid.to_string(),
            self.received_at.to_string(),
            self.total.to_string()
        ]
    }
}
