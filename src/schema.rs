// Mirrors the cafe database as PostgreSQL stores it: unquoted identifiers
// are folded to lower case, so `phoneNum` lives in column `phonenum`.

diesel::table! {
    menu (item_name) {
        #[sql_name = "itemname"]
        item_name -> Text,
        #[sql_name = "type"]
        item_type -> Text,
        price -> Float8,
        description -> Nullable<Text>,
        #[sql_name = "imageurl"]
        image_url -> Nullable<Text>,
    }
}

diesel::table! {
    orders (order_id) {
        #[sql_name = "orderid"]
        order_id -> Int4,
        login -> Text,
        paid -> Bool,
        #[sql_name = "timestamprecieved"]
        received_at -> Timestamp,
        total -> Float8,
    }
}

diesel::table! {
    users (login) {
        login -> Text,
        password -> Text,
        #[sql_name = "phonenum"]
        phone_num -> Text,
        #[sql_name = "favitems"]
        fav_items -> Nullable<Text>,
        #[sql_name = "type"]
        user_type -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    menu,
    orders,
    users,
);
