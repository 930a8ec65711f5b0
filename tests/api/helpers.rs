use std::io::Cursor;

use cafe::{
    configuration::{DatabaseSettings, Settings},
    console::Console,
    gateway::Gateway,
    schema::{menu, orders, users},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use diesel::{
    dsl::{now, IntervalDsl},
    Connection, ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl,
};
use once_cell::sync::Lazy;
use uuid::Uuid;

static LOGGER_INSTANCE: Lazy<()> = Lazy::new(|| {
    let log_level = "info".to_string();
    let name = "cafe-test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name, log_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to set test logger");
    } else {
        let subscriber = get_subscriber(name, log_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to set test logger");
    }
});

/// A freshly migrated database of its own, plus a side connection for
/// seeding rows and checking what the terminal did to them.
pub struct TestApp{
    pub settings: DatabaseSettings,
    pub conn: PgConnection
}

impl TestApp {
    fn create_db(settings: &DatabaseSettings){
        let mut connection = PgConnection::establish(&settings.get_database_url())
            .expect("Failed to connect to postgres database");

        let query = format!(r#"CREATE DATABASE "{}";"#, settings.name);
        diesel::sql_query(query)
            .execute(&mut connection)
            .expect("Failed to create test database");

        let mut gateway = Gateway::connect(settings)
            .expect("Failed to connect to test database");
        gateway.run_migrations().expect("Failed to run migrations");
    }

    pub fn spawn_app() -> TestApp{
        Lazy::force(&LOGGER_INSTANCE);

        let mut settings = Settings::get().expect("Failed to read configuration");
        settings.database.name = Uuid::new_v4().to_string();

        TestApp::create_db(&settings.database);

        let conn = PgConnection::establish(&settings.database.get_database_table_url())
            .expect("Failed to connect to test database");

        TestApp{
            settings: settings.database,
            conn
        }
    }

    pub fn gateway(&self) -> Gateway{
        Gateway::connect(&self.settings).expect("Failed to open gateway")
    }

    /// Feeds `script` to the terminal line by line and returns everything it printed.
    pub fn run_script(&self, script: &str) -> String{
        let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut application = Application::new(self.gateway(), console);

        application.run().expect("Terminal session failed");
        String::from_utf8(application.into_output()).expect("Output was not utf-8")
    }

    pub fn add_user(&mut self, login: &str, password: &str, user_type: &str){
        diesel::insert_into(users::table)
            .values((
                users::login.eq(login),
                users::password.eq(password),
                users::phone_num.eq("555-0000"),
                users::fav_items.eq(""),
                users::user_type.eq(user_type)
            ))
            .execute(&mut self.conn)
            .expect("Failed to seed user");
    }

    pub fn add_menu_item(&mut self, item_name: &str, item_type: &str, price: f64){
        diesel::insert_into(menu::table)
            .values((
                menu::item_name.eq(item_name),
                menu::item_type.eq(item_type),
                menu::price.eq(price)
            ))
            .execute(&mut self.conn)
            .expect("Failed to seed menu item");
    }

    pub fn add_order(&mut self, login: &str, paid: bool, total: f64, hours_ago: i32) -> i32{
        let order_id = i32::try_from(self.order_count() + 1).unwrap();

        diesel::insert_into(orders::table)
            .values((
                orders::order_id.eq(order_id),
                orders::login.eq(login),
                orders::paid.eq(paid),
                orders::received_at.eq(now - hours_ago.hours()),
                orders::total.eq(total)
            ))
            .execute(&mut self.conn)
            .expect("Failed to seed order");

        order_id
    }

    pub fn order_count(&mut self) -> i64{
        orders::table
            .count()
            .get_result(&mut self.conn)
            .expect("Failed to count orders")
    }

    pub fn paid_status(&mut self, order_id: i32) -> Option<bool>{
        orders::table
            .find(order_id)
            .select(orders::paid)
            .first(&mut self.conn)
            .optional()
            .expect("Failed to read order")
    }

    pub fn user_type(&mut self, login: &str) -> Option<String>{
        users::table
            .find(login)
            .select(users::user_type)
            .first(&mut self.conn)
            .optional()
            .expect("Failed to read user")
    }

    pub fn has_menu_item(&mut self, item_name: &str) -> bool{
        menu::table
            .find(item_name)
            .count()
            .get_result::<i64>(&mut self.conn)
            .expect("Failed to read menu")
            > 0
    }
}
