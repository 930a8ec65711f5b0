use std::{
    collections::BTreeSet,
    sync::{mpsc, Arc, Barrier},
    thread,
    time::Duration,
};

use cafe::{db_interaction::insert_order, domain::OrderTotal, gateway::GatewayError, schema::orders};
use claim::{assert_none, assert_ok, assert_some_eq};
use diesel::{dsl::now, ExpressionMethods, QueryDsl, RunQueryDsl};

use crate::helpers::TestApp;

fn app_with_customer() -> TestApp{
    let mut app = TestApp::spawn_app();
    app.add_user("alice", "pw", "Customer");
    app
}

#[test]
fn placed_order_gets_the_next_id(){
    let mut app = app_with_customer();
    app.add_order("alice", true, 3.0, 2);
    app.add_order("alice", false, 4.0, 1);

    let output = app.run_script("3\n3\nalice\n2\n1\n4.5\n9\n9\n");

    assert!(output.contains("Order 3 inputted"));
    assert_eq!(app.order_count(), 3);
    assert_some_eq!(app.paid_status(3), true);
}

#[test]
fn order_for_unknown_login_inserts_nothing(){
    let mut app = app_with_customer();
    app.add_order("alice", false, 4.0, 1);

    let output = app.run_script("3\n3\nbob\n9\n9\n");

    assert!(output.contains("Non existent login!"));
    assert_eq!(app.order_count(), 1);
}

#[test]
fn history_is_shown_and_the_order_can_be_aborted(){
    let mut app = app_with_customer();
    app.add_order("alice", true, 3.0, 2);

    let output = app.run_script("3\n3\nalice\n1\n1\n9\n9\n");

    assert!(output.contains("orderid\tlogin\tpaid\ttimestamprecieved\ttotal\n"));
    assert!(output.contains("1\talice\ttrue\t"));
    assert!(output.contains("Order aborted"));
    assert_eq!(app.order_count(), 1);
}

#[test]
fn history_lists_only_the_latest_orders(){
    let mut app = app_with_customer();
    for hours_ago in (1..=7).rev() {
        app.add_order("alice", false, 1.0, hours_ago);
    }

    let output = app.run_script("3\n3\nalice\n1\n1\n9\n9\n");

    assert_eq!(output.matches("\talice\tfalse\t").count(), 5);
    assert!(!output.contains("\n1\talice"));
    assert!(!output.contains("\n2\talice"));
}

#[test]
fn invalid_paid_choice_records_an_unpaid_order(){
    let mut app = app_with_customer();

    let output = app.run_script("3\n3\nalice\n2\n5\n2.25\n9\n9\n");

    assert!(output.contains("Invalid input!"));
    assert!(output.contains("Order 1 inputted"));
    assert_some_eq!(app.paid_status(1), false);
}

#[test]
fn negative_total_aborts_the_order(){
    let mut app = app_with_customer();

    let output = app.run_script("3\n3\nalice\n2\n0\n-3\n9\n9\n");

    assert!(output.contains("-3 is not a valid order total"));
    assert_eq!(app.order_count(), 0);
}

#[test]
fn customer_cannot_flip_a_paid_order(){
    let mut app = app_with_customer();
    let order_id = app.add_order("alice", true, 3.0, 1);

    let output = app.run_script("2\nalice\npw\n4\n1\n9\n9\n");

    assert!(output.contains("Cannot modify this order!"));
    assert_some_eq!(app.paid_status(order_id), true);
}

#[test]
fn customer_can_pay_an_unpaid_order(){
    let mut app = app_with_customer();
    let order_id = app.add_order("alice", false, 3.0, 1);

    let output = app.run_script("2\nalice\npw\n4\n1\n1\n9\n9\n");

    assert!(output.contains("Order 1 has been updated to be paid"));
    assert_some_eq!(app.paid_status(order_id), true);
}

#[test]
fn manager_sets_paid_either_way(){
    let mut app = app_with_customer();
    let order_id = app.add_order("alice", true, 3.0, 1);

    let output = app.run_script("3\n4\n2\n1\n2\n9\n9\n");
    assert!(output.contains("Order 1 has been updated to be unpaid"));
    assert_some_eq!(app.paid_status(order_id), false);

    let output = app.run_script("3\n4\n2\n1\n1\n9\n9\n");
    assert!(output.contains("Order 1 has been updated to be paid"));
    assert_some_eq!(app.paid_status(order_id), true);
}

#[test]
fn manager_sees_only_recent_unpaid_orders(){
    let mut app = app_with_customer();
    app.add_order("alice", false, 1.0, 1);
    app.add_order("alice", false, 2.0, 30);
    app.add_order("alice", true, 3.0, 1);

    let output = app.run_script("3\n4\n1\n0\n9\n9\n");

    assert!(output.contains("1\talice\tfalse\t"));
    assert!(!output.contains("2\talice\tfalse\t"));
    assert!(!output.contains("3\talice\ttrue\t"));
    assert!(output.contains("Invalid order ID!"));
}

#[test]
fn out_of_range_order_ids_are_rejected(){
    let mut app = app_with_customer();
    let order_id = app.add_order("alice", false, 3.0, 1);

    let output = app.run_script("3\n4\n2\n5\n4\n2\nabc\n9\n9\n");

    assert_eq!(output.matches("Invalid order ID!").count(), 2);
    assert_some_eq!(app.paid_status(order_id), false);
    assert_none!(app.paid_status(5));
}

#[test]
fn concurrent_front_ends_get_distinct_consecutive_ids(){
    const FRONT_ENDS: usize = 4;
    const ORDERS_EACH: usize = 5;

    let mut app = app_with_customer();
    let gateways: Vec<_> = (0..FRONT_ENDS).map(|_| app.gateway()).collect();
    let barrier = Arc::new(Barrier::new(FRONT_ENDS));

    let handles: Vec<_> = gateways.into_iter()
        .map(|mut gateway| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..ORDERS_EACH)
                    .map(|_| {
                        let total = OrderTotal::parse("2.5").unwrap();
                        insert_order(&mut gateway, "alice", false, total).unwrap()
                    })
                    .collect::<Vec<i32>>()
            })
        })
        .collect();

    let ids: Vec<i32> = handles.into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();
    let distinct: BTreeSet<i32> = ids.iter().copied().collect();

    let expected = FRONT_ENDS * ORDERS_EACH;
    assert_eq!(ids.len(), expected);
    assert_eq!(distinct, (1..=expected as i32).collect::<BTreeSet<i32>>());
    assert_eq!(app.order_count(), expected as i64);
}

#[test]
fn insert_waits_for_a_lock_held_elsewhere(){
    let mut app = app_with_customer();
    app.add_order("alice", false, 1.0, 1);
    let mut gateway = app.gateway();
    let mut side = app.gateway();

    let (locked_tx, locked_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel::<()>();

    // Holds the table lock with an uncommitted order 2 until released
    let holder = thread::spawn(move || {
        side.transaction::<(), GatewayError, _>(|conn| {
            diesel::sql_query("LOCK TABLE orders IN SHARE ROW EXCLUSIVE MODE").execute(conn)?;
            let count: i64 = orders::table
                .count()
                .get_result(conn)?;
            diesel::insert_into(orders::table)
                .values((
                    orders::order_id.eq(i32::try_from(count + 1).unwrap()),
                    orders::login.eq("alice"),
                    orders::paid.eq(false),
                    orders::received_at.eq(now),
                    orders::total.eq(1.0)
                ))
                .execute(conn)?;
            locked_tx.send(()).unwrap();
            release_rx.recv().unwrap();
            Ok(())
        })
    });

    locked_rx.recv().unwrap();
    let inserter = thread::spawn(move || {
        insert_order(&mut gateway, "alice", true, OrderTotal::parse("3").unwrap())
    });
    thread::sleep(Duration::from_millis(200));
    release_tx.send(()).unwrap();

    assert_ok!(holder.join().unwrap());
    let order_id = assert_ok!(inserter.join().unwrap());
    assert_eq!(order_id, 3);
    assert_eq!(app.order_count(), 3);
}

#[test]
fn update_order_uses_the_stored_user_type(){
    let mut app = app_with_customer();
    app.add_user("Admin", "pw", "Customer");
    let order_id = app.add_order("alice", true, 3.0, 1);

    let output = app.run_script("3\n4\n1\n9\n9\n");

    assert!(!output.contains("Output all unpaid orders"));
    assert!(output.contains("Cannot modify this order!"));
    assert_some_eq!(app.paid_status(order_id), true);
}
