use crate::helpers::TestApp;

fn seeded_app() -> TestApp{
    let mut app = TestApp::spawn_app();
    app.add_user("alice", "pw", "Customer");
    app.add_menu_item("Espresso", "Drinks", 2.5);
    app.add_menu_item("Croissant", "Pastry", 3.0);
    app
}

#[test]
fn goto_menu_prints_the_full_menu_first(){
    let app = seeded_app();

    let output = app.run_script("2\nalice\npw\n1\n9\n9\n9\n");

    assert!(output.contains("itemname\ttype\tprice\tdescription\timageurl\n"));
    assert!(output.contains("Croissant\tPastry\t3\tnull\tnull\n"));
    assert!(output.contains("Espresso\tDrinks\t2.5\tnull\tnull\n"));
}

#[test]
fn searching_for_a_missing_item_prints_no_rows(){
    let app = seeded_app();

    let output = app.run_script("2\nalice\npw\n1\n2\nLatte\n9\n9\n9\n");

    assert!(output.contains("No item named Latte"));
    assert!(!output.contains("Latte\t"));
}

#[test]
fn searching_by_type_prints_matching_rows(){
    let app = seeded_app();

    let output = app.run_script("2\nalice\npw\n1\n3\nPastry\n3\nSoup\n9\n9\n9\n");

    assert_eq!(output.matches("Croissant\tPastry").count(), 2);
    assert!(output.contains("No items of type: Soup"));
}

#[test]
fn customers_have_no_item_management(){
    let mut app = seeded_app();

    let output = app.run_script("2\nalice\npw\n1\n4\n9\n9\n9\n");

    assert!(!output.contains("Add/delete/modify item"));
    assert!(output.contains("Unrecognized choice!"));
    assert!(app.has_menu_item("Espresso"));
}

#[test]
fn managers_can_delete_items(){
    let mut app = seeded_app();

    let output = app.run_script("3\n1\n4\n2\nEspresso\n4\n2\nEspresso\n9\n9\n9\n");

    assert!(output.contains("Item Espresso removed"));
    assert!(output.contains("No item named Espresso"));
    assert!(!app.has_menu_item("Espresso"));
    assert!(app.has_menu_item("Croissant"));
}

#[test]
fn adding_and_modifying_items_are_not_supported(){
    let app = seeded_app();

    let output = app.run_script("3\n1\n4\n1\n4\n3\n9\n9\n9\n");

    assert!(output.contains("Adding menu items is not supported yet"));
    assert!(output.contains("Modifying menu items is not supported yet"));
}
