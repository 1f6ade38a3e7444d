use budget_ledger::{Category, Transaction};

fn food_with_groceries() -> Category {
    let mut food = Category::new("Food");
    food.deposit(100.0, "deposit");
    assert!(food.withdraw(10.15, "groceries"));
    food
}

#[test]
fn renders_thirty_column_ledger() {
    let food = food_with_groceries();
    let rendered = food.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "*************Food*************");
    assert_eq!(lines[2], "groceries               -10.15");
    assert_eq!(lines[3], "Total: 89.85");
    assert!(lines[..3].iter().all(|line| line.len() == 30));
    assert!(!rendered.ends_with('\n'));
}

#[test]
fn renders_transfer_descriptions() {
    let mut food = Category::new("Food");
    let mut entertainment = Category::new("Entertainment");
    food.deposit(900.0, "deposit");
    food.withdraw(45.67, "milk, cereal, eggs, bacon, bread");
    assert!(food.transfer(20.0, &mut entertainment));

    assert_eq!(
        food.to_string(),
        "*************Food*************\n\
         deposit                 900.00\n\
         milk, cereal, eggs, bac -45.67\n\
         Transfer to Entertainme -20.00\n\
         Total: 834.33"
    );
    assert_eq!(
        entertainment.ledger(),
        [Transaction::new(20.0, "Transfer from Food")]
    );
}

#[test]
fn balance_tracks_every_entry() {
    let mut category = Category::new("Household");
    category.deposit(50.0, "seed");
    category.deposit(-20.0, "adjustment");
    assert!(!category.withdraw(35.0, "rent"));
    assert!(category.withdraw(15.0, "power"));
    assert!(category.withdraw(15.0, "water"));
    assert!(category.withdraw(0.0, "nothing left"));

    let expected = category
        .ledger()
        .iter()
        .fold(0.0, |total, txn| total + txn.amount());
    assert_eq!(category.get_balance(), expected);
    assert_eq!(category.get_balance(), 0.0);
    assert_eq!(category.len(), 5);
}

#[test]
fn rejected_withdrawal_keeps_state() {
    let mut category = food_with_groceries();
    let before = category.clone();
    assert!(!category.withdraw(89.86, "over budget"));
    assert_eq!(category, before);
}

#[test]
fn successful_withdrawal_lowers_balance_by_amount() {
    let mut category = food_with_groceries();
    let before = category.get_balance();
    assert!(category.withdraw(9.85, "snacks"));
    assert!((before - category.get_balance() - 9.85).abs() < 1e-9);
}

#[test]
fn transfer_is_all_or_nothing() {
    let mut a = food_with_groceries();
    let mut b = Category::new("Auto");

    assert!(!a.transfer(1_000.0, &mut b));
    assert_eq!(a.len(), 2);
    assert!(b.is_empty());

    let (a_before, b_before) = (a.get_balance(), b.get_balance());
    assert!(a.transfer(25.0, &mut b));
    assert!((a_before - a.get_balance() - 25.0).abs() < 1e-9);
    assert!((b.get_balance() - b_before - 25.0).abs() < 1e-9);
}
