use oop_exercises::account::AccountError;
use oop_exercises::model::{BankAccount, Glass, Person, Product, Resident};
use oop_exercises::product::ProductError;
use oop_exercises::validation::{FailureKind, Number, ValidationError};

#[test]
fn test_glass_round_trip_and_failures() {
    let glass = Glass::new(250, 100).expect("valid glass");
    assert_eq!(glass.capacity(), Number::Int(250));
    assert_eq!(glass.occupied(), Number::Int(100));

    // Empty and full are both fine
    assert!(Glass::new(500, 0).is_ok());
    assert!(Glass::new(0.5, 0.5).is_ok());

    assert_eq!(Glass::new("hfhff", 5).unwrap_err().kind(), FailureKind::Type);
    assert_eq!(Glass::new(250, "half").unwrap_err().kind(), FailureKind::Type);
    assert_eq!(Glass::new(0, 0).unwrap_err().kind(), FailureKind::Range);
    assert_eq!(Glass::new(250, -1).unwrap_err().kind(), FailureKind::Range);
    assert_eq!(Glass::new(250, 251).unwrap_err().kind(), FailureKind::Range);

    // Kinds are checked before ranges
    let err = Glass::new(-1, "x").unwrap_err();
    assert_eq!(err.kind(), FailureKind::Type);
    assert_eq!(err.field(), "occupied");
}

#[test]
fn test_glass_capacity_check_is_exact_past_float_precision() {
    // 2^53 + 1 has no f64 of its own; it must still count as overflowing 2^53
    let err = Glass::new(9_007_199_254_740_992.0_f64, 9_007_199_254_740_993_i64).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Range);
    assert_eq!(err.field(), "occupied");

    assert!(Glass::new(9_007_199_254_740_992.0_f64, 9_007_199_254_740_992_i64).is_ok());
    assert!(Glass::new(9_007_199_254_740_993_i64, 9_007_199_254_740_992.0_f64).is_ok());
}

#[test]
fn test_person_lifecycle() {
    let mut p = Person::new("Ivan", 30, "ivan@example.com").unwrap();
    assert_eq!(p.name(), "Ivan");
    assert_eq!(p.age(), 30);
    assert_eq!(p.email(), "ivan@example.com");

    p.birthday();
    assert_eq!(p.age(), 31);
    assert_eq!(p.name(), "Ivan");
    assert_eq!(p.email(), "ivan@example.com");

    p.change_email("new@mail.com").unwrap();
    assert_eq!(p.email(), "new@mail.com");

    // Rejected email keeps the old one
    let err = p.change_email("no-at-sign").unwrap_err();
    assert_eq!(err.kind(), FailureKind::Range);
    assert_eq!(p.email(), "new@mail.com");
    assert_eq!(p.change_email(42).unwrap_err().kind(), FailureKind::Type);

    assert!(!Person::new("Max", 17, "m@mail.com").unwrap().is_adult());
    assert!(Person::new("Max", 18, "m@mail.com").unwrap().is_adult());
}

#[test]
fn test_person_validation() {
    assert_eq!(Person::new(1, 30, "a@b").unwrap_err().kind(), FailureKind::Type);
    assert_eq!(Person::new("", 30, "a@b").unwrap_err().kind(), FailureKind::Range);
    assert_eq!(Person::new("A", 30.5, "a@b").unwrap_err().kind(), FailureKind::Type);
    assert_eq!(
        Person::new("A", -1, "a@b").unwrap_err(),
        ValidationError::OutOfRange {
            field: "age",
            reason: "must be >= 0".to_string()
        }
    );
}

#[test]
fn test_resident_greets_and_relocates() {
    let mut r = Resident::new("Anna", 25, "Belgrade").unwrap();
    assert_eq!(r.greet(), "Hello, my name is Anna");
    assert!(r.is_adult());
    assert!(!Resident::new("Ivan", 17, "Moscow").unwrap().is_adult());

    r.relocate("Novi Sad").unwrap();
    assert_eq!(r.city(), "Novi Sad");

    assert_eq!(r.relocate("").unwrap_err().kind(), FailureKind::Range);
    assert_eq!(r.relocate(7).unwrap_err().kind(), FailureKind::Type);
    assert_eq!(r.city(), "Novi Sad");
    assert_eq!(r.to_string(), "Resident(name='Anna', age=25, city='Novi Sad')");
}

#[test]
fn test_account_deposit_and_withdraw() {
    let mut acc = BankAccount::new("Ivan", 100, "USD").unwrap();
    assert_eq!(acc.balance(), 100.0);
    assert_eq!(acc.owner(), "Ivan");
    assert_eq!(acc.currency(), "USD");

    acc.deposit(50).unwrap();
    assert_eq!(acc.balance(), 150.0);
    acc.withdraw(30).unwrap();
    assert_eq!(acc.balance(), 120.0);

    // Non-positive deposits are range failures and change nothing
    assert_eq!(acc.deposit(0).unwrap_err().kind(), FailureKind::Range);
    assert_eq!(acc.deposit(-5.0).unwrap_err().kind(), FailureKind::Range);
    assert_eq!(acc.deposit("10").unwrap_err().kind(), FailureKind::Type);
    assert_eq!(acc.balance(), 120.0);

    let err = acc.withdraw(120.5).unwrap_err();
    assert_eq!(
        err,
        AccountError::InsufficientFunds {
            requested: 120.5,
            available: 120.0
        }
    );
    assert_eq!(err.kind(), FailureKind::InsufficientResource);
    assert!(err.kind().is_range());
    assert_eq!(acc.balance(), 120.0);

    // Emptying the account is allowed
    acc.withdraw(120).unwrap();
    assert_eq!(acc.balance(), 0.0);
    assert_eq!(acc.to_string(), "BankAccount(owner='Ivan', balance=0.0, currency='USD')");
}

#[test]
fn test_account_rendering_of_extreme_balances_and_quoted_names() {
    let rich = BankAccount::new("A", 1e16, "USD").unwrap();
    assert_eq!(rich.to_string(), "BankAccount(owner='A', balance=1e+16, currency='USD')");

    let tiny = BankAccount::new("O'Brien", 0.00001, "EUR").unwrap();
    assert_eq!(
        tiny.to_string(),
        "BankAccount(owner=\"O'Brien\", balance=1e-05, currency='EUR')"
    );
}

#[test]
fn test_account_validation() {
    assert_eq!(BankAccount::new("", 0, "EUR").unwrap_err().kind(), FailureKind::Range);
    assert_eq!(BankAccount::new("Anna", -1, "EUR").unwrap_err().kind(), FailureKind::Range);
    assert_eq!(BankAccount::new("Anna", "0", "EUR").unwrap_err().kind(), FailureKind::Type);
    assert_eq!(BankAccount::new("Anna", 0, "").unwrap_err().kind(), FailureKind::Range);
    assert_eq!(BankAccount::new("Anna", 0, true).unwrap_err().kind(), FailureKind::Type);
}

#[test]
fn test_product_sell_and_restock() {
    let mut p = Product::new("Apple", 1.5, 10).unwrap();
    assert_eq!(p.total_cost(), 15.0);

    p.sell(3).unwrap();
    assert_eq!(p.quantity(), 7);
    p.restock(5).unwrap();
    assert_eq!(p.quantity(), 12);

    let err = p.sell(13).unwrap_err();
    assert_eq!(
        err,
        ProductError::InsufficientStock {
            requested: 13,
            available: 12
        }
    );
    assert_eq!(err.kind(), FailureKind::InsufficientResource);
    assert_eq!(p.quantity(), 12);

    assert_eq!(p.sell(-1).unwrap_err().kind(), FailureKind::Range);
    assert_eq!(p.restock(2.5).unwrap_err().kind(), FailureKind::Type);
    assert_eq!(p.quantity(), 12);

    assert_eq!(Product::new("Laptop", 1000, 2).unwrap().total_cost(), 2000.0);
}

#[test]
fn test_product_setters_revalidate() {
    let mut p = Product::new("Pen", 1, 0).unwrap();
    p.set_price(2.5).unwrap();
    assert_eq!(p.price(), 2.5);

    assert_eq!(p.set_price(-0.1).unwrap_err().kind(), FailureKind::Range);
    assert_eq!(p.set_quantity("ten").unwrap_err().kind(), FailureKind::Type);
    assert_eq!(p.price(), 2.5);
    assert_eq!(p.quantity(), 0);
    assert_eq!(p.to_string(), "Product(name='Pen', price=2.5, quantity=0)");
}

#[test]
fn test_getters_feed_back_into_setters() {
    let mut p = Product::new("Pen", 1, 4).unwrap();
    p.restock(p.quantity()).unwrap();
    assert_eq!(p.quantity(), 8);
    p.set_quantity(p.quantity()).unwrap();
    p.sell(p.quantity()).unwrap();
    assert_eq!(p.quantity(), 0);

    let ivan = Person::new("Ivan", 30, "ivan@example.com").unwrap();
    let twin = Person::new(ivan.name(), ivan.age(), ivan.email()).unwrap();
    assert_eq!(twin, ivan);

    // Past i64::MAX the value is no longer an integer
    assert_eq!(p.set_quantity(u64::MAX).unwrap_err().kind(), FailureKind::Type);
    assert_eq!(p.set_quantity(usize::MAX).unwrap_err().kind(), FailureKind::Type);
}
