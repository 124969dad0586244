//! Demo: builds one of every record, prints its rendering and logs the
//! outcome of a few operations, including the ones that are meant to fail.

use oop_exercises::account::AccountAction;
use oop_exercises::calculator::Calculator;
use oop_exercises::framework::{act, create};
use oop_exercises::model::{
    AccountCreate, AudioMediaItem, BankAccount, CategorySummary, Glass, Media, MediaItem,
    NumericSummary, Person, PhysicalMediaItem, Product, ProductCreate, Resident,
};
use oop_exercises::product::ProductAction;
use oop_exercises::runtime::setup_tracing;
use oop_exercises::validation::Value;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Starting demo");

    let glass = Glass::new(250, 100)?;
    println!("{glass}");
    match Glass::new("hfhff", 5) {
        Ok(glass) => println!("Unexpectedly built {glass}"),
        Err(e) => error!(error = %e, kind = ?e.kind(), "Glass rejected"),
    }

    let mut person = Person::new("Ivan", 30, "ivan@example.com")?;
    person.birthday();
    person.change_email("new@mail.com")?;
    println!("{person} adult={}", person.is_adult());

    let mut resident = Resident::new("Anna", 25, "Belgrade")?;
    resident.relocate("Novi Sad")?;
    println!("{} ({resident})", resident.greet());

    let span = tracing::info_span!("account");
    let entered = span.enter();
    let mut account: BankAccount = create(AccountCreate {
        owner: "Ivan".into(),
        balance: 100.into(),
        currency: "USD".into(),
    })?;
    act(&mut account, AccountAction::Deposit(50.into()))?;
    act(&mut account, AccountAction::Withdraw(30.into()))?;
    if let Err(e) = act(&mut account, AccountAction::Withdraw(1000.into())) {
        error!(error = %e, kind = ?e.kind(), "Withdrawal rejected");
    }
    println!("{account}");
    drop(entered);

    let span = tracing::info_span!("inventory");
    let entered = span.enter();
    let mut product: Product = create(ProductCreate {
        name: "Apple".into(),
        price: 1.5.into(),
        quantity: 10.into(),
    })?;
    act(&mut product, ProductAction::Sell(3.into()))?;
    act(&mut product, ProductAction::Restock(5.into()))?;
    if let Err(e) = act(&mut product, ProductAction::Sell(Value::from("many"))) {
        error!(error = %e, kind = ?e.kind(), "Sale rejected");
    }
    println!("{product} total_cost={}", product.total_cost());
    drop(entered);

    let sales = NumericSummary::new(vec![10, 20, 30], "Sales", "USD")?;
    println!("{sales}: {}", sales.report());

    let fruits = CategorySummary::new(["Apple", "Banana", "Apple", "Orange"], "Fruits")?;
    println!(
        "{fruits}: top={:?} unique={} apple={}",
        fruits.most_common(2),
        fruits.unique_count(),
        fruits.proportion("Apple")
    );

    let shelf: Vec<Box<dyn Media>> = vec![
        Box::new(MediaItem::new("1984", "George Orwell")),
        Box::new(PhysicalMediaItem::new("The Master and Margarita", "Bulgakov", 480)?),
        Box::new(AudioMediaItem::new("Dune", "Frank Herbert", 21.5)?),
    ];
    for item in &shelf {
        println!("{item}");
        println!("{}", item.repr());
    }

    println!("{}", Calculator::add(5, 6)?);
    println!("{}", Calculator::mul(5, 6)?);

    info!("Demo completed successfully");
    Ok(())
}
