//! Pure data types with validating constructors and mutators.
//!
//! [`BankAccount`], [`Product`], [`Person`] and [`Resident`] also implement the
//! [`Entity`](crate::framework::Entity) trait.

pub mod account;
pub mod category;
pub mod glass;
pub mod media;
pub mod person;
pub mod product;
pub mod summary;

pub use account::*;
pub use category::*;
pub use glass::*;
pub use media::*;
pub use person::*;
pub use product::*;
pub use summary::*;
