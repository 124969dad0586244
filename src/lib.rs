//! # OOP Exercises
//!
//! > **Small validated records, one concept each.**
//!
//! Every type in this crate is independent of the others. Each one shows a single
//! technique: validating constructors, private fields behind accessors, mutators
//! that re-validate their arguments, associated functions, and composition of a
//! shared base record instead of implementation inheritance.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Two-tier validation
//! Raw arguments arrive as [`Value`](validation::Value). Each field is first checked
//! for its kind (text, integer, number), then for its range (non-empty, `>= 0`,
//! `> 0`, ...). The two tiers map to [`FailureKind::Type`](validation::FailureKind)
//! and [`FailureKind::Range`](validation::FailureKind). Withdrawals and sales add a
//! third, [`FailureKind::InsufficientResource`](validation::FailureKind).
//!
//! ### No partial mutation
//! A method that fails leaves its receiver exactly as it was. Every argument is
//! validated before the first field is written.
//!
//! ### Privacy
//! All fields are private. Reads go through accessors, writes through
//! validating methods; the compiler enforces it.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Checks ([`validation`])
//! - **Key items**: [`Value`](validation::Value), [`Number`](validation::Number),
//!   [`ValidationError`](validation::ValidationError).
//!
//! ### 2. The Records ([`model`])
//! - Value objects: [`Glass`](model::Glass), [`Person`](model::Person),
//!   [`Resident`](model::Resident), [`BankAccount`](model::BankAccount),
//!   [`Product`](model::Product).
//! - Statistics: [`NumericSummary`](model::NumericSummary),
//!   [`CategorySummary`](model::CategorySummary).
//! - Media: [`MediaItem`](model::MediaItem), [`PhysicalMediaItem`](model::PhysicalMediaItem),
//!   [`AudioMediaItem`](model::AudioMediaItem) behind the [`Media`](model::Media) trait.
//!
//! ### 3. The Contract ([`framework`])
//! - [`Entity`](framework::Entity) ties a record to its create/update payloads and
//!   actions; [`create`](framework::create) and [`act`](framework::act) dispatch with tracing.
//! - Implementations live in [`account`], [`product`] and [`person`].
//!
//! ### 4. Odds and ends
//! - [`calculator`]: associated functions with operand checks.
//! - [`runtime`]: tracing setup for the demo binary.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod account;
pub mod calculator;
pub mod framework;
pub mod model;
pub mod person;
pub mod product;
pub mod runtime;
pub mod validation;
