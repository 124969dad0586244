//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The output uses a
//! compact format that hides the crate/module prefix (`with_target(false)`);
//! every event from [`crate::framework`] carries an `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Creation**: `Create` (debug, with the payload), `Created` / `Create failed`
//! - **Updates**: `Update` (debug), `Updated` / `Update failed`
//! - **Actions**: `Action` (debug), `Action ok` / `Action failed`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to the dispatch layer only
//! RUST_LOG=oop_exercises::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a rejected withdrawal shows up as:
//!
//! ```text
//! DEBUG Action entity_type="BankAccount" action=Withdraw(Int(1000))
//! WARN Action failed entity_type="BankAccount" error=Insufficient funds: requested 1000, available 120
//! ```

/// Initializes the tracing subscriber. Call once, from the binary.
///
/// # Panics
/// If a global subscriber is already installed.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
