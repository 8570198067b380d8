//! # marina-registry: The in-memory boat registry
//!
//! [`Registry`] owns every [`Boat`](marina_types::Boat) in the marina and keeps
//! them sorted by name, ignoring case. It enforces the capacity limit, applies
//! monthly charges and records payments. Every fallible operation either
//! succeeds completely or leaves the registry untouched.
//!
//! ```
//! # use marina_registry::Registry;
//! # use marina_types::{Boat, Location};
//! let mut registry = Registry::new();
//! registry.insert(Boat::new("Alice", 40.0, Location::Slip { number: 12 }, 0.0)).unwrap();
//!
//! registry.apply_monthly_charges();
//! assert_eq!(registry.get("alice").unwrap().amount_owed, 500.0);
//!
//! let balance = registry.apply_payment("ALICE", 200.0).unwrap();
//! assert_eq!(balance, 300.0);
//! ```

mod error;
mod registry;

pub use error::RegistryError;
pub use registry::{LoadReport, PaymentPolicy, Registry};
