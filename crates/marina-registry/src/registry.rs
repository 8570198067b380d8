//! Registry state and operations.
//!
//! # Invariants
//!
//! - `boats` is sorted by [`compare_names`]; equal names keep insertion order
//! - `boats.len() <= max_boats`
//! - Failed operations do not mutate any record

use std::cmp::Ordering;
use std::path::Path;

use marina_storage::{ReadOutcome, SkippedLine, StorageError, load_file, save_file};
use marina_types::{Boat, MAX_BOATS, Rates, compare_names, names_equal};

use crate::RegistryError;

/// How payments of zero or less are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentPolicy {
    /// Accept them and log a warning.
    #[default]
    Lenient,
    /// Reject them with [`RegistryError::NonPositivePayment`].
    RejectNonPositive,
}

/// Summary of a [`Registry::load`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Boats now held by the registry.
    pub loaded: usize,
    /// Lines that could not be decoded.
    pub skipped: Vec<SkippedLine>,
    /// Valid records left out because the registry was full.
    pub dropped: usize,
    /// Set when the source could not be read, or stopped part way. In the
    /// second case the boats read before the failure are kept.
    pub unavailable: Option<StorageError>,
}

/// The marina's boats, sorted by name without regard to case.
#[derive(Debug, Clone)]
pub struct Registry {
    boats: Vec<Boat>,
    max_boats: usize,
    rates: Rates,
    payment_policy: PaymentPolicy,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates an empty registry holding up to [`MAX_BOATS`] boats at the default rates.
    pub fn new() -> Self {
        Self {
            boats: Vec::new(),
            max_boats: MAX_BOATS,
            rates: Rates::default(),
            payment_policy: PaymentPolicy::default(),
        }
    }

    /// Sets the maximum number of boats.
    pub fn with_max_boats(mut self, max_boats: usize) -> Self {
        self.max_boats = max_boats;
        self
    }

    /// Sets the monthly billing rates.
    pub fn with_rates(mut self, rates: Rates) -> Self {
        self.rates = rates;
        self
    }

    /// Sets how zero or negative payments are handled.
    pub fn with_payment_policy(mut self, policy: PaymentPolicy) -> Self {
        self.payment_policy = policy;
        self
    }

    // ------------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------------

    /// Replaces the contents with the boats stored at `path`.
    ///
    /// Never fails: a source that cannot be opened leaves the registry empty,
    /// one that fails part way keeps what was read. Either is reported through
    /// [`LoadReport::unavailable`].
    pub fn load(mut self, path: &Path) -> (Self, LoadReport) {
        self.boats.clear();

        let outcome = match load_file(path) {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "starting with an empty registry");
                let report = LoadReport {
                    unavailable: Some(error),
                    ..LoadReport::default()
                };
                return (self, report);
            }
        };

        let report = self.fill(outcome);

        tracing::info!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped.len(),
            dropped = report.dropped,
            "loaded boat registry"
        );

        (self, report)
    }

    /// Takes records in source order up to capacity, then sorts once.
    fn fill(&mut self, outcome: ReadOutcome) -> LoadReport {
        let ReadOutcome {
            mut boats,
            skipped,
            interrupted,
        } = outcome;

        let dropped = boats.len().saturating_sub(self.max_boats);
        boats.truncate(self.max_boats);
        if dropped > 0 {
            tracing::warn!(
                dropped,
                max_boats = self.max_boats,
                "registry full, ignoring remaining records"
            );
        }

        boats.iter().for_each(flag_out_of_range);
        boats.sort_by(|a, b| compare_names(&a.name, &b.name));
        self.boats = boats;

        LoadReport {
            loaded: self.boats.len(),
            skipped,
            dropped,
            unavailable: interrupted,
        }
    }

    /// Writes every boat to `path` in registry order, replacing its contents.
    pub fn save(&self, path: &Path) -> Result<usize, StorageError> {
        let written = save_file(path, &self.boats)?;
        tracing::info!(path = %path.display(), written, "saved boat registry");
        Ok(written)
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Returns the position of the first boat whose name matches, ignoring case.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.boats.iter().position(|boat| names_equal(&boat.name, name))
    }

    /// Returns the first boat whose name matches, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Boat> {
        self.find(name).map(|idx| &self.boats[idx])
    }

    /// Iterates over the boats in name order.
    pub fn iter(&self) -> std::slice::Iter<'_, Boat> {
        self.boats.iter()
    }

    pub fn as_slice(&self) -> &[Boat] {
        &self.boats
    }

    pub fn len(&self) -> usize {
        self.boats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    pub fn max_boats(&self) -> usize {
        self.max_boats
    }

    /// True once no further boat can be inserted.
    pub fn is_full(&self) -> bool {
        self.boats.len() >= self.max_boats
    }

    pub fn rates(&self) -> &Rates {
        &self.rates
    }

    /// Sum of every boat's outstanding balance.
    pub fn total_owed(&self) -> f64 {
        self.boats.iter().map(|boat| boat.amount_owed).sum()
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Adds a boat, keeping name order. Returns its position.
    ///
    /// A boat whose name equals existing ones (ignoring case) is placed after them.
    ///
    /// # Errors
    ///
    /// [`RegistryError::CapacityExceeded`] if the registry is full.
    pub fn insert(&mut self, boat: Boat) -> Result<usize, RegistryError> {
        if self.is_full() {
            return Err(RegistryError::CapacityExceeded {
                capacity: self.max_boats,
            });
        }

        flag_out_of_range(&boat);

        let idx = self.boats.partition_point(|existing| {
            compare_names(&existing.name, &boat.name) != Ordering::Greater
        });
        tracing::debug!(name = %boat.name, position = idx, "inserted boat");
        self.boats.insert(idx, boat);
        Ok(idx)
    }

    /// Removes and returns the first boat whose name matches, ignoring case.
    ///
    /// The remaining boats keep their relative order.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if no boat matches.
    pub fn remove(&mut self, name: &str) -> Result<Boat, RegistryError> {
        let idx = self.find(name).ok_or_else(|| not_found(name))?;
        let boat = self.boats.remove(idx);
        tracing::debug!(name = %boat.name, "removed boat");
        Ok(boat)
    }

    /// Adds one month's charge to every boat. Returns the number of boats charged.
    pub fn apply_monthly_charges(&mut self) -> usize {
        let rates = self.rates;
        for boat in &mut self.boats {
            let charge = rates.monthly_charge(boat);
            boat.amount_owed += charge;
        }
        tracing::debug!(boats = self.boats.len(), "applied monthly charges");
        self.boats.len()
    }

    /// Records a payment against the named boat. Returns the new balance.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if no boat matches
    /// - [`RegistryError::Overpayment`] if `amount` exceeds the balance owed
    /// - [`RegistryError::NonPositivePayment`] if `amount <= 0` under
    ///   [`PaymentPolicy::RejectNonPositive`]
    pub fn apply_payment(&mut self, name: &str, amount: f64) -> Result<f64, RegistryError> {
        let idx = self.find(name).ok_or_else(|| not_found(name))?;
        let boat = &mut self.boats[idx];

        if amount > boat.amount_owed {
            return Err(RegistryError::Overpayment {
                amount,
                owed: boat.amount_owed,
            });
        }

        if amount <= 0.0 {
            match self.payment_policy {
                PaymentPolicy::RejectNonPositive => {
                    return Err(RegistryError::NonPositivePayment { amount });
                }
                PaymentPolicy::Lenient => {
                    tracing::warn!(name = %boat.name, amount, "accepting non-positive payment");
                }
            }
        }

        boat.amount_owed -= amount;
        Ok(boat.amount_owed)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Boat;
    type IntoIter = std::slice::Iter<'a, Boat>;

    fn into_iter(self) -> Self::IntoIter {
        self.boats.iter()
    }
}

fn not_found(name: &str) -> RegistryError {
    RegistryError::NotFound {
        name: name.to_string(),
    }
}

fn flag_out_of_range(boat: &Boat) {
    if !boat.location.is_in_range() {
        tracing::warn!(
            name = %boat.name,
            kind = %boat.kind(),
            location = %boat.location,
            "location outside the marina's numbering"
        );
    }
}
