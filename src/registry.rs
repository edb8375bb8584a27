//! Keyed store of [`LambdaRuleRegistration`]s.
//!
//! Hosts can build isolated [`LambdaRuleRegistry`] instances, or share the
//! process-wide one through [`global`] and [`with_global`]. The shared
//! registry is created on first use and lives until the process exits.

use std::sync::{Arc, Mutex, MutexGuard};

use lazy_static::lazy_static;

use crate::lambda::{LambdaOutcome, LambdaRuleRegistration};
use crate::{EvaluationError, PropertyAccess, RegistrationError};

/// Registrations keyed by a caller-chosen unique key, kept in insertion
/// order.
#[derive(Debug, Default)]
pub struct LambdaRuleRegistry {
    entries: Vec<(String, Arc<LambdaRuleRegistration>)>,
}

/// An owned, ordered snapshot of a registry's entries.
///
/// Registering or unregistering after the snapshot was taken does not
/// change it.
#[derive(Debug, Clone, Default)]
pub struct Registrations {
    entries: Vec<(String, Arc<LambdaRuleRegistration>)>,
}

/// Result of applying one registration in
/// [`LambdaRuleRegistry::apply_all`].
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaReport {
    pub key: String,
    pub outcome: Result<LambdaOutcome, EvaluationError>,
}

impl LambdaRuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and cache the registration's rule, then store it under `key`.
    ///
    /// On error the registry is unchanged; in particular an existing entry
    /// under `key` stays as it was.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] if `key` is taken, the registration has
    /// no match callback, or its rule text does not parse.
    pub fn register(
        &mut self,
        key: &str,
        mut registration: LambdaRuleRegistration,
    ) -> Result<(), RegistrationError> {
        let result = if self.position(key).is_some() {
            Err(RegistrationError::DuplicateKey {
                key: key.to_owned(),
            })
        } else {
            registration.compile(key)
        };

        if let Err(error) = &result {
            tracing::warn!(key, %error, "lambda rule registration rejected");
            return result;
        }
        self.entries.push((key.to_owned(), Arc::new(registration)));
        Ok(())
    }

    /// Remove the entry under `key`, returning it. Absent keys are ignored.
    pub fn unregister(&mut self, key: &str) -> Option<Arc<LambdaRuleRegistration>> {
        let index = self.position(key)?;
        Some(self.entries.remove(index).1)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<LambdaRuleRegistration>> {
        self.position(key).map(|i| Arc::clone(&self.entries[i].1))
    }

    /// Snapshot the current entries in insertion order.
    #[must_use]
    pub fn enumerate(&self) -> Registrations {
        Registrations {
            entries: self.entries.clone(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every registration for `signal`, in insertion order.
    ///
    /// Each registration reads through its own access if it was given one,
    /// otherwise through `access`. A failing registration does not stop the
    /// others.
    pub fn apply_all(&self, signal: &str, access: &dyn PropertyAccess) -> Vec<LambdaReport> {
        self.enumerate().apply_all(signal, access)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl Registrations {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LambdaRuleRegistration)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r.as_ref()))
    }

    /// See [`LambdaRuleRegistry::apply_all`].
    pub fn apply_all(&self, signal: &str, access: &dyn PropertyAccess) -> Vec<LambdaReport> {
        let mut reports = Vec::new();
        for (key, registration) in self.iter() {
            let Some(rule) = registration.rule() else {
                continue;
            };
            let outcome = match registration.access() {
                Some(own) => rule.apply(signal, own.as_ref()),
                None => rule.apply(signal, access),
            };
            if let Err(error) = &outcome {
                tracing::warn!(key, %error, "lambda rule condition could not be evaluated");
            }
            reports.push(LambdaReport {
                key: key.to_owned(),
                outcome,
            });
        }
        reports
    }
}

impl IntoIterator for Registrations {
    type Item = (String, Arc<LambdaRuleRegistration>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

lazy_static! {
    static ref GLOBAL: Mutex<LambdaRuleRegistry> = {
        tracing::debug!("process-wide lambda rule registry created");
        Mutex::new(LambdaRuleRegistry::new())
    };
}

/// Lock the process-wide registry, creating it on first use.
///
/// Returns `None` if the registry is unavailable because a previous holder
/// panicked; callers should carry on without it.
pub fn global() -> Option<MutexGuard<'static, LambdaRuleRegistry>> {
    match GLOBAL.lock() {
        Ok(guard) => Some(guard),
        Err(_) => {
            tracing::warn!("process-wide lambda rule registry is unavailable");
            None
        }
    }
}

/// Run `f` with the process-wide registry locked.
///
/// The lock is held until `f` returns, so `f` must not run registration
/// callbacks or call back into [`with_global`]. Walk the registry with
/// [`apply_all_global`] instead.
///
/// Returns `None` when the registry is unavailable; see [`global`].
pub fn with_global<R>(f: impl FnOnce(&mut LambdaRuleRegistry) -> R) -> Option<R> {
    global().map(|mut registry| f(&mut registry))
}

/// Apply every registration in the process-wide registry for `signal`.
///
/// Entries are snapshotted and the lock released before any callback runs,
/// so callbacks may register or unregister through [`with_global`].
/// Returns `None` when the registry is unavailable; see [`global`].
pub fn apply_all_global(signal: &str, access: &dyn PropertyAccess) -> Option<Vec<LambdaReport>> {
    let snapshot = global()?.enumerate();
    Some(snapshot.apply_all(signal, access))
}
