// Copyright 2026 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Authorization boundary for store mutation.

use core::fmt;

use crate::person::Person;
use crate::relation::{Relation, RelationError, RelationKind};
use crate::store::FamilyStore;

/// Capability query exposed by the host's authentication layer.
///
/// This crate never authenticates anyone; hosts implement this against
/// whatever session mechanism they have and hand it to [`Editor`].
pub trait AccessPolicy {
    /// Whether the current session may mutate the store.
    fn is_admin(&self) -> bool;
}

/// Rejection reasons for gated mutations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditError {
    /// The policy denied mutation. No state was changed.
    PermissionDenied,
    /// The mutation was permitted but structurally invalid.
    Relation(RelationError),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied => f.write_str("permission denied"),
            Self::Relation(err) => err.fmt(f),
        }
    }
}

impl From<RelationError> for EditError {
    fn from(err: RelationError) -> Self {
        Self::Relation(err)
    }
}

impl core::error::Error for EditError {}

/// A mutation handle that consults an [`AccessPolicy`] before every write.
///
/// A non-admin attempt fails with [`EditError::PermissionDenied`] and leaves
/// the store untouched; it is never a silent no-op. Read access goes through
/// the store itself and is not gated.
#[derive(Debug)]
pub struct Editor<'a, P: AccessPolicy + ?Sized> {
    store: &'a mut FamilyStore,
    policy: &'a P,
}

impl<'a, P: AccessPolicy + ?Sized> Editor<'a, P> {
    /// Wraps a store with a policy.
    pub fn new(store: &'a mut FamilyStore, policy: &'a P) -> Self {
        Self { store, policy }
    }

    fn authorize(&self) -> Result<(), EditError> {
        if self.policy.is_admin() {
            Ok(())
        } else {
            Err(EditError::PermissionDenied)
        }
    }

    /// Gated [`FamilyStore::upsert_person`].
    pub fn upsert_person(&mut self, person: Person) -> Result<(), EditError> {
        self.authorize()?;
        self.store.upsert_person(person);
        Ok(())
    }

    /// Gated [`FamilyStore::remove_person`].
    pub fn remove_person(&mut self, id: &str) -> Result<bool, EditError> {
        self.authorize()?;
        Ok(self.store.remove_person(id))
    }

    /// Gated [`FamilyStore::add_relation`].
    pub fn add_relation(&mut self, relation: Relation) -> Result<(), EditError> {
        self.authorize()?;
        self.store.add_relation(relation)?;
        Ok(())
    }

    /// Gated [`FamilyStore::remove_relation`].
    pub fn remove_relation(
        &mut self,
        a: &str,
        b: &str,
        kind: RelationKind,
    ) -> Result<bool, EditError> {
        self.authorize()?;
        Ok(self.store.remove_relation(a, b, kind))
    }
}
