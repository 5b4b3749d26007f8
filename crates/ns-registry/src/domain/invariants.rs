//! Domain invariants for the Name Registry
//!
//! Checked by the engine in debug builds after every transition and by the
//! property tests over arbitrary command sequences.

use super::entities::RegistryEntry;

/// INVARIANT-1: Owner Present
/// An existing entry always has a non-empty owner.
pub fn invariant_owner_present(entry: &RegistryEntry) -> bool {
    !entry.owner.is_empty()
}

/// INVARIANT-2: Monotonic Price
/// A claim sets a positive price; a sale strictly raises it in every
/// denomination the previous price held.
pub fn invariant_price_increase(previous: Option<&RegistryEntry>, next: &RegistryEntry) -> bool {
    match previous {
        None => next.price.is_all_positive(),
        Some(prev) => next.price.dominates(&prev.price),
    }
}

/// INVARIANT-3: Atomicity
/// A rejected command leaves the entry byte-for-byte identical.
pub fn invariant_unchanged(before: Option<&RegistryEntry>, after: Option<&RegistryEntry>) -> bool {
    before == after
}

/// INVARIANT-4: Authorized Mutation
/// SetValue and Delete only succeed for the owner recorded before the command.
pub fn invariant_authorized(before: &RegistryEntry, actor: &shared_types::Address) -> bool {
    before.is_owned_by(actor)
}
