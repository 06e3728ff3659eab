//! Cycle detection over dependent links

use std::collections::BTreeSet;

use core_kernel::CustomerId;

/// Returns true if linking `dependent` under `holder` would close a cycle
///
/// `dependents_of` looks up the current dependent list of a customer, or
/// `None` when the customer does not exist. Unknown customers end a path
/// rather than failing the check, since links may legitimately dangle.
pub fn creates_cycle<'a, F>(holder: &CustomerId, dependent: &CustomerId, dependents_of: F) -> bool
where
    F: Fn(&CustomerId) -> Option<&'a [CustomerId]>,
{
    if holder == dependent {
        return true;
    }

    let mut visited = BTreeSet::new();
    let mut pending = vec![dependent];

    while let Some(current) = pending.pop() {
        if !visited.insert(current) {
            continue;
        }
        for next in dependents_of(current).unwrap_or_default() {
            if next == holder {
                return true;
            }
            pending.push(next);
        }
    }
    false
}
