//! Ownership gate.
//!
//! Flat ownership model: a reservation can be read or deleted only by its
//! owner. There are no roles and no override. Callers that fail this gate
//! receive the same not-found outcome as a missing record, so the gate's
//! decision never leaks whether the resource exists.

use uuid::Uuid;

/// Allow access iff the caller is the resource owner.
pub fn owns(resource_owner: Uuid, caller: Uuid) -> bool {
    resource_owner == caller
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_is_allowed() {
        let id = Uuid::new_v4();
        assert!(owns(id, id));
    }

    #[test]
    fn non_owner_is_denied() {
        assert!(!owns(Uuid::new_v4(), Uuid::new_v4()));
    }
}
