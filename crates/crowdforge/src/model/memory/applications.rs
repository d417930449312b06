use crate::ids::{AccountAddress, ContributionId};
use std::{cell::RefCell, collections::BTreeMap};

thread_local! {
    static HAS_APPLIED: RefCell<BTreeMap<(ContributionId, AccountAddress), bool>> =
        const { RefCell::new(BTreeMap::new()) };
}

///
/// HasAppliedCache
///
/// Memo table for the existence check, keyed by (contribution, account).
/// Only computed verdicts are stored; a degraded "could not determine"
/// answer is never memoized, so a later query retries the contract call.
///

pub(crate) struct HasAppliedCache;

impl HasAppliedCache {
    #[must_use]
    pub(crate) fn get(contribution_id: &ContributionId, address: &AccountAddress) -> Option<bool> {
        HAS_APPLIED
            .with_borrow(|map| map.get(&(contribution_id.clone(), address.clone())).copied())
    }

    pub(crate) fn insert(contribution_id: ContributionId, address: AccountAddress, applied: bool) {
        HAS_APPLIED.with_borrow_mut(|map| {
            map.insert((contribution_id, address), applied);
        });
    }

    /// Drop every memoized verdict for one contribution, e.g. after a new
    /// application was submitted for it.
    pub(crate) fn invalidate(contribution_id: &ContributionId) {
        HAS_APPLIED.with_borrow_mut(|map| {
            map.retain(|(id, _), _| id != contribution_id);
        });
    }

    #[cfg(test)]
    pub(crate) fn clear() {
        HAS_APPLIED.with_borrow_mut(BTreeMap::clear);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memoizes_per_pair() {
        HasAppliedCache::clear();

        let c1: ContributionId = "1".into();
        let alice: AccountAddress = "0xa".into();
        let bob: AccountAddress = "0xb".into();

        HasAppliedCache::insert(c1.clone(), alice.clone(), true);

        assert_eq!(HasAppliedCache::get(&c1, &alice), Some(true));
        assert_eq!(HasAppliedCache::get(&c1, &bob), None);
    }

    #[test]
    fn invalidate_scopes_to_one_contribution() {
        HasAppliedCache::clear();

        let c1: ContributionId = "1".into();
        let c2: ContributionId = "2".into();
        let alice: AccountAddress = "0xa".into();

        HasAppliedCache::insert(c1.clone(), alice.clone(), true);
        HasAppliedCache::insert(c2.clone(), alice.clone(), false);

        HasAppliedCache::invalidate(&c1);

        assert_eq!(HasAppliedCache::get(&c1, &alice), None);
        assert_eq!(HasAppliedCache::get(&c2, &alice), Some(false));
    }
}
