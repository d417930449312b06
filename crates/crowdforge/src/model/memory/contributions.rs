use crate::dto::ContributionDto;
use std::cell::RefCell;

thread_local! {
    static CONTRIBUTIONS: RefCell<CacheData> = RefCell::new(CacheData::default());
}

///
/// CacheData
///
/// The most recent successful contribution list plus a fill generation.
/// The generation is bumped whenever a new fetch starts or the cache is
/// invalidated; a fill carrying a stale token is discarded, so an old
/// in-flight result can never overwrite a newer one.
///

#[derive(Debug, Default)]
struct CacheData {
    generation: u64,
    list: Option<Vec<ContributionDto>>,
}

///
/// FetchToken
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FetchToken(u64);

///
/// ContributionCache
///
/// Append-only, request-scoped memo of the contribution catalogue.
/// Populated lazily by the list query; never proactively evicted — only
/// `invalidate` (a full re-fetch request) clears it.
///

pub(crate) struct ContributionCache;

impl ContributionCache {
    /// Snapshot of the cached list, if one has been filled.
    #[must_use]
    pub(crate) fn list() -> Option<Vec<ContributionDto>> {
        CONTRIBUTIONS.with_borrow(|data| data.list.clone())
    }

    /// Derived single-item lookup; never fetches.
    #[must_use]
    pub(crate) fn get(id: &str) -> Option<ContributionDto> {
        CONTRIBUTIONS.with_borrow(|data| {
            data.list
                .as_ref()
                .and_then(|list| list.iter().find(|c| c.id == id).cloned())
        })
    }

    #[must_use]
    pub(crate) fn is_filled() -> bool {
        CONTRIBUTIONS.with_borrow(|data| data.list.is_some())
    }

    /// Start a fetch: bumps the generation and hands out the token the
    /// eventual fill must present.
    #[must_use]
    pub(crate) fn begin_fetch() -> FetchToken {
        CONTRIBUTIONS.with_borrow_mut(|data| {
            data.generation += 1;

            FetchToken(data.generation)
        })
    }

    /// Adopt a fetched list. Returns false (and leaves the cache untouched)
    /// when the token is stale.
    pub(crate) fn fill(token: FetchToken, list: Vec<ContributionDto>) -> bool {
        CONTRIBUTIONS.with_borrow_mut(|data| {
            if token.0 != data.generation {
                return false;
            }

            data.list = Some(list);

            true
        })
    }

    /// Explicit invalidation hook: drop the list and outdate any in-flight
    /// fill.
    pub(crate) fn invalidate() {
        CONTRIBUTIONS.with_borrow_mut(|data| {
            data.generation += 1;
            data.list = None;
        });
    }

    /// Reset to the pristine state (tests only).
    #[cfg(test)]
    pub(crate) fn clear() {
        CONTRIBUTIONS.with_borrow_mut(|data| *data = CacheData::default());
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::ContributionStatus;

    fn contribution(id: &str) -> ContributionDto {
        ContributionDto {
            id: id.to_string(),
            title: format!("contribution {id}"),
            status: ContributionStatus::Open,
            contributor_id: None,
        }
    }

    #[test]
    fn fill_then_lookup() {
        ContributionCache::clear();

        let token = ContributionCache::begin_fetch();
        assert!(ContributionCache::fill(token, vec![contribution("1"), contribution("2")]));

        assert!(ContributionCache::is_filled());
        assert_eq!(ContributionCache::get("2").unwrap().id, "2");
        assert!(ContributionCache::get("9").is_none());
    }

    #[test]
    fn stale_token_is_discarded() {
        ContributionCache::clear();

        let stale = ContributionCache::begin_fetch();
        let fresh = ContributionCache::begin_fetch();

        assert!(!ContributionCache::fill(stale, vec![contribution("old")]));
        assert!(!ContributionCache::is_filled());

        assert!(ContributionCache::fill(fresh, vec![contribution("new")]));
        assert_eq!(ContributionCache::get("new").unwrap().id, "new");
    }

    #[test]
    fn invalidate_outdates_inflight_fills() {
        ContributionCache::clear();

        let token = ContributionCache::begin_fetch();
        ContributionCache::invalidate();

        assert!(!ContributionCache::fill(token, vec![contribution("1")]));
        assert!(ContributionCache::list().is_none());
    }
}
