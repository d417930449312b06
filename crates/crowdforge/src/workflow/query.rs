use crate::{
    dto::ContributionDto,
    infra::http::HttpTransport,
    model::memory::contributions::ContributionCache,
    ops::contribution::ContributionOps,
    workflow::prelude::*,
};

///
/// ContributionQuery
///
/// Read-through view over the contribution catalogue. The first `list`
/// fetches and caches; every later `list` or `get` within the session is
/// answered from the cache until `invalidate` is called.
///

pub struct ContributionQuery;

impl ContributionQuery {
    /// The contribution catalogue, cached after the first successful fetch.
    pub async fn list(transport: &dyn HttpTransport) -> Result<Vec<ContributionDto>, Error> {
        if let Some(list) = ContributionCache::list() {
            return Ok(list);
        }

        let token = ContributionCache::begin_fetch();
        let list = ContributionOps::list(transport)
            .await
            .map_err(WorkflowError::Ops)?;

        if ContributionCache::fill(token, list.clone()) {
            log!(Topic::Cache, Info, "contribution cache filled, {} entries", list.len());
        } else {
            // a newer fetch or an invalidation raced us; its result wins
            log!(Topic::Cache, Debug, "discarded stale contribution fetch");
        }

        Ok(list)
    }

    /// Single contribution by id. Fills the cache on first use, then never
    /// touches the network again.
    pub async fn get(
        transport: &dyn HttpTransport,
        id: &ContributionId,
    ) -> Result<Option<ContributionDto>, Error> {
        if !ContributionCache::is_filled() {
            Self::list(transport).await?;
        }

        Ok(ContributionCache::get(id.as_str()))
    }

    /// Cache-only lookup; `None` when the id is unknown or nothing has been
    /// fetched yet.
    #[must_use]
    pub fn get_cached(id: &ContributionId) -> Option<ContributionDto> {
        ContributionCache::get(id.as_str())
    }

    /// Drop the cached catalogue; the next query re-fetches.
    pub fn invalidate() {
        ContributionCache::invalidate();
        log!(Topic::Cache, Info, "contribution cache invalidated");
    }
}

///
/// TESTS
///
