use crate::{config::Config, dto::ContributionDto, ops::prelude::*};

///
/// ContributionOps
///

pub struct ContributionOps;

impl ContributionOps {
    /// Fetch the contribution catalogue from the data API.
    ///
    /// One network call per invocation; no retry, no backoff. Transport
    /// errors and unexpected statuses propagate — the caller owns recovery.
    pub async fn list(transport: &dyn HttpTransport) -> Result<Vec<ContributionDto>, OpsError> {
        let config = Config::get()?;
        let url = format!("{}/contributions", config.data_api.base_url());

        let response = transport.get(&url).await?;
        if response.status != 200 {
            return Err(OpsError::ContributionListStatus(response.status));
        }

        let list: Vec<ContributionDto> = response.json()?;

        Ok(list)
    }
}

///
/// TESTS
///
