use crate::{
    Error,
    config::Config,
    dto::{ContributionApplicationDto, CreateApplicationRequest},
    ops::prelude::*,
};
use std::{
    collections::BTreeSet,
    sync::{Arc, Mutex, PoisonError},
};

///
/// ApplicationRepository
///
/// "Has this actor already submitted an application for this contribution?"
/// and the reads/writes around it. Implementations are chosen by the
/// composition root and injected into consuming workflows — never picked
/// from ambient environment state.
///

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Applications recorded for a contribution, optionally narrowed to one
    /// contributor.
    async fn list_from_contribution(
        &self,
        contribution_id: &ContributionId,
        contributor_id: Option<ContributorId>,
    ) -> Result<Vec<ContributionApplicationDto>, OpsError>;

    /// Record a new application. True means the backend accepted it.
    async fn create(
        &self,
        contribution_id: &ContributionId,
        contributor_id: ContributorId,
    ) -> Result<bool, OpsError>;

    async fn has_contributor_applied_to_contribution(
        &self,
        contribution_id: &ContributionId,
        contributor_id: ContributorId,
    ) -> Result<bool, OpsError> {
        let applications = self
            .list_from_contribution(contribution_id, Some(contributor_id))
            .await?;

        Ok(!applications.is_empty())
    }
}

///
/// RemoteApplicationRepository
///
/// Data-API-backed implementation. Contributor ids travel as `0x` hex.
/// A list reply other than 200 is treated as "no applications"; `create`
/// succeeds only on 204.
///

pub struct RemoteApplicationRepository {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl RemoteApplicationRepository {
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Build from the active process config.
    pub fn from_config(transport: Arc<dyn HttpTransport>) -> Result<Self, Error> {
        let config = Config::get()?;

        Ok(Self::new(transport, config.data_api.base_url()))
    }

    fn applications_url(&self, contribution_id: &ContributionId) -> String {
        format!(
            "{}/contributions/{}/applications",
            self.base_url.trim_end_matches('/'),
            contribution_id.as_str()
        )
    }
}

#[async_trait]
impl ApplicationRepository for RemoteApplicationRepository {
    async fn list_from_contribution(
        &self,
        contribution_id: &ContributionId,
        contributor_id: Option<ContributorId>,
    ) -> Result<Vec<ContributionApplicationDto>, OpsError> {
        let mut url = self.applications_url(contribution_id);
        if let Some(contributor_id) = contributor_id {
            url = format!("{url}?contributor_id={}", contributor_id.to_hex());
        }

        let response = self.transport.get(&url).await?;
        if response.status != 200 {
            return Ok(Vec::new());
        }

        let applications: Vec<ContributionApplicationDto> = response.json()?;

        Ok(applications)
    }

    async fn create(
        &self,
        contribution_id: &ContributionId,
        contributor_id: ContributorId,
    ) -> Result<bool, OpsError> {
        let request = CreateApplicationRequest {
            contributor_id: contributor_id.to_hex(),
        };
        let body = serde_json::to_value(&request).map_err(crate::infra::InfraError::from)?;

        let response = self
            .transport
            .post_json(&self.applications_url(contribution_id), &body)
            .await?;

        Ok(response.status == 204)
    }
}

///
/// InMemoryApplicationRepository
///
/// Same contract over a local store; keeps test suites and offline
/// composition roots off the network. Each instance owns its state.
///

#[derive(Debug, Default)]
pub struct InMemoryApplicationRepository {
    applications: Mutex<BTreeSet<(ContributionId, ContributorId)>>,
}

impl InMemoryApplicationRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_applications(
        applications: impl IntoIterator<Item = (ContributionId, ContributorId)>,
    ) -> Self {
        let repo = Self::new();
        for (contribution_id, contributor_id) in applications {
            repo.seed(contribution_id, contributor_id);
        }

        repo
    }

    /// Record an application without going through `create`.
    pub fn seed(&self, contribution_id: ContributionId, contributor_id: ContributorId) {
        self.applications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((contribution_id, contributor_id));
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn list_from_contribution(
        &self,
        contribution_id: &ContributionId,
        contributor_id: Option<ContributorId>,
    ) -> Result<Vec<ContributionApplicationDto>, OpsError> {
        let applications = self
            .applications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(id, applicant)| {
                id == contribution_id && contributor_id.is_none_or(|c| c == *applicant)
            })
            .map(|(_, applicant)| ContributionApplicationDto {
                contributor_id: applicant.to_hex(),
            })
            .collect();

        Ok(applications)
    }

    async fn create(
        &self,
        contribution_id: &ContributionId,
        contributor_id: ContributorId,
    ) -> Result<bool, OpsError> {
        self.seed(contribution_id.clone(), contributor_id);

        Ok(true)
    }
}

///
/// TESTS
///
