use crate::dto::prelude::*;

///
/// ContributionDto
///
/// One unit of work open for application, as listed by
/// `GET /contributions`. Immutable once cached; a changed catalogue only
/// becomes visible after an explicit cache invalidation and re-fetch.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ContributionDto {
    pub id: String,
    pub title: String,
    pub status: ContributionStatus,

    /// Expected contributor for this contribution, `0x` hex, when one is
    /// recorded on-chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributor_id: Option<String>,
}

///
/// ContributionStatus
///
/// Application-eligibility state of a contribution.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionStatus {
    Open,
    Assigned,
    Completed,
    Abandoned,
}

impl ContributionStatus {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
