use crate::dto::prelude::*;

///
/// ContributionApplicationDto
///
/// A contributor's recorded intent to work on a contribution, as returned
/// by `GET /contributions/{id}/applications`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ContributionApplicationDto {
    /// `0x` hex rendering of the applicant's contributor id.
    pub contributor_id: String,
}

///
/// CreateApplicationRequest
///
/// Body of `POST /contributions/{id}/applications`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CreateApplicationRequest {
    pub contributor_id: String,
}
