use crowdforge::dto::{ContributionDto, ContributionStatus};
use serde_json::Value;

/// Config pointing at hostnames that only the stub transport answers.
pub const TEST_CONFIG_TOML: &str = r#"
[data_api]
hostname = "https://api.example.tld"

[registry]
gateway_url = "https://gw.example.tld"
contract_address = "0x0123abc"
"#;

/// The canned catalogue: four contributions, with "1" expecting the
/// contributor stored on-chain as `0x26`.
#[must_use]
pub fn contributions() -> Vec<ContributionDto> {
    vec![
        ContributionDto {
            id: "1".to_string(),
            title: "Implement the onboarding flow".to_string(),
            status: ContributionStatus::Open,
            contributor_id: Some("0x26".to_string()),
        },
        ContributionDto {
            id: "2".to_string(),
            title: "Harden the indexer".to_string(),
            status: ContributionStatus::Open,
            contributor_id: Some("0x1a4".to_string()),
        },
        ContributionDto {
            id: "3".to_string(),
            title: "Write the governance docs".to_string(),
            status: ContributionStatus::Assigned,
            contributor_id: None,
        },
        ContributionDto {
            id: "4".to_string(),
            title: "Profile the matching engine".to_string(),
            status: ContributionStatus::Completed,
            contributor_id: None,
        },
    ]
}

/// The catalogue as the data API would serialize it.
#[must_use]
pub fn contributions_json() -> Value {
    serde_json::to_value(contributions()).expect("fixtures serialize")
}
