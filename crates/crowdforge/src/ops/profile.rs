use crate::{
    domain::{DomainError, contributor},
    infra::gateway::ProfileRegistry,
    ops::prelude::*,
};

///
/// ProfileRegistryOps
///

pub struct ProfileRegistryOps;

impl ProfileRegistryOps {
    /// Resolve the on-chain contributor id of an account: one registry
    /// read, then exact reconstruction of the split 128-bit value.
    pub async fn contributor_id_of(
        registry: &dyn ProfileRegistry,
        address: &AccountAddress,
    ) -> Result<ContributorId, OpsError> {
        let records = registry.get_user_information(address).await?;

        let record = records
            .first()
            .ok_or_else(|| OpsError::MissingUserRecord(address.to_string()))?;

        let contributor_id =
            contributor::from_parts(&record.contributor_id).map_err(DomainError::from)?;

        Ok(contributor_id)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crowdforge_testkit::registry::ScriptedRegistry;

    #[tokio::test]
    async fn resolves_and_reconstructs() {
        let registry = ScriptedRegistry::new();
        registry.enqueue_parts("0x26", "0x0");

        let address = AccountAddress::new("0x123456789");
        let id = ProfileRegistryOps::contributor_id_of(&registry, &address)
            .await
            .unwrap();

        assert_eq!(id, ContributorId::new(0x26));
        assert_eq!(registry.calls(), vec![address]);
    }

    #[tokio::test]
    async fn missing_record_is_an_error() {
        let registry = ScriptedRegistry::new();
        registry.enqueue(Vec::new());

        let err = ProfileRegistryOps::contributor_id_of(&registry, &AccountAddress::new("0x1"))
            .await
            .unwrap_err();

        assert!(matches!(err, OpsError::MissingUserRecord(_)));
    }

    #[tokio::test]
    async fn malformed_parts_surface_as_domain_errors() {
        let registry = ScriptedRegistry::new();
        registry.enqueue_parts("0xnope", "0x0");

        let err = ProfileRegistryOps::contributor_id_of(&registry, &AccountAddress::new("0x1"))
            .await
            .unwrap_err();

        assert!(matches!(err, OpsError::Domain(_)));
    }
}
