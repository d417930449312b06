use crate::{
    infra::gateway::ProfileRegistry,
    model::memory::{
        applications::HasAppliedCache, contributions::ContributionCache, session::Session,
    },
    ops::{
        application::ApplicationRepository,
        profile::ProfileRegistryOps,
    },
    workflow::{
        notify::{NotifyOptions, NotifyWorkflow},
        prelude::*,
    },
};

///
/// ApplicationQuery
///

pub struct ApplicationQuery;

impl ApplicationQuery {
    /// Whether the connected account has already applied to a contribution.
    ///
    /// Degrades, never fails: without a wallet connection this is `false`
    /// with no contract call, and any registry failure is logged as a
    /// warning and resolves to `false`. Computed verdicts are memoized per
    /// (contribution, account); degraded ones are not, so a later query
    /// retries the call.
    pub async fn has_applied(
        registry: &dyn ProfileRegistry,
        contribution_id: &ContributionId,
    ) -> bool {
        let Some(address) = Session::account() else {
            return false;
        };

        if let Some(verdict) = HasAppliedCache::get(contribution_id, &address) {
            return verdict;
        }

        match ProfileRegistryOps::contributor_id_of(registry, &address).await {
            Ok(actual) => {
                let verdict = Self::expected_contributor(contribution_id) == Some(actual);
                HasAppliedCache::insert(contribution_id.clone(), address, verdict);

                verdict
            }
            Err(err) => {
                log!(Topic::Contract, Warn, "{err}");

                false
            }
        }
    }

    /// Drop memoized verdicts for one contribution.
    pub fn invalidate(contribution_id: &ContributionId) {
        HasAppliedCache::invalidate(contribution_id);
    }

    // expected contributor of a cached contribution; an absent contribution,
    // absent id, or unparseable id all mean "no expectation"
    fn expected_contributor(contribution_id: &ContributionId) -> Option<ContributorId> {
        let hex = ContributionCache::get(contribution_id.as_str())?.contributor_id?;

        match ContributorId::from_hex(&hex) {
            Ok(id) => Some(id),
            Err(err) => {
                log!(Topic::Cache, Debug, "{err}");

                None
            }
        }
    }
}

///
/// ApplicationWorkflow
///

pub struct ApplicationWorkflow;

impl ApplicationWorkflow {
    /// Submit an application, surfaced through the notification pipeline.
    ///
    /// Resolves `Some(true)` when the backend accepted the application,
    /// `Some(false)` when it rejected it, and `None` when the call itself
    /// failed (the failure is visible only as an error notification). An
    /// accepted application invalidates the memoized existence verdicts
    /// for its contribution.
    pub async fn apply(
        repository: &dyn ApplicationRepository,
        contribution_id: &ContributionId,
        contributor_id: ContributorId,
    ) -> Option<bool> {
        let options = NotifyOptions::new()
            .pending(|| "Submitting your application".to_string())
            .success(|accepted: &bool| {
                if *accepted {
                    "Your application has been submitted".to_string()
                } else {
                    "Your application was not accepted".to_string()
                }
            });

        let accepted =
            NotifyWorkflow::wrap(repository.create(contribution_id, contributor_id), options)
                .await?;

        if accepted {
            log!(
                Topic::Repository,
                Ok,
                "application recorded for contribution {contribution_id}"
            );
            HasAppliedCache::invalidate(contribution_id);
        }

        Some(accepted)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        log::Level,
        model::memory::{log::LogStore, notify::NotificationCenter},
        ops::application::InMemoryApplicationRepository,
    };
    use crowdforge_testkit::{fixtures, registry::ScriptedRegistry};

    const ADDRESS: &str = "0x123456789";

    fn setup() {
        ContributionCache::clear();
        HasAppliedCache::clear();
        NotificationCenter::clear();
        LogStore::clear();
        Session::disconnect();

        // catalogue in cache: contribution "1" expects contributor 0x26
        let token = ContributionCache::begin_fetch();
        assert!(ContributionCache::fill(token, fixtures::contributions()));
    }

    #[tokio::test]
    async fn matches_an_applicant() {
        setup();
        Session::connect(ADDRESS);

        let registry = ScriptedRegistry::new();
        registry.enqueue_parts("0x26", "0x0");

        assert!(ApplicationQuery::has_applied(&registry, &"1".into()).await);
        assert_eq!(registry.calls(), vec![AccountAddress::new(ADDRESS)]);
    }

    #[tokio::test]
    async fn does_not_match_a_non_applicant() {
        setup();
        Session::connect(ADDRESS);

        let registry = ScriptedRegistry::new();
        registry.enqueue_parts("0x24", "0x0");

        assert!(!ApplicationQuery::has_applied(&registry, &"1".into()).await);
        assert_eq!(registry.call_count(), 1);
    }

    #[tokio::test]
    async fn no_session_short_circuits_without_a_call() {
        setup();

        let registry = ScriptedRegistry::new();

        assert!(!ApplicationQuery::has_applied(&registry, &"1".into()).await);
        assert_eq!(registry.call_count(), 0);
    }

    #[tokio::test]
    async fn registry_failure_degrades_to_false_with_one_warning() {
        setup();
        Session::connect(ADDRESS);

        let registry = ScriptedRegistry::new();
        registry.enqueue_failure("contract.call error");

        assert!(!ApplicationQuery::has_applied(&registry, &"1".into()).await);
        assert_eq!(LogStore::count_at(Level::Warn), 1);
    }

    #[tokio::test]
    async fn verdicts_are_memoized_per_pair() {
        setup();
        Session::connect(ADDRESS);

        let registry = ScriptedRegistry::new();
        registry.enqueue_parts("0x26", "0x0");

        assert!(ApplicationQuery::has_applied(&registry, &"1".into()).await);
        assert!(ApplicationQuery::has_applied(&registry, &"1".into()).await);

        // second answer came from the memo table
        assert_eq!(registry.call_count(), 1);

        ApplicationQuery::invalidate(&"1".into());
        registry.enqueue_parts("0x26", "0x0");

        assert!(ApplicationQuery::has_applied(&registry, &"1".into()).await);
        assert_eq!(registry.call_count(), 2);
    }

    #[tokio::test]
    async fn degraded_answers_are_not_memoized() {
        setup();
        Session::connect(ADDRESS);

        let registry = ScriptedRegistry::new();
        registry.enqueue_failure("transient outage");
        registry.enqueue_parts("0x26", "0x0");

        assert!(!ApplicationQuery::has_applied(&registry, &"1".into()).await);

        // the failure was not pinned into the memo table; the retry works
        assert!(ApplicationQuery::has_applied(&registry, &"1".into()).await);
        assert_eq!(registry.call_count(), 2);
    }

    #[tokio::test]
    async fn unknown_contribution_compares_to_nothing() {
        setup();
        Session::connect(ADDRESS);

        let registry = ScriptedRegistry::new();
        registry.enqueue_parts("0x26", "0x0");

        assert!(!ApplicationQuery::has_applied(&registry, &"999".into()).await);
    }

    #[tokio::test]
    async fn apply_notifies_and_invalidates_the_memo() {
        setup();
        Session::connect(ADDRESS);

        // pre-existing negative verdict that must not survive a submit
        HasAppliedCache::insert("1".into(), AccountAddress::new(ADDRESS), false);

        let repository = InMemoryApplicationRepository::new();
        let accepted =
            ApplicationWorkflow::apply(&repository, &"1".into(), ContributorId::new(0x26)).await;

        assert_eq!(accepted, Some(true));
        assert_eq!(
            HasAppliedCache::get(&"1".into(), &AccountAddress::new(ADDRESS)),
            None
        );

        let notifications = NotificationCenter::export();
        assert_eq!(notifications.len(), 1);
        assert_eq!(
            notifications[0].message,
            "Your application has been submitted"
        );
    }
}
