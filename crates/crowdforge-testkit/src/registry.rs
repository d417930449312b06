use async_trait::async_trait;
use crowdforge::{
    dto::{Uint128PartsDto, UserInformationDto},
    ids::AccountAddress,
    infra::{InfraError, gateway::ProfileRegistry},
};
use std::{
    collections::VecDeque,
    sync::{Mutex, PoisonError},
};

///
/// Reply
///

#[derive(Clone, Debug)]
enum Reply {
    Records(Vec<UserInformationDto>),
    Failure(String),
}

///
/// ScriptedRegistry
///
/// A profile registry that replays queued replies and records every call.
/// An exhausted queue is a transport error, which doubles as the "registry
/// is down" script.
///

#[derive(Debug, Default)]
pub struct ScriptedRegistry {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<AccountAddress>>,
}

impl ScriptedRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw record sequence for the next call.
    pub fn enqueue(&self, records: Vec<UserInformationDto>) {
        self.push(Reply::Records(records));
    }

    /// Queue one record holding the given `(low, high)` felt pair.
    pub fn enqueue_parts(&self, low: &str, high: &str) {
        self.push(Reply::Records(vec![UserInformationDto {
            contributor_id: Uint128PartsDto::new(low, high),
        }]));
    }

    /// Queue a failed call.
    pub fn enqueue_failure(&self, message: impl Into<String>) {
        self.push(Reply::Failure(message.into()));
    }

    /// Addresses this registry was asked about, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<AccountAddress> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn push(&self, reply: Reply) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(reply);
    }
}

#[async_trait]
impl ProfileRegistry for ScriptedRegistry {
    async fn get_user_information(
        &self,
        address: &AccountAddress,
    ) -> Result<Vec<UserInformationDto>, InfraError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(address.clone());

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match reply {
            Some(Reply::Records(records)) => Ok(records),
            Some(Reply::Failure(message)) => Err(InfraError::Transport(message)),
            None => Err(InfraError::Transport(
                "scripted registry exhausted".to_string(),
            )),
        }
    }
}
