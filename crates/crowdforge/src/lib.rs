//! Client-side query layer for the Crowdforge contribution marketplace.
//!
//! The marketplace keeps its catalogue of contributions behind a plain HTTP
//! data API while contributor identity lives in an on-chain profile registry.
//! This crate composes the two into derived facts a front end can ask for
//! directly, most importantly "has the connected account already applied to
//! this contribution?".
//!
//! ## Layering
//!
//! Crowdforge keeps consumer-facing code thin and side effects centralized:
//! - `workflow/` implements the derived-state queries and the notification
//!   wrapper consumers call.
//! - `ops/` provides mechanical, reusable side-effecting operations
//!   (data-API calls, the repository seam, the registry read).
//! - `infra/` owns raw transport: the HTTP seam and the gateway call.
//! - `model/` owns in-process stores: caches, session, notifications, log.
//! - `domain/` owns pure decisions (split contributor-id reconstruction).
//! - `dto/` holds the wire types shared with the data API and the contract.
//!
//! The default flow is: consumer → workflow → ops → model / infra.
//!
//! Backing implementations are injected, never selected from ambient
//! environment state: construct a repository and registry once at
//! composition time and pass them into the workflows that need them.

pub mod domain;
pub mod dto;
pub mod error;
pub mod ids;
pub mod infra;
pub mod log;
pub mod ops;
pub mod workflow;

pub(crate) mod config;
pub(crate) mod model;

pub use error::Error;
pub use model::memory::session::Session;

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// init and validate config
// called from here as the config internals stay pub(crate)
pub fn init_config(toml: &str) -> Result<(), String> {
    config::Config::init_from_toml(toml)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

/// Common imports for consumers.
pub mod prelude {
    pub use crate::{
        Error,
        dto::{ContributionDto, ContributionStatus},
        ids::{AccountAddress, ContributionId, ContributorId},
        infra::{
            gateway::{GatewayProfileRegistry, ProfileRegistry},
            http::{HttpTransport, ReqwestTransport},
        },
        log,
        model::memory::session::Session,
        ops::application::{
            ApplicationRepository, InMemoryApplicationRepository, RemoteApplicationRepository,
        },
        workflow::{
            application::{ApplicationQuery, ApplicationWorkflow},
            notify::{
                Notification, NotificationCenter, NotificationStatus, NotifyOptions,
                NotifyWorkflow,
            },
            query::ContributionQuery,
        },
    };
}
