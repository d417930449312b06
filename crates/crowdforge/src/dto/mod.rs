//! Wire types shared with the data API and the profile registry contract.
//!
//! Everything here is plain serde data: no behavior beyond field access and
//! the occasional convenience accessor. Semantics live in `domain/` and the
//! layers above.

pub mod application;
pub mod contribution;
pub mod profile;

pub use application::{ContributionApplicationDto, CreateApplicationRequest};
pub use contribution::{ContributionDto, ContributionStatus};
pub use profile::{Uint128PartsDto, UserInformationDto};

/// Common imports for dto submodules.
pub mod prelude {
    pub use serde::{Deserialize, Serialize};
}
