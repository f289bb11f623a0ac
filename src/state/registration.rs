//! Remote registration feature flag, consulted before showing any admin
//! sign-up affordance.
//!
//! The flag is advisory and fails closed: any fetch error reads as
//! "registration disabled". It is fetched on demand and cached only in
//! component-local state; there is no cross-tab invalidation.

#[cfg(test)]
#[path = "registration_test.rs"]
mod tests;

use crate::net::error::ApiError;

/// Registration-gate state for the admin sign-up surfaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    /// Remote read still in flight; show neither form nor placeholder.
    #[default]
    Checking,
    Enabled,
    Disabled,
}

impl GateState {
    /// Fold a fetch result, failing closed on error.
    #[must_use]
    pub fn from_fetch(result: Result<bool, ApiError>) -> Self {
        match result {
            Ok(true) => Self::Enabled,
            Ok(false) => Self::Disabled,
            Err(err) => {
                log::error!("registration status fetch failed: {err}");
                Self::Disabled
            }
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }
}
