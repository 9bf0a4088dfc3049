//! Access gate for record and view operations.
//!
//! This is a placeholder gate for a shared workstation, not a security
//! boundary: credentials come from the configuration file in clear text.

use crate::config::{AccessConfig, Config};
use crate::errors::{AppError, AppResult};

pub trait CredentialVerifier {
    fn verify(&self, user: &str, secret: &str) -> bool;

    /// Whether a login without credentials is acceptable.
    fn allows_anonymous(&self) -> bool {
        false
    }
}

/// No gate configured: every login succeeds.
pub struct OpenAccess;

impl CredentialVerifier for OpenAccess {
    fn verify(&self, _user: &str, _secret: &str) -> bool {
        true
    }

    fn allows_anonymous(&self) -> bool {
        true
    }
}

/// Users listed in the `access` section of the configuration.
pub struct ConfiguredAccess {
    users: Vec<(String, String)>,
}

impl ConfiguredAccess {
    pub fn new(access: &AccessConfig) -> Self {
        Self {
            users: access
                .users
                .iter()
                .map(|c| (c.user.clone(), c.password.clone()))
                .collect(),
        }
    }
}

impl CredentialVerifier for ConfiguredAccess {
    fn verify(&self, user: &str, secret: &str) -> bool {
        self.users.iter().any(|(u, p)| u == user && p == secret)
    }
}

/// Verifier matching the configuration: gated when `access` lists users.
pub fn verifier_for(cfg: &Config) -> Box<dyn CredentialVerifier> {
    match &cfg.access {
        Some(access) if !access.users.is_empty() => Box::new(ConfiguredAccess::new(access)),
        _ => Box::new(OpenAccess),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated { user: String },
}

#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Anonymous,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    /// The only transition out of `Anonymous`. A failed attempt leaves the
    /// session unchanged.
    pub fn login(
        &mut self,
        verifier: &dyn CredentialVerifier,
        user: Option<&str>,
        secret: Option<&str>,
    ) -> AppResult<()> {
        let user = user.map(str::trim).filter(|u| !u.is_empty());

        let authenticated = match (user, secret) {
            (Some(u), Some(s)) if verifier.verify(u, s) => u.to_string(),
            (None, _) if verifier.allows_anonymous() => "anonymous".to_string(),
            (Some(u), None) if verifier.allows_anonymous() => u.to_string(),
            (None, _) | (Some(_), None) => {
                return Err(AppError::AccessDenied(
                    "credentials required (use --user and --password)".into(),
                ));
            }
            (Some(u), Some(_)) => {
                return Err(AppError::AccessDenied(format!(
                    "invalid credentials for user '{u}'"
                )));
            }
        };

        self.state = SessionState::Authenticated {
            user: authenticated,
        };
        Ok(())
    }

    pub fn logout(&mut self) {
        self.state = SessionState::Anonymous;
    }

    /// Name of the logged-in user, or `AccessDenied`.
    pub fn require(&self) -> AppResult<&str> {
        match &self.state {
            SessionState::Authenticated { user } => Ok(user),
            SessionState::Anonymous => Err(AppError::AccessDenied("not logged in".into())),
        }
    }
}
