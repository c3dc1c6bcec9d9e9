//! Identity provider collaborator
//!
//! Authentication lives outside PostComposer. The shell only needs to know
//! whether the session has loaded, who is signed in, and what they may do.

use async_trait::async_trait;

use crate::config::IdentityConfig;
use crate::error::Result;
use crate::types::Role;

/// Signed-in principal as exposed by the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub primary_email: Option<String>,
    pub role: Role,
    pub plan: String,
    pub external_id: Option<String>,
}

impl SessionUser {
    /// First non-empty of full name, username, primary email
    pub fn display_name(&self) -> Option<&str> {
        [&self.full_name, &self.username, &self.primary_email]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|value| !value.trim().is_empty())
    }

    /// Initial shown in the avatar placeholder
    pub fn initial(&self) -> Option<char> {
        self.display_name()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_ascii_uppercase())
    }
}

impl From<IdentityConfig> for SessionUser {
    fn from(config: IdentityConfig) -> Self {
        Self {
            full_name: config.full_name,
            username: config.username,
            primary_email: config.email,
            role: config.role,
            plan: config.plan,
            external_id: config.external_id,
        }
    }
}

/// Things a principal may be allowed to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ApprovePosts,
}

/// Identity-provider session state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<SessionUser>,
    pub is_loaded: bool,
}

impl Session {
    /// Session whose state has not been resolved yet
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loaded: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_loaded: true,
        }
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            user: Some(user),
            is_loaded: true,
        }
    }

    /// The signed-in user, only once the session has loaded
    pub fn current_user(&self) -> Option<&SessionUser> {
        if self.is_loaded {
            self.user.as_ref()
        } else {
            None
        }
    }

    /// Evaluate a capability against the live session
    ///
    /// A session that is still loading or signed out has no capabilities.
    pub fn can(&self, capability: Capability) -> bool {
        match (capability, self.current_user()) {
            (Capability::ApprovePosts, Some(user)) => user.role.can_approve(),
            (_, None) => false,
        }
    }
}

/// Source of the current session
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_session(&self) -> Result<Session>;
}

/// Identity provider backed by the `[identity]` configuration section
pub struct ConfiguredIdentity {
    identity: Option<IdentityConfig>,
}

impl ConfiguredIdentity {
    pub fn new(identity: Option<IdentityConfig>) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl IdentityProvider for ConfiguredIdentity {
    async fn current_session(&self) -> Result<Session> {
        Ok(match &self.identity {
            Some(identity) => Session::signed_in(identity.clone().into()),
            None => Session::signed_out(),
        })
    }
}
