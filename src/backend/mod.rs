use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

pub mod memory;

pub use memory::MemoryAuthBackend;

/// Email/password pair for signing in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Details for creating a new account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// A user record as returned by the auth backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    /// Set once the confirmation link has been followed; sign-in is
    /// rejected until then
    pub confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn is_confirmed(&self) -> bool {
        self.confirmed_at.is_some()
    }
}

/// Contract for the external authentication backend.
///
/// Account storage, session handling and confirmation email delivery all
/// live behind this seam; board state is never affected by any error a
/// backend returns.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Creates an account. The confirmation email is asynchronous and
    /// out-of-band; the returned record is unconfirmed.
    async fn sign_up(&self, account: &NewAccount) -> Result<UserRecord>;

    /// Signs in with email and password
    async fn sign_in(&self, credentials: &Credentials) -> Result<UserRecord>;
}
