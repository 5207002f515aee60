use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::backend::{AuthBackend, Credentials, NewAccount, UserRecord};
use crate::error::{Result, TaskFlowError};

struct StoredAccount {
    user: UserRecord,
    password: String,
}

/// In-memory auth backend.
///
/// Accounts live only for the lifetime of the process. `confirm_email`
/// stands in for following the confirmation link that a hosted backend
/// would deliver by email.
#[derive(Default)]
pub struct MemoryAuthBackend {
    accounts: RwLock<HashMap<String, StoredAccount>>,
}

impl MemoryAuthBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the account for `email` as confirmed, returning whether an
    /// account existed
    pub async fn confirm_email(&self, email: &str) -> bool {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(&email.to_lowercase()) {
            Some(account) => {
                if account.user.confirmed_at.is_none() {
                    account.user.confirmed_at = Some(Utc::now());
                }
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl AuthBackend for MemoryAuthBackend {
    async fn sign_up(&self, account: &NewAccount) -> Result<UserRecord> {
        let email = account.email.to_lowercase();
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&email) {
            return Err(TaskFlowError::EmailTaken);
        }

        let user = UserRecord {
            id: Uuid::new_v4(),
            email: email.clone(),
            full_name: account.full_name.clone(),
            confirmed_at: None,
            created_at: Utc::now(),
        };

        accounts.insert(
            email,
            StoredAccount {
                user: user.clone(),
                password: account.password.clone(),
            },
        );

        debug!(email = %user.email, "account created, awaiting confirmation");
        Ok(user)
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<UserRecord> {
        let email = credentials.email.to_lowercase();
        let accounts = self.accounts.read().await;

        // Unknown email and wrong password collapse into the same error so
        // sign-in does not leak which addresses have accounts
        let Some(account) = accounts.get(&email) else {
            return Err(TaskFlowError::InvalidCredentials);
        };
        if account.password != credentials.password {
            return Err(TaskFlowError::InvalidCredentials);
        }

        if !account.user.is_confirmed() {
            return Err(TaskFlowError::EmailNotConfirmed);
        }

        Ok(account.user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account() -> NewAccount {
        NewAccount {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "hunter2!".to_string(),
        }
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_creates_unconfirmed_account() {
        let backend = MemoryAuthBackend::new();

        let user = backend.sign_up(&new_account()).await.unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.full_name, "Jane Doe");
        assert!(!user.is_confirmed());
    }

    #[tokio::test]
    async fn test_sign_up_rejects_taken_email() {
        let backend = MemoryAuthBackend::new();
        backend.sign_up(&new_account()).await.unwrap();

        let mut dup = new_account();
        dup.email = "JANE@example.com".to_string(); // case-insensitive
        let result = backend.sign_up(&dup).await;
        assert!(matches!(result, Err(TaskFlowError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_sign_in_requires_confirmation() {
        let backend = MemoryAuthBackend::new();
        backend.sign_up(&new_account()).await.unwrap();

        let result = backend
            .sign_in(&credentials("jane@example.com", "hunter2!"))
            .await;
        assert!(matches!(result, Err(TaskFlowError::EmailNotConfirmed)));

        assert!(backend.confirm_email("jane@example.com").await);
        let user = backend
            .sign_in(&credentials("jane@example.com", "hunter2!"))
            .await
            .unwrap();
        assert!(user.is_confirmed());
    }

    #[tokio::test]
    async fn test_sign_in_rejects_bad_credentials() {
        let backend = MemoryAuthBackend::new();
        backend.sign_up(&new_account()).await.unwrap();
        backend.confirm_email("jane@example.com").await;

        let wrong_password = backend
            .sign_in(&credentials("jane@example.com", "wrong"))
            .await;
        assert!(matches!(
            wrong_password,
            Err(TaskFlowError::InvalidCredentials)
        ));

        // Unknown email yields the same error as a wrong password
        let unknown = backend
            .sign_in(&credentials("nobody@example.com", "hunter2!"))
            .await;
        assert!(matches!(unknown, Err(TaskFlowError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_invalid_credentials_message() {
        // The sign-in form surfaces this text directly
        assert_eq!(
            TaskFlowError::InvalidCredentials.to_string(),
            "Invalid email or password."
        );
    }

    #[tokio::test]
    async fn test_confirm_unknown_email() {
        let backend = MemoryAuthBackend::new();
        assert!(!backend.confirm_email("nobody@example.com").await);
    }
}
