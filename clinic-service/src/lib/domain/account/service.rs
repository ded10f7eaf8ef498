use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use auth::JwtError;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::RegisterAccountCommand;
use crate::domain::account::models::Session;
use crate::domain::account::models::TokenIdentity;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;

/// Domain service implementation for account operations.
///
/// Orchestrates the password hasher, the credential store, and token
/// issuance. This is the only component with authentication business logic;
/// hashing and signing themselves live in the auth library.
pub struct AccountService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
    token_ttl_hours: i64,
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hashing and token signing coordinator
    /// * `token_ttl_hours` - Lifetime of issued tokens in hours
    ///
    /// # Returns
    /// Configured account service instance
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>, token_ttl_hours: i64) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl_hours,
        }
    }
}

#[async_trait]
impl<R> AccountServicePort for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, command: RegisterAccountCommand) -> Result<Account, AccountError> {
        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| AccountError::Unknown(format!("Password hashing failed: {}", e)))?;

        let account = Account {
            id: AccountId::new(),
            email: command.email,
            password_hash,
            role: command.role,
            created_at: Utc::now(),
        };

        let created = self.repository.create(account).await?;

        tracing::info!(account_id = %created.id, role = %created.role, "Account registered");

        Ok(created)
    }

    async fn login(&self, command: LoginCommand) -> Result<Session, AccountError> {
        // Absent record and password mismatch collapse into the same
        // outcome so callers cannot enumerate registered emails.
        let account = self
            .repository
            .find_by_email(&command.email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let claims = Claims::for_account(account.id, account.role, self.token_ttl_hours);

        let result = self
            .authenticator
            .authenticate(&command.password, &account.password_hash, &claims)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AccountError::InvalidCredentials,
                other => AccountError::Unknown(other.to_string()),
            })?;

        tracing::info!(account_id = %account.id, "Login succeeded");

        Ok(Session {
            account,
            token: result.access_token,
        })
    }

    fn verify_token(&self, token: &str) -> Result<TokenIdentity, AccountError> {
        let claims = self.authenticator.validate_token(token).map_err(|e| match e {
            JwtError::TokenExpired => AccountError::TokenExpired,
            other => AccountError::TokenInvalid(other.to_string()),
        })?;

        let account_id = AccountId::from_string(&claims.sub)
            .map_err(|_| AccountError::TokenInvalid("malformed subject claim".to_string()))?;

        let role = claims
            .role
            .parse()
            .map_err(|_| AccountError::TokenInvalid("unrecognized role claim".to_string()))?;

        Ok(TokenIdentity { account_id, role })
    }
}
