use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::RegisterAccountCommand;
use crate::domain::account::models::Session;
use crate::domain::account::models::TokenIdentity;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account with validated credentials.
    ///
    /// The plaintext password is hashed before anything is stored; it is
    /// never persisted or logged.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email, password, and role
    ///
    /// # Returns
    /// Created account entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - An account with this email is already registered
    /// * `DatabaseError` - Credential store operation failed
    async fn register(&self, command: RegisterAccountCommand) -> Result<Account, AccountError>;

    /// Authenticate credentials and issue a bearer token.
    ///
    /// Never mutates the credential store. An unknown email and a wrong
    /// password produce the same `InvalidCredentials` outcome.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Session holding the account and its signed token
    ///
    /// # Errors
    /// * `InvalidCredentials` - No matching account or password mismatch
    /// * `DatabaseError` - Credential store operation failed
    async fn login(&self, command: LoginCommand) -> Result<Session, AccountError>;

    /// Validate a bearer token and extract the asserted identity.
    ///
    /// Pure function of (token, current time, secret); no stored state is
    /// consulted, which is also why no early revocation path exists.
    ///
    /// # Arguments
    /// * `token` - Compact JWT string as presented by the client
    ///
    /// # Returns
    /// The subject's account ID and role
    ///
    /// # Errors
    /// * `TokenExpired` - Signature is valid but the expiry has passed
    /// * `TokenInvalid` - Signature mismatch or malformed token/claims
    fn verify_token(&self, token: &str) -> Result<TokenIdentity, AccountError>;
}

/// Persistence operations for the account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// Insertion is atomic with respect to email uniqueness: of two
    /// concurrent inserts with the same email, exactly one succeeds and
    /// the other observes `EmailAlreadyExists`.
    ///
    /// # Arguments
    /// * `account` - Account entity to create
    ///
    /// # Returns
    /// Created account entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve an account by email address.
    ///
    /// Absence is a normal outcome, not an error.
    ///
    /// # Arguments
    /// * `email` - Email address to look up
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, AccountError>;
}
