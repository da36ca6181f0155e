//! In-memory auth provider for tests and local wiring.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::watch;
use uuid::Uuid;

use crate::session::{
    domain::{Credentials, EmailAddress, Principal, PrincipalId},
    ports::{AuthError, AuthProvider, AuthResult, SessionReceiver},
};

/// Shortest password the provider accepts at account creation.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Thread-safe in-memory auth provider.
///
/// Passwords are kept only as salted SHA-256 digests. Session changes are
/// broadcast to every subscriber.
#[derive(Debug, Clone)]
pub struct InMemoryAuthProvider {
    accounts: Arc<RwLock<HashMap<EmailAddress, Account>>>,
    session: Arc<watch::Sender<Option<Principal>>>,
}

#[derive(Debug, Clone)]
struct Account {
    principal: Principal,
    salt: [u8; 16],
    digest: Vec<u8>,
}

impl Account {
    fn new(principal: Principal, password: &str) -> Self {
        let salt = *Uuid::new_v4().as_bytes();
        let digest = password_digest(&salt, password);
        Self {
            principal,
            salt,
            digest,
        }
    }

    fn verify(&self, password: &str) -> bool {
        password_digest(&self.salt, password) == self.digest
    }
}

fn password_digest(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

impl Default for InMemoryAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAuthProvider {
    /// Creates a provider with no accounts and no active session.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(None);
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            session: Arc::new(sender),
        }
    }

    /// Returns the currently signed-in principal, if any.
    #[must_use]
    pub fn current(&self) -> Option<Principal> {
        self.session.borrow().clone()
    }

    fn parse_email(credentials: &Credentials) -> AuthResult<EmailAddress> {
        EmailAddress::parse(credentials.email())
            .map_err(|_| AuthError::rejected("The email address is badly formatted."))
    }

    fn publish(&self, principal: Option<Principal>) {
        self.session.send_replace(principal);
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn create_account(&self, credentials: &Credentials) -> AuthResult<Principal> {
        let email = Self::parse_email(credentials)?;
        if credentials.password().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::rejected(format!(
                "Password should be at least {MIN_PASSWORD_LENGTH} characters."
            )));
        }

        let principal = {
            let mut accounts = self
                .accounts
                .write()
                .map_err(|err| AuthError::unavailable(std::io::Error::other(err.to_string())))?;
            if accounts.contains_key(&email) {
                return Err(AuthError::rejected(
                    "The email address is already in use by another account.",
                ));
            }
            let principal = Principal::new(PrincipalId::new(), email.clone());
            accounts.insert(email, Account::new(principal.clone(), credentials.password()));
            principal
        };

        self.publish(Some(principal.clone()));
        Ok(principal)
    }

    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Principal> {
        let email = Self::parse_email(credentials)?;
        let principal = {
            let accounts = self
                .accounts
                .read()
                .map_err(|err| AuthError::unavailable(std::io::Error::other(err.to_string())))?;
            accounts
                .get(&email)
                .filter(|account| account.verify(credentials.password()))
                .map(|account| account.principal.clone())
                .ok_or_else(|| AuthError::rejected("Invalid email or password."))?
        };

        self.publish(Some(principal.clone()));
        Ok(principal)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.publish(None);
        Ok(())
    }

    fn subscribe(&self) -> SessionReceiver {
        self.session.subscribe()
    }
}
