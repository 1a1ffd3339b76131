//! Demo accounts: in-memory sign-up/sign-in with salted password hashes and
//! cookie-backed sessions.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tokio::sync::RwLock;

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "bizlens_session";
const MIN_PASSWORD_LEN: usize = 6;

/// Failures reported by the account provider. `Display` is the provider's
/// raw message; [`friendly_message`] turns it into page copy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("User already registered")]
    AlreadyRegistered,
    #[error("Password should be at least 6 characters")]
    WeakPassword,
    #[error("Unable to validate email address: invalid format")]
    InvalidEmail,
}

/// Map a provider message to text shown on the sign-in and sign-up forms.
/// Unknown messages pass through verbatim.
#[must_use]
pub fn friendly_message(provider: &str) -> String {
    match provider {
        "Invalid login credentials" => "That email and password don't match an account.",
        "User already registered" => "An account with this email already exists. Try signing in.",
        "Email not confirmed" => "Check your inbox and confirm your email before signing in.",
        "Password should be at least 6 characters" => {
            "Choose a password with at least 6 characters."
        }
        "Unable to validate email address: invalid format" => "Enter a valid email address.",
        other => other,
    }
    .to_string()
}

#[derive(Debug, Clone)]
struct Account {
    email: String,
    password_hash: [u8; 32],
}

#[derive(Clone, Default)]
pub struct AccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    sessions: Arc<RwLock<HashMap<String, String>>>,
}

impl AccountStore {
    /// Register a new account and sign it in, returning the session token.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidEmail`], [`AuthError::WeakPassword`] or
    /// [`AuthError::AlreadyRegistered`].
    pub async fn sign_up(
        &self,
        salt: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let email = normalize_email(email);
        if !validator::validate_email(email.as_str()) {
            return Err(AuthError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&email) {
            return Err(AuthError::AlreadyRegistered);
        }
        accounts.insert(
            email.clone(),
            Account {
                email: email.clone(),
                password_hash: hash_password(salt, &email, password),
            },
        );
        drop(accounts);

        tracing::info!("demo account registered");
        Ok(self.open_session(&email).await)
    }

    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] for an unknown email or wrong password.
    pub async fn sign_in(
        &self,
        salt: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let email = normalize_email(email);
        let accounts = self.accounts.read().await;
        let account = accounts.get(&email).ok_or(AuthError::InvalidCredentials)?;
        let candidate = hash_password(salt, &email, password);
        if !bool::from(account.password_hash.as_slice().ct_eq(candidate.as_slice())) {
            return Err(AuthError::InvalidCredentials);
        }
        let email = account.email.clone();
        drop(accounts);

        Ok(self.open_session(&email).await)
    }

    pub async fn sign_out(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    /// Email of the account behind a session token.
    pub async fn user_for(&self, token: &str) -> Option<String> {
        self.sessions.read().await.get(token).cloned()
    }

    async fn open_session(&self, email: &str) -> String {
        let token = uuid::Uuid::new_v4().simple().to_string();
        self.sessions
            .write()
            .await
            .insert(token.clone(), email.to_string());
        token
    }
}

fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn hash_password(salt: &str, email: &str, password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update([0]);
    hasher.update(email.as_bytes());
    hasher.update([0]);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

/// Value of the session cookie on a request, if any.
#[must_use]
pub fn session_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|v| !v.is_empty())
}

#[must_use]
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

#[must_use]
pub fn expired_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// The signed-in demo user, if the request carries a live session cookie.
#[derive(Debug, Clone, Default)]
pub struct CurrentUser {
    pub email: Option<String>,
    pub token: Option<String>,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = session_token(parts) else {
            return Ok(Self::default());
        };
        let email = state.accounts.user_for(&token).await;
        Ok(Self {
            email,
            token: Some(token),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: &str = "test-salt";

    #[tokio::test]
    async fn sign_up_then_sign_in() {
        let store = AccountStore::default();
        let token = store
            .sign_up(SALT, "Owner@Example.com ", "hunter22")
            .await
            .expect("sign up");
        assert_eq!(
            store.user_for(&token).await.as_deref(),
            Some("owner@example.com")
        );

        let second = store
            .sign_in(SALT, "owner@example.com", "hunter22")
            .await
            .expect("sign in");
        assert_ne!(token, second);

        store.sign_out(&second).await;
        assert!(store.user_for(&second).await.is_none());
    }

    #[tokio::test]
    async fn sign_up_rejections_use_provider_messages() {
        let store = AccountStore::default();
        assert_eq!(
            store.sign_up(SALT, "not-an-email", "hunter22").await,
            Err(AuthError::InvalidEmail)
        );
        assert_eq!(
            store.sign_up(SALT, "a@b.co", "abc").await,
            Err(AuthError::WeakPassword)
        );
        store.sign_up(SALT, "a@b.co", "abcdef").await.expect("first");
        let err = store.sign_up(SALT, "a@b.co", "abcdef").await.unwrap_err();
        assert_eq!(err.to_string(), "User already registered");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_the_same() {
        let store = AccountStore::default();
        store.sign_up(SALT, "a@b.co", "abcdef").await.expect("sign up");
        assert_eq!(
            store.sign_in(SALT, "a@b.co", "abcdeg").await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            store.sign_in(SALT, "x@b.co", "abcdef").await,
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn friendly_message_maps_known_and_passes_unknown() {
        assert_eq!(
            friendly_message(&AuthError::InvalidEmail.to_string()),
            "Enter a valid email address."
        );
        assert_eq!(friendly_message("Email rate limit exceeded"), "Email rate limit exceeded");
    }

    #[test]
    fn session_token_reads_cookie_among_others() {
        let request = axum::http::Request::builder()
            .header(COOKIE, "theme=dark; bizlens_session=abc123")
            .body(())
            .expect("request");
        let (parts, ()) = request.into_parts();
        assert_eq!(session_token(&parts).as_deref(), Some("abc123"));
    }
}
