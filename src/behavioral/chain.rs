//! Chain of responsibility: login checks handed from one middleware to the next.
//!
//! A [`Server`] pushes every login request through its middleware in order.
//! Each link either rejects the request, settles it, or passes it on.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Reasons a login is refused
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("Request limit exceeded ({max} per window)")]
    TooManyRequests { max: usize },

    #[error("No account registered for '{0}'")]
    UnknownEmail(String),

    #[error("Wrong password for '{0}'")]
    WrongPassword(String),
}

/// How a successful login is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Admin,
    User,
}

/// What a middleware decided about the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Hand the request to the next middleware
    Continue,
    /// Stop here with a final answer
    Done(LoginOutcome),
}

#[derive(Debug, Clone)]
struct Account {
    password: String,
    admin: bool,
}

/// Registered accounts, keyed by email.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    accounts: HashMap<String, Account>,
}

impl UserStore {
    pub fn has_email(&self, email: &str) -> bool {
        self.accounts.contains_key(email)
    }

    pub fn is_valid_password(&self, email: &str, password: &str) -> bool {
        self.accounts
            .get(email)
            .is_some_and(|a| a.password == password)
    }

    pub fn is_admin(&self, email: &str) -> bool {
        self.accounts.get(email).is_some_and(|a| a.admin)
    }
}

/// One link in the chain.
pub trait Middleware {
    fn name(&self) -> &str;

    fn check(&mut self, email: &str, password: &str, users: &UserStore) -> Result<Flow, AuthError>;
}

/// Limits for [`ThrottlingMiddleware`].
#[derive(Debug, Clone, Copy)]
pub struct ThrottleConfig {
    pub max_requests: usize,
    pub window: Duration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            max_requests: 3,
            window: Duration::minutes(1),
        }
    }
}

/// Rejects requests once the per-window limit is reached.
pub struct ThrottlingMiddleware {
    config: ThrottleConfig,
    window_start: DateTime<Utc>,
    requests: usize,
}

impl ThrottlingMiddleware {
    pub fn new(config: ThrottleConfig) -> Self {
        Self {
            config,
            window_start: Utc::now(),
            requests: 0,
        }
    }
}

impl Middleware for ThrottlingMiddleware {
    fn name(&self) -> &str {
        "throttling"
    }

    fn check(
        &mut self,
        _email: &str,
        _password: &str,
        _users: &UserStore,
    ) -> Result<Flow, AuthError> {
        let now = Utc::now();
        if now.signed_duration_since(self.window_start) > self.config.window {
            self.window_start = now;
            self.requests = 0;
        }

        self.requests += 1;
        if self.requests > self.config.max_requests {
            warn!(requests = self.requests, "request throttled");
            return Err(AuthError::TooManyRequests {
                max: self.config.max_requests,
            });
        }
        Ok(Flow::Continue)
    }
}

/// Verifies the email is registered and the password matches.
pub struct UserExistsMiddleware;

impl Middleware for UserExistsMiddleware {
    fn name(&self) -> &str {
        "user-exists"
    }

    fn check(&mut self, email: &str, password: &str, users: &UserStore) -> Result<Flow, AuthError> {
        if !users.has_email(email) {
            warn!(email, "unknown email");
            return Err(AuthError::UnknownEmail(email.to_string()));
        }
        if !users.is_valid_password(email, password) {
            warn!(email, "wrong password");
            return Err(AuthError::WrongPassword(email.to_string()));
        }
        Ok(Flow::Continue)
    }
}

/// Settles admin logins early; everyone else continues down the chain.
pub struct RoleCheckMiddleware;

impl Middleware for RoleCheckMiddleware {
    fn name(&self) -> &str {
        "role-check"
    }

    fn check(
        &mut self,
        email: &str,
        _password: &str,
        users: &UserStore,
    ) -> Result<Flow, AuthError> {
        if users.is_admin(email) {
            return Ok(Flow::Done(LoginOutcome::Admin));
        }
        Ok(Flow::Continue)
    }
}

/// Owns the accounts and the middleware chain.
pub struct Server {
    users: UserStore,
    chain: Vec<Box<dyn Middleware>>,
}

impl Server {
    pub fn new(chain: Vec<Box<dyn Middleware>>) -> Self {
        Self {
            users: UserStore::default(),
            chain,
        }
    }

    /// Throttling, then account check, then role check.
    pub fn with_default_chain(config: ThrottleConfig) -> Self {
        Self::new(vec![
            Box::new(ThrottlingMiddleware::new(config)),
            Box::new(UserExistsMiddleware),
            Box::new(RoleCheckMiddleware),
        ])
    }

    pub fn register(&mut self, email: impl Into<String>, password: impl Into<String>, admin: bool) {
        self.users.accounts.insert(
            email.into(),
            Account {
                password: password.into(),
                admin,
            },
        );
    }

    /// Run the request through the chain. Falling off the end means a
    /// regular user login.
    pub fn log_in(&mut self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        for middleware in self.chain.iter_mut() {
            debug!(middleware = middleware.name(), email, "checking");
            if let Flow::Done(outcome) = middleware.check(email, password, &self.users)? {
                debug!(middleware = middleware.name(), ?outcome, "chain settled early");
                return Ok(outcome);
            }
        }
        Ok(LoginOutcome::User)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> Server {
        let mut server = Server::with_default_chain(ThrottleConfig {
            max_requests: 3,
            window: Duration::hours(1),
        });
        server.register("admin@example.com", "admin_pass", true);
        server.register("user@example.com", "user_pass", false);
        server
    }

    #[test]
    fn admin_login_is_settled_by_role_check() {
        let mut server = server();
        assert_eq!(
            server.log_in("admin@example.com", "admin_pass"),
            Ok(LoginOutcome::Admin)
        );
    }

    #[test]
    fn regular_user_falls_through_chain() {
        let mut server = server();
        assert_eq!(
            server.log_in("user@example.com", "user_pass"),
            Ok(LoginOutcome::User)
        );
    }

    #[test]
    fn unknown_email_is_rejected() {
        let mut server = server();
        assert_eq!(
            server.log_in("nobody@example.com", "x"),
            Err(AuthError::UnknownEmail("nobody@example.com".to_string()))
        );
    }

    #[test]
    fn wrong_password_is_rejected() {
        let mut server = server();
        assert!(matches!(
            server.log_in("user@example.com", "guess"),
            Err(AuthError::WrongPassword(_))
        ));
    }

    #[test]
    fn throttling_stops_chain_before_account_check() {
        let mut server = server();
        for _ in 0..3 {
            let _ = server.log_in("nobody@example.com", "x");
        }
        assert_eq!(
            server.log_in("user@example.com", "user_pass"),
            Err(AuthError::TooManyRequests { max: 3 })
        );
    }

    #[test]
    fn throttle_window_resets() {
        let mut throttle = ThrottlingMiddleware::new(ThrottleConfig {
            max_requests: 1,
            window: Duration::zero(),
        });
        let users = UserStore::default();
        assert_eq!(throttle.check("a", "b", &users), Ok(Flow::Continue));
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(throttle.check("a", "b", &users), Ok(Flow::Continue));
    }

    #[test]
    fn empty_chain_accepts_everyone() {
        let mut server = Server::new(Vec::new());
        assert_eq!(server.log_in("anyone", "anything"), Ok(LoginOutcome::User));
    }
}
