//! Proxy pattern: a bank account guarded by a PIN.
//!
//! [`ProtectedAccount`] implements the same [`BankAccount`] trait as the real
//! [`Account`], checks the PIN before every call and keeps an audit trail.

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    #[error("Access denied: wrong PIN")]
    AccessDenied,

    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: u64, requested: u64 },

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Deposit of {requested} would overflow balance {balance}")]
    Overflow { balance: u64, requested: u64 },
}

/// Amounts are in cents.
pub trait BankAccount {
    fn balance(&self) -> Result<u64, AccountError>;
    fn deposit(&mut self, amount: u64) -> Result<u64, AccountError>;
    fn withdraw(&mut self, amount: u64) -> Result<u64, AccountError>;
}

/// The real subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    owner: String,
    balance: u64,
}

impl Account {
    pub fn new(owner: impl Into<String>, balance: u64) -> Self {
        Self {
            owner: owner.into(),
            balance,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl BankAccount for Account {
    fn balance(&self) -> Result<u64, AccountError> {
        Ok(self.balance)
    }

    fn deposit(&mut self, amount: u64) -> Result<u64, AccountError> {
        if amount == 0 {
            return Err(AccountError::InvalidAmount);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::Overflow {
                balance: self.balance,
                requested: amount,
            })?;
        Ok(self.balance)
    }

    fn withdraw(&mut self, amount: u64) -> Result<u64, AccountError> {
        if amount == 0 {
            return Err(AccountError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

/// Protection proxy around any [`BankAccount`].
///
/// The caller authenticates once with [`unlock`](Self::unlock); until then
/// every operation fails with [`AccountError::AccessDenied`].
pub struct ProtectedAccount<A: BankAccount> {
    inner: A,
    pin: String,
    unlocked: bool,
    audit: Vec<String>,
}

impl<A: BankAccount> ProtectedAccount<A> {
    pub fn new(inner: A, pin: impl Into<String>) -> Self {
        Self {
            inner,
            pin: pin.into(),
            unlocked: false,
            audit: Vec::new(),
        }
    }

    /// Returns whether the PIN was accepted.
    pub fn unlock(&mut self, pin: &str) -> bool {
        self.unlocked = pin == self.pin;
        if self.unlocked {
            self.audit.push("unlocked".to_string());
        } else {
            warn!("wrong PIN entered");
            self.audit.push("unlock rejected".to_string());
        }
        self.unlocked
    }

    pub fn lock(&mut self) {
        self.unlocked = false;
        self.audit.push("locked".to_string());
    }

    pub fn audit_log(&self) -> &[String] {
        &self.audit
    }

    fn guard(&self) -> Result<(), AccountError> {
        if self.unlocked {
            Ok(())
        } else {
            warn!("account access denied while locked");
            Err(AccountError::AccessDenied)
        }
    }

    fn record(&mut self, action: &str, result: &Result<u64, AccountError>) {
        let line = match result {
            Ok(balance) => format!("{}: ok, balance {}", action, balance),
            Err(e) => format!("{}: {}", action, e),
        };
        debug!(entry = %line, "audit");
        self.audit.push(line);
    }
}

impl<A: BankAccount> BankAccount for ProtectedAccount<A> {
    fn balance(&self) -> Result<u64, AccountError> {
        self.guard()?;
        self.inner.balance()
    }

    fn deposit(&mut self, amount: u64) -> Result<u64, AccountError> {
        let result = self.guard().and_then(|_| self.inner.deposit(amount));
        self.record(&format!("deposit {}", amount), &result);
        result
    }

    fn withdraw(&mut self, amount: u64) -> Result<u64, AccountError> {
        let result = self.guard().and_then(|_| self.inner.withdraw(amount));
        self.record(&format!("withdraw {}", amount), &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protected() -> ProtectedAccount<Account> {
        ProtectedAccount::new(Account::new("Alice", 10_000), "1234")
    }

    #[test]
    fn locked_proxy_denies_everything() {
        let mut account = protected();
        assert_eq!(account.balance(), Err(AccountError::AccessDenied));
        assert_eq!(account.withdraw(100), Err(AccountError::AccessDenied));
        assert_eq!(account.deposit(100), Err(AccountError::AccessDenied));
    }

    #[test]
    fn wrong_pin_keeps_proxy_locked() {
        let mut account = protected();
        assert!(!account.unlock("0000"));
        assert_eq!(account.balance(), Err(AccountError::AccessDenied));
    }

    #[test]
    fn unlocked_proxy_delegates() {
        let mut account = protected();
        assert!(account.unlock("1234"));
        assert_eq!(account.deposit(500), Ok(10_500));
        assert_eq!(account.withdraw(2_000), Ok(8_500));
        assert_eq!(account.balance(), Ok(8_500));
    }

    #[test]
    fn real_subject_errors_pass_through() {
        let mut account = protected();
        account.unlock("1234");
        assert_eq!(
            account.withdraw(20_000),
            Err(AccountError::InsufficientFunds {
                balance: 10_000,
                requested: 20_000
            })
        );
        assert_eq!(account.deposit(0), Err(AccountError::InvalidAmount));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if let Ok(mut bytes) = self.0.lock() {
                bytes.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn denied_access_is_logged() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut account = protected();
            let _ = account.withdraw(100);
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("account access denied while locked"));
    }

    #[test]
    fn deposit_overflow_is_an_error() {
        let mut account = Account::new("Max", u64::MAX);
        assert_eq!(
            account.deposit(1),
            Err(AccountError::Overflow {
                balance: u64::MAX,
                requested: 1
            })
        );
        assert_eq!(account.balance(), Ok(u64::MAX));
    }

    #[test]
    fn audit_log_records_attempts() {
        let mut account = protected();
        let _ = account.withdraw(1);
        account.unlock("1234");
        let _ = account.deposit(1);
        account.lock();

        assert_eq!(
            account.audit_log(),
            [
                "withdraw 1: Access denied: wrong PIN",
                "unlocked",
                "deposit 1: ok, balance 10001",
                "locked",
            ]
        );
    }
}
