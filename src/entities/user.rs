// 👤 User Entity - the base record every role builds on
//
// A User OWNS its balance as a named field. Nothing is promoted implicitly:
// callers reach the balance through `user.balance` or `balance_string()`.

use serde::{Deserialize, Serialize};

use crate::types::{MyFloat, MyString, UserActive, UserBody, UserId, UserName};

// ============================================================================
// ACCOUNT BALANCE
// ============================================================================

/// Amount + currency code. Zero value is `0` with an empty currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub amount: MyFloat,
    pub currency: MyString,
}

impl AccountBalance {
    pub fn new(amount: f64, currency: &str) -> Self {
        AccountBalance {
            amount: MyFloat(amount),
            currency: MyString::from(currency),
        }
    }
}

// ============================================================================
// USER ENTITY
// ============================================================================

/// User record. All fields are public and freely mutable after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub user_name: UserName,
    pub body: UserBody,
    pub active: UserActive,
    pub balance: AccountBalance,
}

impl User {
    /// Create an inactive user with zero body and zero balance
    pub fn new(id: i64, user_name: &str) -> Self {
        User {
            id: UserId(id),
            user_name: UserName::from(user_name),
            ..User::default()
        }
    }

    pub fn with_body(mut self, body: f64) -> Self {
        self.body = UserBody(body);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = UserActive(active);
        self
    }

    pub fn with_balance(mut self, balance: AccountBalance) -> Self {
        self.balance = balance;
        self
    }

    /// `"{amount} {currency}"`, e.g. `"1000.5 USD"`
    pub fn balance_string(&self) -> String {
        format!("{} {}", self.balance.amount, self.balance.currency)
    }

    /// `"User: {name} (ID: {id}) - Active: {active}"`
    pub fn display_info(&self) -> String {
        format!(
            "User: {} (ID: {}) - Active: {}",
            self.user_name, self.id, self.active
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
