// 🛡️ Admin & SuperAdmin - roles built by composition
//
// Admin HAS a User, SuperAdmin HAS an Admin. Behavior that callers expect
// to "see through" the layers is exposed as explicit delegating methods.

use serde::{Deserialize, Serialize};

use crate::types::{MySlice, Role, UserName};

use super::user::User;

// ============================================================================
// ADMIN
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub user: User,
    pub role: Role,
}

impl Admin {
    pub fn new(user: User, role: Role) -> Self {
        Admin { user, role }
    }

    /// `"Admin {name} has role: {role}"`
    pub fn display_role(&self) -> String {
        format!("Admin {} has role: {}", self.user.user_name, self.role)
    }

    pub fn user_name(&self) -> &UserName {
        &self.user.user_name
    }

    pub fn display_info(&self) -> String {
        self.user.display_info()
    }

    pub fn balance_string(&self) -> String {
        self.user.balance_string()
    }
}

// ============================================================================
// SUPER ADMIN
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperAdmin {
    pub admin: Admin,
    /// Unordered membership; duplicates are harmless
    pub permissions: MySlice,
}

impl SuperAdmin {
    pub fn new(admin: Admin, permissions: MySlice) -> Self {
        SuperAdmin { admin, permissions }
    }

    /// Exact, case-sensitive match. No prefix or partial matching.
    pub fn has_permission(&self, perm: &str) -> bool {
        self.permissions.iter().any(|p| p == perm)
    }

    pub fn user(&self) -> &User {
        &self.admin.user
    }

    pub fn user_name(&self) -> &UserName {
        self.admin.user_name()
    }

    pub fn display_role(&self) -> String {
        self.admin.display_role()
    }

    pub fn display_info(&self) -> String {
        self.admin.display_info()
    }

    pub fn balance_string(&self) -> String {
        self.admin.balance_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================
