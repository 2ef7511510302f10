// ⚙️ Settings - module-scoped configuration values
//
// Visibility is declared, not implied by naming:
// - `pub` fields are readable and writable by any caller
// - `pub(crate)` fields stay inside this crate

use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// CONSTANTS
// ============================================================================

pub const USERNAME: &str = "wave";
pub const AGE: u32 = 24;
pub const PUBLIC_USERNAME: &str = "PublicUser";

// ============================================================================
// SETTINGS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub public_username: String,
    #[serde(skip, default = "default_private_username")]
    pub(crate) private_username: String,
    pub name: String,
    pub age: u32,
    pub country: String,
    pub city: String,
    pub language: String,
    /// Declared without a value: starts at zero
    pub score: i64,
    /// Assigned in a second step after construction
    pub height: f64,
}

fn default_private_username() -> String {
    "PrivateUser".to_string()
}

impl Settings {
    pub fn new() -> Self {
        let mut settings = Settings {
            public_username: PUBLIC_USERNAME.to_string(),
            private_username: default_private_username(),
            name: USERNAME.to_string(),
            age: AGE,
            country: "Wonderland".to_string(),
            city: "Fictional City".to_string(),
            language: "Go".to_string(),
            score: 0,
            height: 0.0,
        };
        settings.init();
        settings
    }

    fn init(&mut self) {
        self.height = 5.9;
    }

    /// Values can change at runtime
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!(old = %self.name, new = %name, "renaming");
        self.name = name;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
