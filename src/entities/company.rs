// 🏢 Company - employee directory (name → id)
//
// The map starts out absent and is created on first insert.
// Lookups never fail: a missing name (or a missing map) is just `None`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::MyMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    /// `None` until the first `add_employee`
    pub employees: Option<MyMap>,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Company {
            name: name.into(),
            employees: None,
        }
    }

    /// Insert or overwrite (last write wins)
    pub fn add_employee(&mut self, name: &str, id: i64) {
        let employees = self.employees.get_or_insert_with(MyMap::new);
        if let Some(previous) = employees.insert(name.to_string(), id) {
            debug!(company = %self.name, employee = name, previous, id, "employee id overwritten");
        } else {
            debug!(company = %self.name, employee = name, id, "employee added");
        }
    }

    /// `Some(id)` when the name is present, `None` otherwise
    pub fn get_employee_id(&self, name: &str) -> Option<i64> {
        self.employees.as_ref()?.get(name).copied()
    }

    pub fn employee_count(&self) -> usize {
        self.employees.as_ref().map_or(0, |m| m.len())
    }
}
