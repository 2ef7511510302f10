// 🗣️ Describable - "tell me who you are" capability
//
// Types opt in explicitly. Admin supplies its own description instead of
// reusing the User one it contains.

use std::io::Write;

use crate::entities::{Admin, SuperAdmin, User};

pub trait Describable {
    fn describe(&self) -> String;
}

impl Describable for User {
    fn describe(&self) -> String {
        format!("I am user {}", self.user_name)
    }
}

impl Describable for Admin {
    fn describe(&self) -> String {
        format!("I am admin {} with role {}", self.user.user_name, self.role)
    }
}

impl Describable for SuperAdmin {
    fn describe(&self) -> String {
        self.admin.describe()
    }
}

/// Write any describable value as one line
pub fn print_description<W: Write>(item: &dyn Describable, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", item.describe())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn alice() -> User {
        User::new(1, "Alice").with_active(true)
    }

    #[test]
    fn test_user_description() {
        assert_eq!(alice().describe(), "I am user Alice");
    }

    #[test]
    fn test_admin_overrides_user_description() {
        let admin = Admin::new(alice(), Role::new("Manager"));

        assert_eq!(admin.describe(), "I am admin Alice with role Manager");
        assert_eq!(admin.user.describe(), "I am user Alice");
    }

    #[test]
    fn test_super_admin_describes_as_admin() {
        let sa = SuperAdmin::new(Admin::new(alice(), Role::new("Owner")), vec!["read".to_string()]);
        assert_eq!(sa.describe(), "I am admin Alice with role Owner");
    }

    #[test]
    fn test_print_description_through_trait_objects() {
        let user = alice();
        let admin = Admin::new(alice(), Role::new("Manager"));
        let items: Vec<&dyn Describable> = vec![&user, &admin];

        let mut out = Vec::new();
        for item in items {
            print_description(item, &mut out).unwrap();
        }

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "I am user Alice\nI am admin Alice with role Manager\n"
        );
    }
}
