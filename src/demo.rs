// 🎬 Demo - the fixed console walkthrough
//
// Both walkthroughs write to any `io::Write`, so the binary hands them
// stdout and the tests hand them a buffer.

use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};

use crate::calculator::{add, subtract, Calculator};
use crate::describe::print_description;
use crate::entities::{AccountBalance, Admin, Company, SuperAdmin, Team, User};
use crate::processor::{ArrayDoubler, ArraySquarer, DataProcessor};
use crate::settings::{Settings, AGE, PUBLIC_USERNAME, USERNAME};
use crate::types::{
    format_array, MyArray, MyBool, MyFloat, MyNumber, MyString, Role, UserActive, UserBody,
    UserId, UserName,
};

/// The sample user every step of the walkthrough starts from
pub fn sample_user() -> User {
    User {
        id: UserId(1),
        user_name: UserName::from("Alice"),
        body: UserBody(65.5),
        active: UserActive(true),
        balance: AccountBalance::new(1000.50, "USD"),
    }
}

/// Constants, a bare user, and runtime-mutable settings
pub fn run_basics<W: Write>(out: &mut W) -> Result<()> {
    info!("running basics walkthrough");

    writeln!(out, "{}", USERNAME)?;
    writeln!(out, "{}", AGE)?;
    writeln!(out, "{}", PUBLIC_USERNAME)?;

    // No balance given: it keeps its zero value
    let user = User {
        id: UserId(1),
        user_name: UserName::from("Alice"),
        body: UserBody(65.5),
        active: UserActive(true),
        ..User::default()
    };

    writeln!(out, "{}", user.display_info())?;
    writeln!(out, "{}", user.balance_string())?;

    let mut settings = Settings::new();
    writeln!(out, "{}", settings.public_username)?;
    writeln!(out, "{}", settings.name)?;
    settings.set_name("newWave");
    writeln!(out, "{}", settings.name)?;

    let age = 24;
    writeln!(out, "{}", age)?;

    Ok(())
}

/// Every custom type, record, capability and function value, in order
#[allow(clippy::approx_constant)]
pub fn demonstrate_all_types<W: Write>(out: &mut W) -> Result<()> {
    info!("running type walkthrough");

    // 1. Basic custom types
    let num = MyNumber(42);
    let s = MyString::from("hello");
    let fl = MyFloat(3.14);
    let b = MyBool(true);
    writeln!(out, "Number: {}, String: {}, Float: {}, Bool: {}", num, s, fl, b)?;

    // 2. User
    let user = sample_user();
    writeln!(out, "{}", user.display_info())?;
    writeln!(out, "{}", user.balance_string())?;

    // 3. Admin owns a User
    let admin = Admin::new(user.clone(), Role::new("Manager"));
    writeln!(out, "{}", admin.display_role())?;
    writeln!(out, "Admin username: {}", admin.user_name())?;

    // 4. SuperAdmin owns an Admin
    let super_admin = SuperAdmin::new(
        admin.clone(),
        ["read", "write", "delete", "admin"]
            .iter()
            .map(|p| p.to_string())
            .collect(),
    );
    writeln!(out, "Has 'admin' permission: {}", super_admin.has_permission("admin"))?;
    writeln!(out, "Has 'execute' permission: {}", super_admin.has_permission("execute"))?;

    // 5. Team (growable list)
    let mut team = Team::new("Engineering");
    team.add_member(user.clone());
    team.add_member(User::new(2, "Bob").with_active(true));
    writeln!(out, "Team '{}' has {} members", team.name, team.size())?;

    // 6. Company (lazy map)
    let mut company = Company::new("TechCorp");
    company.add_employee("Alice", 1);
    company.add_employee("Bob", 2);
    company.add_employee("Charlie", 3);
    if let Some(id) = company.get_employee_id("Alice") {
        writeln!(out, "Alice's ID: {}", id)?;
    }

    // 7. Fixed array through a swappable processor
    let data: MyArray = [1, 2, 3, 4, 5];
    let mut processor: Box<dyn DataProcessor> = Box::new(ArrayDoubler);
    debug!(processor = processor.name(), "processing array");
    let doubled = processor.process(&data);
    writeln!(out, "Doubled: {}", format_array(&doubled))?;

    processor = Box::new(ArraySquarer);
    debug!(processor = processor.name(), "processing array");
    let squared = processor.process(&data);
    writeln!(out, "Squared: {}", format_array(&squared))?;

    // 8. Describable
    print_description(&user, out)?;
    print_description(&admin, out)?;

    // 9. Function values
    let mut calc = Calculator::new(add);
    writeln!(out, "5 + 3 = {}", calc.calculate(5, 3))?;

    calc.set_operation(subtract);
    writeln!(out, "5 - 3 = {}", calc.calculate(5, 3))?;

    calc.set_operation(|a, b| a * b);
    writeln!(out, "5 * 3 = {}", calc.calculate(5, 3))?;

    Ok(())
}
