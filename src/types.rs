// 🔤 Custom Types - Primitive newtypes and collection aliases
// A named type says what a value MEANS, not just what it's made of.
//
// - UserId(1) can't be passed where a MyNumber is expected
// - Every newtype prints as its bare inner value
// - Floats use the shortest form, with an exponent at extreme magnitudes

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// PRIMITIVE NEWTYPES
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyNumber(pub i64);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyString(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MyFloat(pub f64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyBool(pub bool);

// ============================================================================
// USER FIELD TYPES
// ============================================================================

/// Stable numeric identity of a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// Display name of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName(pub String);

/// Numeric "body" attribute (weight, in the sample data)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UserBody(pub f64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserActive(pub bool);

impl From<MyNumber> for UserId {
    fn from(n: MyNumber) -> Self {
        UserId(n.0)
    }
}

impl From<&str> for UserName {
    fn from(s: &str) -> Self {
        UserName(s.to_string())
    }
}

impl From<&str> for MyString {
    fn from(s: &str) -> Self {
        MyString(s.to_string())
    }
}

impl UserName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Role label held by an admin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub role: String,
}

impl Role {
    pub fn new(role: impl Into<String>) -> Self {
        Role { role: role.into() }
    }
}

macro_rules! display_inner {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )*
    };
}

display_inner!(MyNumber, MyString, MyBool, UserId, UserName, UserActive);

/// Shortest float form, switching to `1e+21` / `1.5e-05` outside `[1e-4, 1e21)`
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if v == 0.0 {
        return v.to_string();
    }

    let sci = format!("{:e}", v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return v.to_string();
    };
    let exp: i32 = match exp.parse() {
        Ok(exp) => exp,
        Err(_) => return v.to_string(),
    };

    if (-4..21).contains(&exp) {
        v.to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

impl fmt::Display for MyFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_float(self.0))
    }
}

impl fmt::Display for UserBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_float(self.0))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.role)
    }
}

// ============================================================================
// COLLECTION TYPES
// ============================================================================

/// Length of `MyArray`, fixed by the type
pub const ARRAY_LEN: usize = 5;

/// Fixed size: cannot grow or shrink
pub type MyArray = [i64; ARRAY_LEN];

/// Dynamic size: grows on push
pub type MySlice = Vec<String>;

/// Key-value pairs (employee name → employee id)
pub type MyMap = HashMap<String, i64>;

/// Render an array the way the console demo shows it: `[1 2 3 4 5]`
pub fn format_array(data: &MyArray) -> String {
    let parts: Vec<String> = data.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(" "))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newtypes_print_inner_value() {
        assert_eq!(MyNumber(42).to_string(), "42");
        assert_eq!(MyString::from("hello").to_string(), "hello");
        assert_eq!(MyFloat(65.5).to_string(), "65.5");
        assert_eq!(MyFloat(1000.50).to_string(), "1000.5");
        assert_eq!(MyBool(true).to_string(), "true");
        assert_eq!(UserActive(false).to_string(), "false");
        assert_eq!(Role::new("Manager").to_string(), "Manager");
    }

    #[test]
    fn test_format_float_switches_to_exponent() {
        assert_eq!(format_float(1e21), "1e+21");
        assert_eq!(format_float(1.5e21), "1.5e+21");
        assert_eq!(format_float(1e20), "100000000000000000000");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.000015), "1.5e-05");
        assert_eq!(format_float(-2.5e-7), "-2.5e-07");
        assert_eq!(format_float(1e100), "1e+100");
        assert_eq!(MyFloat(1e21).to_string(), "1e+21");
        assert_eq!(UserBody(65.5).to_string(), "65.5");
    }

    #[test]
    fn test_format_float_special_values() {
        assert_eq!(format_float(0.0), "0");
        assert_eq!(format_float(f64::INFINITY), "+Inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_float(f64::NAN), "NaN");
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(UserId::default(), UserId(0));
        assert_eq!(UserName::default().as_str(), "");
        assert_eq!(MyFloat::default().to_string(), "0");
        assert!(!UserActive::default().0);
    }

    #[test]
    fn test_user_id_from_number() {
        let id: UserId = MyNumber(7).into();
        assert_eq!(id, UserId(7));
    }

    #[test]
    fn test_format_array() {
        assert_eq!(format_array(&[1, 2, 3, 4, 5]), "[1 2 3 4 5]");
        assert_eq!(format_array(&[0; ARRAY_LEN]), "[0 0 0 0 0]");
        assert_eq!(format_array(&[-1, 0, 1, 0, -1]), "[-1 0 1 0 -1]");
    }
}
