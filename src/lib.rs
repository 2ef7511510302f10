// Type Tour - Core Library
// Record types, capabilities and function values shared by the CLI and tests

pub mod types;
pub mod entities;
pub mod describe;
pub mod processor;
pub mod calculator;
pub mod settings;
pub mod demo;

// Re-export commonly used types
pub use types::{
    MyNumber, MyString, MyFloat, MyBool,
    UserId, UserName, UserBody, UserActive, Role,
    MyArray, MySlice, MyMap, ARRAY_LEN, format_array, format_float,
};
pub use entities::{
    User, AccountBalance,
    Admin, SuperAdmin,
    Team, Company,
};
pub use describe::{Describable, print_description};
pub use processor::{DataProcessor, ArrayDoubler, ArraySquarer};
pub use calculator::{Calculator, Operation, add, subtract, demonstrate_function_values};
pub use settings::{Settings, USERNAME, AGE, PUBLIC_USERNAME};
pub use demo::{run_basics, demonstrate_all_types, sample_user};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
