// Entity Models
// Plain records composed by ownership, never by implicit promotion:
//
// - User owns an AccountBalance
// - Admin owns a User, SuperAdmin owns an Admin
// - Team holds Users, Company maps names to ids

pub mod user;
pub mod admin;
pub mod team;
pub mod company;

pub use user::{User, AccountBalance};
pub use admin::{Admin, SuperAdmin};
pub use team::Team;
pub use company::Company;
