pub mod use_users;

pub use use_users::use_users;
