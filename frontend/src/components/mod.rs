pub mod header;
pub mod user_form;
pub mod user_list;

pub use header::Header;
pub use user_form::UserForm;
pub use user_list::UserList;
