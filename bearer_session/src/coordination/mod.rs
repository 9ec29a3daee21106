mod access;
mod account;
mod errors;

pub use access::{check_mutate, check_read, check_read_and_rotate};
pub use account::{login, signup};
pub use errors::CoordinationError;
