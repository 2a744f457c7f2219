pub mod exists;
pub mod get;
