pub mod branches;
pub mod contents;
pub mod get;
