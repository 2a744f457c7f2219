pub mod blobs;
pub mod commits;
pub mod refs;
pub mod trees;
