pub mod check;
pub mod delete;
pub mod list;
pub mod purge;
