pub mod grade;
pub mod import;
pub mod questions;
