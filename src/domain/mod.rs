pub mod branch;
pub mod change;
pub mod report;
pub mod user;
