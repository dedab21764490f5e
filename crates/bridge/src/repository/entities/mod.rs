//! SeaORM entities for the tables the bridge reads and writes.
//!
//! Only the columns the bridge needs are declared.

pub mod problem;
pub mod problem_feedback;
pub mod settings;
pub mod user;
