pub mod auth;
pub mod core;
pub mod dashboard;
pub mod fees;
pub mod jobs;
pub mod nav;
pub mod staff;
pub mod students;
