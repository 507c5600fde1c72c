pub mod health;
pub mod run_task;
pub mod tasks;
