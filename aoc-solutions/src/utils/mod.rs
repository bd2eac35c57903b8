pub mod license_tree;
pub mod step_scheduler;
