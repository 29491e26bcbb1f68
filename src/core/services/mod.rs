pub mod audit_manager;
pub mod placement_engine;
