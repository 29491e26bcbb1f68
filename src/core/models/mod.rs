pub mod log_file;
pub mod mutation;
pub mod record;
