pub mod dir_store;
#[cfg(test)]
pub mod memory_store;
