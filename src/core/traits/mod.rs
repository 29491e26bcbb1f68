pub mod segment_store;
