pub mod in_memory;
pub mod seed;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
