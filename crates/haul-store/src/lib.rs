//! # Haul Store
//!
//! 狀態與目錄的磁碟持久化

pub mod catalog_file;
pub mod state_file;

// Re-export 主要類型
pub use catalog_file::load_catalog;
pub use state_file::{SavedState, StateStore, DATA_VERSION, STATE_FILE_NAME};
