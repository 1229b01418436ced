pub mod download;
pub mod format;
pub mod input;
pub mod navigation;
pub mod storage;
pub mod token;
pub mod upload;
