pub mod message;
pub mod event;
pub mod page;
pub mod profile;
pub mod config;
pub mod error;


pub use error::FolioError;
pub type Result<T> = std::result::Result<T, FolioError>;
