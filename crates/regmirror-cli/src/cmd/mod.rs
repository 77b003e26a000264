pub mod auth;
pub mod backup;
pub mod key;
pub mod local;
pub mod upload;
pub mod url;
