pub mod download_url;
pub mod upload;
