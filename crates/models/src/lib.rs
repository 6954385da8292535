pub mod bookmark;
pub mod db;
pub mod errors;
