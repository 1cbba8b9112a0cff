pub mod api;
pub mod cli;
pub mod constants;
pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

pub use api::routes::app;
pub use db::{Database, Meeting, MeetingRecord, MeetingRepository};
