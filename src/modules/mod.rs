pub mod jobs;
pub mod transfer;
