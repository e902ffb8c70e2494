pub mod asteroid_details;
pub mod dashboard;
