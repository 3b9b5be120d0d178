pub mod achievements;
pub mod auth;
pub mod integrations;
pub mod json_error;
pub mod respond;
pub mod resumes;
pub mod system;
