pub mod achievements;
pub mod auth;
pub mod extractors;
pub mod integrations;
pub mod resumes;
pub mod skills;
pub mod synthesis;
