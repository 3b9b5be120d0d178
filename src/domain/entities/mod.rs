pub mod achievement;
pub mod integration;
pub mod resume;
pub mod token;
pub mod user;
