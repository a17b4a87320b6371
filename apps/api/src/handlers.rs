pub mod call_insights;
pub mod employees;
pub mod health;
pub mod job_postings;
pub mod organization;
pub mod roles;
pub mod screenings;
