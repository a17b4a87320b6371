//! Ports for job postings and interview screenings.

mod jobs;
mod screenings;

pub use jobs::{JobPostingFilter, JobPostingRepository};
pub use screenings::{ScreeningFilter, ScreeningInput, ScreeningRepository};
