mod conversions;
mod types;

pub use types::{
    JobPostingListQuery, JobPostingRequest, JobPostingResponse, ScreeningListQuery,
    ScreeningRequest, ScreeningResponse, ScreeningUpsertResponse, ScreeningWithEmployeeResponse,
};
