//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod access;
mod call_analysis;
mod employee;
mod ids;
mod organization;
mod recruitment;

pub use access::{
    CrudFlags, PermissionCategory, PermissionEntry, Role, RoleAssignment, SidebarMenu,
    SidebarSubMenu, slugify,
};
pub use call_analysis::{
    AnalysisType, CallAnalysis, CallMessage, CallSummary, CallTimespan, MAX_RESPONSE_GAP_SECONDS,
    MIN_RESPONSE_GAP_SECONDS, Sentiment, SentimentAnalysis, SentimentBreakdown, TopicAnalysis,
    TopicConfidence, analyze_call, analyze_sentiment, analyze_topics, average_response_time,
    parse_call_messages, summarize,
};
pub use employee::{EMAIL_MAX_LENGTH, EmailAddress, Employee, EmployeeDetails};
pub use ids::{
    BranchId, DepartmentId, DesignationId, EmployeeId, JobId, PermissionCategoryId,
    PermissionEntryId, RoleAssignmentId, RoleId, ScreeningId, SidebarMenuId, SidebarSubMenuId,
};
pub use organization::{Branch, Department, Designation};
pub use recruitment::{
    DEFAULT_JOB_PRIORITY, DEFAULT_JOB_STATUS, InterviewScreening, JobPosting, JobPostingDetails,
    ScreeningStatus,
};
