//! Resource namespaces: fixed endpoint paths over `ApiClient::request`.
//!
//! Each namespace borrows the client and adds nothing but a path, a method
//! and a payload type.

mod careers;
mod case_studies;
mod contact;
mod projects;
mod resumes;
mod services;
mod testimonials;

pub use careers::CareersApi;
pub use case_studies::{CaseStudiesApi, CaseStudyIndex};
pub use contact::ContactApi;
pub use projects::{projects_endpoint, ProjectsApi, ALL_CATEGORIES};
pub use resumes::ResumesApi;
pub use services::ServicesApi;
pub use testimonials::TestimonialsApi;
