//! Client core for the company site's REST API.
//!
//! # Overview
//! `ApiClient` builds `HttpRequest` values, hands them to a `Transport`, and
//! parses the `{ success, data, message? }` envelope every endpoint answers
//! with. Resource namespaces (`contact`, `services`, `projects`,
//! `testimonials`, `careers`, `case_studies`, `resumes`) fix the endpoint
//! paths. `SubmissionFlow` drives the contact, job application and resume
//! forms through validation, submission and reset.
//!
//! # Design
//! - Configuration is an explicit `ClientConfig`, passed at construction.
//! - The only I/O happens inside `Transport::execute`; everything around it
//!   is pure and tested without a server.
//! - One error kind, `ApiError::RequestFailed`, crosses the client boundary.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod catalog;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod envelope;
pub mod error;
pub mod flow;
pub mod forms;
pub mod http;
pub mod resources;
pub mod transport;
pub mod types;
pub mod upload;

pub use client::{ApiClient, RequestOptions};
pub use config::ClientConfig;
pub use envelope::Envelope;
pub use error::ApiError;
pub use flow::{FlowState, FormFields, Notice, NoticeKind, Rejection, SubmissionFlow, SubmitOutcome};
pub use forms::{ContactForm, JobApplicationForm, ResumeForm, SubmissionError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{
    CaseStudy, Job, Message, MessageStatus, NewMessage, NewProject, NewService, NewTestimonial,
    Project, ProjectStatus, ResumeReceipt, ResumeUpload, Service, Testimonial,
};
pub use upload::{ResumeFile, UploadError};
