//! The site's three submission forms and their send steps.

use thiserror::Error;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::flow::{FormFields, Notice, SubmissionFlow, SubmitOutcome};
use crate::transport::Transport;
use crate::types::{Message, NewMessage, ResumeReceipt, ResumeUpload};
use crate::upload::{ResumeFile, UploadError};

/// Why an upload-backed send step failed.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("no resume file attached")]
    MissingFile,

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn non_blank(value: &str) -> Option<String> {
    if blank(value) {
        None
    } else {
        Some(value.trim().to_string())
    }
}

fn check(required: &[(&'static str, bool)]) -> Vec<&'static str> {
    required
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect()
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    pub fn to_new_message(&self) -> NewMessage {
        NewMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            phone: non_blank(&self.phone),
            company: non_blank(&self.company),
        }
    }
}

impl FormFields for ContactForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        check(&[
            ("name", !blank(&self.name)),
            ("email", !blank(&self.email)),
            ("message", !blank(&self.message)),
        ])
    }

    fn success_notice(&self) -> Notice {
        Notice::success(
            "Message Sent!",
            "Thank you for contacting us. We'll get back to you soon.",
        )
    }

    fn failure_notice(&self) -> Notice {
        Notice::error("Error", "Failed to send message. Please try again later.")
    }
}

impl SubmissionFlow<ContactForm> {
    /// Submit the contact form through `POST /contact`.
    pub fn submit_to<T: Transport>(&mut self, client: &ApiClient<T>) -> SubmitOutcome<Message> {
        self.submit(|form| {
            client
                .contact()
                .submit(&form.to_new_message())
                .map(|env| env.data)
        })
    }
}

// ---------------------------------------------------------------------------
// Job application
// ---------------------------------------------------------------------------

/// Application for one open position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobApplicationForm {
    /// Title of the position applied for, if one was selected.
    pub position: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    pub portfolio: String,
    pub resume: Option<ResumeFile>,
}

impl JobApplicationForm {
    /// Build the upload payload, reading and encoding the resume file.
    pub fn to_upload(&self) -> Result<ResumeUpload, SubmissionError> {
        let file = self.resume.as_ref().ok_or(SubmissionError::MissingFile)?;
        let encoded = file.encode()?;
        Ok(ResumeUpload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.cover_letter.clone(),
            filename: encoded.filename,
            file_type: encoded.content_type,
            file_data_base64: encoded.data_base64,
            position: self.position.as_deref().and_then(non_blank),
            phone: non_blank(&self.phone),
            portfolio: non_blank(&self.portfolio),
        })
    }
}

impl FormFields for JobApplicationForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        check(&[
            ("name", !blank(&self.name)),
            ("email", !blank(&self.email)),
            ("cover_letter", !blank(&self.cover_letter)),
            ("resume", self.resume.is_some()),
        ])
    }

    fn success_notice(&self) -> Notice {
        Notice::success(
            "Application Submitted!",
            "Thank you for applying. We'll review your application and get back to you soon.",
        )
    }

    fn failure_notice(&self) -> Notice {
        Notice::error(
            "Error",
            "Failed to submit application. Please try again later.",
        )
    }
}

impl SubmissionFlow<JobApplicationForm> {
    pub fn submit_to<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
    ) -> SubmitOutcome<ResumeReceipt> {
        self.submit(|form| -> Result<ResumeReceipt, SubmissionError> {
            let upload = form.to_upload()?;
            Ok(client.resumes().upload(&upload)?.data)
        })
    }
}

// ---------------------------------------------------------------------------
// Open resume upload
// ---------------------------------------------------------------------------

/// The "send us your resume" form, not tied to a position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub resume: Option<ResumeFile>,
}

impl ResumeForm {
    pub fn to_upload(&self) -> Result<ResumeUpload, SubmissionError> {
        let file = self.resume.as_ref().ok_or(SubmissionError::MissingFile)?;
        let encoded = file.encode()?;
        Ok(ResumeUpload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            filename: encoded.filename,
            file_type: encoded.content_type,
            file_data_base64: encoded.data_base64,
            position: None,
            phone: None,
            portfolio: None,
        })
    }
}

impl FormFields for ResumeForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        check(&[
            ("name", !blank(&self.name)),
            ("email", !blank(&self.email)),
            ("resume", self.resume.is_some()),
        ])
    }

    fn validation_notice(&self) -> Notice {
        Notice::error("Error", "Please provide name, email and attach your resume.")
    }

    fn success_notice(&self) -> Notice {
        Notice::success(
            "Resume Sent!",
            "Thanks, we've received your resume and will be in touch.",
        )
    }

    fn failure_notice(&self) -> Notice {
        Notice::error("Error", "Failed to upload resume.")
    }
}

impl SubmissionFlow<ResumeForm> {
    /// Encode the attached file, then `POST /resumes`.
    pub fn submit_to<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
    ) -> SubmitOutcome<ResumeReceipt> {
        self.submit(|form| -> Result<ResumeReceipt, SubmissionError> {
            let upload = form.to_upload()?;
            Ok(client.resumes().upload(&upload)?.data)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::decode_file_data;

    #[test]
    fn contact_requires_name_email_message() {
        let form = ContactForm::default();
        assert_eq!(form.missing_fields(), vec!["name", "email", "message"]);

        let form = ContactForm {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hello".to_string(),
            ..Default::default()
        };
        assert!(form.missing_fields().is_empty());
    }

    #[test]
    fn contact_optional_fields_are_omitted_when_blank() {
        let form = ContactForm {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: "  ".to_string(),
            company: "Acme".to_string(),
            message: "Hello".to_string(),
        };
        let msg = form.to_new_message();
        assert_eq!(msg.phone, None);
        assert_eq!(msg.company.as_deref(), Some("Acme"));
    }

    #[test]
    fn application_requires_cover_letter_and_resume() {
        let form = JobApplicationForm {
            name: "Sam".to_string(),
            email: "sam@x.com".to_string(),
            ..Default::default()
        };
        assert_eq!(form.missing_fields(), vec!["cover_letter", "resume"]);
    }

    #[test]
    fn application_upload_carries_cover_letter_and_extras() {
        let form = JobApplicationForm {
            position: Some("Rust Engineer".to_string()),
            name: "Sam".to_string(),
            email: "sam@x.com".to_string(),
            phone: String::new(),
            cover_letter: "I like Rust".to_string(),
            portfolio: "https://sam.dev".to_string(),
            resume: Some(ResumeFile::from_bytes("cv.pdf", "application/pdf", b"%PDF".to_vec())),
        };
        let upload = form.to_upload().unwrap();
        assert_eq!(upload.message, "I like Rust");
        assert_eq!(upload.position.as_deref(), Some("Rust Engineer"));
        assert_eq!(upload.portfolio.as_deref(), Some("https://sam.dev"));
        assert_eq!(upload.phone, None);
        assert_eq!(decode_file_data(&upload.file_data_base64).unwrap(), b"%PDF");
    }

    #[test]
    fn resume_form_has_its_own_validation_notice() {
        let form = ResumeForm::default();
        assert_eq!(form.missing_fields(), vec!["name", "email", "resume"]);
        assert_eq!(
            form.validation_notice().description,
            "Please provide name, email and attach your resume."
        );
    }

    #[test]
    fn resume_upload_without_file_is_an_error() {
        let form = ResumeForm {
            name: "Sam".to_string(),
            email: "sam@x.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(form.to_upload(), Err(SubmissionError::MissingFile)));
    }
}
