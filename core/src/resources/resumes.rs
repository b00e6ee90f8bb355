use crate::client::{ApiClient, RequestOptions};
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{ResumeReceipt, ResumeUpload};

pub struct ResumesApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> ResumesApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `POST /resumes` with the file already base64-encoded in `upload`.
    pub fn upload(&self, upload: &ResumeUpload) -> Result<Envelope<ResumeReceipt>, ApiError> {
        self.client.request("/resumes", RequestOptions::post_json(upload)?)
    }
}
