use std::collections::BTreeMap;

use crate::client::{ApiClient, RequestOptions};
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::CaseStudy;

/// Case studies grouped by the title of the service they showcase.
pub type CaseStudyIndex = BTreeMap<String, Vec<CaseStudy>>;

pub struct CaseStudiesApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> CaseStudiesApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn get_all(&self) -> Result<Envelope<CaseStudyIndex>, ApiError> {
        self.client.request("/case-studies", RequestOptions::get())
    }
}
