use crate::client::{ApiClient, RequestOptions};
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::Job;

pub struct CareersApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> CareersApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `GET /careers`: the open positions.
    pub fn get_all(&self) -> Result<Envelope<Vec<Job>>, ApiError> {
        self.client.request("/careers", RequestOptions::get())
    }
}
