use crate::client::{ApiClient, RequestOptions};
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{NewService, Service};

pub struct ServicesApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> ServicesApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn get_all(&self) -> Result<Envelope<Vec<Service>>, ApiError> {
        self.client.request("/services", RequestOptions::get())
    }

    pub fn create(&self, service: &NewService) -> Result<Envelope<Service>, ApiError> {
        self.client.request("/services", RequestOptions::post_json(service)?)
    }
}
