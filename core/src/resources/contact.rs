use crate::client::{ApiClient, RequestOptions};
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{Message, NewMessage};

/// Contact form submissions and the admin message list.
pub struct ContactApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> ContactApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `POST /contact`. The server assigns id, timestamp and status.
    pub fn submit(&self, message: &NewMessage) -> Result<Envelope<Message>, ApiError> {
        self.client.request("/contact", RequestOptions::post_json(message)?)
    }

    /// `GET /messages`.
    pub fn get_all(&self) -> Result<Envelope<Vec<Message>>, ApiError> {
        self.client.request("/messages", RequestOptions::get())
    }
}
