use crate::client::{ApiClient, RequestOptions};
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{NewTestimonial, Testimonial};

pub struct TestimonialsApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> TestimonialsApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn get_all(&self) -> Result<Envelope<Vec<Testimonial>>, ApiError> {
        self.client.request("/testimonials", RequestOptions::get())
    }

    pub fn create(&self, testimonial: &NewTestimonial) -> Result<Envelope<Testimonial>, ApiError> {
        self.client
            .request("/testimonials", RequestOptions::post_json(testimonial)?)
    }
}
