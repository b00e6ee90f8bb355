use crate::client::{ApiClient, RequestOptions};
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{NewProject, Project};

/// Category value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Path for a project listing, with `?category=` only for a real category.
///
/// The value is percent-encoded; unreserved characters pass through as-is.
pub fn projects_endpoint(category: Option<&str>) -> String {
    match category {
        Some(category) if !category.is_empty() && category != ALL_CATEGORIES => {
            format!("/projects?category={}", urlencoding::encode(category))
        }
        _ => "/projects".to_string(),
    }
}

pub struct ProjectsApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> ProjectsApi<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn get_all(&self, category: Option<&str>) -> Result<Envelope<Vec<Project>>, ApiError> {
        self.client
            .request(&projects_endpoint(category), RequestOptions::get())
    }

    pub fn create(&self, project: &NewProject) -> Result<Envelope<Project>, ApiError> {
        self.client.request("/projects", RequestOptions::post_json(project)?)
    }
}
