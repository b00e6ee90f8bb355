//! Figures for the admin dashboard, computed from fetched records.

use chrono::{DateTime, Utc};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{Message, Project, ProjectStatus, Service};

pub const RECENT_ACTIVITY_LIMIT: usize = 5;
const PREVIEW_CHARS: usize = 60;

/// Project count per status. Every status is present, even at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectStatusCounts {
    pub in_progress: usize,
    pub completed: usize,
    pub on_hold: usize,
}

impl ProjectStatusCounts {
    /// Projects without a status are counted as on hold.
    pub fn tally(projects: &[Project]) -> Self {
        let mut counts = Self::default();
        for project in projects {
            match project.status.unwrap_or(ProjectStatus::OnHold) {
                ProjectStatus::InProgress => counts.in_progress += 1,
                ProjectStatus::Completed => counts.completed += 1,
                ProjectStatus::OnHold => counts.on_hold += 1,
            }
        }
        counts
    }

    pub fn get(&self, status: ProjectStatus) -> usize {
        match status {
            ProjectStatus::InProgress => self.in_progress,
            ProjectStatus::Completed => self.completed,
            ProjectStatus::OnHold => self.on_hold,
        }
    }

    /// `(label, count)` pairs in chart order.
    pub fn series(&self) -> Vec<(&'static str, usize)> {
        ProjectStatus::ALL
            .iter()
            .map(|status| (status.label(), self.get(*status)))
            .collect()
    }
}

/// One line of the "recent activity" feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// The first `limit` messages, in the order the API returned them.
pub fn recent_activity(messages: &[Message], limit: usize) -> Vec<Activity> {
    messages
        .iter()
        .take(limit)
        .map(|message| Activity {
            id: message.id.clone(),
            title: format!("New message from {}", message.name),
            description: preview(&message.message),
            created_at: message.created_at,
        })
        .collect()
}

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let cut: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_messages: usize,
    pub total_projects: usize,
    pub total_services: usize,
    pub project_status: ProjectStatusCounts,
    pub recent_activity: Vec<Activity>,
}

impl DashboardSummary {
    pub fn from_records(messages: &[Message], projects: &[Project], services: &[Service]) -> Self {
        Self {
            total_messages: messages.len(),
            total_projects: projects.len(),
            total_services: services.len(),
            project_status: ProjectStatusCounts::tally(projects),
            recent_activity: recent_activity(messages, RECENT_ACTIVITY_LIMIT),
        }
    }

    /// Fetch messages, projects and services, then summarize them.
    pub fn load<T: Transport>(client: &ApiClient<T>) -> Result<Self, ApiError> {
        let messages = client.contact().get_all()?.data;
        let projects = client.projects().get_all(None)?.data;
        let services = client.services().get_all()?.data;
        Ok(Self::from_records(&messages, &projects, &services))
    }
}
