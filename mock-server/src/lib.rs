use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

#[derive(Deserialize)]
pub struct NewMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    pub phone: Option<String>,
    pub company: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct NewService {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub icon: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    pub client: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

#[derive(Deserialize)]
pub struct NewTestimonial {
    #[serde(default)]
    pub name: String,
    pub role: Option<String>,
    #[serde(default)]
    pub content: String,
    pub rating: Option<f32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub experience: String,
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUpload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub file_data_base64: String,
    pub position: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResumeReceipt {
    #[serde(rename = "_id")]
    pub id: String,
    pub filename: String,
    pub size: u64,
}

/// A decoded resume as held by the server.
#[derive(Clone, Debug)]
pub struct StoredResume {
    pub receipt: ResumeReceipt,
    pub name: String,
    pub email: String,
    pub message: String,
    pub file_type: String,
    pub position: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
pub struct Store {
    pub messages: Vec<Message>,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub careers: Vec<Job>,
    pub case_studies: BTreeMap<String, Vec<CaseStudy>>,
    pub resumes: Vec<StoredResume>,
}

pub type Db = Arc<RwLock<Store>>;

type Reply<T> = (StatusCode, Json<Envelope<T>>);

fn ok<T>(status: StatusCode, data: T) -> Reply<T> {
    (
        status,
        Json(Envelope {
            success: true,
            data: Some(data),
            message: None,
        }),
    )
}

fn fail<T>(status: StatusCode, message: impl Into<String>) -> Reply<T> {
    let message = message.into();
    warn!(%status, %message, "rejecting request");
    (
        status,
        Json(Envelope {
            success: false,
            data: None,
            message: Some(message),
        }),
    )
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// First blank required field, as a "<Field> is required" message.
fn require(fields: &[(&str, &str)]) -> Result<(), String> {
    match fields.iter().find(|(_, value)| blank(value)) {
        Some((name, _)) => Err(format!("{name} is required")),
        None => Ok(()),
    }
}

/// Router with an empty store apart from seeded careers and case studies.
pub fn app() -> Router {
    app_with_store(seeded_store())
}

pub fn app_with_store(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    let api = Router::new()
        .route("/contact", post(submit_contact))
        .route("/messages", get(list_messages))
        .route("/services", get(list_services).post(create_service))
        .route("/projects", get(list_projects).post(create_project))
        .route("/testimonials", get(list_testimonials).post(create_testimonial))
        .route("/careers", get(list_careers))
        .route("/case-studies", get(list_case_studies))
        .route("/resumes", post(upload_resume))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub fn seeded_store() -> Store {
    let mut case_studies = BTreeMap::new();
    case_studies.insert(
        "Cloud Solutions".to_string(),
        vec![CaseStudy {
            id: "cloud-1".to_string(),
            title: "Cloud Migration for Fintech".to_string(),
            summary: "Migrated legacy systems to cloud-native architecture reducing infra costs by 28%."
                .to_string(),
            url: Some("https://example.com/case-studies/cloud-migration".to_string()),
            logo: Some("/assets/logos/cloud.png".to_string()),
        }],
    );

    Store {
        careers: vec![
            Job {
                id: "job-1".to_string(),
                title: "Senior Backend Engineer".to_string(),
                department: "Engineering".to_string(),
                location: "Remote".to_string(),
                kind: "Full-time".to_string(),
                experience: "5+ years".to_string(),
                description: "Design and run the APIs behind our client platforms.".to_string(),
                skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            },
            Job {
                id: "job-2".to_string(),
                title: "ML Engineer".to_string(),
                department: "AI".to_string(),
                location: "Silicon Valley, CA".to_string(),
                kind: "Full-time".to_string(),
                experience: "3+ years".to_string(),
                description: "Ship production models and the pipelines that feed them.".to_string(),
                skills: vec!["Python".to_string(), "MLOps".to_string()],
            },
        ],
        case_studies,
        ..Store::default()
    }
}

async fn submit_contact(State(db): State<Db>, Json(input): Json<NewMessage>) -> Reply<Message> {
    if let Err(message) = require(&[
        ("Name", input.name.as_str()),
        ("Email", input.email.as_str()),
        ("Message", input.message.as_str()),
    ]) {
        return fail(StatusCode::BAD_REQUEST, message);
    }
    let message = Message {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        email: input.email,
        message: input.message,
        phone: input.phone.filter(|v| !blank(v)),
        company: input.company.filter(|v| !blank(v)),
        created_at: Utc::now(),
        status: "unread".to_string(),
    };
    info!(id = %message.id, "contact message stored");
    // newest first
    db.write().await.messages.insert(0, message.clone());
    ok(StatusCode::CREATED, message)
}

async fn list_messages(State(db): State<Db>) -> Reply<Vec<Message>> {
    ok(StatusCode::OK, db.read().await.messages.clone())
}

async fn list_services(State(db): State<Db>) -> Reply<Vec<Service>> {
    ok(StatusCode::OK, db.read().await.services.clone())
}

async fn create_service(State(db): State<Db>, Json(input): Json<NewService>) -> Reply<Service> {
    if let Err(message) = require(&[
        ("Title", input.title.as_str()),
        ("Description", input.description.as_str()),
    ]) {
        return fail(StatusCode::BAD_REQUEST, message);
    }
    let service = Service {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        description: input.description,
        icon: input.icon,
        featured: input.featured.unwrap_or(false),
        created_at: Utc::now(),
    };
    db.write().await.services.push(service.clone());
    ok(StatusCode::CREATED, service)
}

#[derive(Deserialize)]
pub struct ProjectFilter {
    pub category: Option<String>,
}

async fn list_projects(
    State(db): State<Db>,
    Query(filter): Query<ProjectFilter>,
) -> Reply<Vec<Project>> {
    let store = db.read().await;
    let projects = match filter.category.as_deref() {
        None | Some("") | Some("all") => store.projects.clone(),
        Some(category) => store
            .projects
            .iter()
            .filter(|p| p.tags.iter().any(|t| t.eq_ignore_ascii_case(category)))
            .cloned()
            .collect(),
    };
    ok(StatusCode::OK, projects)
}

const PROJECT_STATUSES: [&str; 3] = ["In Progress", "Completed", "On Hold"];

async fn create_project(State(db): State<Db>, Json(input): Json<NewProject>) -> Reply<Project> {
    if let Err(message) = require(&[
        ("Title", input.title.as_str()),
        ("Description", input.description.as_str()),
    ]) {
        return fail(StatusCode::BAD_REQUEST, message);
    }
    if !PROJECT_STATUSES.contains(&input.status.as_str()) {
        return fail(StatusCode::BAD_REQUEST, format!("Invalid status: {}", input.status));
    }
    let project = Project {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        description: input.description,
        status: input.status,
        client: input.client,
        start_date: input.start_date,
        end_date: input.end_date,
        tags: input.tags,
    };
    db.write().await.projects.push(project.clone());
    ok(StatusCode::CREATED, project)
}

async fn list_testimonials(State(db): State<Db>) -> Reply<Vec<Testimonial>> {
    ok(StatusCode::OK, db.read().await.testimonials.clone())
}

async fn create_testimonial(
    State(db): State<Db>,
    Json(input): Json<NewTestimonial>,
) -> Reply<Testimonial> {
    if let Err(message) = require(&[
        ("Name", input.name.as_str()),
        ("Content", input.content.as_str()),
    ]) {
        return fail(StatusCode::BAD_REQUEST, message);
    }
    if matches!(input.rating, Some(r) if !(1.0..=5.0).contains(&r)) {
        return fail(StatusCode::BAD_REQUEST, "Rating must be between 1 and 5");
    }
    let testimonial = Testimonial {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        role: input.role,
        content: input.content,
        rating: input.rating,
    };
    db.write().await.testimonials.push(testimonial.clone());
    ok(StatusCode::CREATED, testimonial)
}

async fn list_careers(State(db): State<Db>) -> Reply<Vec<Job>> {
    ok(StatusCode::OK, db.read().await.careers.clone())
}

async fn list_case_studies(State(db): State<Db>) -> Reply<BTreeMap<String, Vec<CaseStudy>>> {
    ok(StatusCode::OK, db.read().await.case_studies.clone())
}

async fn upload_resume(State(db): State<Db>, Json(input): Json<ResumeUpload>) -> Reply<ResumeReceipt> {
    if let Err(message) = require(&[
        ("Name", input.name.as_str()),
        ("Email", input.email.as_str()),
        ("Filename", input.filename.as_str()),
        ("File data", input.file_data_base64.as_str()),
    ]) {
        return fail(StatusCode::BAD_REQUEST, message);
    }
    let bytes = match STANDARD.decode(input.file_data_base64.as_bytes()) {
        Ok(bytes) => bytes,
        Err(_) => return fail(StatusCode::BAD_REQUEST, "Invalid resume file data"),
    };
    let receipt = ResumeReceipt {
        id: Uuid::new_v4().to_string(),
        filename: input.filename,
        size: bytes.len() as u64,
    };
    info!(id = %receipt.id, size = receipt.size, "resume stored");
    db.write().await.resumes.push(StoredResume {
        receipt: receipt.clone(),
        name: input.name,
        email: input.email,
        message: input.message,
        file_type: input.file_type,
        position: input.position,
        bytes,
    });
    ok(StatusCode::CREATED, receipt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_message() {
        let (status, Json(env)) = ok(StatusCode::OK, vec![1, 2]);
        assert_eq!(status, StatusCode::OK);
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": [1, 2]}));
    }

    #[test]
    fn failure_envelope_omits_data() {
        let (status, Json(env)) = fail::<Message>(StatusCode::BAD_REQUEST, "Name is required");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "Name is required"})
        );
    }

    #[test]
    fn require_names_first_blank_field() {
        assert_eq!(
            require(&[("Name", "Jane"), ("Email", " "), ("Message", "")]),
            Err("Email is required".to_string())
        );
        assert_eq!(require(&[("Name", "Jane")]), Ok(()));
    }

    #[test]
    fn message_serializes_with_wire_names() {
        let message = Message {
            id: "m1".to_string(),
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hello".to_string(),
            phone: None,
            company: None,
            created_at: Utc::now(),
            status: "unread".to_string(),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["_id"], "m1");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn seeded_store_has_careers_and_case_studies() {
        let store = seeded_store();
        assert_eq!(store.careers.len(), 2);
        assert!(store.case_studies.contains_key("Cloud Solutions"));
        assert!(store.messages.is_empty());
    }
}
