use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Job, Message, Project, Service};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- contact ---

#[tokio::test]
async fn messages_start_empty() {
    let resp = app().oneshot(get("/api/messages")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let env: Value = body_json(resp).await;
    assert_eq!(env["success"], true);
    assert_eq!(env["data"], serde_json::json!([]));
}

#[tokio::test]
async fn contact_returns_201_with_server_fields() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/contact",
            r#"{"name":"Jane","email":"jane@x.com","message":"Hello"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let env: Value = body_json(resp).await;
    let message: Message = serde_json::from_value(env["data"].clone()).unwrap();
    assert_eq!(message.name, "Jane");
    assert_eq!(message.status, "unread");
    assert!(!message.id.is_empty());
}

#[tokio::test]
async fn contact_missing_name_returns_400_envelope() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/contact",
            r#"{"name":"","email":"jane@x.com","message":"Hello"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let env: Value = body_json(resp).await;
    assert_eq!(env["success"], false);
    assert_eq!(env["message"], "Name is required");
    assert!(env.get("data").is_none());
}

// --- projects ---

#[tokio::test]
async fn create_project_rejects_unknown_status() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/projects",
            r#"{"title":"X","description":"Y","status":"Paused"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let env: Value = body_json(resp).await;
    assert_eq!(env["message"], "Invalid status: Paused");
}

#[tokio::test]
async fn project_category_filter() {
    use tower::Service as _;

    let mut app = app().into_service();

    for (title, tags) in [("Vision", r#"["ai","cloud"]"#), ("Shop", r#"["web"]"#)] {
        let body = format!(
            r#"{{"title":"{title}","description":"d","status":"Completed","tags":{tags}}}"#
        );
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/api/projects", &body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/api/projects?category=AI"))
        .await
        .unwrap();
    let env: Value = body_json(resp).await;
    let projects: Vec<Project> = serde_json::from_value(env["data"].clone()).unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "Vision");

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/api/projects?category=all"))
        .await
        .unwrap();
    let env: Value = body_json(resp).await;
    assert_eq!(env["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn project_category_is_percent_decoded() {
    use tower::Service as _;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/projects",
            r#"{"title":"Shop","description":"d","status":"Completed","startDate":"2024-01-15","tags":["web dev"]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/api/projects?category=web%20dev"))
        .await
        .unwrap();
    let env: Value = body_json(resp).await;
    let projects: Vec<Project> = serde_json::from_value(env["data"].clone()).unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].start_date.as_deref(), Some("2024-01-15"));
}

// --- services ---

#[tokio::test]
async fn create_service_defaults_featured() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/services",
            r#"{"title":"Cloud Solutions","description":"Migrate","icon":"Cloud"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let env: Value = body_json(resp).await;
    let service: Service = serde_json::from_value(env["data"].clone()).unwrap();
    assert!(!service.featured);
    assert_eq!(service.icon.as_deref(), Some("Cloud"));
}

// --- testimonials ---

#[tokio::test]
async fn testimonial_rating_out_of_range_is_rejected() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/testimonials",
            r#"{"name":"Ana","content":"Great","rating":9}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn testimonial_half_star_rating_is_kept() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/testimonials",
            r#"{"name":"Ana","content":"Great","rating":4.5}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let env: Value = body_json(resp).await;
    assert_eq!(env["data"]["rating"], 4.5);
}

// --- careers & case studies ---

#[tokio::test]
async fn careers_are_seeded() {
    let resp = app().oneshot(get("/api/careers")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let env: Value = body_json(resp).await;
    let jobs: Vec<Job> = serde_json::from_value(env["data"].clone()).unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(env["data"][0]["type"], "Full-time");
}

#[tokio::test]
async fn case_studies_are_keyed_by_service() {
    let resp = app().oneshot(get("/api/case-studies")).await.unwrap();

    let env: Value = body_json(resp).await;
    assert_eq!(env["data"]["Cloud Solutions"][0]["id"], "cloud-1");
}

// --- resumes ---

#[tokio::test]
async fn resume_upload_reports_decoded_size() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/resumes",
            r#"{"name":"Sam","email":"sam@x.com","message":"","filename":"cv.pdf",
                "fileType":"application/pdf","fileDataBase64":"JVBERg=="}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let env: Value = body_json(resp).await;
    assert_eq!(env["data"]["filename"], "cv.pdf");
    assert_eq!(env["data"]["size"], 4);
}

#[tokio::test]
async fn resume_upload_rejects_bad_base64() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/resumes",
            r#"{"name":"Sam","email":"sam@x.com","filename":"cv.pdf",
                "fileType":"application/pdf","fileDataBase64":"%%%"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let env: Value = body_json(resp).await;
    assert_eq!(env["message"], "Invalid resume file data");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = app().oneshot(get("/api/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
