//! Whole-app routing: every page mounted together on one `AppState`.

use actix_web::{http::StatusCode, test, App};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::init_routes;
use crate::modules::admin::application::services::AdminPageService;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactError;
use crate::modules::project::adapter::outgoing::ProjectSeed;
use crate::shared::api::{custom_json_config, custom_path_config};
use crate::tests::support::app_state_builder::TestAppStateBuilder;
use crate::tests::support::fixtures::FixedClock;
use crate::tests::support::stubs::StubSubmitContactUseCase;

macro_rules! app {
    ($builder:expr) => {
        test::init_service(
            App::new()
                .app_data($builder.build())
                .app_data(custom_json_config())
                .app_data(custom_path_config())
                .configure(init_routes),
        )
        .await
    };
}

macro_rules! call {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = if status == StatusCode::NO_CONTENT {
            Value::Null
        } else {
            test::read_body_json(resp).await
        };
        (status, body)
    }};
}

macro_rules! open {
    ($app:expr, $page:expr) => {{
        let (status, body) = call!(
            $app,
            test::TestRequest::post().uri(&format!("/api/admin/{}/sessions", $page))
        );
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["session_id"].as_str().unwrap().to_string()
    }};
}

#[actix_web::test]
async fn every_admin_page_opens_on_its_seed() {
    let app = app!(TestAppStateBuilder::default());

    for (page, total) in [
        ("projects", 3),
        ("experience", 3),
        ("testimonials", 3),
        ("blog", 2),
    ] {
        let (status, body) = call!(
            app,
            test::TestRequest::post().uri(&format!("/api/admin/{}/sessions", page))
        );
        assert_eq!(status, StatusCode::CREATED, "{page}");
        assert_eq!(body["data"]["page"], page);
        assert_eq!(body["data"]["total"], total, "{page}");
    }
}

#[actix_web::test]
async fn project_created_from_comma_separated_stack() {
    let app = app!(TestAppStateBuilder::default());
    let sid = open!(app, "projects");
    let draft_uri = format!("/api/admin/projects/sessions/{}/draft", sid);

    call!(app, test::TestRequest::post().uri(&draft_uri));
    let (status, _) = call!(
        app,
        test::TestRequest::put().uri(&draft_uri).set_json(json!({
            "title": "Storefront",
            "category": "E-commerce",
            "description": "Online shop",
            "technologies": "React, Node.js, Stripe",
        }))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri(&format!("{}/submit", draft_uri))
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["notification"]["message"],
        "Project created successfully"
    );
    let page = &body["data"]["page"];
    assert_eq!(page["total"], 4);
    let first = &page["table"]["body"]["rows"][0];
    assert_eq!(first["cells"][0]["text"], "Storefront");
    assert_eq!(
        first["cells"][3],
        json!({ "kind": "tags", "items": ["React", "Node.js", "Stripe"], "overflow": 0 })
    );
}

#[actix_web::test]
async fn testimonial_toggle_approves_pending_entry() {
    let app = app!(TestAppStateBuilder::default());
    let sid = open!(app, "testimonials");

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri(&format!(
            "/api/admin/testimonials/sessions/{}/rows/3/toggle-visibility",
            sid
        ))
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["notification"]["message"],
        "Testimonial approved"
    );
}

#[actix_web::test]
async fn blog_post_gets_slug_id_and_default_author() {
    let app = app!(TestAppStateBuilder::default());
    let sid = open!(app, "blog");
    let draft_uri = format!("/api/admin/blog/sessions/{}/draft", sid);

    call!(app, test::TestRequest::post().uri(&draft_uri));
    call!(
        app,
        test::TestRequest::put().uri(&draft_uri).set_json(json!({
            "title": "Hello World",
            "excerpt": "First post",
            "category": "News",
            "read_time": "3 min read",
            "image": "/img/hello.jpg",
        }))
    );
    let (status, body) = call!(
        app,
        test::TestRequest::post().uri(&format!("{}/submit", draft_uri))
    );

    assert_eq!(status, StatusCode::OK);
    let first = &body["data"]["page"]["table"]["body"]["rows"][0];
    assert_eq!(first["id"], "hello-world");
    assert_eq!(first["cells"][2]["text"], "2024-05-01");

    let (_, body) = call!(
        app,
        test::TestRequest::post().uri(&format!(
            "/api/admin/blog/sessions/{}/rows/hello-world/edit",
            sid
        ))
    );
    assert_eq!(body["data"]["page"]["draft"]["author"], "Likhil");
}

#[actix_web::test]
async fn sessions_belong_to_their_page() {
    let app = app!(TestAppStateBuilder::default());
    let sid = open!(app, "projects");

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri(&format!("/api/admin/experience/sessions/{}", sid))
    );

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "SESSION_NOT_FOUND");
}

#[actix_web::test]
async fn malformed_session_id_is_not_found() {
    let app = app!(TestAppStateBuilder::default());

    let (status, body) = call!(
        app,
        test::TestRequest::get().uri("/api/admin/projects/sessions/not-a-uuid")
    );

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "SESSION_NOT_FOUND");
}

#[actix_web::test]
async fn session_limit_is_per_page() {
    let limited = AdminPageService::new(
        Arc::new(ProjectSeed),
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())),
        "Likhil",
        1,
    );
    let app = app!(TestAppStateBuilder::default().with_project_admin_page(limited));

    open!(app, "projects");
    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/admin/projects/sessions")
    );
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "SESSION_LIMIT_REACHED");

    open!(app, "experience");
}

#[actix_web::test]
async fn dashboard_and_health_are_mounted() {
    let app = app!(TestAppStateBuilder::default());

    let (status, body) = call!(app, test::TestRequest::get().uri("/api/admin/dashboard"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["stats"]["total_projects"], 0);

    let (status, body) = call!(app, test::TestRequest::get().uri("/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn contact_failure_from_use_case_is_mapped() {
    let app = app!(TestAppStateBuilder::default()
        .with_submit_contact(StubSubmitContactUseCase::failing(SubmitContactError::InvalidEmail)));

    let (status, body) = call!(
        app,
        test::TestRequest::post().uri("/api/contact").set_json(json!({
            "name": "Ana",
            "email": "ana@example.com",
            "project_type": "Other",
            "message": "Hi",
        }))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_EMAIL");
}

#[actix_web::test]
async fn malformed_contact_body_is_validation_error() {
    let app = app!(TestAppStateBuilder::default());

    let (status, body) = call!(
        app,
        test::TestRequest::post()
            .uri("/api/contact")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
