pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::dashboard::handlers as dashboard;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route(
            "/api/profile",
            get(profile::handle_get_profile).post(profile::handle_save_profile),
        )
        .route("/api/profile/submit", post(profile::handle_submit_profile))
        // Guidance API
        .route("/api/dashboard", get(dashboard::handle_get_dashboard))
        .route("/api/guidance/preview", post(dashboard::handle_preview))
        .route("/api/skills/:skill", get(dashboard::handle_get_skill))
        // Chat API
        .route("/api/chat", post(chat::handle_chat))
        .route("/api/chat/history", get(chat::handle_chat_history))
        .route("/api/chat/feedback", post(chat::handle_chat_feedback))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::auth::{DEMO_USER_ID, USER_ID_HEADER};
    use crate::guidance::engine::{RecommendationEngine, ResolutionMode};
    use crate::guidance::knowledge_base::KnowledgeBase;
    use crate::storage::{GuidanceStore, MemoryStore};

    fn test_app() -> (Router, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let engine = RecommendationEngine::new(
            Arc::new(KnowledgeBase::builtin()),
            ResolutionMode::Unified,
        );
        let state = AppState {
            store: store.clone(),
            engine: Arc::new(engine),
        };
        (build_router(state), store)
    }

    fn profile_body(goals: &str, level: &str) -> Value {
        json!({
            "education": {"degree": "B.Tech", "field": "Computer Science"},
            "current_skills": {"technical": ["Python"], "soft": ["Communication"], "certifications": []},
            "career_goals": goals,
            "experience_level": level
        })
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        user: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header(USER_ID_HEADER, user);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = test_app();
        let (status, body) = send(&app, "GET", "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
        assert_eq!(body["resolution"], "unified");
    }

    #[tokio::test]
    async fn test_get_profile_before_saving_is_null() {
        let (app, _) = test_app();
        let (status, body) = send(&app, "GET", "/api/profile", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["data"]["profile"].is_null());
    }

    #[tokio::test]
    async fn test_save_then_get_profile() {
        let (app, _) = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/profile",
            None,
            Some(profile_body("software engineer", "student")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Profile saved successfully");
        assert_eq!(body["data"]["profile"]["user_id"], DEMO_USER_ID);
        let id = body["data"]["profile"]["id"].clone();

        let (_, body) = send(&app, "GET", "/api/profile", None, None).await;
        assert_eq!(body["data"]["profile"]["id"], id);
        assert_eq!(body["data"]["profile"]["career_goals"], "software engineer");
        assert_eq!(
            body["data"]["profile"]["current_skills"]["technical"][0],
            "Python"
        );
    }

    #[tokio::test]
    async fn test_validation_failure_is_400() {
        let (app, store) = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/profile",
            None,
            Some(profile_body("software", "  ")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(store.get_profile(DEMO_USER_ID).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let (app, _) = test_app();
        let (status, _) = send(
            &app,
            "POST",
            "/api/profile",
            None,
            Some(json!({"career_goals": "software"})),
        )
        .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_blank_user_header_is_401() {
        let (app, _) = test_app();
        let (status, body) = send(&app, "GET", "/api/profile", Some(" "), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_dashboard_without_profile() {
        let (app, _) = test_app();
        let (status, body) = send(&app, "GET", "/api/dashboard", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["has_profile"], false);
        assert!(body["data"]["user_profile"].is_null());
        assert!(body["data"]["career_recommendations"].is_null());
        assert!(body["data"]["job_recommendations"].is_null());
    }

    #[tokio::test]
    async fn test_submit_stores_report_served_by_dashboard() {
        let (app, store) = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/profile/submit",
            None,
            Some(profile_body("I want to be a software engineer", "student")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Profile submitted successfully");

        let report = store.get_report(DEMO_USER_ID).await.unwrap().unwrap();
        let profile = store.get_profile(DEMO_USER_ID).await.unwrap().unwrap();
        assert!(report.is_current_for(&profile));

        let (_, body) = send(&app, "GET", "/api/dashboard", None, None).await;
        let data = &body["data"];
        assert_eq!(data["has_profile"], true);
        assert_eq!(
            data["career_recommendations"]["career_path"],
            "Software Engineering"
        );
        assert_eq!(data["job_recommendations"][0]["company"], "Google");
        assert_eq!(data["job_recommendations"][0]["match_score"], 85);
        assert_eq!(data["skill_gap_analysis"]["missing_skills"][0], "JavaScript");
        assert_eq!(
            data["resume_guidance"]["strengths"][0],
            "Strong educational background in Computer Science"
        );
    }

    #[tokio::test]
    async fn test_dashboard_recomputes_after_plain_profile_update() {
        let (app, _) = test_app();
        send(
            &app,
            "POST",
            "/api/profile/submit",
            None,
            Some(profile_body("software engineer", "student")),
        )
        .await;
        send(
            &app,
            "POST",
            "/api/profile",
            None,
            Some(profile_body("cybersecurity", "student")),
        )
        .await;

        let (_, body) = send(&app, "GET", "/api/dashboard", None, None).await;
        assert_eq!(
            body["data"]["career_recommendations"]["career_path"],
            "Cybersecurity"
        );
        assert_eq!(body["data"]["job_recommendations"][0]["company"], "Cisco");
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let (app, _) = test_app();
        send(
            &app,
            "POST",
            "/api/profile",
            Some("alice"),
            Some(profile_body("devops", "student")),
        )
        .await;

        let (_, body) = send(&app, "GET", "/api/profile", Some("bob"), None).await;
        assert!(body["data"]["profile"].is_null());
        let (_, body) = send(&app, "GET", "/api/profile", Some("alice"), None).await;
        assert_eq!(body["data"]["profile"]["user_id"], "alice");
    }

    #[tokio::test]
    async fn test_preview_does_not_persist() {
        let (app, store) = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/guidance/preview",
            None,
            Some(profile_body("astronaut", "fresher")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"]["career_recommendations"]["career_path"],
            "Technology Professional"
        );
        assert_eq!(body["data"]["job_recommendations"].as_array().unwrap().len(), 3);
        assert!(store.get_profile(DEMO_USER_ID).await.unwrap().is_none());
        assert!(store.get_report(DEMO_USER_ID).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_skill_detail() {
        let (app, _) = test_app();
        let (status, body) = send(&app, "GET", "/api/skills/Python", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["category"], "Programming Language");
        assert_eq!(body["data"]["priority"], "High");
        assert_eq!(
            body["data"]["learning_resources"][0]["type"],
            "Documentation"
        );

        let (status, body) =
            send(&app, "GET", "/api/skills/Data%20Structures", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["skill"], "Data Structures");
        assert_eq!(
            body["data"]["learning_resources"][2]["url"],
            "https://www.udemy.com/topic/Data-Structures/"
        );
    }

    #[tokio::test]
    async fn test_chat_replies_by_keyword() {
        let (app, _) = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/api/chat",
            None,
            Some(json!({"message": "How should I format my resume?"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Resume tips"));
        assert!(body["data"]["timestamp"].is_string());

        let (_, body) = send(
            &app,
            "POST",
            "/api/chat",
            Some("alice"),
            Some(json!({"message": "hi", "context": {"page": "dashboard"}})),
        )
        .await;
        assert!(body["data"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Thank you for sharing"));
    }

    #[tokio::test]
    async fn test_chat_history_and_feedback() {
        let (app, _) = test_app();
        let (status, body) = send(&app, "GET", "/api/chat/history", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total"], 0);
        assert_eq!(body["data"]["messages"], json!([]));
        assert_eq!(body["message"], "Chat history feature coming soon");

        let (status, body) = send(
            &app,
            "POST",
            "/api/chat/feedback",
            None,
            Some(json!({"rating": 5, "comment": "useful"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["data"].is_null());
        assert_eq!(body["message"], "Feedback submitted successfully");
    }

    #[tokio::test]
    async fn test_chat_requires_message() {
        let (app, _) = test_app();
        let (status, _) = send(&app, "POST", "/api/chat", None, Some(json!({}))).await;
        assert!(status.is_client_error());
    }
}
