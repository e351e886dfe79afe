//! Notification endpoint integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::common::{parse_body, request, TestApp};

mod test_new_notifications {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_second_page_of_25_unread() {
        let app = TestApp::new();
        app.seed_notifications("u1", 25).await;

        let resp = app
            .router()
            .oneshot(request(
                Method::GET,
                "/v1/notifications/new?id=u1&limit=10&notificationSet=2",
                None,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = parse_body(resp).await;
        assert_eq!(body["totalPages"], 3);

        let items = body["notifications"].as_array().unwrap();
        assert_eq!(items.len(), 10);
        assert_eq!(items[0]["message"], "Notification 11");
        assert_eq!(items[0]["type"], "common");
        assert_eq!(items[0]["isRead"], false);
    }

    #[tokio::test]
    async fn test_missing_parameters_are_400() {
        let app = TestApp::new();

        for uri in [
            "/v1/notifications/new?limit=10&notificationSet=1",
            "/v1/notifications/new?id=u1&notificationSet=1",
            "/v1/notifications/new?id=u1&limit=10",
            "/v1/notifications/new?id=&limit=10&notificationSet=1",
            "/v1/notifications/new?id=u1&limit=0&notificationSet=1",
            "/v1/notifications/new?id=u1&limit=abc&notificationSet=1",
            "/v1/notifications/new?id=u1&limit=101&notificationSet=1",
        ] {
            let resp = app
                .router()
                .oneshot(request(Method::GET, uri, None))
                .await
                .unwrap();

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "uri {}", uri);
            let body = parse_body(resp).await;
            assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
        }
    }

    #[tokio::test]
    async fn test_total_pages_drops_after_read_all() {
        let app = TestApp::new();
        app.seed_notifications("u1", 12).await;

        let resp = app
            .router()
            .oneshot(request(Method::PATCH, "/v1/notifications/read-all?id=u1", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(
            app.router()
                .oneshot(request(
                    Method::GET,
                    "/v1/notifications/new?id=u1&limit=5&notificationSet=1",
                    None,
                ))
                .await
                .unwrap(),
        )
        .await;

        // Items are still returned even though no page is counted
        assert_eq!(body["totalPages"], 0);
        assert_eq!(body["notifications"].as_array().unwrap().len(), 5);
    }
}

mod test_all_notifications {
    use super::*;

    #[tokio::test]
    async fn test_lists_only_the_users_notifications() {
        let app = TestApp::new();
        app.seed_notifications("u1", 3).await;
        app.seed_notifications("u2", 2).await;

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/v1/notifications?id=u2", None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = parse_body(resp).await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|n| n["userId"] == "u2"));
        assert_eq!(items[0]["message"], "Notification 1");
    }

    #[tokio::test]
    async fn test_missing_id_is_400() {
        let app = TestApp::new();

        let resp = app
            .router()
            .oneshot(request(Method::GET, "/v1/notifications", None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = parse_body(resp).await;
        assert_eq!(body["error"]["message"], "User ID is required");
    }
}

mod test_create_notification {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_201_and_persists() {
        let app = TestApp::new();

        let resp = app
            .router()
            .oneshot(request(
                Method::POST,
                "/v1/notifications",
                Some(json!({
                    "userId": "u1",
                    "message": "Your appointment is confirmed",
                    "type": "appointment",
                    "mention": "Dr. Asha Rao",
                    "link": "/appointments"
                })),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = parse_body(resp).await;
        assert_eq!(body["type"], "appointment");
        assert_eq!(body["isRead"], false);
        assert_eq!(body["mention"], "Dr. Asha Rao");
        assert_eq!(app.notifications.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_type_is_400() {
        let app = TestApp::new();

        let resp = app
            .router()
            .oneshot(request(
                Method::POST,
                "/v1/notifications",
                Some(json!({"userId": "u1", "message": "hi", "type": "promo"})),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(app.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_blank_message_is_400() {
        let app = TestApp::new();

        let resp = app
            .router()
            .oneshot(request(
                Method::POST,
                "/v1/notifications",
                Some(json!({"userId": "u1", "message": "   "})),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(app.notifications.is_empty());
    }
}

mod test_read_all {
    use super::*;

    #[tokio::test]
    async fn test_read_all_reports_count_and_is_idempotent() {
        let app = TestApp::new();
        app.seed_notifications("u1", 4).await;

        let first = parse_body(
            app.router()
                .oneshot(request(Method::PATCH, "/v1/notifications/read-all?id=u1", None))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(first, json!({"updated": 4}));

        let second = parse_body(
            app.router()
                .oneshot(request(Method::PATCH, "/v1/notifications/read-all?id=u1", None))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(second, json!({"updated": 0}));
    }

    #[tokio::test]
    async fn test_read_all_without_id_is_400() {
        let app = TestApp::new();

        let resp = app
            .router()
            .oneshot(request(Method::PATCH, "/v1/notifications/read-all", None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
