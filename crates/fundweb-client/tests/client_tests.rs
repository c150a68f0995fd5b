//! Tests for the backend client.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real backend.

use fundweb_client::{BackendClient, Category, ClientError, DonationBackend, NewCreator};
use std::time::Duration;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BackendClient {
    BackendClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

fn sample_new_creator() -> NewCreator {
    NewCreator {
        name: "Asha Rao".to_string(),
        category: Category::Charity,
        email: "asha@example.com".to_string(),
        username: "asha".to_string(),
        password: "secret".to_string(),
        mobile: "9876543210".to_string(),
        location: "Chennai".to_string(),
    }
}

// =============================================================================
// Creator Listing Tests
// =============================================================================

mod creators {
    use super::*;

    #[tokio::test]
    async fn test_all_creators_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/admin/allcreators"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 1,
                    "name": "Asha Rao",
                    "category": "Charity",
                    "email": "asha@example.com",
                    "username": "asha",
                    "mobileno": "9876543210",
                    "location": "Chennai"
                },
                {
                    "id": 2,
                    "name": "Bora Labs",
                    "category": "Startup",
                    "email": null,
                    "username": "bora",
                    "mobileno": null,
                    "location": "Pune"
                }
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let creators = client.all_creators().await.unwrap();

        assert_eq!(creators.len(), 2);
        assert_eq!(creators[0].name, "Asha Rao");
        assert_eq!(creators[0].category, Category::Charity);
        assert_eq!(creators[1].email, None);
        assert_eq!(creators[1].mobile, None);
    }

    #[tokio::test]
    async fn test_all_creators_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/admin/allcreators"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.all_creators().await;

        match result.unwrap_err() {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("Internal Server Error"));
            }
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_all_creators_invalid_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/admin/allcreators"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.all_creators().await;

        match result.unwrap_err() {
            ClientError::ParseError(_) => {}
            e => panic!("Expected ParseError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_all_creators_unreachable_backend() {
        let client = BackendClient::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
        let result = client.all_creators().await;

        match result.unwrap_err() {
            ClientError::Unreachable(_) | ClientError::Request(_) => {}
            e => panic!("Expected Unreachable or Request error, got: {:?}", e),
        }
    }
}

// =============================================================================
// Creator Mutation Tests
// =============================================================================

mod mutations {
    use super::*;

    #[tokio::test]
    async fn test_add_creator_returns_success_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/admin/addcreator"))
            .and(body_string_contains("mobileno=9876543210"))
            .and(body_string_contains("category=Charity"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Creator added successfully"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let message = client.add_creator(&sample_new_creator()).await.unwrap();
        assert_eq!(message, "Creator added successfully");
    }

    #[tokio::test]
    async fn test_add_creator_error_payload_passthrough() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/admin/addcreator"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Username already taken"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.add_creator(&sample_new_creator()).await;

        match result.unwrap_err() {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Username already taken");
            }
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_delete_creator_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/admin/deletecreator/12"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        assert!(client.delete_creator(12).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_creator_already_gone() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/admin/deletecreator/99"))
            .respond_with(ResponseTemplate::new(404).set_body_string("No such creator"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        // 404 is treated as already deleted
        assert!(client.delete_creator(99).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_creator_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/admin/deletecreator/12"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.delete_creator(12).await;

        match result.unwrap_err() {
            ClientError::ServerError { status, .. } => assert_eq!(status, 500),
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }
}

// =============================================================================
// Donation History Tests
// =============================================================================

mod donations {
    use super::*;

    #[tokio::test]
    async fn test_donations_by_donor_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/donation/by-donor/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 42,
                    "amount": 1500.0,
                    "campaign": {"title": "Clean Water", "category": "Charity"},
                    "donationDate": "2026-02-14T09:30:00",
                    "message": "Keep going!"
                },
                {
                    "id": 43,
                    "amount": 250.0,
                    "campaign": null,
                    "donationDate": null,
                    "message": null
                }
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let donations = client.donations_by_donor(3).await.unwrap();

        assert_eq!(donations.len(), 2);
        assert_eq!(donations[0].campaign_title(), "Clean Water");
        assert_eq!(donations[1].campaign_title(), "Campaign");
        assert_eq!(donations[1].display_message(), "—");
    }

    #[tokio::test]
    async fn test_donations_by_donor_scopes_by_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/donation/by-donor/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let donations = client.donations_by_donor(7).await.unwrap();
        assert!(donations.is_empty());
    }

    #[tokio::test]
    async fn test_donations_by_donor_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/donation/by-donor/3"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.donations_by_donor(3).await;

        match result.unwrap_err() {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 503);
                assert!(message.contains("maintenance"));
            }
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }
}
