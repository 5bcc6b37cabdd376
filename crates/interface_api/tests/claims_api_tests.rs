//! HTTP tests for the claims API over an in-memory store

use axum::http::StatusCode;
use axum_test::TestServer;
use rust_decimal_macros::dec;
use serde_json::json;

use interface_api::create_router;
use interface_api::dto::claims::{ClaimResponse, FraudAssessmentResponse, StatsResponse};
use interface_api::handlers::health::HealthResponse;

use test_utils::{ClaimFixtures, ClaimHarness};

fn server_for(harness: &ClaimHarness) -> TestServer {
    TestServer::new(create_router(harness.service.clone())).unwrap()
}

async fn dashboard_server() -> (ClaimHarness, TestServer) {
    let harness = ClaimHarness::seeded(ClaimFixtures::dashboard_claims()).await;
    let server = server_for(&harness);
    (harness, server)
}

fn claim_numbers(claims: &[ClaimResponse]) -> Vec<String> {
    claims.iter().filter_map(|c| c.claim_id.clone()).collect()
}

// ============================================================================
// Lifecycle
// ============================================================================

mod lifecycle_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_delete_restore_scenario() {
        let harness = ClaimHarness::empty();
        let server = server_for(&harness);

        let response = server
            .post("/api/claims")
            .json(&json!({
                "claimId": "CLM-1",
                "policyholderName": "Jane Doe",
                "amount": 500.0
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let created: ClaimResponse = response.json();
        let id = created.id.expect("created claim has an id");
        assert_eq!(created.amount, Some(dec!(500)));
        assert!(created.deleted_at.is_none());

        let active: Vec<ClaimResponse> = server.get("/api/claims").await.json();
        assert_eq!(claim_numbers(&active), vec!["CLM-1"]);

        let response = server.delete(&format!("/api/claims/{id}")).await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let active: Vec<ClaimResponse> = server.get("/api/claims").await.json();
        assert!(active.is_empty());

        let deleted: Vec<ClaimResponse> = server.get("/api/claims/deleted").await.json();
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0].id, Some(id));
        assert!(deleted[0].deleted_at.is_some());

        // Deleted claims remain addressable by id
        let fetched: ClaimResponse = server.get(&format!("/api/claims/{id}")).await.json();
        assert!(fetched.deleted_at.is_some());

        let response = server.post(&format!("/api/claims/{id}/restore")).await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let active: Vec<ClaimResponse> = server.get("/api/claims").await.json();
        assert_eq!(active.len(), 1);
        assert!(active[0].deleted_at.is_none());
        assert_eq!(active[0].policyholder_name.as_deref(), Some("Jane Doe"));
    }

    #[tokio::test]
    async fn test_delete_and_restore_unknown_id_succeed() {
        let (harness, server) = dashboard_server().await;
        let writes = harness.store.write_count();

        assert_eq!(server.delete("/api/claims/9999").await.status_code(), StatusCode::OK);
        assert_eq!(
            server.post("/api/claims/9999/restore").await.status_code(),
            StatusCode::OK
        );

        assert_eq!(harness.store.write_count(), writes);
        let active: Vec<ClaimResponse> = server.get("/api/claims").await.json();
        assert_eq!(active.len(), 4);
    }

    #[tokio::test]
    async fn test_create_ignores_body_id() {
        let (_harness, server) = dashboard_server().await;

        let created: ClaimResponse = server
            .post("/api/claims")
            .json(&json!({ "id": 1, "claimId": "C9", "policyholderName": "New Claimant" }))
            .await
            .json();

        assert_eq!(created.id, Some(5));

        let first: ClaimResponse = server.get("/api/claims/1").await.json();
        assert_eq!(first.claim_id.as_deref(), Some("C1"));
    }
}

// ============================================================================
// Reads
// ============================================================================

mod read_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_unknown_claim_is_empty_404() {
        let (_harness, server) = dashboard_server().await;

        let response = server.get("/api/claims/9999").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert!(response.text().is_empty());
    }

    #[tokio::test]
    async fn test_fraudulent_list_excludes_deleted() {
        let (harness, server) = dashboard_server().await;
        let raj = harness.seeded[0].id.unwrap();

        let fraudulent: Vec<ClaimResponse> = server.get("/api/claims/fraudulent").await.json();
        assert_eq!(claim_numbers(&fraudulent), vec!["C1", "C3", "C4"]);

        server.delete(&format!("/api/claims/{raj}")).await;

        let fraudulent: Vec<ClaimResponse> = server.get("/api/claims/fraudulent").await.json();
        assert_eq!(claim_numbers(&fraudulent), vec!["C3", "C4"]);
    }

    #[tokio::test]
    async fn test_lookup_by_claim_number() {
        let (_harness, server) = dashboard_server().await;

        let found: ClaimResponse = server.get("/api/claims/claim-number/C3").await.json();
        assert_eq!(found.policyholder_name.as_deref(), Some("Amit Patel"));

        let response = server.get("/api/claims/claim-number/C99").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_statistics_over_active_claims() {
        let (harness, server) = dashboard_server().await;

        let stats: StatsResponse = server.get("/api/claims/stats").await.json();
        assert_eq!(stats.total_claims, 4);
        assert_eq!(stats.fraudulent_claims, 3);
        assert_eq!(stats.total_amount, dec!(395000));
        assert_eq!(stats.fraudulent_amount, dec!(350000));
        assert_eq!(stats.fraud_percentage, dec!(75));

        let sneha = harness.seeded[3].id.unwrap();
        server.delete(&format!("/api/claims/{sneha}")).await;

        let stats: StatsResponse = server.get("/api/claims/stats").await.json();
        assert_eq!(stats.total_claims, 3);
        assert_eq!(stats.fraudulent_claims, 2);
        assert_eq!(stats.fraud_percentage, dec!(66.67));
    }
}

// ============================================================================
// Updates
// ============================================================================

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn test_put_uses_path_id() {
        let (_harness, server) = dashboard_server().await;

        let updated: ClaimResponse = server
            .put("/api/claims/2")
            .json(&json!({
                "id": 3,
                "claimId": "C2",
                "policyholderName": "Priya S.",
                "status": "APPROVED"
            }))
            .await
            .json();

        assert_eq!(updated.id, Some(2));
        assert_eq!(updated.status.as_deref(), Some("APPROVED"));

        // Full replace: fields omitted from the body are cleared
        assert!(updated.amount.is_none());

        let untouched: ClaimResponse = server.get("/api/claims/3").await.json();
        assert_eq!(untouched.policyholder_name.as_deref(), Some("Amit Patel"));
    }

    #[tokio::test]
    async fn test_put_unknown_id_is_404_without_write() {
        let (harness, server) = dashboard_server().await;
        let writes = harness.store.write_count();

        let response = server
            .put("/api/claims/9999")
            .json(&json!({ "claimId": "C-NEW" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert!(response.text().is_empty());
        assert_eq!(harness.store.write_count(), writes);
    }

    #[tokio::test]
    async fn test_duplicate_claim_number_is_server_error() {
        let (_harness, server) = dashboard_server().await;

        let response = server
            .post("/api/claims")
            .json(&json!({ "claimId": "C1" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "storage_error");
    }
}

// ============================================================================
// Malformed requests
// ============================================================================

mod rejection_tests {
    use super::*;

    #[tokio::test]
    async fn test_non_numeric_id_is_json_bad_request() {
        let (_harness, server) = dashboard_server().await;

        let response = server.get("/api/claims/not-a-number").await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_bad_request() {
        let (harness, server) = dashboard_server().await;
        let writes = harness.store.write_count();

        let response = server.post("/api/claims").text("{\"claimId\": ").await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "bad_request");
        assert_eq!(harness.store.write_count(), writes);
    }
}

// ============================================================================
// Fraud screening
// ============================================================================

mod fraud_tests {
    use super::*;

    #[tokio::test]
    async fn test_assessment_reports_rule_messages() {
        let (harness, server) = dashboard_server().await;
        let amit = harness.seeded[2].id.unwrap();

        let assessment: FraudAssessmentResponse = server
            .get(&format!("/api/claims/{amit}/fraud-assessment"))
            .await
            .json();

        assert!(assessment.suspicious);
        assert_eq!(assessment.claims_in_past_year, 1);
        assert_eq!(assessment.flagged_rules, vec!["Claim amount exceeds ₹100,000"]);
    }

    #[tokio::test]
    async fn test_assessment_leaves_fraud_flag_alone() {
        let (harness, server) = dashboard_server().await;
        let priya = harness.seeded[1].id.unwrap();
        let writes = harness.store.write_count();

        let response = server.get(&format!("/api/claims/{priya}/fraud-assessment")).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["suspicious"], false);
        assert_eq!(body["rules"], json!([]));

        let stored: ClaimResponse = server.get(&format!("/api/claims/{priya}")).await.json();
        assert_eq!(stored.is_fraudulent, Some(false));
        assert_eq!(harness.store.write_count(), writes);
    }

    #[tokio::test]
    async fn test_assessment_of_unknown_claim_is_404() {
        let (_harness, server) = dashboard_server().await;

        let response = server.get("/api/claims/9999/fraud-assessment").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert!(response.text().is_empty());
    }
}

// ============================================================================
// Search
// ============================================================================

mod search_tests {
    use super::*;

    #[tokio::test]
    async fn test_search_active_is_case_insensitive() {
        let (_harness, server) = dashboard_server().await;

        let hits: Vec<ClaimResponse> = server
            .get("/api/claims/search")
            .add_query_param("query", "pol-100")
            .await
            .json();
        assert_eq!(hits.len(), 4);

        let hits: Vec<ClaimResponse> = server
            .get("/api/claims/search")
            .add_query_param("query", "SHARMA")
            .await
            .json();
        assert_eq!(claim_numbers(&hits), vec!["C2"]);
    }

    #[tokio::test]
    async fn test_search_include_deleted_switches_scope() {
        let (harness, server) = dashboard_server().await;
        let priya = harness.seeded[1].id.unwrap();
        server.delete(&format!("/api/claims/{priya}")).await;

        let active_hits: Vec<ClaimResponse> = server
            .get("/api/claims/search")
            .add_query_param("query", "priya")
            .await
            .json();
        assert!(active_hits.is_empty());

        let deleted_hits: Vec<ClaimResponse> = server
            .get("/api/claims/search")
            .add_query_param("query", "priya")
            .add_query_param("includeDeleted", "true")
            .await
            .json();
        assert_eq!(claim_numbers(&deleted_hits), vec!["C2"]);

        let deleted_only: Vec<ClaimResponse> = server
            .get("/api/claims/search")
            .add_query_param("query", "raj")
            .add_query_param("includeDeleted", "true")
            .await
            .json();
        assert!(deleted_only.is_empty());
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let (_harness, server) = dashboard_server().await;

        let response = server.get("/api/claims/search").await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"].as_str().unwrap().contains("query"));
    }
}

// ============================================================================
// Health and middleware
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness_and_readiness() {
        let harness = ClaimHarness::empty();
        let server = server_for(&harness);

        let live: HealthResponse = server.get("/health").await.json();
        assert_eq!(live.status, "healthy");

        let response = server.get("/health/ready").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let ready: HealthResponse = response.json();
        assert_eq!(ready.status, "ready");
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let harness = ClaimHarness::empty();
        let server = server_for(&harness);

        let response = server.get("/api/claims").await;
        assert!(response.headers().contains_key("x-request-id"));
    }
}
