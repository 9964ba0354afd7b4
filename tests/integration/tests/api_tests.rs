//! Integration tests for the customer ids API
//!
//! Run with: CUSTOMER_IDS_API_URL=https://your-api.execute-api.eu-central-1.amazonaws.com/prod cargo test
//!
//! These tests require a deployed stack.

use customer_ids_integration_tests::{client::CustomerIdsClient, fixtures::unique_customer_id};
use pretty_assertions::assert_eq;

/// Helper to get client or skip test
fn get_client() -> Option<CustomerIdsClient> {
    let client = CustomerIdsClient::from_env();
    if client.is_none() {
        eprintln!("Skipping: CUSTOMER_IDS_API_URL not set");
    }
    client
}

// ============================================================================
// Create / Check / Delete
// ============================================================================

#[tokio::test]
async fn test_put_then_exists() {
    let Some(client) = get_client() else { return };

    let id = unique_customer_id();

    let created = client.put_id(&id).await.expect("Failed to create id");
    assert_eq!(created.message, "created");
    assert_eq!(created.id, id);

    let check = client.get_exists(&id).await.expect("Failed to check id");
    assert!(check.exists);
    assert_eq!(check.id, id);

    // Cleanup
    let _ = client.delete_id(&id).await;
}

#[tokio::test]
async fn test_put_duplicate_conflicts() {
    let Some(client) = get_client() else { return };

    let id = unique_customer_id();
    client.put_id(&id).await.expect("Failed to create id");

    let err = client.put_id(&id).await.expect_err("Duplicate put should fail");
    assert_eq!(err.status(), Some(409));
    assert!(err.error_message().unwrap_or_default().contains("exists"));

    // Cleanup
    let _ = client.delete_id(&id).await;
}

#[tokio::test]
async fn test_unknown_id_does_not_exist() {
    let Some(client) = get_client() else { return };

    let check = client
        .get_exists(&unique_customer_id())
        .await
        .expect("Failed to check id");
    assert!(!check.exists);
}

#[tokio::test]
async fn test_exists_by_header() {
    let Some(client) = get_client() else { return };

    let id = unique_customer_id();
    client.put_id(&id).await.expect("Failed to create id");

    let check = client
        .get_exists_by_header(&id)
        .await
        .expect("Failed to check id");
    assert!(check.exists);

    // Cleanup
    let _ = client.delete_id(&id).await;
}

#[tokio::test]
async fn test_invalid_id_rejected() {
    let Some(client) = get_client() else { return };

    let err = client.get_exists("x!").await.expect_err("Invalid id should fail");
    assert_eq!(err.status(), Some(400));
    assert!(err.error_message().is_some());
}

#[tokio::test]
async fn test_delete_then_gone() {
    let Some(client) = get_client() else { return };

    let id = unique_customer_id();
    client.put_id(&id).await.expect("Failed to create id");

    let deleted = client.delete_id(&id).await.expect("Failed to delete id");
    assert_eq!(deleted.id, id);
    assert!(deleted.message.contains("deleted"));

    let check = client.get_exists(&id).await.expect("Failed to check id");
    assert!(!check.exists);

    let err = client.delete_id(&id).await.expect_err("Second delete should fail");
    assert_eq!(err.status(), Some(404));
    assert!(err
        .error_message()
        .unwrap_or_default()
        .to_lowercase()
        .contains("not found"));
}

// ============================================================================
// Submit
// ============================================================================

#[tokio::test]
async fn test_submit_accepted() {
    let Some(client) = get_client() else { return };

    let id = unique_customer_id();
    let accepted = client.submit(&id).await.expect("Failed to submit id");
    assert_eq!(accepted.status, "accepted");
    assert_eq!(accepted.id, id);
}

#[tokio::test]
async fn test_submit_invalid_rejected() {
    let Some(client) = get_client() else { return };

    let err = client.submit("no").await.expect_err("Invalid id should fail");
    assert_eq!(err.status(), Some(400));
}
