//! End-to-end integration tests.
//!
//! These tests drive the full workflow — configuration, resource ID parsing,
//! client operations, and long-running-operation polling — against a scripted
//! mock service.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use azure_arm::resource::ResourceId;
use azure_arm::resources::{GenericResource, ResourcesClient};
use azure_arm::{AccessToken, ApiVersion, ArmConfig, Endpoint};

const STORAGE_ID: &str =
    "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.Storage/storageAccounts/acct1";

fn client_for(server: &MockServer) -> ResourcesClient {
    let config = ArmConfig::builder()
        .api_version(ApiVersion::new("2021-04-01").unwrap())
        .endpoint(Endpoint::new(server.uri()).unwrap())
        .access_token(AccessToken::new("test-token").unwrap())
        .build()
        .unwrap();
    ResourcesClient::new(&config)
}

#[tokio::test]
async fn test_create_poll_get_delete_lifecycle() {
    let server = MockServer::start().await;
    let id = ResourceId::parse(STORAGE_ID).unwrap();

    // create: accepted with the provisioning state still in flight
    Mock::given(method("PUT"))
        .and(path(STORAGE_ID))
        .and(query_param("api-version", "2021-04-01"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": STORAGE_ID,
            "name": "acct1",
            "properties": {"provisioningState": "Creating"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    // polling re-GETs the resource; one more round of Creating, then done
    Mock::given(method("GET"))
        .and(path(STORAGE_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": STORAGE_ID,
            "name": "acct1",
            "properties": {"provisioningState": "Creating"}
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(STORAGE_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": STORAGE_ID,
            "name": "acct1",
            "location": "westus2",
            "properties": {"provisioningState": "Succeeded"}
        })))
        .mount(&server)
        .await;

    // delete: location polling, completing on the second poll
    Mock::given(method("DELETE"))
        .and(path(STORAGE_ID))
        .respond_with(
            ResponseTemplate::new(202)
                .insert_header(
                    "Location",
                    format!("{}/operationresults/del-1", server.uri()).as_str(),
                )
                .insert_header("Retry-After", "0"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/operationresults/del-1"))
        .respond_with(ResponseTemplate::new(202))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/operationresults/del-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);

    // create and poll to completion
    let resource = GenericResource {
        location: Some("westus2".to_string()),
        ..GenericResource::default()
    };
    let mut poller = client.begin_create_or_update(&id, resource).await.unwrap();
    assert!(!poller.done());

    let created = poller.poll_until_done(Duration::from_millis(1)).await.unwrap();
    assert_eq!(created.name.as_deref(), Some("acct1"));
    assert_eq!(created.location.as_deref(), Some("westus2"));
    let created_id = created.id.unwrap();
    assert_eq!(created_id.resource_group_name(), Some("rg-1"));
    assert_eq!(created_id.to_string(), STORAGE_ID);

    // read it back
    let fetched = client.get_by_id(&id).await.unwrap();
    assert_eq!(fetched.name.as_deref(), Some("acct1"));

    // delete and poll to completion
    let mut poller = client.begin_delete(&id).await.unwrap();
    poller.poll_until_done(Duration::from_millis(1)).await.unwrap();
    assert!(poller.done());
}

#[tokio::test]
async fn test_listing_pages_through_a_resource_group() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscriptions/sub-1/resourceGroups/rg-1/resources"))
        .and(query_param("api-version", "2021-04-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                {"id": STORAGE_ID, "name": "acct1"},
            ],
            "nextLink": format!("{}/page-2", server.uri())
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [
                {"name": "acct2"},
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut pager = client.list_by_resource_group("sub-1", "rg-1");

    let mut names = Vec::new();
    while let Some(page) = pager.next_page().await.unwrap() {
        for resource in page {
            names.push(resource.name.unwrap_or_default());
        }
    }
    assert_eq!(names, ["acct1", "acct2"]);
}

#[tokio::test]
async fn test_operation_failure_surfaces_service_detail() {
    let server = MockServer::start().await;
    let id = ResourceId::parse(STORAGE_ID).unwrap();

    Mock::given(method("PUT"))
        .and(path(STORAGE_ID))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "properties": {"provisioningState": "Creating"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(STORAGE_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": {"provisioningState": "Failed"},
            "error": {"code": "SkuNotAvailable", "message": "The requested SKU is unavailable."}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resource = GenericResource {
        location: Some("westus2".to_string()),
        ..GenericResource::default()
    };
    let mut poller = client.begin_create_or_update(&id, resource).await.unwrap();

    let error = poller
        .poll_until_done(Duration::from_millis(1))
        .await
        .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("SkuNotAvailable"));
    assert!(message.contains("The requested SKU is unavailable."));
}
