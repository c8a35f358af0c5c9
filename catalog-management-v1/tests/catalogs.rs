mod common;

use catalog_management_v1::{
    endpoints::{CreateCatalog, DeleteCatalog, GetCatalog, GetCatalogAccount, ListCatalogs},
    models::Catalog,
    Client, Error,
};
use common::{api_path, TOKEN};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn create_catalog_sends_body_and_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/catalogs")))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .and(body_json(json!({"label": "My catalog", "tags": ["dev"]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "catalog-1",
            "_rev": "1-abc",
            "label": "My catalog",
            "tags": ["dev"],
            "created": "2024-05-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server).await;
    let catalog = client
        .request(&CreateCatalog {
            body: Catalog {
                label: Some("My catalog".to_string()),
                tags: Some(vec!["dev".to_string()]),
                ..Default::default()
            },
        })
        .await
        .unwrap();

    assert_eq!(catalog.id.as_deref(), Some("catalog-1"));
    assert_eq!(catalog.rev.as_deref(), Some("1-abc"));
    assert!(catalog.created.is_some());
}

#[tokio::test]
async fn list_catalogs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/catalogs")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "resources": [{"id": "a"}, {"id": "b"}]
        })))
        .mount(&server)
        .await;

    let client = common::client(&server).await;
    let result = client.request(&ListCatalogs {}).await.unwrap();

    assert_eq!(result.total_count, Some(2));
    let ids: Vec<_> = result
        .resources
        .iter()
        .filter_map(|catalog| catalog.id.as_deref())
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn missing_catalog_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/catalogs/gone")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": "not_found", "message": "catalog gone not found"}],
            "trace": "trace-1",
            "status_code": 404
        })))
        .mount(&server)
        .await;

    let client = common::client(&server).await;
    let err = client
        .request(&GetCatalog {
            catalog_identifier: "gone".to_string(),
        })
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    match err {
        Error::Http(cloud_api_framework::Error::Api { message, trace, .. }) => {
            assert_eq!(message, "catalog gone not found");
            assert_eq!(trace.as_deref(), Some("trace-1"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn delete_catalog_without_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/catalogs/catalog-1")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server).await;
    client
        .request(&DeleteCatalog {
            catalog_identifier: "catalog-1".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn empty_identifier_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = common::client(&server).await;
    let err = client
        .request(&GetCatalog::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Http(cloud_api_framework::Error::InvalidArgument { ref arg, .. }) if arg == "catalog_identifier"
    ));
}

#[tokio::test]
async fn probe_requests_catalog_account() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/catalogaccount")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "account-1",
            "hide_IBM_cloud_catalog": true
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = Client::new(common::config(&server).probe_url(true))
        .await
        .unwrap();
    let account = client.request(&GetCatalogAccount::default()).await.unwrap();
    assert_eq!(account.hide_ibm_cloud_catalog, Some(true));
}

#[tokio::test]
async fn failed_probe_fails_client_creation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/catalogaccount")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "unauthorized"})))
        .mount(&server)
        .await;

    let result = Client::new(common::config(&server).probe_url(true)).await;
    let err = result.err().expect("probe must fail");
    assert_eq!(err.status_code().map(|status| status.as_u16()), Some(401));
}

#[tokio::test]
async fn service_url_can_be_changed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/other/catalogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resources": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = common::client(&server).await;
    client.set_service_url(format!("{}/other", server.uri()).parse().unwrap());
    let result = client.request(&ListCatalogs {}).await.unwrap();
    assert!(result.resources.is_empty());
    assert_eq!(client.service_url().path(), "/other");
}
