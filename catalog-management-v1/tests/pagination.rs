mod common;

use catalog_management_v1::{
    endpoints::{
        GetOfferingAccessList, ListAuditsParams, ListCatalogAccountAudits, ListOfferings,
        ListOfferingsParams, SearchObjects, SearchObjectsParams,
    },
    Error,
};
use common::api_path;
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param, query_param_is_missing},
    Mock, MockServer, ResponseTemplate,
};

async fn mount_audit_pages(server: &MockServer) {
    let audits_path = api_path("/catalogaccount/audits");
    Mock::given(method("GET"))
        .and(path(audits_path.as_str()))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 2,
            "total_count": 3,
            "resource_count": 2,
            "audits": [{"id": "audit-1"}, {"id": "audit-2"}],
            "next": {"href": format!("{audits_path}?limit=2&start=token-2"), "start": "token-2"}
        })))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(audits_path.as_str()))
        .and(query_param("limit", "2"))
        .and(query_param("start", "token-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "start": "token-2",
            "limit": 2,
            "total_count": 3,
            "resource_count": 1,
            "audits": [{"id": "audit-3"}]
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn list_audits() -> ListCatalogAccountAudits {
    ListCatalogAccountAudits {
        params: ListAuditsParams {
            limit: Some(2),
            ..Default::default()
        },
    }
}

#[tokio::test]
async fn token_pager_walks_all_pages() {
    let server = MockServer::start().await;
    mount_audit_pages(&server).await;

    let client = common::client(&server).await;
    let mut pager = client.pager(list_audits()).unwrap();

    assert!(pager.has_next());
    let first = pager.next_page().await.unwrap();
    assert_eq!(first.len(), 2);
    assert!(pager.has_next());

    let second = pager.next_page().await.unwrap();
    assert_eq!(second[0].id.as_deref(), Some("audit-3"));
    assert!(!pager.has_next());

    assert!(matches!(
        pager.next_page().await,
        Err(Error::NoMoreResults)
    ));
}

#[tokio::test]
async fn token_pager_as_stream() {
    let server = MockServer::start().await;
    mount_audit_pages(&server).await;

    let client = common::client(&server).await;
    let pages: Vec<_> = client
        .pager(list_audits())
        .unwrap()
        .into_stream()
        .try_collect()
        .await
        .unwrap();

    let sizes: Vec<_> = pages.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![2, 1]);
}

#[tokio::test]
async fn offset_pager_collects_everything() {
    let server = MockServer::start().await;
    let offerings_path = api_path("/catalogs/catalog-1/offerings");
    Mock::given(method("GET"))
        .and(path(offerings_path.as_str()))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0,
            "limit": 2,
            "total_count": 3,
            "resource_count": 2,
            "next": format!("{offerings_path}?limit=2&offset=2&digest=true"),
            "resources": [{"id": "o-1"}, {"id": "o-2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(offerings_path.as_str()))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 2,
            "limit": 2,
            "total_count": 3,
            "resource_count": 1,
            "resources": [{"id": "o-3"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server).await;
    let offerings = client
        .pager(ListOfferings {
            catalog_identifier: "catalog-1".to_string(),
            params: ListOfferingsParams {
                limit: Some(2),
                digest: Some(true),
                ..Default::default()
            },
        })
        .unwrap()
        .all()
        .await
        .unwrap();

    let ids: Vec<_> = offerings
        .iter()
        .filter_map(|offering| offering.id.as_deref())
        .collect();
    assert_eq!(ids, vec!["o-1", "o-2", "o-3"]);
}

#[tokio::test]
async fn access_list_pager_follows_relative_links() {
    let server = MockServer::start().await;
    let access_path = api_path("/catalogs/catalog-1/offerings/offering-1/access");
    Mock::given(method("GET"))
        .and(path(access_path.as_str()))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": [{"account": "-acct-1"}],
            "next": {"href": "/api/v1-beta/catalogs/catalog-1/offerings/offering-1/access?start=next%20page"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(access_path.as_str()))
        .and(query_param("start", "next page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": [{"account": "-acct-2"}],
            "next": {"href": "/api/v1-beta/catalogs/catalog-1/offerings/offering-1/access"}
        })))
        .mount(&server)
        .await;

    let client = common::client(&server).await;
    let accesses = client
        .pager(GetOfferingAccessList {
            catalog_identifier: "catalog-1".to_string(),
            offering_id: "offering-1".to_string(),
            ..Default::default()
        })
        .unwrap()
        .all()
        .await
        .unwrap();

    let accounts: Vec<_> = accesses
        .iter()
        .filter_map(|access| access.account.as_deref())
        .collect();
    assert_eq!(accounts, vec!["-acct-1", "-acct-2"]);
}

#[tokio::test]
async fn pager_rejects_preset_cursor() {
    let server = MockServer::start().await;
    let client = common::client(&server).await;

    let result = client.pager(SearchObjects {
        params: SearchObjectsParams {
            query: "*".to_string(),
            offset: Some(10),
            ..Default::default()
        },
    });

    assert!(matches!(
        result,
        Err(Error::Http(cloud_api_framework::Error::InvalidArgument { ref arg, .. })) if arg == "offset"
    ));
}

#[tokio::test]
async fn non_integer_offset_in_next_link() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/objects")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": [],
            "next": "/api/v1-beta/objects?query=*&offset=ten"
        })))
        .mount(&server)
        .await;

    let client = common::client(&server).await;
    let mut pager = client
        .pager(SearchObjects {
            params: SearchObjectsParams {
                query: "*".to_string(),
                ..Default::default()
            },
        })
        .unwrap();

    assert!(matches!(
        pager.next_page().await,
        Err(Error::InvalidCursor { param: "offset", ref value }) if value == "ten"
    ));
}

#[tokio::test]
async fn null_resources_on_last_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/objects")))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": [{"id": "obj-1"}],
            "next": "/api/v1-beta/objects?query=*&offset=1"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/objects")))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 1,
            "resources": null
        })))
        .mount(&server)
        .await;

    let client = common::client(&server).await;
    let objects = client
        .pager(SearchObjects {
            params: SearchObjectsParams {
                query: "*".to_string(),
                ..Default::default()
            },
        })
        .unwrap()
        .all()
        .await
        .unwrap();

    let ids: Vec<_> = objects
        .iter()
        .filter_map(|object| object.id.as_deref())
        .collect();
    assert_eq!(ids, vec!["obj-1"]);
}
