//! Request-shape tests for the generic resource client and the custom verbs.

use dispatch_client::resource::{
    catalog, AiClient, IncidentRoleClient, ListOptions, Page, PluginClient, SearchClient, Verb,
};
use dispatch_client::{Error, RecordingTransport};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

fn pair(k: &str, v: &str) -> (String, String) {
    (k.to_string(), v.to_string())
}

#[tokio::test]
async fn list_issues_one_get_and_returns_response_unchanged() {
    let transport = RecordingTransport::new();
    let page = json!({"items": [{"id": 1, "name": "High"}], "total": 1});
    transport.push_response(page.clone());

    let client = catalog::INCIDENT_PRIORITIES.client(&transport);
    let opts = ListOptions::new().query("hi").items_per_page(10);
    let out = client.list(&opts).await.unwrap();

    assert_eq!(out, page);
    assert_eq!(transport.len(), 1);
    let req = transport.last_request().unwrap();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/incident_priorities");
    assert_eq!(req.query, vec![pair("q", "hi"), pair("itemsPerPage", "10")]);
    assert!(req.body.is_none());
}

#[tokio::test]
async fn list_with_default_options_sends_no_query() {
    let transport = RecordingTransport::new();
    catalog::TEAMS
        .client(&transport)
        .list(&ListOptions::default())
        .await
        .unwrap();
    assert!(transport.last_request().unwrap().query.is_empty());
}

#[tokio::test]
async fn get_update_delete_address_the_item() {
    let transport = RecordingTransport::new();
    let client = catalog::SIGNALS.client(&transport);

    client.get(42).await.unwrap();
    client.update(42, &json!({"name": "dup"})).await.unwrap();
    client.delete("42").await.unwrap();

    let reqs = transport.requests();
    assert_eq!(reqs.len(), 3);
    assert_eq!((reqs[0].method.clone(), reqs[0].path.as_str()), (Method::GET, "signals/42"));
    assert_eq!((reqs[1].method.clone(), reqs[1].path.as_str()), (Method::PUT, "signals/42"));
    assert_eq!(reqs[1].body, Some(json!({"name": "dup"})));
    assert_eq!((reqs[2].method.clone(), reqs[2].path.as_str()), (Method::DELETE, "signals/42"));
}

#[tokio::test]
async fn create_posts_payload_and_returns_response() {
    let transport = RecordingTransport::new();
    transport.push_response(json!({"id": 7, "name": "SEV1"}));

    let out = catalog::INCIDENT_SEVERITIES
        .client(&transport)
        .create(&json!({"name": "SEV1"}))
        .await
        .unwrap();

    assert_eq!(out, json!({"id": 7, "name": "SEV1"}));
    let req = transport.last_request().unwrap();
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/incident_severities");
    assert_eq!(req.body, Some(json!({"name": "SEV1"})));
}

#[tokio::test]
async fn create_honours_trailing_slash_convention() {
    let transport = RecordingTransport::new();
    let teams = catalog::TEAMS.client(&transport);

    teams.create(&json!({"name": "oncall"})).await.unwrap();
    teams.list(&ListOptions::new()).await.unwrap();

    let reqs = transport.requests();
    assert_eq!(reqs[0].path, "/teams/");
    assert_eq!(reqs[1].path, "/teams");
}

#[tokio::test]
async fn typed_payloads_are_serialized() {
    #[derive(serde::Serialize)]
    struct NewTerm<'a> {
        text: &'a str,
        discoverable: bool,
    }

    let transport = RecordingTransport::new();
    catalog::TERMS
        .client(&transport)
        .create(&NewTerm {
            text: "blast radius",
            discoverable: true,
        })
        .await
        .unwrap();

    assert_eq!(
        transport.last_request().unwrap().body,
        Some(json!({"text": "blast radius", "discoverable": true}))
    );
}

#[tokio::test]
async fn disabled_verbs_fail_without_a_request() {
    let transport = RecordingTransport::new();
    let client = catalog::SERVICE_FEEDBACK.client(&transport);

    let err = client.create(&json!({})).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Unsupported {
            resource: "service_feedback",
            verb: Verb::Create
        }
    ));
    assert!(client.get(1).await.is_err());
    assert!(transport.is_empty());

    client.list(&ListOptions::new()).await.unwrap();
    assert_eq!(transport.len(), 1);
}

#[tokio::test]
async fn composite_delete_only_where_enabled() {
    let transport = RecordingTransport::new();

    catalog::SIGNALS
        .client(&transport)
        .delete_composite(3, 9)
        .await
        .unwrap();
    assert_eq!(transport.last_request().unwrap().path, "signals/3/9");

    let err = catalog::TEAMS
        .client(&transport)
        .delete_composite(3, 9)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Unsupported { verb: Verb::DeleteComposite, .. }));
    assert_eq!(transport.len(), 1);
}

#[tokio::test]
async fn remote_failures_pass_through() {
    let transport = RecordingTransport::new();
    transport.push_error(404, r#"{"detail":"not found"}"#);

    let err = catalog::DOCUMENTS.client(&transport).get(99).await.unwrap_err();
    match err {
        Error::Remote { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, r#"{"detail":"not found"}"#);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn list_as_decodes_page_envelope() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct TagType {
        id: u32,
        name: String,
    }

    let transport = RecordingTransport::new();
    transport.push_response(json!({
        "items": [{"id": 1, "name": "Team"}, {"id": 2, "name": "Region"}],
        "total": 2
    }));

    let page: Page<TagType> = catalog::TAG_TYPES
        .client(&transport)
        .list_as(&ListOptions::new())
        .await
        .unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.len(), 2);
    assert_eq!(page.items[1].name, "Region");
}

#[tokio::test]
async fn search_sends_query_and_models() {
    let transport = RecordingTransport::new();
    SearchClient::new(&transport)
        .search("database", &["Incident", "Document"])
        .await
        .unwrap();

    let req = transport.last_request().unwrap();
    assert_eq!(req.path, "/search/");
    assert_eq!(
        req.query,
        vec![
            pair("q", "database"),
            pair("type[]", "Incident"),
            pair("type[]", "Document"),
        ]
    );
}

#[tokio::test]
async fn ai_defaults_and_crud() {
    let transport = RecordingTransport::new();
    let ai = AiClient::new(&transport);

    ai.get_defaults().await.unwrap();
    ai.resource().get(5).await.unwrap();

    let reqs = transport.requests();
    assert_eq!(reqs[0].path, "/ai/defaults");
    assert_eq!(reqs[1].path, "/ai/5");
}

#[tokio::test]
async fn plugin_instances() {
    let transport = RecordingTransport::new();
    let plugins = PluginClient::new(&transport);

    plugins
        .get_all_instances(&ListOptions::new().param("project", "default"))
        .await
        .unwrap();
    plugins
        .update_instance(4, &json!({"enabled": false}))
        .await
        .unwrap();
    plugins.resource().list(&ListOptions::new()).await.unwrap();

    let reqs = transport.requests();
    assert_eq!(reqs[0].path, "plugins/instances");
    assert_eq!(reqs[0].query, vec![pair("project", "default")]);
    assert_eq!(reqs[1].method, Method::PUT);
    assert_eq!(reqs[1].path, "plugins/instances/4");
    assert_eq!(reqs[2].path, "plugins");
}

#[tokio::test]
async fn incident_roles_are_role_keyed() {
    let transport = RecordingTransport::new();
    let roles = IncidentRoleClient::new(&transport);

    roles
        .get("incident_commander", &ListOptions::new().param("projectName", "default"))
        .await
        .unwrap();
    roles
        .update("incident_commander", &json!({"policies": []}))
        .await
        .unwrap();

    let reqs = transport.requests();
    assert_eq!(reqs[0].path, "/incident_roles/incident_commander");
    assert_eq!(reqs[0].query, vec![pair("projectName", "default")]);
    assert_eq!(reqs[1].method, Method::PUT);
    assert_eq!(reqs[1].body, Some(json!({"policies": []})));

    let err = catalog::INCIDENT_ROLES
        .client(&transport)
        .get(1)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Unsupported { .. }));
}

#[tokio::test]
async fn every_listable_resource_lists_its_base_path() {
    let transport = RecordingTransport::new();
    for descriptor in catalog::ALL.iter().filter(|d| d.supports(Verb::List)) {
        transport.clear();
        descriptor
            .client(&transport)
            .list(&ListOptions::new())
            .await
            .unwrap();
        let req = transport.last_request().unwrap();
        assert_eq!(req.method, Method::GET, "{}", descriptor.name);
        assert_eq!(req.path, descriptor.list_path(), "{}", descriptor.name);
        assert_eq!(transport.len(), 1);
    }
}
