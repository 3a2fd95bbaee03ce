//! End-to-end checks of the mock adapter through the host-facing contract.

use std::sync::Arc;

use bridgehub_core::{AdapterRegistry, BridgeAdapter, BridgeError, BridgeRequest, Parameters};
use bridgehub_mock::{register, MockBridgeAdapter};

fn mock() -> Arc<dyn BridgeAdapter> {
    let registry = AdapterRegistry::new();
    register(&registry);
    registry
        .create(MockBridgeAdapter::NAME, &Parameters::new())
        .expect("mock adapter initializes without properties")
}

#[test]
fn registry_lists_mock() {
    let registry = AdapterRegistry::new();
    register(&registry);
    assert_eq!(registry.names(), vec!["Mock Bridge"]);
}

#[test]
fn simulated_error_message_is_preserved_for_all_operations() {
    let adapter = mock();
    let request = BridgeRequest::new("Tickets").with_parameter("error", "X");

    let errors = [
        adapter.count(&mut request.clone()).unwrap_err(),
        adapter.retrieve(&mut request.clone()).unwrap_err(),
        adapter.search(&mut request.clone()).unwrap_err(),
    ];
    for err in errors {
        assert_eq!(err, BridgeError::simulated("X"));
        assert_eq!(err.to_string(), "X");
    }
}

#[test]
fn retrieve_with_fields_uses_index_one() {
    let mut request = BridgeRequest::new("People").with_fields(["name", "id"]);
    let record = mock().retrieve(&mut request).unwrap();

    let attributes: Vec<(&str, &str)> = record.iter().collect();
    assert_eq!(attributes, vec![("name", "name 1"), ("id", "id 1")]);
}

#[test]
fn search_with_escaped_comma_template() {
    let mut request = BridgeRequest::new("Notes")
        .with_parameter("records", r"a:a $,b:b \, $")
        .with_metadata("count", "4")
        .with_metadata("offset", "3")
        .with_metadata("pageSize", "1");
    let list = mock().search(&mut request).unwrap();

    assert_eq!(list.len(), 1);
    let record = &list.records[0];
    assert_eq!(record.len(), 2);
    assert_eq!(record.get("a"), Some("a 3"));
    assert_eq!(record.get("b"), Some("b , 3"));
}

#[test]
fn search_pages_never_leave_the_window() {
    let adapter = mock();
    for (offset, page_size) in [(0, 0), (0, 4), (5, 4), (8, 4), (12, 4), (3, 0)] {
        let mut request = BridgeRequest::new("Items")
            .with_parameter("records", "i:$")
            .with_metadata("count", "10")
            .with_metadata("offset", offset.to_string())
            .with_metadata("pageSize", page_size.to_string());
        let list = adapter.search(&mut request).unwrap();

        let end = if page_size == 0 { 10 } else { (offset + page_size).min(10) };
        let expected: Vec<String> = (offset..end.max(offset)).map(|i| i.to_string()).collect();
        let actual: Vec<String> = list
            .records
            .iter()
            .map(|r| r.get("i").unwrap().to_string())
            .collect();
        assert_eq!(actual, expected, "offset={offset} pageSize={page_size}");
        assert_eq!(list.metadata["size"], expected.len().to_string());
    }
}

#[test]
fn search_results_serialize_in_declaration_order() {
    let mut request = BridgeRequest::new("People")
        .with_fields(["zeta", "alpha"])
        .with_metadata("count", "1");
    let list = mock().search(&mut request).unwrap();

    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json["fields"], serde_json::json!(["zeta", "alpha"]));
    let rendered = serde_json::to_string(&json["records"][0]["attributes"]).unwrap();
    assert_eq!(rendered, r#"{"zeta":"zeta 0","alpha":"alpha 0"}"#);
    assert_eq!(json["metadata"]["size"], "1");
}

#[test]
fn shared_adapter_serves_concurrent_callers() {
    let adapter = mock();

    std::thread::scope(|scope| {
        for worker in 0..8usize {
            let adapter = Arc::clone(&adapter);
            scope.spawn(move || {
                let mut request = BridgeRequest::new("Items")
                    .with_parameter("records", "worker:w$")
                    .with_metadata("count", "100")
                    .with_metadata("offset", (worker * 10).to_string())
                    .with_metadata("pageSize", "10");
                let list = adapter.search(&mut request).unwrap();
                assert_eq!(list.len(), 10);
                let first = format!("w{}", worker * 10);
                assert_eq!(list.records[0].get("worker"), Some(first.as_str()));
            });
        }
    });
}
