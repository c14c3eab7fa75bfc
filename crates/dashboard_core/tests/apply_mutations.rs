use dashboard_core::{apply, ClientState, Mutation};
use serde_json::json;

#[test]
fn apply_leaves_unrelated_fields_alone() {
    let state = ClientState::new();
    let state = apply(state, Mutation::AddCrawlerRecord(json!({ "id": 1 })));
    let state = apply(
        state,
        Mutation::SetTensionCache {
            data: json!({ "CN": 0.8 }),
            timestamp: 42,
        },
    );
    let mut next = apply(state.clone(), Mutation::SetLoading(true));

    assert!(next.is_loading());
    assert_eq!(next.crawler_history(), state.crawler_history());
    assert_eq!(next.cached_tension_data(), state.cached_tension_data());
    assert!(next.consume_dirty());
}

#[test]
fn serialized_state_exposes_history_as_list() {
    let state = apply(ClientState::new(), Mutation::AddCrawlerRecord(json!("q1")));
    let state = apply(state, Mutation::AddCrawlerRecord(json!("q2")));

    let value = serde_json::to_value(&state).expect("serialize state");
    assert_eq!(value["crawler_history"], json!(["q2", "q1"]));
    assert_eq!(value["loading"], json!(false));
    assert!(value.get("dirty").is_none());
}
