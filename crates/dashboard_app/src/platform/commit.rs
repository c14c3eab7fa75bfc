use dashboard_core::Store;
use serde_json::{json, Map, Value};

use crate::cli::{Command, ParamArgs};

/// Records a settled call in the store: tension distributions refresh the
/// cache, news queries and collection runs append to the crawl history.
pub fn commit_result(store: &mut Store, command: &Command, payload: &Value) {
    match command {
        Command::Tension => store.update_tension_cache(payload.clone()),
        Command::News(args) | Command::FetchAll(args) => {
            let record = crawl_record(command.name(), args, payload, store.now_ms());
            store.add_crawler_record(record);
        }
        _ => {}
    }
}

fn crawl_record(action: &str, args: &ParamArgs, payload: &Value, at_ms: i64) -> Value {
    let params: Map<String, Value> = args
        .params
        .iter()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect();
    let count = payload
        .get("data")
        .and_then(Value::as_array)
        .map(Vec::len)
        .or_else(|| {
            payload
                .get("count")
                .and_then(Value::as_u64)
                .and_then(|n| usize::try_from(n).ok())
        });

    json!({
        "action": action,
        "params": params,
        "count": count,
        "timestamp": at_ms,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn store_at(now: i64) -> Store {
        Store::with_clock(Arc::new(move || now))
    }

    #[test]
    fn tension_refreshes_cache() {
        let mut store = store_at(5);
        commit_result(&mut store, &Command::Tension, &json!({ "success": true }));

        let entry = store.cached_tension_data().unwrap();
        assert_eq!(entry.data, json!({ "success": true }));
        assert_eq!(entry.timestamp, 5);
        assert!(store.crawler_history().is_empty());
    }

    #[test]
    fn news_appends_history_record() {
        let mut store = store_at(99);
        let args = ParamArgs {
            params: vec![("keyword".to_string(), "steel".to_string())],
        };
        commit_result(
            &mut store,
            &Command::News(args),
            &json!({ "success": true, "data": [1, 2, 3] }),
        );

        assert_eq!(
            store.crawler_history(),
            vec![json!({
                "action": "news",
                "params": { "keyword": "steel" },
                "count": 3,
                "timestamp": 99,
            })]
        );
    }

    #[test]
    fn fetch_all_falls_back_to_count_field() {
        let mut store = store_at(7);
        commit_result(
            &mut store,
            &Command::FetchAll(ParamArgs::default()),
            &json!({ "success": true, "count": 12 }),
        );

        assert_eq!(store.crawler_history()[0]["count"], json!(12));

        commit_result(
            &mut store,
            &Command::FetchAll(ParamArgs::default()),
            &json!({ "success": true, "count": -1 }),
        );
        assert_eq!(store.crawler_history()[0]["count"], Value::Null);
    }

    #[test]
    fn other_commands_leave_store_alone() {
        let mut store = store_at(1);
        commit_result(&mut store, &Command::Countries, &json!(["CN", "US"]));

        assert!(store.cached_tension_data().is_none());
        assert!(store.crawler_history().is_empty());
    }
}
