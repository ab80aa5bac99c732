use std::sync::Arc;
use std::time::Duration;

use fbinventory::{
    InMemoryInventory, InventoryStore, SEARCH_TOOL_NAME, SearchParams, search_tool_definition,
    tool_result_payload,
};

fn store() -> Arc<dyn InventoryStore> {
    Arc::new(InMemoryInventory::bundled().with_latency(Duration::ZERO))
}

#[tokio::test]
async fn tool_arguments_drive_search_through_trait_object() {
    let store = store();
    let params = SearchParams::from_tool_arguments(r#"{"category":"audio"}"#)
        .expect("arguments should parse");

    let products = store.search(params).await;

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Sony WH-1000XM5");
}

#[tokio::test]
async fn combined_constraints_are_and_combined() {
    let store = store();
    let products = store
        .search(
            SearchParams::new()
                .with_category("smartphone")
                .with_query("android")
                .with_max_price(1000.0),
        )
        .await;

    let ids = products
        .iter()
        .map(|product| product.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["p1"]);
}

#[tokio::test]
async fn all_category_returns_everything() {
    let store = store();
    let products = store
        .search(SearchParams::new().with_category("ALL"))
        .await;
    assert_eq!(products.len(), 7);
}

#[tokio::test]
async fn search_results_serialize_into_tool_payload() {
    let store = store();
    let products = store
        .search(SearchParams::new().with_query("battery"))
        .await;

    let payload = tool_result_payload(&products).expect("payload should serialize");
    let value: serde_json::Value = serde_json::from_str(&payload).expect("payload is JSON");

    assert_eq!(value["products"].as_array().map(Vec::len), Some(3));
    assert_eq!(search_tool_definition().name, SEARCH_TOOL_NAME);
}
