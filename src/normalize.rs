use serde_json::Value;

use crate::dto::ListResponse;

/// Reconcile a decoded payload of unknown shape into the canonical
/// `{items, total}` envelope.
///
/// Recognized shapes, first match wins:
///
/// 1. Object with an array `items` key; `total` taken from the payload when it
///    is a non-negative integer, else the item count.
/// 2. Two-element array whose first element is an array, read as an
///    `[items, total]` tuple.
/// 3. Any other array, read as the items themselves.
///
/// Anything else (null, primitives, objects without `items`) yields an empty
/// response. Total function: never fails, never panics. Callers rendering
/// lists degrade to "no items" on an unexpected server shape instead of
/// erroring.
///
/// Note the shape-2/shape-3 priority: a two-element array of two arrays is
/// always read as a tuple, never as a two-item plain list.
pub fn normalize_list(payload: Value) -> ListResponse<Value> {
    match payload {
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => {
                let total = map
                    .get("total")
                    .and_then(Value::as_u64)
                    .unwrap_or(items.len() as u64);
                ListResponse { items, total }
            }
            _ => ListResponse::empty(),
        },
        Value::Array(seq) if is_tuple_shaped(&seq) => {
            let mut parts = seq.into_iter();
            match (parts.next(), parts.next()) {
                (Some(Value::Array(items)), Some(raw_total)) => {
                    let total = raw_total.as_u64().unwrap_or(items.len() as u64);
                    ListResponse { items, total }
                }
                // guarded by is_tuple_shaped; default keeps the contract total
                _ => ListResponse::empty(),
            }
        }
        Value::Array(items) => {
            let total = items.len() as u64;
            ListResponse { items, total }
        }
        _ => ListResponse::empty(),
    }
}

fn is_tuple_shaped(seq: &[Value]) -> bool {
    seq.len() == 2 && seq[0].is_array()
}
