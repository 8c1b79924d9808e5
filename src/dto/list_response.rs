use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical envelope for list endpoints.
///
/// `total` is the logical count of items available server-side; with
/// paginated endpoints it may exceed `items.len()`. When a payload carries no
/// explicit total it defaults to the item count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> ListResponse<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl ListResponse<Value> {
    /// Deserialize each item into `T`, keeping the envelope's total.
    ///
    /// Envelope normalization never inspects element schema; this step does,
    /// and fails on the first item that does not match `T`.
    pub fn decode_items<T: DeserializeOwned>(self) -> serde_json::Result<ListResponse<T>> {
        let total = self.total;
        let items = self
            .items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<serde_json::Result<Vec<T>>>()?;
        Ok(ListResponse { items, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Widget {
        id: u32,
        name: String,
    }

    #[test]
    fn test_decode_items_typed() {
        let raw = ListResponse {
            items: vec![json!({"id": 1, "name": "a"}), json!({"id": 2, "name": "b"})],
            total: 9,
        };

        let typed: ListResponse<Widget> = raw.decode_items().unwrap();
        assert_eq!(typed.total, 9);
        assert_eq!(
            typed.items,
            vec![
                Widget { id: 1, name: "a".into() },
                Widget { id: 2, name: "b".into() },
            ]
        );
    }

    #[test]
    fn test_decode_items_schema_mismatch_errors() {
        let raw = ListResponse {
            items: vec![json!({"id": "not-a-number", "name": "a"})],
            total: 1,
        };

        assert!(raw.decode_items::<Widget>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let resp = ListResponse {
            items: vec![json!(1), json!(2)],
            total: 10,
        };

        let encoded = serde_json::to_value(&resp).unwrap();
        assert_eq!(encoded, json!({"items": [1, 2], "total": 10}));

        let decoded: ListResponse<Value> = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, resp);
    }
}
