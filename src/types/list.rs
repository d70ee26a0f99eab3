use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Place, Transaction, UserResponse};

/// Collection envelope returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[aliases(
    UserList = ListResponse<UserResponse>,
    PlaceList = ListResponse<Place>,
    TransactionList = ListResponse<Transaction>
)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    /// Number of entries in `items`
    pub count: usize,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        let count = items.len();
        Self { items, count }
    }

    /// Convert every item, keeping the count.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListResponse<U> {
        ListResponse {
            items: self.items.into_iter().map(f).collect(),
            count: self.count,
        }
    }
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_items() {
        let list = ListResponse::new(vec!["a", "b", "c"]);
        assert_eq!(list.count, 3);

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json, serde_json::json!({ "items": ["a", "b", "c"], "count": 3 }));
    }

    #[test]
    fn test_map_keeps_count() {
        let list = ListResponse::new(vec![1, 2]).map(|n| n * 10);
        assert_eq!(list.items, vec![10, 20]);
        assert_eq!(list.count, 2);
    }
}
