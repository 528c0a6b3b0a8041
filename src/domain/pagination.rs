//! Envelope shape returned by every list endpoint.
//!
//! The backend computes all pagination metadata; this side only carries it
//! to the view layer untouched.

use serde::{Deserialize, Serialize};

/// Generic paginated envelope: a page of items plus server-computed
/// page/total metadata.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PageEnvelope<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PageEnvelope<T> {
    /// Maps the items while keeping the metadata intact.
    pub fn map_items<U, F>(self, f: F) -> PageEnvelope<U>
    where
        F: FnMut(T) -> U,
    {
        PageEnvelope {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_deserializes_backend_shape() {
        let json = serde_json::json!({
            "items": [1, 2, 3],
            "total": 25,
            "page": 2,
            "page_size": 10,
            "total_pages": 3,
            "has_next": true,
            "has_previous": true,
        });
        let envelope: PageEnvelope<i32> = serde_json::from_value(json).unwrap();
        assert_eq!(envelope.items, vec![1, 2, 3]);
        assert_eq!(envelope.total_pages, 3);
        assert!(envelope.has_next);
    }

    #[test]
    fn map_items_preserves_metadata() {
        let envelope = PageEnvelope {
            items: vec![1, 2],
            total: 2,
            page: 1,
            page_size: 10,
            total_pages: 1,
            has_next: false,
            has_previous: false,
        };
        let mapped = envelope.map_items(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2"]);
        assert_eq!(mapped.total, 2);
    }
}
