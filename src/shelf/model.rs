use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One inventory entry.
///
/// The `id` is assigned at creation and is the only thing edit/delete key
/// on; two items with identical fields remain distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    // Blobs written before ids existed have no id field; assign one on load.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
}

impl Item {
    pub fn new(name: String, category: String, quantity: i64, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            category,
            quantity,
            price,
        }
    }
}
