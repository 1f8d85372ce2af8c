/// A catalog entry, referenced by cart lines for display.
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Backend-assigned identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: Vec<String>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Backend identifier
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `image` - Image URLs, the first one is the thumbnail
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: f64,
        image: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image,
        }
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.image.first().map(String::as_str)
    }
}
