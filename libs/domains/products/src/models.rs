use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier, immutable after creation
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    /// Free-form category, matched exactly by the filter
    pub category: Option<String>,
}

impl Product {
    /// Build a stored product from a request body.
    pub fn from_input(id: i64, input: ProductInput) -> Self {
        let mut product = Self {
            id,
            name: String::new(),
            description: String::new(),
            price: 0.0,
            rating: 0.0,
            category: None,
        };
        product.overwrite(input);
        product
    }

    /// Replace every mutable field, keeping the id.
    ///
    /// Fields missing from the request are written as their zero value.
    pub fn overwrite(&mut self, input: ProductInput) {
        self.name = input.name.unwrap_or_default();
        self.description = input.description.unwrap_or_default();
        self.price = input.price.unwrap_or_default();
        self.rating = input.rating.unwrap_or_default();
        self.category = input.category;
    }
}

/// Request body for create and full update.
///
/// An `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Query filters for `GET /filter`.
///
/// Every criterion is optional; present ones are ANDed and bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Exact category match; `category=` matches only an empty category
    pub category: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub max_price: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub min_rating: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub max_rating: Option<f64>,
}

/// Deserialize blank strings as None for optional numeric bounds.
///
/// Forms submit every field, so `maxPrice=` means no bound.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Bound {
        Number(f64),
        Text(String),
    }

    match Option::<Bound>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Bound::Number(n)) => Ok(Some(n)),
        Some(Bound::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Bound::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl ProductFilter {
    /// In-memory evaluation of the filter predicate.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = match &self.category {
            Some(category) => product.category.as_deref() == Some(category.as_str()),
            None => true,
        };

        category_ok
            && self.min_price.is_none_or(|min| product.price >= min)
            && self.max_price.is_none_or(|max| product.price <= max)
            && self.min_rating.is_none_or(|min| product.rating >= min)
            && self.max_rating.is_none_or(|max| product.rating <= max)
    }
}
