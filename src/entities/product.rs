//! Product entity - Represents catalog items with a regular and a sale price.
//!
//! Products belong to one category and carry an optional uploaded image. The
//! sale price only counts when it is non-zero; the storefront derives the
//! discount badge from the pair.

use super::{DeleteRoute, EmbeddedRef, Resource, Routes, Timestamp, fields, timestamp};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Product as served by `GET products`, with every alias kept.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    id: Option<Value>,
    name: Option<Value>,
    description: Option<Value>,
    price: Option<Value>,
    #[serde(rename = "priceSale")]
    price_sale_camel: Option<Value>,
    #[serde(rename = "price_sale")]
    price_sale_snake: Option<Value>,
    #[serde(rename = "isOnSale")]
    is_on_sale_camel: Option<Value>,
    #[serde(rename = "is_on_sale")]
    is_on_sale_snake: Option<Value>,
    quantity: Option<Value>,
    view: Option<Value>,
    status: Option<Value>,
    image: Option<Value>,
    category: Option<Value>,
    #[serde(rename = "categoryId")]
    category_id_camel: Option<Value>,
    #[serde(rename = "category_id")]
    category_id_snake: Option<Value>,
    details: Option<Value>,
    #[serde(rename = "createdAt")]
    created_at_camel: Option<Value>,
    #[serde(rename = "created_at")]
    created_at_snake: Option<Value>,
    #[serde(rename = "updatedAt")]
    updated_at_camel: Option<Value>,
    #[serde(rename = "updated_at")]
    updated_at_snake: Option<Value>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ProductRecord")]
pub struct Product {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free text (may contain HTML)
    pub description: Option<String>,
    /// Regular price in VND
    pub price: f64,
    /// Sale price in VND, if any
    pub price_sale: Option<f64>,
    /// Whether the sale price is currently advertised
    pub is_on_sale: bool,
    /// Units in stock
    pub quantity: Option<i64>,
    /// View counter
    pub view: Option<i64>,
    /// Active flag
    pub status: bool,
    /// Uploaded image file name
    pub image: Option<String>,
    /// Embedded category, when the API resolved it
    pub category: Option<EmbeddedRef>,
    /// Category id (`categoryId`, then `category_id`, then `category.id`)
    pub category_id: Option<i64>,
    /// Free-form specification table
    pub details: BTreeMap<String, String>,
    /// Creation time
    pub created_at: Option<Timestamp>,
    /// Last modification time
    pub updated_at: Option<Timestamp>,
}

impl From<ProductRecord> for Product {
    fn from(raw: ProductRecord) -> Self {
        let category = EmbeddedRef::from_value(raw.category.as_ref());
        let category_id = fields::integer(fields::first(&[
            raw.category_id_camel.as_ref(),
            raw.category_id_snake.as_ref(),
        ]))
        .or_else(|| category.as_ref().and_then(|c| c.id));

        let details = match raw.details {
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(key, value)| {
                    fields::text(Some(value)).map(|text| (key.clone(), text))
                })
                .collect(),
            _ => BTreeMap::new(),
        };

        Self {
            id: fields::integer(raw.id.as_ref()).unwrap_or_default(),
            name: fields::text(raw.name.as_ref()).unwrap_or_default(),
            description: fields::text(raw.description.as_ref()),
            price: fields::number(raw.price.as_ref()).unwrap_or_default(),
            price_sale: fields::number(fields::first(&[
                raw.price_sale_camel.as_ref(),
                raw.price_sale_snake.as_ref(),
            ])),
            is_on_sale: fields::flag(fields::first(&[
                raw.is_on_sale_camel.as_ref(),
                raw.is_on_sale_snake.as_ref(),
            ])),
            quantity: fields::integer(raw.quantity.as_ref()),
            view: fields::integer(raw.view.as_ref()),
            status: fields::flag(raw.status.as_ref()),
            image: fields::text(raw.image.as_ref()),
            category,
            category_id,
            details,
            created_at: timestamp::read(&[
                raw.created_at_camel.as_ref(),
                raw.created_at_snake.as_ref(),
            ]),
            updated_at: timestamp::read(&[
                raw.updated_at_camel.as_ref(),
                raw.updated_at_snake.as_ref(),
            ]),
        }
    }
}

impl Resource for Product {
    const NAME: &'static str = "product";
    const NOUN: &'static str = "sản phẩm";
    const ROUTES: Routes = Routes {
        base: "products",
        delete: DeleteRoute::ById,
        empty_trash: false,
    };

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.status
    }

    fn created_at(&self) -> Option<&Timestamp> {
        self.created_at.as_ref()
    }
}

impl Product {
    /// Name of the category: the embedded one, else looked up by id in `categories`.
    #[must_use]
    pub fn category_name<'a>(&'a self, categories: &'a [super::Category]) -> Option<&'a str> {
        self.category
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .or_else(|| {
                let id = self.category_id?;
                categories
                    .iter()
                    .find(|c| c.id == id)
                    .map(|c| c.name.as_str())
            })
    }

    /// Sale price when it is set and non-zero.
    #[must_use]
    pub fn effective_sale(&self) -> Option<f64> {
        self.price_sale.filter(|sale| *sale != 0.0)
    }
}
