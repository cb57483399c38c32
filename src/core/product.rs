//! Product-specific operations - catalog search and the curated listings.

use super::service::EntityService;
use crate::client::envelope::decode_list;
use crate::entities::{Product, fields};
use crate::errors::Result;
use serde_json::Value;
use tracing::debug;

/// Product service: the generic contract plus search.
pub type ProductService = EntityService<Product>;

/// Catalog ordering offered to shoppers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Server default order
    #[default]
    Default,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Newest first
    Newest,
}

impl SortOption {
    /// Reads the `sort` URL parameter; unknown values fall back to the default.
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("price_asc") => Self::PriceAsc,
            Some("price_desc") => Self::PriceDesc,
            Some("newest") => Self::Newest,
            _ => Self::Default,
        }
    }

    /// Value written to the `sort` URL parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Newest => "newest",
        }
    }

    /// `(sort, order)` sent to the search endpoint.
    #[must_use]
    pub const fn api_order(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Default => None,
            Self::PriceAsc => Some(("price", "asc")),
            Self::PriceDesc => Some(("price", "desc")),
            Self::Newest => Some(("created_at", "desc")),
        }
    }
}

/// Parameters of `GET products/search`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductQuery {
    /// 1-based page
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Category id filter
    pub category: Option<String>,
    /// Lower price bound
    pub min_price: Option<String>,
    /// Upper price bound
    pub max_price: Option<String>,
    /// Free-text query
    pub q: Option<String>,
    /// Ordering
    pub sort: SortOption,
}

impl ProductQuery {
    /// Query parameters in the order the endpoint documents them. Empty
    /// filters are omitted.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.max(1).to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        let optional = [
            ("category", &self.category),
            ("minPrice", &self.min_price),
            ("maxPrice", &self.max_price),
            ("q", &self.q),
        ];
        for (key, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                params.push((key.to_string(), value.to_string()));
            }
        }
        if let Some((sort, order)) = self.sort.api_order() {
            params.push(("sort".to_string(), sort.to_string()));
            params.push(("order".to_string(), order.to_string()));
        }
        params
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchPage {
    /// Products on this page
    pub products: Vec<Product>,
    /// Matches across all pages
    pub total: u64,
}

impl SearchPage {
    /// Reads `{products: [...], total: N}`, a bare array (total = its length),
    /// or anything else as an empty page.
    ///
    /// # Errors
    /// Returns an error if a product cannot be decoded.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(_) => {
                let products = decode_list::<Product>(value)?;
                Ok(Self {
                    total: products.len() as u64,
                    products,
                })
            }
            Value::Object(mut map) if map.get("products").is_some_and(Value::is_array) => {
                let total = fields::integer(map.get("total"));
                let products =
                    decode_list::<Product>(map.remove("products").unwrap_or(Value::Null))?;
                let total = total
                    .and_then(|t| u64::try_from(t).ok())
                    .unwrap_or(products.len() as u64);
                Ok(Self { products, total })
            }
            _ => Ok(Self::default()),
        }
    }
}

impl EntityService<Product> {
    /// Server-side catalog search.
    ///
    /// # Errors
    /// Returns an error if the request fails or a product cannot be decoded.
    pub async fn search(&self, query: &ProductQuery) -> Result<SearchPage> {
        let value = self
            .client()
            .get_with_query("products/search", query.to_params())
            .await?;
        let page = SearchPage::from_value(value)?;
        debug!("Search returned {} of {} products", page.products.len(), page.total);
        Ok(page)
    }

    /// Products of one category.
    ///
    /// # Errors
    /// Returns an error if the request fails or a product cannot be decoded.
    pub async fn by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        let value = self
            .client()
            .get(&format!("products/category/{category_id}"))
            .await?;
        decode_list(value)
    }

    /// Products currently on sale.
    ///
    /// # Errors
    /// Returns an error if the request fails or a product cannot be decoded.
    pub async fn on_sale(&self) -> Result<Vec<Product>> {
        decode_list(self.client().get("products/on-sale").await?)
    }

    /// Products ordered by view count.
    ///
    /// # Errors
    /// Returns an error if the request fails or a product cannot be decoded.
    pub async fn most_viewed(&self) -> Result<Vec<Product>> {
        decode_list(self.client().get("products/most-viewed").await?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::client::Method;
    use crate::test_utils::{MockTransport, test_client};
    use serde_json::json;

    #[test]
    fn test_query_params() {
        let query = ProductQuery {
            page: 2,
            limit: 12,
            category: Some("3".into()),
            min_price: Some(String::new()),
            q: Some("áo".into()),
            sort: SortOption::PriceDesc,
            ..ProductQuery::default()
        };
        let params = query.to_params();
        let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["page", "limit", "category", "q", "sort", "order"]);
        assert_eq!(params[4].1, "price");
        assert_eq!(params[5].1, "desc");
    }

    #[test]
    fn test_sort_round_trip_and_mapping() {
        assert_eq!(SortOption::from_param(Some("newest")).api_order(), Some(("created_at", "desc")));
        assert_eq!(SortOption::from_param(Some("bogus")), SortOption::Default);
        assert_eq!(SortOption::PriceAsc.as_param(), "price_asc");
    }

    #[test]
    fn test_search_page_shapes() -> Result<()> {
        let page = SearchPage::from_value(json!({"products": [{"id": 1}, {"id": 2}], "total": 25}))?;
        assert_eq!(page.products.len(), 2);
        assert_eq!(page.total, 25);

        let bare = SearchPage::from_value(json!([{"id": 1}]))?;
        assert_eq!(bare.total, 1);

        let odd = SearchPage::from_value(json!({"message": "no"}))?;
        assert_eq!(odd, SearchPage::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_search_sends_query() -> Result<()> {
        let transport = MockTransport::new();
        transport.on(Method::Get, "products/search", json!({"products": [], "total": 0}));
        let service = ProductService::new(test_client(&transport));

        service
            .search(&ProductQuery {
                page: 1,
                limit: 12,
                ..ProductQuery::default()
            })
            .await?;

        let request = &transport.requests()[0];
        assert!(request.query.contains(&("limit".to_string(), "12".to_string())));
        Ok(())
    }

    #[tokio::test]
    async fn test_on_sale_unwraps_envelope() -> Result<()> {
        let transport = MockTransport::new();
        transport.on(
            Method::Get,
            "products/on-sale",
            json!({"data": [{"id": 4, "name": "Áo", "price": 200_000, "priceSale": 150_000}]}),
        );
        let service = ProductService::new(test_client(&transport));

        let products = service.on_sale().await?;

        assert_eq!(transport.paths(), vec!["GET products/on-sale"]);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Áo");
        Ok(())
    }

    #[tokio::test]
    async fn test_most_viewed_bare_list() -> Result<()> {
        let transport = MockTransport::new();
        transport.on(
            Method::Get,
            "products/most-viewed",
            json!([{"id": 9, "name": "Quần", "view": 120}, {"id": 2, "name": "Mũ", "view": 80}]),
        );
        let service = ProductService::new(test_client(&transport));

        let products = service.most_viewed().await?;

        assert_eq!(transport.count(Method::Get, "products/most-viewed"), 1);
        let views: Vec<Option<i64>> = products.iter().map(|p| p.view).collect();
        assert_eq!(views, vec![Some(120), Some(80)]);
        Ok(())
    }
}
