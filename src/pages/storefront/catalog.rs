//! Product catalog: every product, one category, or a keyword search.
//!
//! Filters and the current page live in the URL query string. Reading them
//! back on construction restores the view after a reload; every change is
//! written back before the next search.

use super::product_card::ProductCard;
use crate::core::listing::{Pagination, active};
use crate::core::product::{ProductQuery, SortOption};
use crate::entities::{Category, Product};
use crate::pages::PageContext;
use crate::ui::{QueryString, ViewState};
use tracing::{debug, error};

const LOAD_FAILED: &str = "Không thể tải danh sách sản phẩm.";

/// Which products the catalog lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogScope {
    /// `/tat-ca-san-pham`
    All,
    /// `/danh-muc-san-pham/:id`
    Category(i64),
    /// `/tim-kiem-san-pham?keyword=`
    Search,
}

/// User-chosen filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilters {
    /// Category id, as typed in the URL
    pub category: Option<String>,
    /// Free text
    pub q: Option<String>,
    /// Ordering
    pub sort: SortOption,
    /// Lower price bound
    pub min_price: Option<String>,
    /// Upper price bound
    pub max_price: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn put(query: &mut QueryString, key: &str, value: Option<&str>) {
    match value {
        Some(value) => query.set(key, value),
        None => query.delete(key),
    }
}

/// Catalog page.
pub struct ProductCatalog {
    ctx: PageContext,
    scope: CatalogScope,
    filters: CatalogFilters,
    pagination: Pagination,
    categories: Vec<Category>,
    state: ViewState<Vec<ProductCard>>,
}

impl ProductCatalog {
    /// Creates the catalog and restores its state from the URL.
    #[must_use]
    pub fn new(ctx: PageContext, scope: CatalogScope) -> Self {
        let query = ctx.navigator.query();
        let mut pagination = Pagination::new(ctx.config.storefront.page_size);
        if let Some(page) = query.get("page").and_then(|p| p.trim().parse::<u32>().ok()) {
            pagination.reset_to(page);
        }

        let category = match scope {
            CatalogScope::Category(id) => Some(id.to_string()),
            CatalogScope::All | CatalogScope::Search => non_empty(query.get("category")),
        };
        let q = match scope {
            CatalogScope::Search => non_empty(query.get("keyword")),
            CatalogScope::All | CatalogScope::Category(_) => non_empty(query.get("q")),
        };
        let filters = CatalogFilters {
            category,
            q,
            sort: SortOption::from_param(query.get("sort")),
            min_price: non_empty(query.get("minPrice")),
            max_price: non_empty(query.get("maxPrice")),
        };

        Self {
            ctx,
            scope,
            filters,
            pagination,
            categories: Vec::new(),
            state: ViewState::Loading,
        }
    }

    /// Search parameters for the current state.
    #[must_use]
    pub fn query(&self) -> ProductQuery {
        ProductQuery {
            page: self.pagination.page(),
            limit: self.pagination.page_size(),
            category: self.filters.category.clone(),
            min_price: self.filters.min_price.clone(),
            max_price: self.filters.max_price.clone(),
            q: self.filters.q.clone(),
            sort: self.filters.sort,
        }
    }

    /// Fetches the active categories and the current page of results.
    pub async fn load(&mut self) {
        let categories = self.ctx.service::<Category>();
        let products = self.ctx.service::<Product>();
        let query = self.query();
        match tokio::try_join!(categories.index(), products.search(&query)) {
            Ok((categories, page)) => {
                debug!("Catalog page {} holds {} products", query.page, page.products.len());
                self.categories = active(categories);
                self.pagination.set_total(page.total);
                self.state = ViewState::Ready(
                    page.products
                        .iter()
                        .map(|p| ProductCard::new(p, &self.ctx))
                        .collect(),
                );
            }
            Err(e) => {
                error!("Error fetching products: {}", e);
                self.state = ViewState::Failed(LOAD_FAILED.to_string());
            }
        }
    }

    fn write_url(&self) {
        let mut query = self.ctx.navigator.query();
        query.set("page", self.pagination.page().to_string());
        if !matches!(self.scope, CatalogScope::Category(_)) {
            put(&mut query, "category", self.filters.category.as_deref());
        }
        let text_key = if self.scope == CatalogScope::Search { "keyword" } else { "q" };
        put(&mut query, text_key, self.filters.q.as_deref());
        let sort = (self.filters.sort != SortOption::Default).then(|| self.filters.sort.as_param());
        put(&mut query, "sort", sort);
        put(&mut query, "minPrice", self.filters.min_price.as_deref());
        put(&mut query, "maxPrice", self.filters.max_price.as_deref());
        self.ctx.navigator.set_query(&query);
    }

    async fn refilter(&mut self) {
        self.pagination.reset_to(1);
        self.write_url();
        self.load().await;
    }

    /// Filters by category. Ignored on a category page.
    pub async fn set_category(&mut self, category: Option<&str>) {
        if matches!(self.scope, CatalogScope::Category(_)) {
            return;
        }
        self.filters.category = non_empty(category);
        self.refilter().await;
    }

    /// Changes the ordering.
    pub async fn set_sort(&mut self, sort: SortOption) {
        self.filters.sort = sort;
        self.refilter().await;
    }

    /// Sets both price bounds.
    pub async fn set_price_range(&mut self, min: Option<&str>, max: Option<&str>) {
        self.filters.min_price = non_empty(min);
        self.filters.max_price = non_empty(max);
        self.refilter().await;
    }

    /// Sets the free-text query.
    pub async fn set_search(&mut self, q: Option<&str>) {
        self.filters.q = non_empty(q);
        self.refilter().await;
    }

    /// Drops every filter; the URL keeps only `page=1`.
    ///
    /// The scope itself survives: a category page stays on its category and
    /// a search keeps its keyword.
    pub async fn clear_filters(&mut self) {
        let keyword = match self.scope {
            CatalogScope::Search => self.filters.q.take(),
            CatalogScope::All | CatalogScope::Category(_) => None,
        };
        let category = match self.scope {
            CatalogScope::Category(id) => Some(id.to_string()),
            CatalogScope::All | CatalogScope::Search => None,
        };
        self.filters = CatalogFilters {
            category,
            q: keyword,
            ..CatalogFilters::default()
        };
        self.pagination.reset_to(1);

        let mut query = QueryString::new();
        query.set("page", "1");
        if let Some(keyword) = &self.filters.q {
            query.set("keyword", keyword.as_str());
        }
        self.ctx.navigator.set_query(&query);
        self.load().await;
    }

    /// Moves to `page` when it lies within `[1, total_pages]`; out-of-range
    /// requests change nothing.
    pub async fn go_to_page(&mut self, page: u32) -> bool {
        if !self.pagination.go_to(page) {
            return false;
        }
        self.write_url();
        self.load().await;
        true
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState<Vec<ProductCard>> {
        &self.state
    }

    /// Current filters.
    #[must_use]
    pub const fn filters(&self) -> &CatalogFilters {
        &self.filters
    }

    /// Active categories for the filter sidebar.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Page bookkeeping.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Heading of the results.
    #[must_use]
    pub fn heading(&self) -> String {
        match self.scope {
            CatalogScope::All => "Tất cả sản phẩm".to_string(),
            CatalogScope::Category(id) => self
                .categories
                .iter()
                .find(|c| c.id == id)
                .map_or_else(|| "Danh mục sản phẩm".to_string(), |c| c.name.clone()),
            CatalogScope::Search => format!(
                "Kết quả tìm kiếm cho: \"{}\"",
                self.filters.q.as_deref().unwrap_or_default()
            ),
        }
    }
}
