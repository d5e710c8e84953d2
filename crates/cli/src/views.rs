//! JSON views handed to the rendering layer.

use serde::Serialize;

use hcn_catalog::{Brand, CatalogStore, Category, IntegrityReport, Product, MATERIALS, SIZES};
use hcn_contact::SiteConfig;

// -------------------------
// Response views
// -------------------------

/// A product plus the links a product card needs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    pub brand_name: Option<&'a str>,
    pub page_path: String,
    pub contact_link: String,
}

impl<'a> ProductView<'a> {
    pub fn new(store: &'a CatalogStore, site: &SiteConfig, product: &'a Product) -> Self {
        let page_url = site.product_page_url(product.slug().as_str());
        Self {
            product,
            brand_name: store.brand_of(product).map(Brand::name),
            page_path: site.base_path.product(product.slug().as_str()),
            contact_link: site
                .contact_links()
                .product_contact_link(product.name(), &page_url),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogExport<'a> {
    pub site: &'a SiteConfig,
    pub contact_link: String,
    pub categories: &'a [Category],
    pub brands: &'a [Brand],
    pub products: Vec<ProductView<'a>>,
    pub featured: Vec<&'a str>,
    pub new_arrivals: Vec<&'a str>,
    pub materials: Vec<&'a str>,
    pub sizes: Vec<&'a str>,
    /// Filter vocabularies offered by the storefront, in display order.
    pub material_options: &'static [&'static str],
    pub size_options: &'static [&'static str],
}

impl<'a> CatalogExport<'a> {
    pub fn new(store: &'a CatalogStore, site: &'a SiteConfig) -> Self {
        let slugs = |products: Vec<&'a Product>| -> Vec<&'a str> {
            products.into_iter().map(|p| p.slug().as_str()).collect()
        };

        Self {
            site,
            contact_link: site.contact_links().contact_link(None),
            categories: store.categories(),
            brands: store.brands(),
            products: store
                .products()
                .iter()
                .map(|p| ProductView::new(store, site, p))
                .collect(),
            featured: slugs(store.featured_products()),
            new_arrivals: slugs(store.new_products()),
            materials: store.unique_materials(),
            sizes: store.unique_sizes(),
            material_options: &MATERIALS,
            size_options: &SIZES,
        }
    }
}

/// Product detail page data.
#[derive(Debug, Serialize)]
pub struct ProductDetail<'a> {
    pub product: ProductView<'a>,
    pub category: Option<&'a Category>,
    pub related: Vec<ProductView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct IntegrityView<'a> {
    pub clean: bool,
    #[serde(flatten)]
    pub report: &'a IntegrityReport,
}
