//! `hcn-catalog` command line: exports and inspects the catalog for the
//! static-site build.

pub mod views;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;

use hcn_catalog::{hcn_seed, CatalogSeed, CatalogStore, Product, DEFAULT_RELATED_LIMIT};
use hcn_contact::SiteConfig;
use hcn_core::DomainError;

use crate::views::{CatalogExport, IntegrityView, ProductDetail, ProductView};

#[derive(Debug, Parser)]
#[command(name = "hcn-catalog")]
#[command(about = "Grupo HCN catalog tools")]
#[command(after_help = concat!(
    "Environment:\n",
    "  HCN_SITE_ORIGIN       Public scheme + host\n",
    "  HCN_BASE_PATH         Deployment path prefix\n",
    "  HCN_WHATSAPP_NUMBER   Contact number (digits only)\n",
    "  HCN_WHATSAPP_MESSAGE  Default contact greeting\n",
    "  HCN_LOG_FORMAT        json (default) or pretty",
))]
pub struct Cli {
    /// Load the catalog from a JSON seed instead of the embedded dataset.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Pretty-print JSON output.
    #[arg(long, global = true, default_value_t = false)]
    pretty: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Full catalog snapshot for the site build.
    Export,
    /// Report integrity violations in the catalog declarations.
    Check {
        /// Exit with an error when any violation is found.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// One product with its related products.
    Product {
        slug: String,
        #[arg(long, default_value_t = DEFAULT_RELATED_LIMIT)]
        related: usize,
    },
    /// Print a contact link.
    Link {
        /// Build the quote-request link for this product slug.
        #[arg(long, conflicts_with = "message")]
        product: Option<String>,
        /// Custom message instead of the default greeting.
        #[arg(long)]
        message: Option<String>,
    },
}

fn load_seed(path: Option<&Path>) -> anyhow::Result<CatalogSeed> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?;
            CatalogSeed::from_json(&raw)
                .with_context(|| format!("failed to parse catalog {}", path.display()))
        }
        None => Ok(hcn_seed().context("embedded catalog is invalid")?),
    }
}

fn write_json<W: Write, T: Serialize>(
    out: &mut W,
    value: &T,
    pretty: bool,
) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn find_product<'a>(store: &'a CatalogStore, slug: &str) -> anyhow::Result<&'a Product> {
    store
        .product_by_slug(slug)
        .ok_or_else(DomainError::not_found)
        .with_context(|| format!("product `{slug}`"))
}

/// Execute a parsed command, writing its output to `out`.
///
/// `check` reports on whatever was declared; every other command that reads
/// the catalog refuses one with dangling references. A plain `link` never
/// loads it.
pub fn run<W: Write>(cli: Cli, site: &SiteConfig, out: &mut W) -> anyhow::Result<()> {
    let catalog = cli.catalog.as_deref();
    let pretty = cli.pretty;

    let strict_store = || -> anyhow::Result<CatalogStore> {
        let store = CatalogStore::build_strict(load_seed(catalog)?)
            .context("catalog failed integrity checks")?;
        tracing::debug!(products = store.products().len(), "catalog loaded");
        Ok(store)
    };

    match cli.command {
        Command::Check { strict } => {
            let store = CatalogStore::build(load_seed(catalog)?);
            let report = store.integrity();
            let view = IntegrityView {
                clean: report.is_clean(),
                report,
            };
            write_json(out, &view, pretty)?;
            if strict && !report.is_clean() {
                let count = report.violations().len();
                bail!("catalog has {count} integrity violation(s)");
            }
            Ok(())
        }
        Command::Export => {
            let store = strict_store()?;
            write_json(out, &CatalogExport::new(&store, site), pretty)
        }
        Command::Product { slug, related } => {
            let store = strict_store()?;
            let product = find_product(&store, &slug)?;
            let detail = ProductDetail {
                product: ProductView::new(&store, site, product),
                category: store.category_of(product),
                related: store
                    .related_products(product, related)
                    .into_iter()
                    .map(|p| ProductView::new(&store, site, p))
                    .collect(),
            };
            write_json(out, &detail, pretty)
        }
        Command::Link { product, message } => {
            let links = site.contact_links();
            let link = match product {
                Some(slug) => {
                    let store = strict_store()?;
                    let product = find_product(&store, &slug)?;
                    links.product_contact_link(
                        product.name(),
                        &site.product_page_url(product.slug().as_str()),
                    )
                }
                None => links.contact_link(message.as_deref()),
            };
            writeln!(out, "{link}")?;
            Ok(())
        }
    }
}
