use std::io::Write;

use clap::Parser;
use serde_json::Value;

use hcn_cli::Cli;
use hcn_contact::SiteConfig;

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("hcn-catalog").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    hcn_cli::run(cli, &SiteConfig::default(), &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn run_json(args: &[&str]) -> Value {
    serde_json::from_str(&run(args).unwrap()).unwrap()
}

const ORPHAN_CATALOG: &str = r#"{
  "categories": [
    {"id": "cat-valvulas", "slug": "valvulas", "name": "Válvulas", "description": "", "icon": "V"}
  ],
  "brands": [
    {"id": "brand-pavco", "name": "Pavco", "logo": "/images/brands/brand-pavco.svg"}
  ],
  "products": [
    {
      "id": "prod-001", "slug": "valvula-001", "name": "Válvula de Bola",
      "categoryId": "cat-valvulas", "brandId": "brand-pavco", "sku": "HCN-0001"
    },
    {
      "id": "prod-002", "slug": "bomba-002", "name": "Bomba",
      "categoryId": "cat-bombas", "brandId": "brand-pavco", "sku": "HCN-0002"
    }
  ]
}"#;

fn orphan_catalog_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ORPHAN_CATALOG.as_bytes()).unwrap();
    file
}

#[test]
fn export_contains_the_whole_catalog() {
    let export = run_json(&["export"]);

    assert_eq!(export["categories"].as_array().unwrap().len(), 6);
    assert_eq!(export["brands"].as_array().unwrap().len(), 8);
    assert_eq!(export["products"].as_array().unwrap().len(), 120);
    assert_eq!(export["featured"].as_array().unwrap().len(), 15);
    assert_eq!(export["newArrivals"].as_array().unwrap().len(), 10);

    let counted: u64 = export["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["productCount"].as_u64().unwrap())
        .sum();
    assert_eq!(counted, 120);

    assert_eq!(export["materialOptions"].as_array().unwrap().len(), 9);
    assert_eq!(export["sizeOptions"][0], "1/4\"");
    assert_eq!(export["sizeOptions"][12], "8\"");
}

#[test]
fn exported_products_carry_links() {
    let export = run_json(&["export"]);
    let first = &export["products"][0];

    assert_eq!(first["slug"], "valvula-de-bola-bronce-1-2-001");
    assert_eq!(
        first["pagePath"],
        "/Sitio-web/productos/valvula-de-bola-bronce-1-2-001"
    );
    assert!(first["brandName"].is_string());
    assert!(
        first["contactLink"]
            .as_str()
            .unwrap()
            .starts_with("https://wa.me/51900452663?text=Hola%2C%20quisiera%20cotizar%3A%20")
    );
}

#[test]
fn pretty_output_is_still_json() {
    let raw = run(&["--pretty", "export"]).unwrap();
    assert!(raw.contains("\n  \""));
    let _: Value = serde_json::from_str(&raw).unwrap();
}

#[test]
fn check_reports_clean_embedded_catalog() {
    let report = run_json(&["check", "--strict"]);
    assert_eq!(report["clean"], true);
    assert_eq!(report["violations"].as_array().unwrap().len(), 0);
}

#[test]
fn product_detail_includes_category_and_related() {
    let detail = run_json(&["product", "valvula-de-bola-bronce-1-2-001", "--related", "2"]);

    assert_eq!(detail["product"]["id"], "prod-001");
    assert_eq!(detail["category"]["id"], detail["product"]["categoryId"]);

    let related = detail["related"].as_array().unwrap();
    assert_eq!(related.len(), 2);
    for p in related {
        assert_eq!(p["categoryId"], detail["product"]["categoryId"]);
        assert_ne!(p["id"], "prod-001");
    }
}

#[test]
fn unknown_product_is_an_error() {
    let err = run(&["product", "no-existe"]).unwrap_err();
    assert!(format!("{err:#}").contains("no-existe"));
}

#[test]
fn link_defaults_to_greeting() {
    let link = run(&["link"]).unwrap();
    assert_eq!(
        link.trim_end(),
        SiteConfig::default().contact_links().contact_link(None)
    );
}

#[test]
fn link_with_message_or_product() {
    let custom = run(&["link", "--message", "Hola"]).unwrap();
    assert_eq!(custom.trim_end(), "https://wa.me/51900452663?text=Hola");

    let product = run(&["link", "--product", "valvula-de-bola-bronce-1-2-001"]).unwrap();
    let (_, text) = product.trim_end().split_once("?text=").unwrap();
    let text = percent_encoding::percent_decode_str(text).decode_utf8().unwrap();
    assert!(text.starts_with("Hola, quisiera cotizar: "));
    assert!(text.ends_with(
        "\nhttps://GRUPO-HCN.github.io/Sitio-web/productos/valvula-de-bola-bronce-1-2-001"
    ));
}

#[test]
fn link_message_keeps_uri_component_marks() {
    let link = run(&["link", "--message", "Bomba (1HP)!"]).unwrap();
    assert_eq!(link.trim_end(), "https://wa.me/51900452663?text=Bomba%20(1HP)!");
}

#[test]
fn plain_link_does_not_read_the_catalog() {
    let missing = "/nonexistent/catalog.json";
    let link = run(&["--catalog", missing, "link", "--message", "Hola"]).unwrap();
    assert_eq!(link.trim_end(), "https://wa.me/51900452663?text=Hola");

    assert!(run(&["--catalog", missing, "link", "--product", "x"]).is_err());
}

#[test]
fn link_rejects_product_and_message_together() {
    let parsed = Cli::try_parse_from(["hcn-catalog", "link", "--product", "x", "--message", "y"]);
    assert!(parsed.is_err());
}

#[test]
fn external_catalog_with_orphan_is_reported() {
    let file = orphan_catalog_file();
    let path = file.path().to_str().unwrap();

    let report = run_json(&["--catalog", path, "check"]);
    assert_eq!(report["clean"], false);
    assert_eq!(report["violations"][0]["kind"], "unknown_category");

    assert!(run(&["--catalog", path, "check", "--strict"]).is_err());
    assert!(run(&["--catalog", path, "export"]).is_err());
}

#[test]
fn missing_catalog_file_is_an_error() {
    let err = run(&["--catalog", "/nonexistent/catalog.json", "export"]).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read catalog"));
}
