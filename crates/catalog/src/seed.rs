//! Grupo HCN catalog dataset.
//!
//! Declarations only; [`CatalogStore::build_strict`] derives category counts
//! and checks integrity.

use hcn_core::{slugify, BrandId, CategoryId, DomainResult, Entity, ProductId, Slug};

use crate::brand::Brand;
use crate::category::CategoryDraft;
use crate::product::ProductDraft;
use crate::store::{CatalogSeed, CatalogStore};

/// Canonical material vocabulary offered by the storefront filters.
pub const MATERIALS: [&str; 9] = [
    "PVC",
    "CPVC",
    "Bronce",
    "Acero Inoxidable",
    "Acero al Carbón",
    "Hierro Galvanizado",
    "Polietileno",
    "Cobre",
    "PPR",
];

/// Canonical pipe sizes, smallest first.
pub const SIZES: [&str; 13] = [
    "1/4\"", "3/8\"", "1/2\"", "3/4\"", "1\"", "1-1/4\"", "1-1/2\"", "2\"", "2-1/2\"", "3\"", "4\"",
    "6\"", "8\"",
];

const PLACEHOLDER_IMAGES: [&str; 3] = [
    "/images/products/placeholder-1.svg",
    "/images/products/placeholder-2.svg",
    "/images/products/placeholder-3.svg",
];

fn category(id: &str, name: &str, description: &str, icon: &str) -> DomainResult<CategoryDraft> {
    Ok(CategoryDraft {
        id: CategoryId::new(id)?,
        slug: Slug::new(id)?,
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    })
}

fn categories() -> DomainResult<Vec<CategoryDraft>> {
    Ok(vec![
        category(
            "valvulas",
            "Válvulas",
            "Válvulas de bola, compuerta, check, mariposa y más para control de flujo en instalaciones industriales y residenciales.",
            "🔧",
        )?,
        category(
            "conexiones",
            "Conexiones",
            "Codos, tees, reducciones, uniones y acoples para todo tipo de tuberías y sistemas de conducción.",
            "🔗",
        )?,
        category(
            "tuberias",
            "Tuberías",
            "Tuberías de PVC, CPVC, acero, cobre y polietileno en diversas medidas y especificaciones.",
            "🏗️",
        )?,
        category(
            "accesorios",
            "Accesorios",
            "Abrazaderas, selladores, cintas teflón, soportes y herramientas complementarias para instalaciones.",
            "⚙️",
        )?,
        category(
            "bombas",
            "Bombas",
            "Bombas centrífugas, sumergibles y de presión para agua y fluidos industriales.",
            "💧",
        )?,
        category(
            "filtros",
            "Filtros",
            "Filtros de agua, sedimentos y sistemas de purificación para uso residencial e industrial.",
            "🔬",
        )?,
    ])
}

fn brands() -> DomainResult<Vec<Brand>> {
    [
        ("amanco", "Amanco"),
        ("pavco", "Pavco"),
        ("nibco", "NIBCO"),
        ("fmc", "FMC"),
        ("helbert", "Helbert"),
        ("truper", "Truper"),
        ("rotoplas", "Rotoplas"),
        ("urrea", "Urrea"),
    ]
    .into_iter()
    .map(|(id, name)| -> DomainResult<Brand> {
        Ok(Brand::new(BrandId::new(id)?, name, format!("/images/brands/{id}.svg")))
    })
    .collect()
}

/// Fills in the derived fields every HCN product shares (id, slug, SKU,
/// boilerplate copy, default specs and placeholder images).
struct ProductFactory<'a> {
    brands: &'a [Brand],
}

impl ProductFactory<'_> {
    fn make(
        &self,
        n: u32,
        name: &str,
        category: &str,
        brand: &str,
        material: &str,
        size: &str,
    ) -> DomainResult<ProductDraft> {
        let brand_name = self
            .brands
            .iter()
            .find(|b| b.id() == brand)
            .map_or(brand, Brand::name);
        let slug = format!("{}-{n:03}", slugify(&format!("{name} {material} {size}")));

        Ok(ProductDraft::new(
            ProductId::new(format!("prod-{n:03}"))?,
            Slug::new(slug)?,
            name,
            CategoryId::new(category)?,
            BrandId::new(brand)?,
            format!("HCN-{n:04}"),
        )
        .description(format!(
            "{name} de {material} marca {brand_name}, medida {size}. Ideal para instalaciones residenciales e industriales. Cumple con estándares de calidad y normativas vigentes."
        ))
        .short_description(format!("{name} {material} {size}"))
        .material(material)
        .size(size)
        .specs([
            ("Material", material),
            ("Medida", size),
            ("Presión máx.", "150 PSI"),
            ("Conexión", "Roscada"),
            ("Norma", "ASTM / NSF"),
        ])
        .images(PLACEHOLDER_IMAGES))
    }
}

fn products(brands: &[Brand]) -> DomainResult<Vec<ProductDraft>> {
    let f = ProductFactory { brands };
    Ok(vec![
        // Válvulas
        f.make(1, "Válvula de Bola", "valvulas", "nibco", "Bronce", "1/2\"")?.featured(true),
        f.make(2, "Válvula de Bola", "valvulas", "nibco", "Bronce", "3/4\"")?.featured(true),
        f.make(3, "Válvula de Bola", "valvulas", "nibco", "Bronce", "1\"")?,
        f.make(4, "Válvula de Bola", "valvulas", "nibco", "Bronce", "1-1/2\"")?,
        f.make(5, "Válvula de Bola", "valvulas", "nibco", "Bronce", "2\"")?,
        f.make(6, "Válvula de Bola", "valvulas", "urrea", "Acero Inoxidable", "1/2\"")?
            .new_arrival(true),
        f.make(7, "Válvula de Bola", "valvulas", "urrea", "Acero Inoxidable", "3/4\"")?,
        f.make(8, "Válvula de Bola", "valvulas", "urrea", "Acero Inoxidable", "1\"")?,
        f.make(9, "Válvula de Compuerta", "valvulas", "nibco", "Bronce", "1/2\"")?,
        f.make(10, "Válvula de Compuerta", "valvulas", "nibco", "Bronce", "3/4\"")?.featured(true),
        f.make(11, "Válvula de Compuerta", "valvulas", "nibco", "Bronce", "1\"")?,
        f.make(12, "Válvula de Compuerta", "valvulas", "nibco", "Bronce", "2\"")?,
        f.make(13, "Válvula de Compuerta", "valvulas", "fmc", "Hierro Galvanizado", "2\"")?,
        f.make(14, "Válvula de Compuerta", "valvulas", "fmc", "Hierro Galvanizado", "3\"")?,
        f.make(15, "Válvula de Compuerta", "valvulas", "fmc", "Hierro Galvanizado", "4\"")?,
        f.make(16, "Válvula Check", "valvulas", "nibco", "Bronce", "1/2\"")?,
        f.make(17, "Válvula Check", "valvulas", "nibco", "Bronce", "3/4\"")?,
        f.make(18, "Válvula Check", "valvulas", "nibco", "Bronce", "1\"")?,
        f.make(19, "Válvula Check", "valvulas", "nibco", "Bronce", "2\"")?.featured(true),
        f.make(20, "Válvula Check Vertical", "valvulas", "urrea", "Bronce", "1/2\"")?
            .new_arrival(true),
        f.make(21, "Válvula Check Vertical", "valvulas", "urrea", "Bronce", "3/4\"")?,
        f.make(22, "Válvula Mariposa", "valvulas", "fmc", "Hierro Galvanizado", "2\"")?,
        f.make(23, "Válvula Mariposa", "valvulas", "fmc", "Hierro Galvanizado", "3\"")?,
        f.make(24, "Válvula Mariposa", "valvulas", "fmc", "Hierro Galvanizado", "4\"")?,
        f.make(25, "Válvula Mariposa", "valvulas", "fmc", "Hierro Galvanizado", "6\"")?,
        f.make(26, "Válvula de Globo", "valvulas", "nibco", "Bronce", "1/2\"")?,
        f.make(27, "Válvula de Globo", "valvulas", "nibco", "Bronce", "3/4\"")?,
        f.make(28, "Válvula de Globo", "valvulas", "nibco", "Bronce", "1\"")?,
        f.make(29, "Válvula Reguladora de Presión", "valvulas", "urrea", "Bronce", "3/4\"")?
            .featured(true)
            .new_arrival(true),
        f.make(30, "Válvula Reguladora de Presión", "valvulas", "urrea", "Bronce", "1\"")?,
        // Conexiones
        f.make(31, "Codo 90° PVC", "conexiones", "amanco", "PVC", "1/2\"")?,
        f.make(32, "Codo 90° PVC", "conexiones", "amanco", "PVC", "3/4\"")?,
        f.make(33, "Codo 90° PVC", "conexiones", "amanco", "PVC", "1\"")?,
        f.make(34, "Codo 90° PVC", "conexiones", "amanco", "PVC", "2\"")?,
        f.make(35, "Codo 90° PVC", "conexiones", "pavco", "PVC", "1/2\"")?.featured(true),
        f.make(36, "Codo 45° PVC", "conexiones", "amanco", "PVC", "1/2\"")?,
        f.make(37, "Codo 45° PVC", "conexiones", "amanco", "PVC", "3/4\"")?,
        f.make(38, "Codo 45° PVC", "conexiones", "amanco", "PVC", "1\"")?,
        f.make(39, "Tee PVC", "conexiones", "amanco", "PVC", "1/2\"")?,
        f.make(40, "Tee PVC", "conexiones", "amanco", "PVC", "3/4\"")?,
        f.make(41, "Tee PVC", "conexiones", "amanco", "PVC", "1\"")?,
        f.make(42, "Tee PVC", "conexiones", "amanco", "PVC", "2\"")?.featured(true),
        f.make(43, "Unión Universal PVC", "conexiones", "pavco", "PVC", "1/2\"")?,
        f.make(44, "Unión Universal PVC", "conexiones", "pavco", "PVC", "3/4\"")?,
        f.make(45, "Unión Universal PVC", "conexiones", "pavco", "PVC", "1\"")?,
        f.make(46, "Reducción PVC", "conexiones", "amanco", "PVC", "3/4\" x 1/2\"")?,
        f.make(47, "Reducción PVC", "conexiones", "amanco", "PVC", "1\" x 3/4\"")?,
        f.make(48, "Reducción PVC", "conexiones", "amanco", "PVC", "2\" x 1\"")?,
        f.make(49, "Codo 90° CPVC", "conexiones", "amanco", "CPVC", "1/2\"")?.new_arrival(true),
        f.make(50, "Codo 90° CPVC", "conexiones", "amanco", "CPVC", "3/4\"")?,
        f.make(51, "Tee CPVC", "conexiones", "amanco", "CPVC", "1/2\"")?,
        f.make(52, "Tee CPVC", "conexiones", "amanco", "CPVC", "3/4\"")?,
        f.make(53, "Unión Galvanizada", "conexiones", "helbert", "Hierro Galvanizado", "1/2\"")?,
        f.make(54, "Unión Galvanizada", "conexiones", "helbert", "Hierro Galvanizado", "3/4\"")?,
        f.make(55, "Unión Galvanizada", "conexiones", "helbert", "Hierro Galvanizado", "1\"")?,
        f.make(56, "Codo 90° Galvanizado", "conexiones", "helbert", "Hierro Galvanizado", "1/2\"")?,
        f.make(57, "Codo 90° Galvanizado", "conexiones", "helbert", "Hierro Galvanizado", "3/4\"")?,
        f.make(58, "Codo 90° Galvanizado", "conexiones", "helbert", "Hierro Galvanizado", "1\"")?,
        f.make(59, "Niple Galvanizado", "conexiones", "helbert", "Hierro Galvanizado", "1/2\"")?,
        f.make(60, "Niple Galvanizado", "conexiones", "helbert", "Hierro Galvanizado", "3/4\"")?,
        // Tuberías
        f.make(61, "Tubo PVC Presión", "tuberias", "amanco", "PVC", "1/2\"")?,
        f.make(62, "Tubo PVC Presión", "tuberias", "amanco", "PVC", "3/4\"")?,
        f.make(63, "Tubo PVC Presión", "tuberias", "amanco", "PVC", "1\"")?,
        f.make(64, "Tubo PVC Presión", "tuberias", "amanco", "PVC", "2\"")?.featured(true),
        f.make(65, "Tubo PVC Presión", "tuberias", "pavco", "PVC", "3\"")?,
        f.make(66, "Tubo PVC Presión", "tuberias", "pavco", "PVC", "4\"")?,
        f.make(67, "Tubo CPVC", "tuberias", "amanco", "CPVC", "1/2\"")?,
        f.make(68, "Tubo CPVC", "tuberias", "amanco", "CPVC", "3/4\"")?,
        f.make(69, "Tubo CPVC", "tuberias", "amanco", "CPVC", "1\"")?.new_arrival(true),
        f.make(70, "Tubo Galvanizado", "tuberias", "helbert", "Hierro Galvanizado", "1/2\"")?,
        f.make(71, "Tubo Galvanizado", "tuberias", "helbert", "Hierro Galvanizado", "3/4\"")?,
        f.make(72, "Tubo Galvanizado", "tuberias", "helbert", "Hierro Galvanizado", "1\"")?,
        f.make(73, "Tubo Galvanizado", "tuberias", "helbert", "Hierro Galvanizado", "2\"")?,
        f.make(74, "Tubo Polietileno", "tuberias", "pavco", "Polietileno", "1/2\"")?,
        f.make(75, "Tubo Polietileno", "tuberias", "pavco", "Polietileno", "3/4\"")?,
        f.make(76, "Tubo Polietileno", "tuberias", "pavco", "Polietileno", "1\"")?,
        f.make(77, "Tubo Cobre Tipo L", "tuberias", "nibco", "Cobre", "1/2\"")?.featured(true),
        f.make(78, "Tubo Cobre Tipo L", "tuberias", "nibco", "Cobre", "3/4\"")?,
        f.make(79, "Tubo PPR", "tuberias", "amanco", "PPR", "1/2\"")?.new_arrival(true),
        f.make(80, "Tubo PPR", "tuberias", "amanco", "PPR", "3/4\"")?,
        // Accesorios
        f.make(81, "Cinta Teflón", "accesorios", "truper", "Polietileno", "1/2\"")?,
        f.make(82, "Cinta Teflón Industrial", "accesorios", "truper", "Polietileno", "3/4\"")?
            .featured(true),
        f.make(83, "Pegamento PVC", "accesorios", "amanco", "PVC", "250ml")?
            .specs([
                ("Contenido", "250 ml"),
                ("Tipo", "Cemento solvente"),
                ("Uso", "PVC presión"),
                ("Tiempo de secado", "24 horas"),
            ]),
        f.make(84, "Pegamento PVC", "accesorios", "amanco", "PVC", "500ml")?
            .specs([
                ("Contenido", "500 ml"),
                ("Tipo", "Cemento solvente"),
                ("Uso", "PVC presión"),
                ("Tiempo de secado", "24 horas"),
            ]),
        f.make(85, "Pegamento CPVC", "accesorios", "amanco", "CPVC", "250ml")?,
        f.make(86, "Llave Stillson", "accesorios", "truper", "Acero al Carbón", "12\"")?
            .specs([
                ("Largo", "12\""),
                ("Material", "Acero al carbón"),
                ("Apertura máx.", "1-1/2\""),
                ("Tipo", "Stillson"),
            ]),
        f.make(87, "Llave Stillson", "accesorios", "truper", "Acero al Carbón", "18\"")?,
        f.make(88, "Llave Stillson", "accesorios", "truper", "Acero al Carbón", "24\"")?,
        f.make(89, "Abrazadera de Acero", "accesorios", "helbert", "Acero Inoxidable", "1/2\"")?,
        f.make(90, "Abrazadera de Acero", "accesorios", "helbert", "Acero Inoxidable", "3/4\"")?,
        f.make(91, "Abrazadera de Acero", "accesorios", "helbert", "Acero Inoxidable", "1\"")?,
        f.make(92, "Abrazadera de Acero", "accesorios", "helbert", "Acero Inoxidable", "2\"")?,
        f.make(93, "Empaque de Hule", "accesorios", "truper", "Polietileno", "1/2\"")?,
        f.make(94, "Empaque de Hule", "accesorios", "truper", "Polietileno", "3/4\"")?,
        f.make(95, "Soporte para Tubo", "accesorios", "helbert", "Hierro Galvanizado", "1/2\"")?,
        f.make(96, "Soporte para Tubo", "accesorios", "helbert", "Hierro Galvanizado", "3/4\"")?,
        f.make(97, "Soporte para Tubo", "accesorios", "helbert", "Hierro Galvanizado", "1\"")?,
        f.make(98, "Manómetro", "accesorios", "fmc", "Acero Inoxidable", "2-1/2\"")?
            .featured(true)
            .new_arrival(true)
            .specs([
                ("Diámetro", "2-1/2\""),
                ("Rango", "0-200 PSI"),
                ("Conexión", "1/4\" NPT"),
                ("Precisión", "±1.5%"),
            ]),
        f.make(99, "Termómetro Bimetálico", "accesorios", "fmc", "Acero Inoxidable", "3\"")?
            .new_arrival(true),
        f.make(100, "Llave de Paso Angular", "accesorios", "urrea", "Bronce", "1/2\"")?,
        // Bombas
        f.make(101, "Bomba Centrífuga 0.5HP", "bombas", "truper", "Acero Inoxidable", "1\"")?
            .featured(true)
            .specs([
                ("Potencia", "0.5 HP"),
                ("Flujo máx.", "60 L/min"),
                ("Altura máx.", "35 m"),
                ("Voltaje", "127V"),
                ("Succión", "1\""),
            ]),
        f.make(102, "Bomba Centrífuga 1HP", "bombas", "truper", "Acero Inoxidable", "1\"")?
            .specs([
                ("Potencia", "1 HP"),
                ("Flujo máx.", "100 L/min"),
                ("Altura máx.", "45 m"),
                ("Voltaje", "127V"),
                ("Succión", "1\""),
            ]),
        f.make(103, "Bomba Centrífuga 1.5HP", "bombas", "truper", "Acero Inoxidable", "1-1/2\"")?,
        f.make(104, "Bomba Sumergible", "bombas", "truper", "Acero Inoxidable", "1\"")?
            .new_arrival(true),
        f.make(105, "Bomba Sumergible", "bombas", "truper", "Acero Inoxidable", "1-1/2\"")?,
        f.make(106, "Bomba Periférica 0.5HP", "bombas", "urrea", "Acero al Carbón", "1\"")?,
        f.make(107, "Bomba Periférica 1HP", "bombas", "urrea", "Acero al Carbón", "1\"")?,
        f.make(108, "Bomba Presurizadora", "bombas", "rotoplas", "Acero Inoxidable", "3/4\"")?
            .featured(true),
        f.make(109, "Hidroneumático 20L", "bombas", "rotoplas", "Acero al Carbón", "1\"")?,
        f.make(110, "Hidroneumático 50L", "bombas", "rotoplas", "Acero al Carbón", "1\"")?,
        // Filtros
        f.make(111, "Filtro de Sedimentos 10\"", "filtros", "rotoplas", "Polietileno", "3/4\"")?
            .featured(true),
        f.make(112, "Filtro de Sedimentos 20\"", "filtros", "rotoplas", "Polietileno", "1\"")?,
        f.make(113, "Filtro de Carbón Activado", "filtros", "rotoplas", "Polietileno", "3/4\"")?,
        f.make(114, "Portafiltro 10\"", "filtros", "rotoplas", "Polietileno", "3/4\"")?,
        f.make(115, "Portafiltro 20\"", "filtros", "rotoplas", "Polietileno", "1\"")?,
        f.make(116, "Filtro Y de Bronce", "filtros", "nibco", "Bronce", "1/2\"")?.new_arrival(true),
        f.make(117, "Filtro Y de Bronce", "filtros", "nibco", "Bronce", "3/4\"")?,
        f.make(118, "Filtro Y de Bronce", "filtros", "nibco", "Bronce", "1\"")?,
        f.make(119, "Sistema de Filtración Triple", "filtros", "rotoplas", "Polietileno", "3/4\"")?
            .featured(true)
            .specs([
                ("Etapas", "3"),
                ("Capacidad filtrado", "10,000 litros"),
                ("Conexión", "3/4\""),
                ("Incluye", "Cartuchos sedimento + carbón + pulidora"),
            ]),
        f.make(120, "Cartucho de Repuesto", "filtros", "rotoplas", "Polietileno", "10\"")?,
    ])
}

/// The HCN dataset as declarations.
pub fn hcn_seed() -> DomainResult<CatalogSeed> {
    let categories = categories()?;
    let brands = brands()?;
    let products = products(&brands)?
        .into_iter()
        .map(ProductDraft::build)
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(CatalogSeed {
        categories,
        brands,
        products,
    })
}

/// The HCN dataset as a ready store.
pub fn hcn_catalog() -> DomainResult<CatalogStore> {
    CatalogStore::build_strict(hcn_seed()?)
}
