use garbapp::api::GarbApi;
use garbapp::attributes::{AttributeKind, Category, Material, Neckline, PocketType, Size, SleeveType};
use garbapp::catalog::{self, Catalog};
use garbapp::commands::{SearchForm, SortKey};
use garbapp::error::GarbError;
use garbapp::matcher;
use garbapp::model::Price;
use garbapp::query::QuerySpec;
use std::fs;
use tempfile::TempDir;

const INVENTORY: &str = "\
Type,Name,Product Code,Price,Brand,Material,Neckline,Sleeve Type,Pocket Type,Hoodie Style[Sizes][Description]
T-Shirt,Crew Tee,1001,25.00,Acme,Cotton,Crew,Short,NA,NA[S,M][Soft, everyday crew neck tee]
Hoodie,Campus Hoodie,2002,60.00,Zeta,Wool Blend,NA,NA,Kangaroo,Pullover[M,L][Warm pullover, with a big pocket]
T-Shirt,Range Henley,1003,32.50,Zeta,Polyester,Henley,Long,NA,NA[L,XL,2XL][Long sleeve henley]

Hoodie,Trail Zip,2004,89.99,Acme,Polyester,NA,NA,Zippered,Zip-Up[XS,S,M][Zip hoodie for cold mornings]
";

fn catalog() -> Catalog {
    catalog::load_str(INVENTORY).unwrap()
}

fn names(hits: &[&garbapp::model::GarmentRecord]) -> Vec<String> {
    hits.iter().map(|g| g.name().to_string()).collect()
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.txt");
    fs::write(&path, INVENTORY).unwrap();

    let catalog = catalog::load_path(&path).unwrap();
    assert_eq!(catalog.len(), 4);
    let brands: Vec<_> = catalog.brands().iter().cloned().collect();
    assert_eq!(brands, vec!["Acme", "Zeta"]);

    let henley = catalog.get(1003).unwrap();
    assert_eq!(henley.price(), Price::from_cents(3250));
    let sizes: Vec<Size> = henley.sizes().collect();
    assert_eq!(sizes, vec![Size::L, Size::XL, Size::XXL]);
    assert!(henley.attr(AttributeKind::PocketType).is_none());
}

#[test]
fn test_failed_load_reports_line_and_field() {
    let broken = INVENTORY.replace("89.99", "eighty");
    let err = catalog::load_str(&broken).unwrap_err();
    match err {
        GarbError::MalformedCatalogLine { line, field, .. } => {
            assert_eq!(line, 6);
            assert_eq!(field, "price");
        }
        other => panic!("Expected MalformedCatalogLine, got {other:?}"),
    }
}

#[test]
fn test_search_scenarios() {
    let catalog = catalog();

    let query = QuerySpec::builder(Category::TShirt)
        .sizes([Size::M])
        .build()
        .unwrap();
    assert_eq!(names(&matcher::find(&catalog, &query)), vec!["Crew Tee"]);

    let query = QuerySpec::builder(Category::Hoodie)
        .sizes([Size::S])
        .build()
        .unwrap();
    assert_eq!(names(&matcher::find(&catalog, &query)), vec!["Trail Zip"]);

    let query = QuerySpec::builder(Category::Hoodie)
        .require(PocketType::Kangaroo)
        .require(Material::WoolBlend)
        .build()
        .unwrap();
    assert_eq!(names(&matcher::find(&catalog, &query)), vec!["Campus Hoodie"]);

    let query = QuerySpec::builder(Category::TShirt)
        .require(SleeveType::Long)
        .min_price(Price::from_cents(3250))
        .max_price(Price::from_cents(3250))
        .build()
        .unwrap();
    assert_eq!(names(&matcher::find(&catalog, &query)), vec!["Range Henley"]);
}

#[test]
fn test_category_specific_filter_never_crosses_categories() {
    let catalog = catalog();
    for neckline in Neckline::ALL {
        let query = QuerySpec::builder(Category::Hoodie)
            .require(*neckline)
            .build()
            .unwrap();
        assert!(matcher::find(&catalog, &query).is_empty());
    }
}

#[test]
fn test_results_are_a_subset_of_the_category() {
    let catalog = catalog();
    let broad = QuerySpec::builder(Category::TShirt)
        .max_price(Price::from_cents(100_000))
        .build()
        .unwrap();
    let all_shirts = matcher::find(&catalog, &broad);
    assert_eq!(all_shirts.len(), 2);
    assert!(all_shirts.iter().all(|g| g.category() == Category::TShirt));

    let narrow = QuerySpec::builder(Category::TShirt)
        .brands(["Zeta"])
        .sizes([Size::XXL, Size::XS])
        .build()
        .unwrap();
    let hits = matcher::find(&catalog, &narrow);
    assert_eq!(names(&hits), vec!["Range Henley"]);
    assert!(hits.iter().all(|g| all_shirts.contains(g)));
}

#[test]
fn test_default_price_range_excludes_nothing_under_100() {
    let catalog = catalog();
    let query = QuerySpec::builder(Category::Hoodie).build().unwrap();
    assert_eq!(
        names(&matcher::find(&catalog, &query)),
        vec!["Campus Hoodie", "Trail Zip"]
    );
}

#[test]
fn test_api_search_from_form() {
    let api = GarbApi::new(catalog());
    let form = SearchForm::new("Hoodie")
        .with_sizes(["m"])
        .with_field(AttributeKind::Neckline, "V-Neck")
        .with_price_range("", "");

    let result = api.search(&form, SortKey::Price).unwrap();
    let listed: Vec<_> = result.listed_garments.iter().map(|g| g.name()).collect();
    assert_eq!(listed, vec!["Campus Hoodie", "Trail Zip"]);
    assert!(result
        .messages
        .iter()
        .any(|m| m.content.contains("neckline does not apply")));
}

#[test]
fn test_selected_garment_identity() {
    let catalog = catalog();
    let query = QuerySpec::builder(Category::TShirt)
        .require(Neckline::Crew)
        .build()
        .unwrap();
    let hit = matcher::find(&catalog, &query)[0];
    let product = hit.product_ref();
    assert_eq!(product.name, "Crew Tee");
    assert_eq!(product.product_code, 1001);
    assert_eq!(product.to_string(), "Crew Tee (1001)");
}

#[test]
fn test_json_shape_of_search_result() {
    let api = GarbApi::new(catalog());
    let result = api
        .search(&SearchForm::new("T-Shirt").with_sizes(["S"]), SortKey::Catalog)
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();
    let garment = &json["listed_garments"][0];
    assert_eq!(garment["name"], "Crew Tee");
    assert_eq!(garment["product_code"], 1001);
    assert_eq!(garment["price"], 25.0);
    assert_eq!(garment["attributes"]["NECKLINE"], "Crew");
    assert_eq!(garment["attributes"]["SIZE"], serde_json::json!(["S", "M"]));
}
