use super::*;

fn make_config(name: &str, slug: &str) -> ProductConfig {
    ProductConfig {
        name: name.to_string(),
        slug: slug.to_string(),
        price: Decimal::new(5400, 2),
        sizes: vec!["M".to_string()],
        colors: vec!["Black".to_string()],
        compression: "Light".to_string(),
        categories: vec!["shorts".to_string()],
        description: "Test shorts.".to_string(),
        fabric: Fabric {
            composition: "80% Nylon, 20% Spandex".to_string(),
            feel: "Light".to_string(),
            care: "Machine wash cold".to_string(),
        },
        images: ProductImages {
            primary: "https://cdn.example.com/p.jpg".to_string(),
            gallery: vec![],
            before: "https://cdn.example.com/b.jpg".to_string(),
            after: "https://cdn.example.com/a.jpg".to_string(),
        },
        reviews: vec![],
    }
}

fn slugs(catalog: &Catalog) -> Vec<&str> {
    catalog.products().iter().map(|p| p.slug.as_str()).collect()
}

#[test]
fn seed_has_six_products_with_unique_slugs() {
    let catalog = Catalog::seed();
    assert_eq!(catalog.len(), 6);
    assert!(!catalog.is_empty());

    let unique: HashSet<&str> = slugs(&catalog).into_iter().collect();
    assert_eq!(unique.len(), 6);
}

#[test]
fn builtin_products_pass_validation() {
    validate_products(&crate::seed::builtin_products()).expect("builtin catalog is valid");
}

#[test]
fn seeding_twice_keeps_content_but_not_ids() {
    let first = Catalog::seed();
    let second = Catalog::seed();

    assert_eq!(first.len(), second.len());
    assert_eq!(slugs(&first), slugs(&second));
    for (a, b) in first.products().iter().zip(second.products()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.price, b.price);
        assert_eq!(a.reviews, b.reviews);
        assert_ne!(a.id, b.id);
    }
}

#[test]
fn find_by_slug_returns_full_product() {
    let catalog = Catalog::seed();
    let product = catalog
        .find_by_slug("sculptfit-seamless-bodysuit")
        .expect("seeded product");

    assert_eq!(product.name, "SculptFit Seamless Bodysuit");
    assert_eq!(product.price, Decimal::new(78, 0));
    assert_eq!(product.reviews.len(), 2);
    assert_eq!(product.fabric.composition, "78% Nylon, 22% Spandex");
    assert_eq!(product.images.gallery.len(), 3);
}

#[test]
fn find_by_slug_is_case_sensitive_and_exact() {
    let catalog = Catalog::seed();
    assert!(catalog.find_by_slug("SculptFit-Seamless-Bodysuit").is_none());
    assert!(catalog.find_by_slug("sculptfit").is_none());
    assert!(catalog.find_by_slug("non-existent-product").is_none());
}

#[test]
fn listings_match_catalog_order_and_ratings() {
    let catalog = Catalog::seed();
    let listings = catalog.listings();

    assert_eq!(listings.len(), catalog.len());
    assert_eq!(listings[0].slug, "sculptfit-seamless-bodysuit");
    assert_eq!(listings[0].rating, Some(Decimal::new(45, 1)));
    assert_eq!(listings[0].reviews_count, 2);
    for listing in &listings {
        let rating = listing.rating.expect("every seeded product has reviews");
        assert!((Decimal::ONE..=Decimal::new(5, 0)).contains(&rating));
        assert_eq!(rating, rating.round_dp(1));
    }
}

#[test]
fn new_catalog_may_be_empty() {
    let catalog = Catalog::new(vec![]).expect("empty catalog is valid");
    assert!(catalog.is_empty());
    assert!(catalog.listings().is_empty());
}

#[test]
fn new_catalog_rejects_duplicate_slug() {
    let err = Catalog::new(vec![
        make_config("Shorts A", "airsculpt-shorts"),
        make_config("Shorts B", "airsculpt-shorts"),
    ])
    .unwrap_err();
    assert!(
        matches!(err, CatalogError::DuplicateSlug { ref slug, ref name } if slug == "airsculpt-shorts" && name == "Shorts B"),
        "got: {err:?}"
    );
}

#[test]
fn new_catalog_rejects_blank_slug() {
    let err = Catalog::new(vec![make_config("No Slug", "  ")]).unwrap_err();
    assert!(err.to_string().contains("empty slug"));
}

#[test]
fn product_serializes_price_as_number() {
    let catalog = Catalog::seed();
    let product = catalog.find_by_slug("waistdefine-trainer").expect("product");
    let json = serde_json::to_value(product).expect("serialize");

    assert_eq!(json["price"].as_f64(), Some(64.0));
    assert_eq!(json["images"]["primary"], json["images"]["after"]);
    assert_eq!(json["reviews"][0]["rating"].as_i64(), Some(4));
    assert!(json["id"].as_str().is_some());
}
