//! Built-in storefront catalog.

use rust_decimal::Decimal;

use crate::catalog::{Fabric, ProductConfig, ProductImages, Review};

const COMMON_SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "2XL", "3XL"];

const U2: &str = "https://images.unsplash.com/photo-1631177066873-5048fbbad9f1";
const U3: &str = "https://images.unsplash.com/photo-1631177067264-23788a876d9a";
const P4: &str = "https://images.pexels.com/photos/8783527/pexels-photo-8783527.jpeg";
const P6: &str = "https://images.pexels.com/photos/8783485/pexels-photo-8783485.jpeg";
const P7: &str = "https://images.pexels.com/photos/7065467/pexels-photo-7065467.jpeg";
const P8: &str = "https://images.pexels.com/photos/4926693/pexels-photo-4926693.jpeg";
const P9: &str = "https://images.pexels.com/photos/7091854/pexels-photo-7091854.jpeg";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_owned()).collect()
}

fn fabric(composition: &str, feel: &str, care: &str) -> Fabric {
    Fabric {
        composition: composition.to_owned(),
        feel: feel.to_owned(),
        care: care.to_owned(),
    }
}

fn images(primary: &str, gallery: &[&str], before: &str, after: &str) -> ProductImages {
    ProductImages {
        primary: primary.to_owned(),
        gallery: strings(gallery),
        before: before.to_owned(),
        after: after.to_owned(),
    }
}

fn review(user: &str, rating: i32, comment: &str) -> Review {
    Review {
        user: user.to_owned(),
        rating,
        comment: comment.to_owned(),
    }
}

/// The six launch products, in display order.
#[allow(clippy::too_many_lines)]
pub(crate) fn builtin_products() -> Vec<ProductConfig> {
    vec![
        ProductConfig {
            name: "SculptFit Seamless Bodysuit".to_owned(),
            slug: "sculptfit-seamless-bodysuit".to_owned(),
            price: Decimal::new(78, 0),
            sizes: strings(COMMON_SIZES),
            colors: strings(&["Sand", "Black", "Mocha"]),
            compression: "Firm".to_owned(),
            categories: strings(&["bodysuits"]),
            description: "Seamless bodysuit with targeted compression for a smooth silhouette under any outfit.".to_owned(),
            fabric: fabric(
                "78% Nylon, 22% Spandex",
                "Buttery-soft with breathable micro-mesh zones",
                "Machine wash cold, lay flat to dry",
            ),
            images: images(U2, &[U2, P8, P9], U3, U2),
            reviews: vec![
                review("Maya", 5, "Sculpting without the squeeze. Love it!"),
                review("Alina", 4, "Great fit, comfy all day."),
            ],
        },
        ProductConfig {
            name: "Contour High-Waist Shorts".to_owned(),
            slug: "contour-high-waist-shorts".to_owned(),
            price: Decimal::new(58, 0),
            sizes: strings(COMMON_SIZES),
            colors: strings(&["Sand", "Black", "Mocha", "Blush"]),
            compression: "Medium".to_owned(),
            categories: strings(&["high-waist-shorts", "shorts"]),
            description: "High-rise shorts with anti-roll waistband and invisible leg finish.".to_owned(),
            fabric: fabric(
                "76% Nylon, 24% Spandex",
                "Second-skin comfort with stay-cool knit",
                "Machine wash cold, lay flat to dry",
            ),
            images: images(P9, &[P9, P6, P7], P6, P9),
            reviews: vec![review(
                "Zoe",
                5,
                "No rolling! Wore to a wedding and forgot I had them on.",
            )],
        },
        ProductConfig {
            name: "WaistDefine Trainer".to_owned(),
            slug: "waistdefine-trainer".to_owned(),
            price: Decimal::new(64, 0),
            sizes: strings(&["XS", "S", "M", "L", "XL"]),
            colors: strings(&["Black", "Espresso"]),
            compression: "Firm".to_owned(),
            categories: strings(&["waist-trainers"]),
            description: "Adjustable waist trainer with flexible boning and breathable backing.".to_owned(),
            fabric: fabric(
                "70% Nylon, 30% Spandex",
                "Supportive with flexible contouring",
                "Spot clean",
            ),
            images: images(P7, &[P7, P9], U3, P7),
            reviews: vec![review("Gia", 4, "Great support, easy to adjust.")],
        },
        ProductConfig {
            name: "SmoothCurve Mid-Thigh Bodysuit".to_owned(),
            slug: "smoothcurve-mid-thigh-bodysuit".to_owned(),
            price: Decimal::new(84, 0),
            sizes: strings(COMMON_SIZES),
            colors: strings(&["Sand", "Almond", "Black"]),
            compression: "Medium".to_owned(),
            categories: strings(&["bodysuits"]),
            description: "Mid-thigh bodysuit with open-bust design for bra freedom and lift.".to_owned(),
            fabric: fabric(
                "75% Nylon, 25% Spandex",
                "Sleek with airflow channels",
                "Machine wash cold, lay flat to dry",
            ),
            images: images(P8, &[P8, U2], U3, P8),
            reviews: vec![review(
                "Rae",
                5,
                "Invisible under everything. Confidence booster!",
            )],
        },
        ProductConfig {
            name: "AirSculpt Lightweight Shorts".to_owned(),
            slug: "airsculpt-lightweight-shorts".to_owned(),
            price: Decimal::new(54, 0),
            sizes: strings(COMMON_SIZES),
            colors: strings(&["Blush", "Sand", "Black"]),
            compression: "Light".to_owned(),
            categories: strings(&["high-waist-shorts", "shorts"]),
            description: "Featherlight everyday shaping with breathable knit.".to_owned(),
            fabric: fabric(
                "80% Nylon, 20% Spandex",
                "Ultra-light and smooth",
                "Machine wash cold, lay flat to dry",
            ),
            images: images(P6, &[P6, P9], P6, P9),
            reviews: vec![review("Naya", 4, "Perfect for daily wear.")],
        },
        ProductConfig {
            name: "SculptLine Thong Bodysuit".to_owned(),
            slug: "sculptline-thong-bodysuit".to_owned(),
            price: Decimal::new(72, 0),
            sizes: strings(COMMON_SIZES),
            colors: strings(&["Almond", "Sand", "Black"]),
            compression: "Medium".to_owned(),
            categories: strings(&["bodysuits"]),
            description: "Thong-back bodysuit with seamless edges for no panty lines.".to_owned(),
            fabric: fabric(
                "78% Nylon, 22% Spandex",
                "Soft and supportive",
                "Machine wash cold, lay flat to dry",
            ),
            images: images(P4, &[P4, U2], U3, P4),
            reviews: vec![review("Ivy", 5, "So flattering and comfy!")],
        },
    ]
}
