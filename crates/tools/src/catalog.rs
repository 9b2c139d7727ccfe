//! Static business catalog: services, products, and service areas.
//!
//! Immutable after process start, so lookups need no synchronization.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub duration: &'static str,
    pub pricing: &'static str,
}

impl Service {
    /// Lower-cased name, description, and features joined by spaces.
    pub fn search_text(&self) -> String {
        let mut text = format!("{} {}", self.name, self.description);
        for feature in self.features {
            text.push(' ');
            text.push_str(feature);
        }
        text.to_lowercase()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    #[serde(skip)]
    pub id: &'static str,
    pub name: &'static str,
    pub ingredients: &'static str,
    pub certifications: &'static [&'static str],
    pub allergen_free: bool,
    pub use_cases: &'static [&'static str],
}

pub const CONTACT_EMAIL: &str = "hello@breatheeasy.com";
pub const CONTACT_PHONE: &str = "(555) 123-EASY";
pub const CONTACT_HOURS: &str = "Monday-Saturday, 8am-6pm";

pub static SERVICES: &[Service] = &[
    Service {
        id: "deep_cleaning",
        name: "Deep Cleaning Services",
        description: "Comprehensive top-to-bottom cleaning of your entire home",
        features: &[
            "Focus on high-traffic areas and overlooked spaces",
            "Allergen elimination from carpets, upholstery, and air vents",
            "Perfect for seasonal refreshes or post-renovation cleanup",
        ],
        duration: "4-8 hours",
        pricing: "$200-$400 depending on home size",
    },
    Service {
        id: "move_cleaning",
        name: "Move-In/Move-Out Cleaning",
        description: "Thorough cleaning to prepare homes for new occupants",
        features: &[
            "Special attention to sanitizing kitchens and bathrooms",
            "Guarantee of allergen-free spaces for fresh starts",
            "Flexible scheduling to match your moving timeline",
        ],
        duration: "3-6 hours",
        pricing: "$180-$350 depending on home size",
    },
    Service {
        id: "allergen_treatment",
        name: "Allergen Treatment Services",
        description: "Specialized protocols for homes with allergy sufferers",
        features: &[
            "HEPA filtration vacuuming and air purification",
            "Dust mite elimination and prevention strategies",
            "Mold inspection and remediation",
            "Pet dander removal treatments",
        ],
        duration: "2-4 hours",
        pricing: "$150-$300 depending on treatment scope",
    },
    Service {
        id: "regular_maintenance",
        name: "Regular Maintenance Cleaning",
        description: "Weekly, bi-weekly, or monthly cleaning schedules",
        features: &[
            "Customized cleaning plans based on household needs",
            "Consistent team members who know your home",
            "Eco-friendly products tailored to your preferences",
        ],
        duration: "2-3 hours per visit",
        pricing: "$100-$200 per visit, discounts for recurring service",
    },
];

pub static PRODUCTS: &[Product] = &[
    Product {
        id: "all_purpose_cleaner",
        name: "EcoClean All-Purpose Cleaner",
        ingredients: "Plant-based surfactants, citric acid, essential oils",
        certifications: &["EPA Safer Choice", "EWG Verified"],
        allergen_free: true,
        use_cases: &["Countertops", "Appliances", "General surfaces"],
    },
    Product {
        id: "bathroom_cleaner",
        name: "GreenShine Bathroom Sanitizer",
        ingredients: "Hydrogen peroxide, plant-based acids, natural enzymes",
        certifications: &["EPA Safer Choice", "Leaping Bunny Certified"],
        allergen_free: true,
        use_cases: &["Toilets", "Showers", "Sinks"],
    },
    Product {
        id: "floor_cleaner",
        name: "PureFloor Wood & Tile Cleaner",
        ingredients: "Plant-derived cleaning agents, water",
        certifications: &["Green Seal Certified", "EWG A-rated"],
        allergen_free: true,
        use_cases: &["Hardwood", "Tile", "Laminate"],
    },
    Product {
        id: "glass_cleaner",
        name: "CrystalClear Glass Cleaner",
        ingredients: "Vinegar, plant-based alcohols, filtered water",
        certifications: &["EPA Safer Choice"],
        allergen_free: true,
        use_cases: &["Windows", "Mirrors", "Glass surfaces"],
    },
];

pub static SERVICE_AREAS: &[&str] = &[
    "Downtown Metropolitan Area",
    "Northside District",
    "Westend Village",
    "Eastbridge",
    "Southgate",
    "Riverside Community",
    "Hilltop Estates",
    "Lakeside",
];

/// Products keyed by id, in catalog order.
pub fn products_by_id<'a>(
    products: impl IntoIterator<Item = &'a Product>,
) -> serde_json::Map<String, serde_json::Value> {
    products
        .into_iter()
        .map(|p| {
            (
                p.id.to_string(),
                serde_json::to_value(p).unwrap_or(serde_json::Value::Null),
            )
        })
        .collect()
}

/// The contact block attached to availability answers.
pub fn contact_block() -> serde_json::Value {
    serde_json::json!({
        "email": CONTACT_EMAIL,
        "phone": CONTACT_PHONE,
        "hours": CONTACT_HOURS,
    })
}
