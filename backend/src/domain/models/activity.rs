use shared::{Activity, ActivityPricing};

/// A fixed entry of the activity catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub duration: &'static str,
    pub pricing: ActivityPricing,
}

impl CatalogEntry {
    pub fn to_activity(&self) -> Activity {
        Activity {
            key: self.key.to_string(),
            name: self.name.to_string(),
            duration: self.duration.to_string(),
            pricing: self.pricing,
        }
    }
}

/// Everything the venue sells, in display order
pub const CATALOG: [CatalogEntry; 7] = [
    CatalogEntry {
        key: "general-30",
        name: "General Admission 30min",
        duration: "30 minutes",
        pricing: ActivityPricing::PerPerson { kid_price: 50, adult_price: 50 },
    },
    CatalogEntry {
        key: "general-1",
        name: "General Admission 1hr",
        duration: "1 hour",
        pricing: ActivityPricing::PerPerson { kid_price: 90, adult_price: 90 },
    },
    CatalogEntry {
        key: "general-2",
        name: "General Admission 2hr",
        duration: "2 hours",
        pricing: ActivityPricing::PerPerson { kid_price: 140, adult_price: 140 },
    },
    CatalogEntry {
        key: "toddler-30",
        name: "Toddler 30min",
        duration: "30 minutes",
        pricing: ActivityPricing::PerPerson { kid_price: 50, adult_price: 0 },
    },
    CatalogEntry {
        key: "toddler-1",
        name: "Toddler 1hr",
        duration: "1 hour",
        pricing: ActivityPricing::PerPerson { kid_price: 90, adult_price: 0 },
    },
    CatalogEntry {
        key: "happy-party",
        name: "Happy Jump Party",
        duration: "1.5 hours",
        pricing: ActivityPricing::FlatRate { package_price: 1500 },
    },
    CatalogEntry {
        key: "mega-party",
        name: "Mega Happy Party",
        duration: "2 hours",
        pricing: ActivityPricing::FlatRate { package_price: 2900 },
    },
];

/// Look up a catalog entry by its key
pub fn find_activity(key: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.key == key)
}
