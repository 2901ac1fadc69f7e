//! Pricing for the booking widget.
//!
//! Per-person activities charge every kid and adult at the activity's rate.
//! Party packages are flat-rate: the package price is charged once per booking
//! and reported as the kids total. Every visitor also needs grip socks, charged
//! per person on top.

use shared::{Activity, ActivityPricing, PriceBreakdown};

use crate::domain::models::activity::{find_activity, CATALOG};

/// Grip socks price per person
pub const DEFAULT_ACCESSORY_UNIT_PRICE: u32 = 20;

/// A price breakdown plus whether the activity was recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub known: bool,
    pub breakdown: PriceBreakdown,
}

#[derive(Debug, Clone)]
pub struct PricingService {
    accessory_unit_price: u32,
}

impl Default for PricingService {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESSORY_UNIT_PRICE)
    }
}

impl PricingService {
    pub fn new(accessory_unit_price: u32) -> Self {
        Self { accessory_unit_price }
    }

    /// All bookable activities, in display order
    pub fn catalog(&self) -> Vec<Activity> {
        CATALOG.iter().map(|entry| entry.to_activity()).collect()
    }

    pub fn is_known(&self, activity_key: &str) -> bool {
        find_activity(activity_key).is_some()
    }

    /// Display label for an activity key
    pub fn display_name(&self, activity_key: &str) -> Option<&'static str> {
        find_activity(activity_key).map(|entry| entry.name)
    }

    /// Price a party. Unknown activities price at zero and are flagged unknown.
    pub fn quote(&self, activity_key: &str, kids: u32, adults: u32) -> PriceQuote {
        let Some(entry) = find_activity(activity_key) else {
            return PriceQuote {
                known: false,
                breakdown: PriceBreakdown::default(),
            };
        };

        let (kids_total, adults_total) = match entry.pricing {
            ActivityPricing::PerPerson { kid_price, adult_price } => (
                kids.saturating_mul(kid_price),
                adults.saturating_mul(adult_price),
            ),
            ActivityPricing::FlatRate { package_price } => (package_price, 0),
        };

        let accessory_total = kids
            .saturating_add(adults)
            .saturating_mul(self.accessory_unit_price);

        PriceQuote {
            known: true,
            breakdown: PriceBreakdown {
                kids_total,
                adults_total,
                accessory_total,
                grand_total: kids_total
                    .saturating_add(adults_total)
                    .saturating_add(accessory_total),
            },
        }
    }
}
