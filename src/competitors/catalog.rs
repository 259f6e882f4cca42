//! Static competitor catalog. `recommend` is a pure function from an
//! industry name to an ordered list of descriptors; ids for client-side
//! keys are attached at the HTTP boundary, not here.

/// One catalog entry. Everything is 'static: the table is the whole
/// business logic of this component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompetitorInfo {
    pub name: &'static str,
    pub website: &'static str,
    pub industry: &'static str,
    pub logo: Option<&'static str>,
    pub description: Option<&'static str>,
}

const fn entry(
    name: &'static str,
    website: &'static str,
    industry: &'static str,
    logo: &'static str,
    description: &'static str,
) -> CompetitorInfo {
    CompetitorInfo {
        name,
        website,
        industry,
        logo: Some(logo),
        description: Some(description),
    }
}

const FASHION: [CompetitorInfo; 5] = [
    entry(
        "Lululemon",
        "https://lululemon.com",
        "Fashion & Apparel",
        "https://logo.clearbit.com/lululemon.com",
        "Athletic apparel retailer with a focus on yoga-inspired items.",
    ),
    entry(
        "Nike",
        "https://nike.com",
        "Fashion & Apparel",
        "https://logo.clearbit.com/nike.com",
        "Leading athletic apparel and footwear brand.",
    ),
    entry(
        "Adidas",
        "https://adidas.com",
        "Fashion & Apparel",
        "https://logo.clearbit.com/adidas.com",
        "Global sportswear manufacturer.",
    ),
    entry(
        "H&M",
        "https://hm.com",
        "Fashion & Apparel",
        "https://logo.clearbit.com/hm.com",
        "Fast fashion retail company with affordable clothing.",
    ),
    entry(
        "Zara",
        "https://zara.com",
        "Fashion & Apparel",
        "https://logo.clearbit.com/zara.com",
        "Spanish fashion retailer specializing in fast fashion.",
    ),
];

const BEAUTY: [CompetitorInfo; 5] = [
    entry(
        "Sephora",
        "https://sephora.com",
        "Beauty & Cosmetics",
        "https://logo.clearbit.com/sephora.com",
        "Multinational chain of cosmetics stores.",
    ),
    entry(
        "Ulta Beauty",
        "https://ulta.com",
        "Beauty & Cosmetics",
        "https://logo.clearbit.com/ulta.com",
        "Chain of beauty stores in the United States.",
    ),
    entry(
        "Glossier",
        "https://glossier.com",
        "Beauty & Cosmetics",
        "https://logo.clearbit.com/glossier.com",
        "Direct-to-consumer beauty company.",
    ),
    entry(
        "Fenty Beauty",
        "https://fentybeauty.com",
        "Beauty & Cosmetics",
        "https://logo.clearbit.com/fentybeauty.com",
        "Cosmetics brand founded by Rihanna.",
    ),
    entry(
        "The Ordinary",
        "https://theordinary.com",
        "Beauty & Cosmetics",
        "https://logo.clearbit.com/theordinary.com",
        "Skincare brand focusing on single-ingredient formulations.",
    ),
];

const HEALTH: [CompetitorInfo; 5] = [
    entry(
        "Peloton",
        "https://onepeloton.com",
        "Health & Wellness",
        "https://logo.clearbit.com/onepeloton.com",
        "Exercise equipment and media company.",
    ),
    entry(
        "MyFitnessPal",
        "https://myfitnesspal.com",
        "Health & Wellness",
        "https://logo.clearbit.com/myfitnesspal.com",
        "Smartphone app and website for tracking diet and exercise.",
    ),
    entry(
        "Headspace",
        "https://headspace.com",
        "Health & Wellness",
        "https://logo.clearbit.com/headspace.com",
        "Online healthcare company specializing in meditation.",
    ),
    entry(
        "Calm",
        "https://calm.com",
        "Health & Wellness",
        "https://logo.clearbit.com/calm.com",
        "Software company producing meditation products.",
    ),
    entry(
        "Noom",
        "https://noom.com",
        "Health & Wellness",
        "https://logo.clearbit.com/noom.com",
        "Digital health platform focused on behavior change.",
    ),
];

const FOOD: [CompetitorInfo; 5] = [
    entry(
        "Blue Apron",
        "https://blueapron.com",
        "Food & Beverage",
        "https://logo.clearbit.com/blueapron.com",
        "Meal kit delivery service.",
    ),
    entry(
        "HelloFresh",
        "https://hellofresh.com",
        "Food & Beverage",
        "https://logo.clearbit.com/hellofresh.com",
        "Meal-kit company that delivers pre-portioned ingredients.",
    ),
    entry(
        "Daily Harvest",
        "https://daily-harvest.com",
        "Food & Beverage",
        "https://logo.clearbit.com/daily-harvest.com",
        "Subscription service delivering frozen smoothies, soups, and more.",
    ),
    entry(
        "Soylent",
        "https://soylent.com",
        "Food & Beverage",
        "https://logo.clearbit.com/soylent.com",
        "Meal replacement drink manufacturer.",
    ),
    entry(
        "Magic Spoon",
        "https://magicspoon.com",
        "Food & Beverage",
        "https://logo.clearbit.com/magicspoon.com",
        "Direct-to-consumer cereal brand with high protein and low sugar.",
    ),
];

const DEFAULT: [CompetitorInfo; 5] = [
    entry(
        "Amazon",
        "https://amazon.com",
        "E-commerce",
        "https://logo.clearbit.com/amazon.com",
        "Global e-commerce giant.",
    ),
    entry(
        "Target",
        "https://target.com",
        "Retail",
        "https://logo.clearbit.com/target.com",
        "General merchandise retailer.",
    ),
    entry(
        "Walmart",
        "https://walmart.com",
        "Retail",
        "https://logo.clearbit.com/walmart.com",
        "Multinational retail corporation.",
    ),
    entry(
        "Shopify",
        "https://shopify.com",
        "E-commerce",
        "https://logo.clearbit.com/shopify.com",
        "E-commerce platform for online stores.",
    ),
    entry(
        "Etsy",
        "https://etsy.com",
        "E-commerce",
        "https://logo.clearbit.com/etsy.com",
        "E-commerce website focused on handmade or vintage items.",
    ),
];

/// Deterministic lookup. Anything outside the four known categories,
/// including the empty string, gets the default list.
pub fn recommend(industry: &str) -> &'static [CompetitorInfo; 5] {
    match industry {
        "Fashion & Apparel" => &FASHION,
        "Beauty & Cosmetics" => &BEAUTY,
        "Health & Wellness" => &HEALTH,
        "Food & Beverage" => &FOOD,
        _ => &DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fashion_list_is_ordered_and_complete() {
        let names: Vec<_> = recommend("Fashion & Apparel")
            .iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Lululemon", "Nike", "Adidas", "H&M", "Zara"]);
    }

    #[test]
    fn each_known_category_returns_its_own_five() {
        let cases = [
            ("Beauty & Cosmetics", "Sephora"),
            ("Health & Wellness", "Peloton"),
            ("Food & Beverage", "Blue Apron"),
        ];
        for (industry, first) in cases {
            let list = recommend(industry);
            assert_eq!(list.len(), 5);
            assert_eq!(list[0].name, first);
            for c in list {
                assert_eq!(c.industry, industry);
            }
        }
    }

    #[test]
    fn unknown_industries_fall_through_to_default() {
        for industry in ["", "Unknown", "retail", "fashion & apparel"] {
            let names: Vec<_> = recommend(industry).iter().map(|c| c.name).collect();
            assert_eq!(names, ["Amazon", "Target", "Walmart", "Shopify", "Etsy"]);
        }
    }

    #[test]
    fn lookup_is_deterministic() {
        assert_eq!(recommend("Food & Beverage"), recommend("Food & Beverage"));
    }

    #[test]
    fn every_entry_has_logo_and_description() {
        for industry in [
            "Fashion & Apparel",
            "Beauty & Cosmetics",
            "Health & Wellness",
            "Food & Beverage",
            "anything-else",
        ] {
            for c in recommend(industry) {
                assert!(c.logo.is_some());
                assert!(c.description.is_some());
            }
        }
    }
}
