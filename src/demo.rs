// Demo mode: seed the menu with a handful of dishes
//
// Useful for trying the Home and Filter screens without typing a menu in.
// The dishes go through the normal add path, so validation, rounding and
// change notifications all behave exactly as for typed entries.
//
// Run with: MENUCARD_DEMO=1 cargo run --release (or `menucard --demo`)

use crate::menu::{Course, MenuStore, NewEntry};

/// (name, description, course, price text)
const DEMO_DISHES: &[(&str, &str, Course, &str)] = &[
    (
        "Butternut Soup",
        "Roasted butternut with nutmeg cream",
        Course::Starter,
        "65",
    ),
    ("Chicken Livers", "Peri-peri, toasted ciabatta", Course::Starter, "79.50"),
    ("Lemon Chicken", "Free-range, lemon and thyme jus", Course::Main, "145"),
    ("Lamb Shank", "Slow braised, creamy samp", Course::Main, "189.99"),
    ("Bobotie", "", Course::Main, "120"),
    ("Malva Pudding", "Warm, with custard", Course::Dessert, "55"),
    ("Milk Tart", "Cinnamon dusted", Course::Dessert, "48.5"),
];

/// Add the demo dishes to `store`, returning how many were added
pub fn seed(store: &mut MenuStore) -> usize {
    let mut added = 0;
    for (name, description, course, price) in DEMO_DISHES {
        match store.add(NewEntry::new(*name, *description, *course, *price)) {
            Ok(_) => added += 1,
            Err(e) => tracing::error!("Demo dish '{}' rejected: {}", name, e),
        }
    }
    tracing::info!("Seeded {} demo dishes", added);
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_adds_every_dish() {
        let mut store = MenuStore::new();
        assert_eq!(seed(&mut store), DEMO_DISHES.len());
        assert_eq!(store.len(), DEMO_DISHES.len());

        let aggregates = store.aggregates();
        assert_eq!(aggregates.main.count, 3);
        // (145 + 189.99 + 120) / 3 = 151.663...
        assert_eq!(aggregates.main.average, 151.66);
    }
}
