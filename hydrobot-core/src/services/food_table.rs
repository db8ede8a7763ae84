//! Small built-in nutrition table used when the remote provider has no
//! answer. Matching is exact and case-insensitive, by name or alias.

#[derive(Debug, Clone, PartialEq)]
pub struct LocalFood {
    pub name: &'static str,
    /// kcal per 100 g
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    /// typical portion: ml for drinks, pieces for eggs, grams otherwise
    pub serving_size: f64,
    pub aliases: &'static [&'static str],
}

pub static FOOD_TABLE: &[LocalFood] = &[
    LocalFood {
        name: "Milk",
        calories: 42.0,
        protein: 3.4,
        fat: 1.0,
        carbs: 4.7,
        serving_size: 200.0,
        aliases: &["молоко", "молочко", "молоко коровье", "cow milk"],
    },
    LocalFood {
        name: "Egg",
        calories: 157.0,
        protein: 13.0,
        fat: 11.0,
        carbs: 1.1,
        serving_size: 1.0,
        aliases: &["eggs", "яйцо", "яйца", "яйцо куриное", "chicken egg"],
    },
    LocalFood {
        name: "Banana",
        calories: 89.0,
        protein: 1.1,
        fat: 0.3,
        carbs: 22.8,
        serving_size: 100.0,
        aliases: &["bananas", "банан", "бананы"],
    },
    LocalFood {
        name: "Buckwheat",
        calories: 343.0,
        protein: 12.6,
        fat: 3.3,
        carbs: 68.0,
        serving_size: 100.0,
        aliases: &["гречка", "греча", "гречневая крупа"],
    },
    LocalFood {
        name: "Chicken breast",
        calories: 165.0,
        protein: 31.0,
        fat: 3.6,
        carbs: 0.0,
        serving_size: 100.0,
        aliases: &["chicken", "куриная грудка", "курица", "грудка"],
    },
    LocalFood {
        name: "Oatmeal",
        calories: 68.0,
        protein: 2.4,
        fat: 1.4,
        carbs: 12.0,
        serving_size: 100.0,
        aliases: &["porridge", "овсянка", "овсяная каша", "овсяные хлопья"],
    },
];

pub fn search_food(query: &str) -> Option<&'static LocalFood> {
    let query = query.trim().to_lowercase();
    FOOD_TABLE.iter().find(|food| {
        food.name.to_lowercase() == query
            || food.aliases.iter().any(|alias| alias.to_lowercase() == query)
    })
}
