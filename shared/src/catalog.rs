//! Built-in fruit catalog.
//!
//! Each entry carries both the front-end card data and the tint used when the
//! placeholder sphere model for that fruit is generated.

use rand::Rng;

/// A selectable fruit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fruit {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    /// Model path relative to the site root
    pub model: &'static str,
    /// Card colour as `#rrggbb`
    pub color: &'static str,
    /// Base colour of the generated sphere model, linear RGB in `[0, 1]`
    pub model_color: [f32; 3],
}

pub const FRUITS: &[Fruit] = &[
    Fruit {
        id: "apple",
        name: "Apple",
        emoji: "🍎",
        description: "A crisp, sweet fruit perfect for any occasion",
        model: "assets/models/apple.glb",
        color: "#ff6b6b",
        model_color: [0.8, 0.1, 0.1],
    },
    Fruit {
        id: "banana",
        name: "Banana",
        emoji: "🍌",
        description: "A tropical delight, rich in potassium",
        model: "assets/models/banana.glb",
        color: "#ffd93d",
        model_color: [1.0, 0.9, 0.2],
    },
    Fruit {
        id: "orange",
        name: "Orange",
        emoji: "🍊",
        description: "Bursting with vitamin C and sunshine",
        model: "assets/models/orange.glb",
        color: "#ff9f43",
        model_color: [1.0, 0.5, 0.0],
    },
    Fruit {
        id: "strawberry",
        name: "Strawberry",
        emoji: "🍓",
        description: "Sweet, juicy, and romantically red",
        model: "assets/models/strawberry.glb",
        color: "#ee5a5a",
        model_color: [0.9, 0.2, 0.3],
    },
    Fruit {
        id: "pineapple",
        name: "Pineapple",
        emoji: "🍍",
        description: "The crown jewel of tropical fruits",
        model: "assets/models/pineapple.glb",
        color: "#f8d56b",
        model_color: [0.9, 0.7, 0.1],
    },
    Fruit {
        id: "watermelon",
        name: "Watermelon",
        emoji: "🍉",
        description: "Summer's favorite refreshing treat",
        model: "assets/models/watermelon.glb",
        color: "#26de81",
        model_color: [0.2, 0.7, 0.3],
    },
    Fruit {
        id: "grapes",
        name: "Grapes",
        emoji: "🍇",
        description: "Clusters of sweet, bite-sized perfection",
        model: "assets/models/grapes.glb",
        color: "#a55eea",
        model_color: [0.5, 0.2, 0.6],
    },
    Fruit {
        id: "pear",
        name: "Pear",
        emoji: "🍐",
        description: "Elegantly shaped and delicately sweet",
        model: "assets/models/pear.glb",
        color: "#c4e538",
        model_color: [0.7, 0.8, 0.2],
    },
    Fruit {
        id: "kiwi",
        name: "Kiwi",
        emoji: "🥝",
        description: "Fuzzy outside, tangy-sweet inside",
        model: "assets/models/kiwi.glb",
        color: "#7bed9f",
        model_color: [0.4, 0.3, 0.2],
    },
    Fruit {
        id: "mango",
        name: "Mango",
        emoji: "🥭",
        description: "The king of fruits, lusciously tropical",
        model: "assets/models/mango.glb",
        color: "#ffa502",
        model_color: [1.0, 0.6, 0.1],
    },
];

/// Look up a fruit by id
pub fn find(catalog: &'static [Fruit], id: &str) -> Option<&'static Fruit> {
    catalog.iter().find(|fruit| fruit.id == id)
}

/// Pick any fruit uniformly. `None` only for an empty catalog.
pub fn random<R: Rng + ?Sized>(catalog: &'static [Fruit], rng: &mut R) -> Option<&'static Fruit> {
    if catalog.is_empty() {
        return None;
    }
    Some(&catalog[rng.random_range(0..catalog.len())])
}
