/// Label used when a command carries no `type`.
pub const UNKNOWN_COMMAND_TYPE: &str = "Unknown";

/// A named keyword group matched against command ids and names.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Scene element categories, in report order.
pub const SCENE_CATEGORIES: [CategoryRule; 6] = [
    CategoryRule {
        name: "Structure",
        keywords: &["Floor", "Wall", "Ceiling"],
    },
    CategoryRule {
        name: "Furniture",
        keywords: &["Table", "Chair", "Bookshelf"],
    },
    CategoryRule {
        name: "Material",
        keywords: &["Material"],
    },
    CategoryRule {
        name: "Lighting",
        keywords: &["Light"],
    },
    CategoryRule {
        name: "Physics",
        keywords: &["Collider", "Rigidbody"],
    },
    CategoryRule {
        name: "Hierarchy",
        keywords: &["Parent", "Transform"],
    },
];
