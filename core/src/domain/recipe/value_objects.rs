/// Shown when images were uploaded but none matched a catalog label.
pub const NO_KNOWN_FOODS_NOTICE: &str = "No known food items identified for recipes.";

/// Canonical form of a label used as catalog key.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}
