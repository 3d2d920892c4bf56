#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePreset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub instruction: String,
    pub preview_url: String,
}

#[derive(Debug, Clone)]
pub struct StyleCatalog {
    presets: Vec<StylePreset>,
}

impl StyleCatalog {
    pub fn builtin() -> Self {
        Self {
            presets: vec![
                StylePreset {
                    id: "corporate".to_string(),
                    name: "Corporate Studio".to_string(),
                    description: "Classic grey backdrop with studio lighting.".to_string(),
                    instruction: "Professional corporate headshot, suit and tie or professional \
                                  dress, neutral grey studio backdrop, high-end commercial \
                                  photography, sharp focus, 8k resolution, studio lighting."
                        .to_string(),
                    preview_url: "https://picsum.photos/seed/corp/400/500".to_string(),
                },
                StylePreset {
                    id: "tech".to_string(),
                    name: "Modern Tech Office".to_string(),
                    description: "Casual professional in a bright, modern office.".to_string(),
                    instruction: "Modern tech professional headshot, casual professional attire, \
                                  blurred office background with glass walls and plants, soft \
                                  natural indoor lighting, vibrant and clean aesthetic."
                        .to_string(),
                    preview_url: "https://picsum.photos/seed/tech/400/500".to_string(),
                },
                StylePreset {
                    id: "outdoor".to_string(),
                    name: "Outdoor Natural".to_string(),
                    description: "Soft lighting in a natural park setting.".to_string(),
                    instruction: "Natural light professional headshot, outdoor park setting, \
                                  soft sunlight, blurred greenery in the background, \
                                  professional portrait, warm and friendly expression."
                        .to_string(),
                    preview_url: "https://picsum.photos/seed/park/400/500".to_string(),
                },
                StylePreset {
                    id: "luxury".to_string(),
                    name: "Executive Suite".to_string(),
                    description: "Elegant boardroom or executive lounge setting.".to_string(),
                    instruction: "Executive headshot, luxury office setting, high-end wooden \
                                  desk and leather chair in soft focus background, sophisticated \
                                  lighting, powerful and confident professional look."
                        .to_string(),
                    preview_url: "https://picsum.photos/seed/exec/400/500".to_string(),
                },
            ],
        }
    }

    pub fn all(&self) -> &[StylePreset] {
        &self.presets
    }

    pub fn find(&self, id: &str) -> Option<&StylePreset> {
        self.presets.iter().find(|preset| preset.id == id)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

pub const EDIT_SUGGESTIONS: [&str; 4] = [
    "Add a blue blazer",
    "Blur background more",
    "Warmer lighting",
    "Corporate blue tie",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_four_presets() {
        let catalog = StyleCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn find_by_id() {
        let catalog = StyleCatalog::builtin();
        let corporate = catalog.find("corporate").expect("corporate preset");
        assert_eq!(corporate.name, "Corporate Studio");
        assert!(corporate.instruction.contains("studio lighting"));
        assert!(catalog.find("vaporwave").is_none());
    }

    #[test]
    fn preset_ids_are_unique() {
        let catalog = StyleCatalog::builtin();
        for preset in catalog.all() {
            let matching = catalog
                .all()
                .iter()
                .filter(|other| other.id == preset.id)
                .count();
            assert_eq!(matching, 1, "duplicate id {}", preset.id);
        }
    }
}
