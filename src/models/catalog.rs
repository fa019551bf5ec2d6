use crate::models::edit::{EditCategory, EditOptions};
use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ControlKind {
    Select { options: Vec<&'static str> },
    Slider,
}

#[derive(Debug, Clone, Serialize)]
pub struct Control {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: ControlKind,
}

impl Control {
    fn select(name: &'static str, label: &'static str, options: &[&'static str]) -> Self {
        Self {
            name,
            label,
            kind: ControlKind::Select {
                options: options.to_vec(),
            },
        }
    }

    fn slider(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: ControlKind::Slider,
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        match &self.kind {
            ControlKind::Select { options } => options.iter().any(|o| *o == value),
            ControlKind::Slider => true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudioModule {
    pub category: EditCategory,
    pub label: &'static str,
    pub icon: &'static str,
    pub controls: Vec<Control>,
}

impl StudioModule {
    pub fn control(&self, name: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.name == name)
    }

    /// Option names that are set but not accepted by this module's controls.
    /// Keys without a matching control are ignored.
    pub fn rejected_options<'a>(&self, options: &'a EditOptions) -> Vec<&'a str> {
        options
            .iter()
            .filter(|(name, value)| {
                self.control(name)
                    .map_or(false, |control| !control.accepts(value))
            })
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

static MODULES: Lazy<Vec<StudioModule>> = Lazy::new(|| {
    vec![
        StudioModule {
            category: EditCategory::Makeup,
            label: "Virtual Makeup",
            icon: "💄",
            controls: vec![
                Control::select(
                    "style",
                    "Look Style",
                    &["Natural Glow", "Soft Glam", "Evening Bold", "Bridal", "No-Makeup Makeup"],
                ),
                Control::slider("intensity", "Intensity"),
            ],
        },
        StudioModule {
            category: EditCategory::Hair,
            label: "Hairstyle Studio",
            icon: "💇‍♀️",
            controls: vec![
                Control::select(
                    "style",
                    "Style",
                    &["Long Layers", "Bob Cut", "Pixie", "Wavy", "Straight", "Updo"],
                ),
                Control::select(
                    "color",
                    "Color Family",
                    &["Blonde", "Brunette", "Black", "Red", "Copper", "Ombre"],
                ),
            ],
        },
        StudioModule {
            category: EditCategory::Nails,
            label: "Nail Bar",
            icon: "💅",
            controls: vec![
                Control::select(
                    "color",
                    "Polish Color",
                    &["Classic Red", "Nude", "Pink", "White French", "Black", "Glitter"],
                ),
                Control::select(
                    "style",
                    "Shape/Art",
                    &["Almond", "Square", "Coffin", "Stiletto", "Chrome Finish"],
                ),
            ],
        },
        StudioModule {
            category: EditCategory::Bridal,
            label: "Bridal Builder",
            icon: "👰",
            controls: vec![Control::select(
                "style",
                "Theme",
                &["Royal", "Boho", "Modern Minimalist", "Classic"],
            )],
        },
        StudioModule {
            category: EditCategory::Skin,
            label: "Skin Perfector",
            icon: "✨",
            controls: vec![Control::slider("intensity", "Smoothing Level")],
        },
    ]
});

/// Studio modules in display order.
pub fn modules() -> &'static [StudioModule] {
    &MODULES
}

pub fn module_for(category: EditCategory) -> Option<&'static StudioModule> {
    MODULES.iter().find(|m| m.category == category)
}

/// Options the studio starts with before the user touches any control.
pub fn starting_options() -> EditOptions {
    EditOptions::new()
        .with("style", "Natural Glow")
        .with("intensity", "Medium")
        .with("color", "Nude")
}
