//! Template Registry - the closed set of fixed templates
//!
//! Identifiers, implementations and display metadata are fixed at build
//! time. There is no runtime registration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RowgramError};
use crate::templates::{
    Championship, Classic, Heritage, Minimal, Modern, OarBlade, Pulse, Regatta, Template, Vintage,
    Waterline,
};

pub type TemplateId = &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Traditional,
    Modern,
    Event,
    Minimal,
    Nature,
}

/// Listing entry shown to users choosing a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub preview_url: String,
}

struct Entry {
    id: TemplateId,
    name: &'static str,
    description: &'static str,
    category: Category,
    template: &'static dyn Template,
}

static ENTRIES: [Entry; 10] = [
    Entry {
        id: "classic",
        name: "Classic Lineup",
        description: "Club-color gradient with a centred seat list and race footer",
        category: Category::Traditional,
        template: &Classic,
    },
    Entry {
        id: "modern",
        name: "Modern Grid",
        description: "Dark grid backdrop with a card for every rower",
        category: Category::Modern,
        template: &Modern,
    },
    Entry {
        id: "heritage",
        name: "Heritage",
        description: "Parchment, ornamental frame and a heraldic crest",
        category: Category::Traditional,
        template: &Heritage,
    },
    Entry {
        id: "regatta",
        name: "Regatta Day",
        description: "Striped race poster with a ribbon banner and pennants",
        category: Category::Event,
        template: &Regatta,
    },
    Entry {
        id: "minimal",
        name: "Minimal",
        description: "Clean type on white with hairline dividers",
        category: Category::Minimal,
        template: &Minimal,
    },
    Entry {
        id: "championship",
        name: "Championship",
        description: "Spotlight gradient with a gold seal and laurel",
        category: Category::Event,
        template: &Championship,
    },
    Entry {
        id: "waterline",
        name: "Waterline",
        description: "Dawn sky over rippling water with the shell on the surface",
        category: Category::Nature,
        template: &Waterline,
    },
    Entry {
        id: "pulse",
        name: "Pulse",
        description: "Night-mode lineup over a split-rate bar graph",
        category: Category::Modern,
        template: &Pulse,
    },
    Entry {
        id: "vintage",
        name: "Vintage Print",
        description: "Sepia letterpress with ink speckle and a ruled frame",
        category: Category::Traditional,
        template: &Vintage,
    },
    Entry {
        id: "oarblade",
        name: "Oar Blades",
        description: "Two-tone field with each rower's blade in club colors",
        category: Category::Modern,
        template: &OarBlade,
    },
];

impl Entry {
    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            preview_url: format!("/previews/{}.png", self.id),
        }
    }
}

/// Look up a fixed template by id.
pub fn get(id: &str) -> Result<&'static dyn Template> {
    ENTRIES
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.template)
        .ok_or_else(|| RowgramError::UnknownTemplate(id.to_string()))
}

pub fn contains(id: &str) -> bool {
    ENTRIES.iter().any(|e| e.id == id)
}

pub fn info(id: &str) -> Option<TemplateInfo> {
    ENTRIES.iter().find(|e| e.id == id).map(Entry::info)
}

/// All fixed templates in display order.
pub fn list() -> Vec<TemplateInfo> {
    ENTRIES.iter().map(Entry::info).collect()
}

pub fn ids() -> impl Iterator<Item = TemplateId> {
    ENTRIES.iter().map(|e| e.id)
}
