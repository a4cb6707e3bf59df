//! Landmark description returned by the vision endpoint.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Placeholder for fields the vision endpoint did not provide.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Identified landmark with its historical background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkInfo {
    pub name: String,
    pub description: String,
    pub location: String,
    pub year_built: String,
    pub architecture: String,
    pub significance: String,
    #[serde(default)]
    pub fun_facts: Vec<String>,
}

impl LandmarkInfo {
    /// A record with only a name; every other field is [`UNKNOWN_FIELD`].
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: UNKNOWN_FIELD.to_string(),
            location: UNKNOWN_FIELD.to_string(),
            year_built: UNKNOWN_FIELD.to_string(),
            architecture: UNKNOWN_FIELD.to_string(),
            significance: UNKNOWN_FIELD.to_string(),
            fun_facts: Vec::new(),
        }
    }

    /// Short context handed to the chat endpoint with every question.
    pub fn chat_context(&self) -> String {
        format!(
            "Landmark: {}\nLocation: {}\nBuilt: {}\nArchitecture: {}\nDescription: {}",
            self.name, self.location, self.year_built, self.architecture, self.description
        )
    }
}

static DEMO_LANDMARK: Lazy<LandmarkInfo> = Lazy::new(|| LandmarkInfo {
    name: "Eiffel Tower".to_string(),
    description: "A wrought-iron lattice tower on the Champ de Mars, built as the entrance \
                  arch to the 1889 World's Fair and now a global icon of France."
        .to_string(),
    location: "Paris, France".to_string(),
    year_built: "1887-1889".to_string(),
    architecture: "Wrought-iron lattice, designed by Gustave Eiffel's engineering company"
        .to_string(),
    significance: "The tallest man-made structure in the world until 1930 and one of the \
                   most visited paid monuments on Earth."
        .to_string(),
    fun_facts: vec![
        "The tower grows by about 15 cm in summer as the iron expands.".to_string(),
        "It is repainted roughly every seven years with about 60 tonnes of paint.".to_string(),
        "It was meant to be dismantled after 20 years but was saved as a radio antenna."
            .to_string(),
    ],
});

/// Canned payload shown when the vision endpoint is unreachable or unusable.
pub fn demo_landmark() -> LandmarkInfo {
    DEMO_LANDMARK.clone()
}
