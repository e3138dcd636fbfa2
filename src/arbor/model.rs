use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A planted tree, the only record kind held by the registry.
///
/// `id`, `species_scientific` and `plantation_date` are mandatory for the
/// forms that build trees; the store itself accepts whatever it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    pub id: String,
    pub species_scientific: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species_vernacular: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planter_name: Option<String>,
    /// ISO date (`YYYY-MM-DD`). Kept as text, never calendar-checked.
    pub plantation_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
}

impl Tree {
    /// A tree with only the mandatory fields set.
    pub fn new(
        id: impl Into<String>,
        species_scientific: impl Into<String>,
        plantation_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            species_scientific: species_scientific.into(),
            species_vernacular: None,
            planter_name: None,
            plantation_date: plantation_date.into(),
            area: None,
            height_cm: None,
            health_status: None,
            latitude: None,
            longitude: None,
            notes: None,
            photos: None,
        }
    }

    pub fn with_planter(mut self, planter: impl Into<String>) -> Self {
        self.planter_name = Some(planter.into());
        self
    }

    /// Vernacular name when known, scientific name otherwise.
    pub fn display_name(&self) -> &str {
        self.species_vernacular
            .as_deref()
            .unwrap_or(&self.species_scientific)
    }

    /// The first photo is the one shown in listings.
    pub fn primary_photo(&self) -> Option<&str> {
        self.photos
            .as_ref()
            .and_then(|photos| photos.first())
            .map(String::as_str)
    }

    /// Latitude and longitude, only when both are recorded.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Health vocabulary offered by the tree forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    Excellent,
    VeryGood,
    Good,
    Average,
    Weak,
}

impl HealthStatus {
    pub fn all() -> &'static [HealthStatus] {
        &[
            HealthStatus::Excellent,
            HealthStatus::VeryGood,
            HealthStatus::Good,
            HealthStatus::Average,
            HealthStatus::Weak,
        ]
    }

    /// The label stored on the tree record.
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::VeryGood => "Très bon",
            HealthStatus::Good => "Bon",
            HealthStatus::Average => "Moyen",
            HealthStatus::Weak => "Faible",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn fold_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'é' | 'è' | 'ê' => 'e',
            '-' | '_' => ' ',
            other => other,
        })
        .collect()
}

impl FromStr for HealthStatus {
    type Err = String;

    /// Accepts the labels case-insensitively, with or without accents, and
    /// slug forms such as `tres-bon`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold_label(s);
        HealthStatus::all()
            .iter()
            .find(|status| fold_label(status.label()) == folded)
            .copied()
            .ok_or_else(|| {
                let labels: Vec<_> = HealthStatus::all().iter().map(|s| s.label()).collect();
                format!(
                    "unknown health status '{}' (expected one of: {})",
                    s.trim(),
                    labels.join(", ")
                )
            })
    }
}

/// The registry content a fresh session starts from.
pub fn demo_trees() -> Vec<Tree> {
    vec![
        Tree {
            id: "1".to_string(),
            species_scientific: "Quercus robur".to_string(),
            species_vernacular: Some("Chêne pédonculé".to_string()),
            planter_name: Some("Rabemorasata Heriniaina Safidy".to_string()),
            plantation_date: "2024-03-15".to_string(),
            area: Some("Andasibe Mantadia".to_string()),
            height_cm: Some(280.0),
            health_status: Some("Excellent".to_string()),
            latitude: Some(-19.2415),
            longitude: Some(47.525),
            notes: Some(
                "Arbre bien établi avec une belle croissance. Suivi régulier recommandé."
                    .to_string(),
            ),
            photos: Some(vec!["/oak-tree.jpg".to_string()]),
        },
        Tree {
            id: "2".to_string(),
            species_scientific: "Mangifera indica".to_string(),
            species_vernacular: Some("Manguier".to_string()),
            planter_name: Some("Jean Dupont".to_string()),
            plantation_date: "2023-06-20".to_string(),
            area: Some("Fianarantsoa".to_string()),
            height_cm: Some(450.0),
            health_status: Some("Très bon".to_string()),
            latitude: Some(-21.4531),
            longitude: Some(47.0822),
            notes: Some("Fruitier productif".to_string()),
            photos: Some(vec!["/mango-tree.jpg".to_string()]),
        },
        Tree {
            id: "3".to_string(),
            species_scientific: "Ficus benjamina".to_string(),
            species_vernacular: Some("Figuier".to_string()),
            planter_name: Some("Rabemorasata Heriniaina Safidy".to_string()),
            plantation_date: "2024-01-10".to_string(),
            area: Some("Antananarivo".to_string()),
            height_cm: Some(350.0),
            health_status: Some("Bon".to_string()),
            latitude: Some(-18.8792),
            longitude: Some(47.5079),
            notes: Some("Croissance normale".to_string()),
            photos: Some(vec!["/mango-tree.jpg".to_string()]),
        },
    ]
}
