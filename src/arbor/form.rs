//! # Tree Forms
//!
//! The boundary between free-text user input and [`Tree`] records. A
//! [`TreeForm`] holds every field as the text a user typed; [`TreeForm::validate`]
//! turns it into a full record or reports every problem at once.
//!
//! Rules:
//! - species (scientific) and plantation date are required; the id is required
//!   when editing and generated (UUID v4) when creating without one
//! - blank optional inputs become `None`, never `Some("")`
//! - numeric inputs must parse as finite numbers; a bad number is an error,
//!   not a silently dropped value
//! - the health status must belong to [`HealthStatus`] and is stored under its
//!   canonical label, except that an edit form may keep the free-text value
//!   the record already had

use crate::model::{HealthStatus, Tree};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field error found in one form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_errors(.0))]
pub struct FormErrors(pub Vec<FieldError>);

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl FormErrors {
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|e| e.field)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeForm {
    pub id: String,
    pub species_scientific: String,
    pub species_vernacular: String,
    pub planter_name: String,
    pub plantation_date: String,
    pub area: String,
    pub height_cm: String,
    pub health_status: String,
    pub latitude: String,
    pub longitude: String,
    pub notes: String,
    pub photos: Vec<String>,
    /// Health status of the record this form was pre-filled from, accepted
    /// as-is even when it is outside the vocabulary.
    pub stored_health_status: Option<String>,
}

impl TreeForm {
    /// A form pre-filled from an existing tree, as the edit form shows it.
    pub fn from_tree(tree: &Tree) -> Self {
        Self {
            id: tree.id.clone(),
            species_scientific: tree.species_scientific.clone(),
            species_vernacular: tree.species_vernacular.clone().unwrap_or_default(),
            planter_name: tree.planter_name.clone().unwrap_or_default(),
            plantation_date: tree.plantation_date.clone(),
            area: tree.area.clone().unwrap_or_default(),
            height_cm: number_text(tree.height_cm),
            health_status: tree.health_status.clone().unwrap_or_default(),
            latitude: number_text(tree.latitude),
            longitude: number_text(tree.longitude),
            notes: tree.notes.clone().unwrap_or_default(),
            photos: tree.photos.clone().unwrap_or_default(),
            stored_health_status: tree.health_status.clone(),
        }
    }

    pub fn validate(&self, mode: FormMode) -> Result<Tree, FormErrors> {
        let mut errors = Vec::new();

        let id = match (mode, self.id.trim().is_empty()) {
            (FormMode::Create, true) => Uuid::new_v4().to_string(),
            (FormMode::Edit, true) => {
                errors.push(FieldError::new("id", "is required"));
                String::new()
            }
            (_, false) => self.id.clone(),
        };

        if self.species_scientific.trim().is_empty() {
            errors.push(FieldError::new("speciesScientific", "is required"));
        }
        if self.plantation_date.trim().is_empty() {
            errors.push(FieldError::new("plantationDate", "is required"));
        }

        let height_cm = parse_number("heightCm", &self.height_cm, &mut errors);
        let latitude = parse_number("latitude", &self.latitude, &mut errors);
        let longitude = parse_number("longitude", &self.longitude, &mut errors);

        let health_status = match optional_text(&self.health_status) {
            None => None,
            Some(raw) => match raw.parse::<HealthStatus>() {
                Ok(status) => Some(status.label().to_string()),
                Err(_) if self.stored_health_status.as_deref() == Some(raw.as_str()) => Some(raw),
                Err(msg) => {
                    errors.push(FieldError::new("healthStatus", msg));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(FormErrors(errors));
        }

        let photos: Vec<String> = self
            .photos
            .iter()
            .filter(|p| !p.trim().is_empty())
            .cloned()
            .collect();

        Ok(Tree {
            id,
            species_scientific: self.species_scientific.clone(),
            species_vernacular: optional_text(&self.species_vernacular),
            planter_name: optional_text(&self.planter_name),
            plantation_date: self.plantation_date.clone(),
            area: optional_text(&self.area),
            height_cm,
            health_status,
            latitude,
            longitude,
            notes: optional_text(&self.notes),
            photos: if photos.is_empty() { None } else { Some(photos) },
        })
    }
}

fn optional_text(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

fn number_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_number(field: &'static str, input: &str, errors: &mut Vec<FieldError>) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            errors.push(FieldError::new(
                field,
                format!("'{}' is not a number", input),
            ));
            None
        }
    }
}
