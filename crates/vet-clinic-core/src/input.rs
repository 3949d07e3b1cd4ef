//! Parsing and presence checks for values coming from form fields.
//!
//! The facade expects already-typed values. Frontends run raw text through
//! these helpers first and surface [`InputError`] to the user.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::{Client, Medication, Pet, Veterinarian};

/// Accepted date-time layouts, most specific first.
const DATE_TIME_FORMATS: &[&str] = &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"];

/// Form input errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{0} is required")]
    Missing(String),

    #[error("age must be a positive integer, got '{0}'")]
    InvalidAge(String),

    #[error("expected date as dd/MM/yyyy HH:mm, got '{0}'")]
    InvalidDateTime(String),
}

pub type InputResult<T> = Result<T, InputError>;

/// Trim a field and fail if nothing is left.
pub fn require(field: &str, value: &str) -> InputResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing(field.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Parse a pet age. Zero and negative values are rejected.
pub fn parse_age(text: &str) -> InputResult<u32> {
    let trimmed = text.trim();
    match trimmed.parse::<u32>() {
        Ok(age) if age > 0 => Ok(age),
        _ => Err(InputError::InvalidAge(trimmed.to_string())),
    }
}

/// Parse `dd/MM/yyyy HH:mm` with optional seconds.
pub fn parse_date_time(text: &str) -> InputResult<NaiveDateTime> {
    let trimmed = text.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| InputError::InvalidDateTime(trimmed.to_string()))
}

/// Split a free-text medication list.
///
/// Entries are comma-separated. When the last word of an entry contains a
/// digit it is taken as the dosage ("Amoxicilina 250mg"), otherwise the
/// whole entry is the name and the dosage is empty.
pub fn parse_medications(text: &str) -> Vec<Medication> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.rsplit_once(' ') {
            Some((name, dosage)) if dosage.chars().any(|c| c.is_ascii_digit()) => {
                Medication::new(name.trim(), dosage.trim())
            }
            _ => Medication::new(entry, ""),
        })
        .collect()
}

/// Raw client registration form.
#[derive(Debug, Clone, Default)]
pub struct NewClient {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl NewClient {
    /// Name and phone are required; email may be blank.
    pub fn validate(&self) -> InputResult<Client> {
        let name = require("name", &self.name)?;
        let phone = require("phone", &self.phone)?;
        Ok(Client::new(name, phone, self.email.trim()))
    }
}

/// Raw pet registration form.
#[derive(Debug, Clone, Default)]
pub struct NewPet {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub owner: Option<Client>,
}

impl NewPet {
    /// Every field and an owner are required.
    pub fn validate(&self) -> InputResult<Pet> {
        let name = require("name", &self.name)?;
        let species = require("species", &self.species)?;
        let breed = require("breed", &self.breed)?;
        let age = require("age", &self.age)?;
        let owner = self
            .owner
            .clone()
            .ok_or_else(|| InputError::Missing("owner".into()))?;
        Ok(Pet::new(name, species, breed, parse_age(&age)?, owner))
    }
}

/// Raw veterinarian registration form.
#[derive(Debug, Clone, Default)]
pub struct NewVeterinarian {
    pub name: String,
    pub license: String,
}

impl NewVeterinarian {
    pub fn validate(&self) -> InputResult<Veterinarian> {
        let name = require("name", &self.name)?;
        let license = require("license", &self.license)?;
        Ok(Veterinarian::new(name, license))
    }
}
