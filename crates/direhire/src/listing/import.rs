use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

use super::domain::{AvailabilityWindow, ExperienceTier, WorkType, WorkerId, WorkerRecord};

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read worker catalog: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid worker catalog CSV: {}", err),
            CatalogImportError::InvalidValue { row, column, value } => write!(
                f,
                "row {}: '{}' is not a valid value for column '{}'",
                row, value, column
            ),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::InvalidValue { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads worker listing records from a CSV export. Multi-valued columns
/// (`skills`, `services`, `availability`, `work_types`) are `;`-separated.
pub struct WorkerCatalogImporter;

impl WorkerCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<WorkerRecord>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<WorkerRecord>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (index, row) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            // header occupies line 1
            records.push(row?.into_record(index + 2)?);
        }

        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    profession: String,
    location: String,
    rating: f32,
    review_count: u32,
    hourly_rate: u32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    project_rate: Option<String>,
    #[serde(default)]
    skills: String,
    is_available: bool,
    is_verified: bool,
    #[serde(default)]
    is_top_rated: bool,
    experience: String,
    completed_jobs: u32,
    #[serde(default)]
    services: String,
    #[serde(default)]
    availability: String,
    #[serde(default)]
    work_types: String,
}

impl CatalogRow {
    fn into_record(self, row: usize) -> Result<WorkerRecord, CatalogImportError> {
        let invalid = |column: &'static str, value: &str| CatalogImportError::InvalidValue {
            row,
            column,
            value: value.to_string(),
        };

        let rating = if (0.0..=5.0).contains(&self.rating) {
            self.rating
        } else {
            return Err(invalid("rating", &self.rating.to_string()));
        };

        let project_rate = self
            .project_rate
            .as_deref()
            .map(|raw| raw.parse::<u32>().map_err(|_| invalid("project_rate", raw)))
            .transpose()?;

        let experience = ExperienceTier::parse(&self.experience)
            .ok_or_else(|| invalid("experience", &self.experience))?;

        let availability = split_list(&self.availability)
            .map(|raw| AvailabilityWindow::parse(raw).ok_or_else(|| invalid("availability", raw)))
            .collect::<Result<Vec<_>, _>>()?;

        let work_types = split_list(&self.work_types)
            .map(|raw| WorkType::parse(raw).ok_or_else(|| invalid("work_types", raw)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WorkerRecord {
            id: WorkerId(self.id),
            name: self.name,
            profession: self.profession,
            location: self.location,
            rating,
            review_count: self.review_count,
            hourly_rate: self.hourly_rate,
            project_rate,
            skills: split_list(&self.skills).map(str::to_string).collect(),
            is_available: self.is_available,
            is_verified: self.is_verified,
            is_top_rated: self.is_top_rated,
            experience,
            completed_jobs: self.completed_jobs,
            services: split_list(&self.services)
                .map(|slug| slug.to_ascii_lowercase())
                .collect(),
            availability,
            work_types,
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(';').map(str::trim).filter(|item| !item.is_empty())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
