use std::fmt;

use super::types::{BirthYears, UserStats};
use super::utility::{mode, value_counts};
use crate::dataset::TripDataset;

impl UserStats {
    /// User type, gender and birth year summaries. `None` for an empty
    /// dataset.
    ///
    /// Gender and birth year are only computed when the dataset's schema has
    /// those columns; `cities` names the selection in the fallback messages.
    #[tracing::instrument(skip_all, fields(trips = dataset.len()))]
    pub fn from_dataset(dataset: &TripDataset, cities: &str) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }

        let schema = dataset.schema();

        let user_types = owned_counts(value_counts(
            dataset.trips().filter_map(|t| t.user_type.as_deref()),
        ));

        let genders = schema.has_gender.then(|| {
            owned_counts(value_counts(
                dataset.trips().filter_map(|t| t.gender.as_deref()),
            ))
        });

        let birth_years = if schema.has_birth_year {
            let years: Vec<i32> = dataset.trips().filter_map(|t| t.birth_year).collect();
            BirthYears::from_years(&years)
        } else {
            None
        };

        Some(UserStats {
            cities: cities.to_string(),
            user_types,
            genders,
            birth_years,
        })
    }
}

impl BirthYears {
    pub fn from_years(years: &[i32]) -> Option<Self> {
        Some(BirthYears {
            oldest: years.iter().copied().min()?,
            youngest: years.iter().copied().max()?,
            most_common: mode(years.iter().copied())?,
        })
    }
}

fn owned_counts(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &[(String, usize)]) -> fmt::Result {
    let width = counts.iter().map(|(value, _)| value.len()).max().unwrap_or(0);
    for (value, count) in counts {
        writeln!(f, "{value:<width$}    {count}")?;
    }
    Ok(())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User types distribution:")?;
        write_counts(f, &self.user_types)?;

        match &self.genders {
            Some(genders) => {
                writeln!(f, "\nGender distribution:")?;
                write_counts(f, genders)?;
            }
            None => writeln!(f, "\nNo gender data available for {}.", self.cities)?,
        }

        match &self.birth_years {
            Some(years) => {
                writeln!(f, "\nOldest user birth year: {}", years.oldest)?;
                writeln!(f, "Youngest user birth year: {}", years.youngest)?;
                write!(f, "Most common birth year: {}", years.most_common)
            }
            None => write!(f, "\nNo birth year data available for {}.", self.cities),
        }
    }
}
