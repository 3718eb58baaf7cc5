use std::collections::HashSet;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::models::{Activity, ActivitySeed};
use crate::seed;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("activity '{0}' is defined more than once")]
    DuplicateActivity(String),

    #[error("activity '{0}' must allow at least one participant")]
    ZeroCapacity(String),

    #[error("activity '{activity}' lists {participants} participants but allows {max}")]
    OverCapacity {
        activity: String,
        participants: usize,
        max: u32,
    },

    #[error("activity '{activity}' lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },
}

/// In-memory activity store, keyed by exact activity name, in seed order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    activities: Vec<(String, Activity)>,
}

impl Catalog {
    pub fn from_seeds(seeds: impl IntoIterator<Item = ActivitySeed>) -> Result<Self, SeedError> {
        let mut activities: Vec<(String, Activity)> = Vec::new();
        for s in seeds {
            if activities.iter().any(|(name, _)| *name == s.name) {
                return Err(SeedError::DuplicateActivity(s.name));
            }
            if s.max_participants == 0 {
                return Err(SeedError::ZeroCapacity(s.name));
            }
            if s.participants.len() > s.max_participants as usize {
                return Err(SeedError::OverCapacity {
                    activity: s.name,
                    participants: s.participants.len(),
                    max: s.max_participants,
                });
            }
            if let Some(email) = first_duplicate(&s.participants) {
                return Err(SeedError::DuplicateParticipant {
                    activity: s.name,
                    email,
                });
            }

            activities.push((
                s.name,
                Activity {
                    description: s.description,
                    schedule: s.schedule,
                    max_participants: s.max_participants,
                    participants: s.participants,
                },
            ));
        }
        Ok(Self { activities })
    }

    /// The built-in Mergington High School catalog.
    pub fn mergington() -> Result<Self, SeedError> {
        Self::from_seeds(seed::mergington())
    }

    #[allow(dead_code)]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    /// Snapshot of every activity, participants included, in catalog order.
    pub fn list_all(&self) -> Listing {
        Listing(self.activities.clone())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }
}

fn first_duplicate(emails: &[String]) -> Option<String> {
    let mut seen = HashSet::new();
    emails.iter().find(|e| !seen.insert(e.as_str())).cloned()
}

/// Owned copy of the catalog that serializes as a JSON object
/// `{ name: activity, ... }` keeping insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing(Vec<(String, Activity)>);

impl Listing {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Serialize for Listing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}
