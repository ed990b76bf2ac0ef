use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// A tracked series as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
    pub current_episode: i32,
    pub total_episodes: i32,
    pub score: i32,
}

/// Writable fields of a series, used by both create and full replace.
///
/// `title` is the only field the payload must carry. Everything else falls back
/// to its zero value, and an explicit `null` is treated the same as an omitted
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeriesInput {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_episode: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_episodes: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: i32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Watch progress of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WatchStatus {
    #[default]
    Pending,
    Watching,
    Completed,
}

impl WatchStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Watching, Self::Completed];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Watching => "watching",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for WatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown watch status: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_status_round_trip() {
        for status in WatchStatus::ALL {
            assert_eq!(status.as_str().parse::<WatchStatus>(), Ok(status));
        }
        assert_eq!(WatchStatus::default(), WatchStatus::Pending);
    }

    #[test]
    fn test_watch_status_is_case_sensitive() {
        assert!("Watching".parse::<WatchStatus>().is_err());
        assert!("archived".parse::<WatchStatus>().is_err());
        assert!("".parse::<WatchStatus>().is_err());
    }

    #[test]
    fn test_series_input_defaults() {
        let input: SeriesInput = serde_json::from_str(r#"{"title": "Foo"}"#).unwrap();
        assert_eq!(input.title, "Foo");
        assert_eq!(input.description, "");
        assert_eq!(input.status, "");
        assert_eq!(input.total_episodes, 0);
    }

    #[test]
    fn test_series_input_nulls_and_unknown_fields() {
        let input: SeriesInput = serde_json::from_str(
            r#"{"id": 99, "title": "Foo", "description": null, "score": null}"#,
        )
        .unwrap();
        assert_eq!(input.description, "");
        assert_eq!(input.score, 0);
    }

    #[test]
    fn test_series_input_requires_title() {
        assert!(serde_json::from_str::<SeriesInput>(r#"{"description": "x"}"#).is_err());
        assert!(serde_json::from_str::<SeriesInput>(r#"{"title": "x", "score": "high"}"#).is_err());
    }
}
