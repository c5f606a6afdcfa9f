use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields shared by every cast member record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub birth_year: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i64>,
    pub biography: String,
    pub image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActressNationality {
    American,
    British,
    Australian,
    #[serde(rename = "Israeli-American")]
    IsraeliAmerican,
    #[serde(rename = "South African")]
    SouthAfrican,
    French,
    Indian,
    Israeli,
    Spanish,
    #[serde(rename = "South Korean")]
    SouthKorean,
    Chinese,
}

impl ActressNationality {
    pub const ALL: [ActressNationality; 11] = [
        ActressNationality::American,
        ActressNationality::British,
        ActressNationality::Australian,
        ActressNationality::IsraeliAmerican,
        ActressNationality::SouthAfrican,
        ActressNationality::French,
        ActressNationality::Indian,
        ActressNationality::Israeli,
        ActressNationality::Spanish,
        ActressNationality::SouthKorean,
        ActressNationality::Chinese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActressNationality::American => "American",
            ActressNationality::British => "British",
            ActressNationality::Australian => "Australian",
            ActressNationality::IsraeliAmerican => "Israeli-American",
            ActressNationality::SouthAfrican => "South African",
            ActressNationality::French => "French",
            ActressNationality::Indian => "Indian",
            ActressNationality::Israeli => "Israeli",
            ActressNationality::Spanish => "Spanish",
            ActressNationality::SouthKorean => "South Korean",
            ActressNationality::Chinese => "Chinese",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|n| n.as_str() == label)
    }
}

impl fmt::Display for ActressNationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Superset of [`ActressNationality`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorNationality {
    American,
    British,
    Australian,
    #[serde(rename = "Israeli-American")]
    IsraeliAmerican,
    #[serde(rename = "South African")]
    SouthAfrican,
    French,
    Indian,
    Israeli,
    Spanish,
    #[serde(rename = "South Korean")]
    SouthKorean,
    Chinese,
    Scottish,
    #[serde(rename = "New Zealand")]
    NewZealand,
    #[serde(rename = "Hong Kong")]
    HongKong,
    German,
    Canadian,
    Irish,
}

impl ActorNationality {
    pub const ALL: [ActorNationality; 17] = [
        ActorNationality::American,
        ActorNationality::British,
        ActorNationality::Australian,
        ActorNationality::IsraeliAmerican,
        ActorNationality::SouthAfrican,
        ActorNationality::French,
        ActorNationality::Indian,
        ActorNationality::Israeli,
        ActorNationality::Spanish,
        ActorNationality::SouthKorean,
        ActorNationality::Chinese,
        ActorNationality::Scottish,
        ActorNationality::NewZealand,
        ActorNationality::HongKong,
        ActorNationality::German,
        ActorNationality::Canadian,
        ActorNationality::Irish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActorNationality::American => "American",
            ActorNationality::British => "British",
            ActorNationality::Australian => "Australian",
            ActorNationality::IsraeliAmerican => "Israeli-American",
            ActorNationality::SouthAfrican => "South African",
            ActorNationality::French => "French",
            ActorNationality::Indian => "Indian",
            ActorNationality::Israeli => "Israeli",
            ActorNationality::Spanish => "Spanish",
            ActorNationality::SouthKorean => "South Korean",
            ActorNationality::Chinese => "Chinese",
            ActorNationality::Scottish => "Scottish",
            ActorNationality::NewZealand => "New Zealand",
            ActorNationality::HongKong => "Hong Kong",
            ActorNationality::German => "German",
            ActorNationality::Canadian => "Canadian",
            ActorNationality::Irish => "Irish",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|n| n.as_str() == label)
    }
}

impl fmt::Display for ActorNationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ActressNationality> for ActorNationality {
    fn from(n: ActressNationality) -> Self {
        match n {
            ActressNationality::American => ActorNationality::American,
            ActressNationality::British => ActorNationality::British,
            ActressNationality::Australian => ActorNationality::Australian,
            ActressNationality::IsraeliAmerican => ActorNationality::IsraeliAmerican,
            ActressNationality::SouthAfrican => ActorNationality::SouthAfrican,
            ActressNationality::French => ActorNationality::French,
            ActressNationality::Indian => ActorNationality::Indian,
            ActressNationality::Israeli => ActorNationality::Israeli,
            ActressNationality::Spanish => ActorNationality::Spanish,
            ActressNationality::SouthKorean => ActorNationality::SouthKorean,
            ActressNationality::Chinese => ActorNationality::Chinese,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actress {
    #[serde(flatten)]
    pub person: Person,
    pub most_famous_movies: [String; 3],
    pub awards: String,
    pub nationality: ActressNationality,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(flatten)]
    pub person: Person,
    pub known_for: [String; 3],
    /// One or two entries.
    pub awards: Vec<String>,
    pub nationality: ActorNationality,
}

impl Actress {
    pub fn id(&self) -> u64 {
        self.person.id
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }
}

impl Actor {
    pub fn id(&self) -> u64 {
        self.person.id
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nationality_labels_match_serde() {
        for n in ActressNationality::ALL {
            let json = serde_json::to_value(n).unwrap();
            assert_eq!(json, serde_json::Value::String(n.as_str().to_string()));
        }
        for n in ActorNationality::ALL {
            let json = serde_json::to_value(n).unwrap();
            assert_eq!(json, serde_json::Value::String(n.as_str().to_string()));
        }
    }

    #[test]
    fn test_actress_nationality_widens_to_actor() {
        for n in ActressNationality::ALL {
            let widened: ActorNationality = n.into();
            assert_eq!(widened.as_str(), n.as_str());
        }
        assert_eq!(ActressNationality::from_label("Scottish"), None);
        assert_eq!(
            ActorNationality::from_label("Scottish"),
            Some(ActorNationality::Scottish)
        );
    }

    #[test]
    fn test_actress_json_shape() {
        let actress = Actress {
            person: Person {
                id: 1,
                name: "Meryl Streep".to_string(),
                birth_year: 1949,
                death_year: None,
                biography: "Bio".to_string(),
                image: "https://example.com/meryl.jpg".to_string(),
            },
            most_famous_movies: [
                "The Devil Wears Prada".to_string(),
                "Sophie's Choice".to_string(),
                "Kramer vs. Kramer".to_string(),
            ],
            awards: "3 Academy Awards".to_string(),
            nationality: ActressNationality::American,
        };

        let json = serde_json::to_value(&actress).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Meryl Streep");
        assert_eq!(json["nationality"], "American");
        assert!(json.get("death_year").is_none());
        assert!(json.get("person").is_none());
    }
}
