//! Categorical tags carried by a [`PurchaseInput`](super::input::PurchaseInput).
//!
//! Parsing never fails: a tag outside the known set becomes `Unrecognized`
//! and resolves to the owning table's `default` entry.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Tag outside the known set, kept verbatim.
            Unrecognized(String),
        }

        impl $name {
            /// Input field the tag belongs to.
            pub const FIELD: &'static str = $field;
            pub const KNOWN: &'static [&'static str] = &[$($tag),+];

            pub fn parse(tag: &str) -> Self {
                match tag {
                    $($tag => Self::$variant,)+
                    other => Self::Unrecognized(other.to_string()),
                }
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::Unrecognized(raw) => raw.as_str(),
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }
        }

        impl From<String> for $name {
            fn from(tag: String) -> Self {
                Self::parse(&tag)
            }
        }

        impl From<&str> for $name {
            fn from(tag: &str) -> Self {
                Self::parse(tag)
            }
        }

        impl From<$name> for String {
            fn from(tag: $name) -> Self {
                tag.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

tag_enum! {
    /// Household income bracket selecting the scenario weight matrix.
    IncomeLevel, "income_level" {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

tag_enum! {
    LifeArea, "life_areas" {
        Career => "career",
        Personal => "personal",
        Health => "health",
    }
}

tag_enum! {
    Necessity, "necessity" {
        Essential => "essential",
        NiceToHave => "nice_to_have",
    }
}

tag_enum! {
    /// How likely the weekly usage estimate is to hold.
    UseProbability, "use_probability" {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

tag_enum! {
    Category, "category" {
        Entertainment => "entertainment",
        Efficiency => "efficiency",
        /// Quality of life.
        Qol => "qol",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_parse_to_variants() {
        assert_eq!(Category::parse("qol"), Category::Qol);
        assert_eq!(Necessity::parse("nice_to_have"), Necessity::NiceToHave);
        assert_eq!(IncomeLevel::parse("high"), IncomeLevel::High);
        assert_eq!(LifeArea::parse("health"), LifeArea::Health);
    }

    #[test]
    fn matching_is_exact() {
        let tag = Category::parse("Efficiency");
        assert_eq!(tag, Category::Unrecognized("Efficiency".to_string()));
        assert!(!tag.is_recognized());
        assert_eq!(tag.as_str(), "Efficiency");
    }

    #[test]
    fn every_known_tag_round_trips_through_as_str() {
        for tag in UseProbability::KNOWN {
            let parsed = UseProbability::parse(tag);
            assert!(parsed.is_recognized());
            assert_eq!(parsed.as_str(), *tag);
        }
    }

    #[test]
    fn tags_deserialize_from_plain_strings() {
        let areas: Vec<LifeArea> =
            serde_json::from_str(r#"["career", "hobby"]"#).expect("tags should parse");
        assert_eq!(
            areas,
            vec![LifeArea::Career, LifeArea::Unrecognized("hobby".to_string())]
        );
    }
}
