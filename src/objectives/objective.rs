//! Objective values and their string form.
//!
//! The UI shows objectives as `<Kind>[ <integer>]`, e.g. `Divisible by 3` or
//! `Prime number`. `Display` and `FromStr` implement exactly that grammar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ObjectiveParseError;

/// The nine objective kinds, without parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectiveKind {
    EqualTo,
    GreaterThan,
    LessThan,
    DivisibleBy,
    PowerOf,
    FactorOf,
    Prime,
    Odd,
    Even,
}

impl ObjectiveKind {
    pub const ALL: [ObjectiveKind; 9] = [
        ObjectiveKind::EqualTo,
        ObjectiveKind::GreaterThan,
        ObjectiveKind::LessThan,
        ObjectiveKind::DivisibleBy,
        ObjectiveKind::PowerOf,
        ObjectiveKind::FactorOf,
        ObjectiveKind::Prime,
        ObjectiveKind::Odd,
        ObjectiveKind::Even,
    ];

    /// Label used in the objective string.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ObjectiveKind::EqualTo => "Equal to",
            ObjectiveKind::GreaterThan => "Greater than",
            ObjectiveKind::LessThan => "Less than",
            ObjectiveKind::DivisibleBy => "Divisible by",
            ObjectiveKind::PowerOf => "Power of",
            ObjectiveKind::FactorOf => "Factor of",
            ObjectiveKind::Prime => "Prime number",
            ObjectiveKind::Odd => "Odd number",
            ObjectiveKind::Even => "Even number",
        }
    }

    /// Does this kind carry an integer parameter?
    #[must_use]
    pub const fn has_parameter(self) -> bool {
        !matches!(
            self,
            ObjectiveKind::Prime | ObjectiveKind::Odd | ObjectiveKind::Even
        )
    }

    /// Attach a parameter. Parameterless kinds ignore it.
    #[must_use]
    pub fn with_parameter(self, n: i64) -> Objective {
        match self {
            ObjectiveKind::EqualTo => Objective::EqualTo(n),
            ObjectiveKind::GreaterThan => Objective::GreaterThan(n),
            ObjectiveKind::LessThan => Objective::LessThan(n),
            ObjectiveKind::DivisibleBy => Objective::DivisibleBy(n),
            ObjectiveKind::PowerOf => Objective::PowerOf(n),
            ObjectiveKind::FactorOf => Objective::FactorOf(n),
            ObjectiveKind::Prime => Objective::Prime,
            ObjectiveKind::Odd => Objective::Odd,
            ObjectiveKind::Even => Objective::Even,
        }
    }
}

impl fmt::Display for ObjectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A win condition over a numeric result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Objective {
    EqualTo(i64),
    GreaterThan(i64),
    LessThan(i64),
    DivisibleBy(i64),
    /// Result is `N^k` for some `k >= 0`.
    PowerOf(i64),
    /// Result divides `N`.
    FactorOf(i64),
    Prime,
    Odd,
    Even,
}

impl Objective {
    #[must_use]
    pub const fn kind(&self) -> ObjectiveKind {
        match self {
            Objective::EqualTo(_) => ObjectiveKind::EqualTo,
            Objective::GreaterThan(_) => ObjectiveKind::GreaterThan,
            Objective::LessThan(_) => ObjectiveKind::LessThan,
            Objective::DivisibleBy(_) => ObjectiveKind::DivisibleBy,
            Objective::PowerOf(_) => ObjectiveKind::PowerOf,
            Objective::FactorOf(_) => ObjectiveKind::FactorOf,
            Objective::Prime => ObjectiveKind::Prime,
            Objective::Odd => ObjectiveKind::Odd,
            Objective::Even => ObjectiveKind::Even,
        }
    }

    #[must_use]
    pub const fn parameter(&self) -> Option<i64> {
        match *self {
            Objective::EqualTo(n)
            | Objective::GreaterThan(n)
            | Objective::LessThan(n)
            | Objective::DivisibleBy(n)
            | Objective::PowerOf(n)
            | Objective::FactorOf(n) => Some(n),
            Objective::Prime | Objective::Odd | Objective::Even => None,
        }
    }

    /// Does `value` satisfy this objective?
    #[must_use]
    pub fn is_satisfied_by(&self, value: f64) -> bool {
        super::checker::check(value, self)
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parameter() {
            Some(n) => write!(f, "{} {}", self.kind().label(), n),
            None => f.write_str(self.kind().label()),
        }
    }
}

impl FromStr for Objective {
    type Err = ObjectiveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        for kind in ObjectiveKind::ALL {
            let label = kind.label();
            let Some(head) = trimmed.get(..label.len()) else {
                continue;
            };
            if !head.eq_ignore_ascii_case(label) {
                continue;
            }
            let rest = &trimmed[label.len()..];
            if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
                continue;
            }
            let rest = rest.trim();

            return match (kind.has_parameter(), rest.is_empty()) {
                (true, true) => Err(ObjectiveParseError::MissingParameter(label)),
                (true, false) => rest
                    .parse::<i64>()
                    .map(|n| kind.with_parameter(n))
                    .map_err(|_| ObjectiveParseError::InvalidParameter(rest.to_string())),
                (false, true) => Ok(kind.with_parameter(0)),
                (false, false) => Err(ObjectiveParseError::UnexpectedParameter(label)),
            };
        }

        Err(ObjectiveParseError::UnknownKind(trimmed.to_string()))
    }
}

impl TryFrom<String> for Objective {
    type Error = ObjectiveParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Objective> for String {
    fn from(objective: Objective) -> Self {
        objective.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Objective::EqualTo(12).to_string(), "Equal to 12");
        assert_eq!(Objective::GreaterThan(-3).to_string(), "Greater than -3");
        assert_eq!(Objective::Prime.to_string(), "Prime number");
        assert_eq!(Objective::Even.to_string(), "Even number");
    }

    #[test]
    fn test_parse_every_kind() {
        for kind in ObjectiveKind::ALL {
            let objective = kind.with_parameter(7);
            let parsed: Objective = objective.to_string().parse().unwrap();
            assert_eq!(parsed, objective);
            assert_eq!(parsed.kind(), kind);
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_spacing() {
        assert_eq!("  divisible BY   4 ".parse(), Ok(Objective::DivisibleBy(4)));
        assert_eq!("odd number".parse(), Ok(Objective::Odd));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "Square of 4".parse::<Objective>(),
            Err(ObjectiveParseError::UnknownKind("Square of 4".into()))
        );
        assert_eq!(
            "Equal to".parse::<Objective>(),
            Err(ObjectiveParseError::MissingParameter("Equal to"))
        );
        assert_eq!(
            "Prime number 5".parse::<Objective>(),
            Err(ObjectiveParseError::UnexpectedParameter("Prime number"))
        );
        assert_eq!(
            "Power of two".parse::<Objective>(),
            Err(ObjectiveParseError::InvalidParameter("two".into()))
        );
        assert!(matches!(
            "Equal to5".parse::<Objective>(),
            Err(ObjectiveParseError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_serde_uses_display_form() {
        let json = serde_json::to_string(&Objective::FactorOf(12)).unwrap();
        assert_eq!(json, "\"Factor of 12\"");
        let back: Objective = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Objective::FactorOf(12));
    }
}
