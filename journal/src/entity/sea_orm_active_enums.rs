//! String-backed enums stored on the `trades` table.
//!
//! The database holds the literal label of each variant (`"Win"`, `"No Plan"`),
//! never an ordinal, so reordering variants does not change stored data.

use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use sea_orm::Iterable;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TradeOutcome {
    #[sea_orm(string_value = "Win")]
    Win,
    #[sea_orm(string_value = "Loss")]
    Loss,
    #[sea_orm(string_value = "Breakeven")]
    Breakeven,
}

/// How the trader felt while the position was open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum EmotionalState {
    #[sea_orm(string_value = "Calm")]
    Calm,
    #[sea_orm(string_value = "Excited")]
    Excited,
    #[sea_orm(string_value = "Fearful")]
    Fearful,
    #[sea_orm(string_value = "Greedy")]
    Greedy,
    #[sea_orm(string_value = "Anxious")]
    Anxious,
    #[sea_orm(string_value = "Confident")]
    Confident,
    #[sea_orm(string_value = "Frustrated")]
    Frustrated,
    #[sea_orm(string_value = "Neutral")]
    Neutral,
    #[sea_orm(string_value = "Other")]
    Other,
}

/// How closely a trade followed the trader's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PlanAdherence {
    #[sea_orm(string_value = "Followed")]
    Followed,
    #[sea_orm(string_value = "Partial")]
    Partial,
    #[sea_orm(string_value = "Deviated")]
    Deviated,
    #[sea_orm(string_value = "No Plan")]
    #[serde(rename = "No Plan")]
    NoPlan,
}

/// `Display` prints the stored label and `FromStr` accepts exactly that label.
macro_rules! impl_label {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_value())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::iter()
                    .find(|variant| variant.to_value() == s)
                    .ok_or_else(|| Error::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_label!(TradeOutcome, "trade outcome");
impl_label!(EmotionalState, "emotional state");
impl_label!(PlanAdherence, "plan adherence");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        let labels: Vec<String> = TradeOutcome::iter().map(|o| o.to_string()).collect();
        assert_eq!(labels, vec!["Win", "Loss", "Breakeven"]);
    }

    #[test]
    fn test_emotional_state_labels() {
        let labels: Vec<String> = EmotionalState::iter().map(|s| s.to_value()).collect();
        assert_eq!(
            labels,
            vec![
                "Calm",
                "Excited",
                "Fearful",
                "Greedy",
                "Anxious",
                "Confident",
                "Frustrated",
                "Neutral",
                "Other"
            ]
        );
    }

    #[test]
    fn test_plan_adherence_uses_spaced_label() {
        assert_eq!(PlanAdherence::NoPlan.to_value(), "No Plan");
        assert_eq!("No Plan".parse::<PlanAdherence>().unwrap(), PlanAdherence::NoPlan);
        assert!("NoPlan".parse::<PlanAdherence>().is_err());
    }

    #[test]
    fn test_every_label_parses_back() {
        for outcome in TradeOutcome::iter() {
            assert_eq!(outcome.to_string().parse::<TradeOutcome>().unwrap(), outcome);
        }
        for state in EmotionalState::iter() {
            assert_eq!(state.to_string().parse::<EmotionalState>().unwrap(), state);
        }
        for adherence in PlanAdherence::iter() {
            assert_eq!(adherence.to_string().parse::<PlanAdherence>().unwrap(), adherence);
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = "win".parse::<TradeOutcome>().unwrap_err();
        assert_eq!(err.to_string(), "unknown trade outcome: \"win\"");

        assert!("Bored".parse::<EmotionalState>().is_err());
        assert!("".parse::<PlanAdherence>().is_err());
    }

    #[test]
    fn test_try_from_value_rejects_foreign_string() {
        assert!(TradeOutcome::try_from_value(&"Lose".to_string()).is_err());
        assert_eq!(
            EmotionalState::try_from_value(&"Greedy".to_string()).unwrap(),
            EmotionalState::Greedy
        );
    }

    #[test]
    fn test_serde_matches_stored_label() {
        assert_eq!(serde_json::to_string(&PlanAdherence::NoPlan).unwrap(), "\"No Plan\"");
        assert_eq!(serde_json::to_string(&TradeOutcome::Breakeven).unwrap(), "\"Breakeven\"");
        let state: EmotionalState = serde_json::from_str("\"Confident\"").unwrap();
        assert_eq!(state, EmotionalState::Confident);
    }
}
