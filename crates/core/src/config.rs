use crate::{standard_modifiers, HandKind, Modifier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandRule {
    pub kind: HandKind,
    pub base: i64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("modifier catalog is empty")]
    NoModifiers,
    #[error("modifier {name:?} has invalid multiplier {mult}")]
    InvalidMultiplier { name: String, mult: f64 },
    #[error("hand rule for {0:?} listed more than once")]
    DuplicateHandRule(HandKind),
    #[error("missing hand rule for {0:?}")]
    MissingHandRule(HandKind),
    #[error("{0:?} does not take a hand rule")]
    UnexpectedHandRule(HandKind),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    #[serde(default = "standard_hand_rules")]
    pub hands: Vec<HandRule>,
    #[serde(default = "standard_modifiers")]
    pub modifiers: Vec<Modifier>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameConfig {
    pub fn standard() -> Self {
        Self {
            hands: standard_hand_rules(),
            modifiers: standard_modifiers(),
        }
    }

    pub fn hand_rule(&self, kind: HandKind) -> Option<&HandRule> {
        self.hands.iter().find(|rule| rule.kind == kind)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.modifiers.is_empty() {
            return Err(ConfigError::NoModifiers);
        }
        for modifier in &self.modifiers {
            if !modifier.mult.is_finite() || modifier.mult < 0.0 {
                return Err(ConfigError::InvalidMultiplier {
                    name: modifier.name.clone(),
                    mult: modifier.mult,
                });
            }
        }
        let mut seen = HashSet::new();
        for rule in &self.hands {
            if rule.kind == HandKind::NoHand {
                return Err(ConfigError::UnexpectedHandRule(rule.kind));
            }
            if !seen.insert(rule.kind) {
                return Err(ConfigError::DuplicateHandRule(rule.kind));
            }
        }
        if let Some(kind) = HandKind::SCORING.into_iter().find(|k| !seen.contains(k)) {
            return Err(ConfigError::MissingHandRule(kind));
        }
        Ok(())
    }
}

pub fn standard_hand_rules() -> Vec<HandRule> {
    HandKind::SCORING
        .into_iter()
        .map(|kind| HandRule {
            kind,
            base: crate::scoring::default_hand_base(kind),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config_is_valid() {
        let config = GameConfig::standard();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.hand_rule(HandKind::Rocket).map(|r| r.base), Some(200));
        assert_eq!(config.modifiers.len(), 4);
    }

    #[test]
    fn rejects_broken_catalogs() {
        let mut config = GameConfig::standard();
        config.modifiers.clear();
        assert_eq!(config.validate(), Err(ConfigError::NoModifiers));

        let mut config = GameConfig::standard();
        config.modifiers[1].mult = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMultiplier { .. })
        ));

        let mut config = GameConfig::standard();
        config.hands.retain(|rule| rule.kind != HandKind::Pair);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingHandRule(HandKind::Pair))
        );

        let mut config = GameConfig::standard();
        config.hands.push(HandRule {
            kind: HandKind::Bomb,
            base: 1,
        });
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateHandRule(HandKind::Bomb))
        );

        let mut config = GameConfig::standard();
        config.hands.push(HandRule {
            kind: HandKind::NoHand,
            base: 5,
        });
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnexpectedHandRule(HandKind::NoHand))
        );
    }
}
