use crate::RngState;
use serde::{Deserialize, Serialize};

/// Run-wide scoring adjustment: `floor((base + ranks + add) * mult)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub add: i64,
    #[serde(default = "unit_mult")]
    pub mult: f64,
}

fn unit_mult() -> f64 {
    1.0
}

impl Modifier {
    pub fn new(name: &str, description: &str, add: i64, mult: f64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            add,
            mult,
        }
    }

    /// A modifier that leaves the score untouched.
    pub fn neutral() -> Self {
        Self::new("Neutral", "no change", 0, 1.0)
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.description)
    }
}

pub fn standard_modifiers() -> Vec<Modifier> {
    vec![
        Modifier::new("Lucky Stamp", "+30 score", 30, 1.0),
        Modifier::new("Greedy Coin", "x1.5 score", 0, 1.5),
        Modifier::new("Calm Breath", "+10 score", 10, 1.0),
        Modifier::new("Double Down", "x2 score, -10 base", -10, 2.0),
    ]
}

/// Uniform pick from `catalog`; `None` only for an empty catalog.
pub fn pick_modifier<'a>(catalog: &'a [Modifier], rng: &mut RngState) -> Option<&'a Modifier> {
    if catalog.is_empty() {
        return None;
    }
    catalog.get(rng.index(catalog.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_covers_whole_catalog() {
        let catalog = standard_modifiers();
        let mut rng = RngState::from_seed(7);
        let mut seen = vec![0usize; catalog.len()];
        for _ in 0..400 {
            let picked = pick_modifier(&catalog, &mut rng).unwrap();
            let idx = catalog.iter().position(|m| m == picked).unwrap();
            seen[idx] += 1;
        }
        assert!(seen.iter().all(|&count| count > 0), "{seen:?}");
    }

    #[test]
    fn empty_catalog_picks_nothing() {
        let mut rng = RngState::from_seed(7);
        assert!(pick_modifier(&[], &mut rng).is_none());
    }

    #[test]
    fn label_joins_name_and_description() {
        let catalog = standard_modifiers();
        assert_eq!(catalog[3].label(), "Double Down (x2 score, -10 base)");
    }
}
