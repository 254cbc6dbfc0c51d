use serde::{Serialize, Deserialize};

/// The price of a listing.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Clone, Copy)]
pub struct Currencies {
    /// Refined metal. Reclaimed and scrap are expressed as fractions, e.g. `1.33`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metal: Option<f64>,
    /// Mann Co. Supply Crate Keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<f64>,
}

impl Currencies {
    /// A price in keys and refined metal.
    pub fn new(keys: f64, metal: f64) -> Self {
        Self {
            keys: Some(keys),
            metal: Some(metal),
        }
    }

    /// A price in refined metal only.
    pub fn metal(metal: f64) -> Self {
        Self {
            keys: None,
            metal: Some(metal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_missing_currencies() {
        let json = serde_json::to_string(&Currencies::metal(4.77)).unwrap();

        assert_eq!(json, r#"{"metal":4.77}"#);
    }
}
