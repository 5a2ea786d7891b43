use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The ten indicators collected by the predictor form, in submission order.
///
/// Serialized values are the exact wire keys the predict endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Indicator {
    Poverty,
    Unemployment,
    #[serde(rename = "PM25")]
    Pm25,
    Ozone,
    #[serde(rename = "Diesel_PM")]
    DieselPm,
    #[serde(rename = "Drinking_Water")]
    DrinkingWater,
    Asthma,
    #[serde(rename = "Low_Birth_Weight")]
    LowBirthWeight,
    Traffic,
    #[serde(rename = "Linguistic_Isolation")]
    LinguisticIsolation,
}

impl Indicator {
    /// All indicators in submission order.
    pub const ALL: [Indicator; 10] = [
        Indicator::Poverty,
        Indicator::Unemployment,
        Indicator::Pm25,
        Indicator::Ozone,
        Indicator::DieselPm,
        Indicator::DrinkingWater,
        Indicator::Asthma,
        Indicator::LowBirthWeight,
        Indicator::Traffic,
        Indicator::LinguisticIsolation,
    ];

    /// The wire key used in the request body.
    pub const fn as_str(self) -> &'static str {
        match self {
            Indicator::Poverty => "Poverty",
            Indicator::Unemployment => "Unemployment",
            Indicator::Pm25 => "PM25",
            Indicator::Ozone => "Ozone",
            Indicator::DieselPm => "Diesel_PM",
            Indicator::DrinkingWater => "Drinking_Water",
            Indicator::Asthma => "Asthma",
            Indicator::LowBirthWeight => "Low_Birth_Weight",
            Indicator::Traffic => "Traffic",
            Indicator::LinguisticIsolation => "Linguistic_Isolation",
        }
    }

    /// Human-readable field label, wire key with underscores spaced out.
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full set of indicator values submitted for prediction.
///
/// One field per indicator, so a request body can never miss a key. A fresh
/// record is all zeros and lives for the whole page session.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct InputRecord {
    #[serde(rename = "Poverty")]
    pub poverty: f64,
    #[serde(rename = "Unemployment")]
    pub unemployment: f64,
    #[serde(rename = "PM25")]
    pub pm25: f64,
    #[serde(rename = "Ozone")]
    pub ozone: f64,
    #[serde(rename = "Diesel_PM")]
    pub diesel_pm: f64,
    #[serde(rename = "Drinking_Water")]
    pub drinking_water: f64,
    #[serde(rename = "Asthma")]
    pub asthma: f64,
    #[serde(rename = "Low_Birth_Weight")]
    pub low_birth_weight: f64,
    #[serde(rename = "Traffic")]
    pub traffic: f64,
    #[serde(rename = "Linguistic_Isolation")]
    pub linguistic_isolation: f64,
}

impl InputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::Poverty => self.poverty,
            Indicator::Unemployment => self.unemployment,
            Indicator::Pm25 => self.pm25,
            Indicator::Ozone => self.ozone,
            Indicator::DieselPm => self.diesel_pm,
            Indicator::DrinkingWater => self.drinking_water,
            Indicator::Asthma => self.asthma,
            Indicator::LowBirthWeight => self.low_birth_weight,
            Indicator::Traffic => self.traffic,
            Indicator::LinguisticIsolation => self.linguistic_isolation,
        }
    }

    pub fn set(&mut self, indicator: Indicator, value: f64) {
        match indicator {
            Indicator::Poverty => self.poverty = value,
            Indicator::Unemployment => self.unemployment = value,
            Indicator::Pm25 => self.pm25 = value,
            Indicator::Ozone => self.ozone = value,
            Indicator::DieselPm => self.diesel_pm = value,
            Indicator::DrinkingWater => self.drinking_water = value,
            Indicator::Asthma => self.asthma = value,
            Indicator::LowBirthWeight => self.low_birth_weight = value,
            Indicator::Traffic => self.traffic = value,
            Indicator::LinguisticIsolation => self.linguistic_isolation = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fresh_record_is_all_zero() {
        let record = InputRecord::new();
        for indicator in Indicator::ALL {
            assert_eq!(record.get(indicator), 0.0);
        }
    }

    #[test]
    fn test_set_updates_only_that_field() {
        for target in Indicator::ALL {
            let mut record = InputRecord::new();
            record.set(target, 7.5);
            for indicator in Indicator::ALL {
                let expected = if indicator == target { 7.5 } else { 0.0 };
                assert_eq!(record.get(indicator), expected, "{target} -> {indicator}");
            }
        }
    }

    #[test]
    fn test_wire_body_has_exactly_the_ten_keys() {
        let body = serde_json::to_value(InputRecord::new()).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), Indicator::ALL.len());
        for indicator in Indicator::ALL {
            let value = object
                .get(indicator.as_str())
                .unwrap_or_else(|| panic!("missing key {indicator}"));
            assert_eq!(value.as_f64(), Some(0.0));
        }
    }

    #[test]
    fn test_wire_body_keeps_submission_order() {
        let body = serde_json::to_string(&InputRecord::new()).unwrap();
        let mut last = 0;
        for indicator in Indicator::ALL {
            let key = format!("\"{}\"", indicator.as_str());
            let position = body.find(&key).unwrap_or_else(|| panic!("missing key {indicator}"));
            assert!(position > last, "{indicator} out of order");
            last = position;
        }
    }

    #[test]
    fn test_indicator_wire_key_matches_serde() {
        for indicator in Indicator::ALL {
            let serialized = serde_json::to_value(indicator).unwrap();
            assert_eq!(serialized, json!(indicator.as_str()));
        }
    }

    #[test]
    fn test_labels_space_out_underscores() {
        assert_eq!(Indicator::Poverty.label(), "Poverty");
        assert_eq!(Indicator::Pm25.label(), "PM25");
        assert_eq!(Indicator::DieselPm.label(), "Diesel PM");
        assert_eq!(Indicator::LowBirthWeight.label(), "Low Birth Weight");
        assert_eq!(Indicator::LinguisticIsolation.label(), "Linguistic Isolation");
    }

    #[test]
    fn test_record_roundtrip() {
        let mut record = InputRecord::new();
        record.set(Indicator::Pm25, 12.1);
        record.set(Indicator::Traffic, 800.0);

        let body = serde_json::to_string(&record).unwrap();
        let parsed: InputRecord = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, record);
    }
}
