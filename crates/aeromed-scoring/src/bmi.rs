//! Body-mass index and WHO weight class.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::scoring::round2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BmiClass {
    #[serde(rename = "Insufficient data")]
    InsufficientData,
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obesity Grade I")]
    ObesityGradeI,
    #[serde(rename = "Obesity Grade II")]
    ObesityGradeII,
    #[serde(rename = "Obesity Grade III")]
    ObesityGradeIII,
}

impl BmiClass {
    /// Classify an already-rounded BMI. Lower bounds are inclusive.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiClass::Underweight
        } else if bmi < 25.0 {
            BmiClass::NormalWeight
        } else if bmi < 30.0 {
            BmiClass::Overweight
        } else if bmi < 35.0 {
            BmiClass::ObesityGradeI
        } else if bmi < 40.0 {
            BmiClass::ObesityGradeII
        } else {
            BmiClass::ObesityGradeIII
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiClass::InsufficientData => "Insufficient data",
            BmiClass::Underweight => "Underweight",
            BmiClass::NormalWeight => "Normal weight",
            BmiClass::Overweight => "Overweight",
            BmiClass::ObesityGradeI => "Obesity Grade I",
            BmiClass::ObesityGradeII => "Obesity Grade II",
            BmiClass::ObesityGradeIII => "Obesity Grade III",
        }
    }
}

impl fmt::Display for BmiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BmiResult {
    pub bmi: Option<f64>,
    pub classification: BmiClass,
}

impl BmiResult {
    pub const INSUFFICIENT: BmiResult = BmiResult {
        bmi: None,
        classification: BmiClass::InsufficientData,
    };
}

/// Compute BMI rounded to two decimals, classifying the rounded value.
///
/// Returns [`BmiResult::INSUFFICIENT`] when either measurement is missing or
/// not positive. A zero weight counts as missing, like an unset form field.
pub fn compute_bmi(weight_kg: Option<f64>, height_m: Option<f64>) -> BmiResult {
    let (Some(weight), Some(height)) = (weight_kg, height_m) else {
        return BmiResult::INSUFFICIENT;
    };
    if height <= 0.0 || weight <= 0.0 {
        return BmiResult::INSUFFICIENT;
    }

    let bmi = round2(weight / (height * height));
    BmiResult {
        bmi: Some(bmi),
        classification: BmiClass::from_bmi(bmi),
    }
}
