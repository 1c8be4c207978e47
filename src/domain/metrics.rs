/// Pure derived metrics: BMI, BMI classification, remaining-to-goal
///
/// Stateless functions consumed by several ledgers and by the profile view.
/// None of these persist anything.

/// Body mass index from weight in kilograms and height in centimetres
///
/// Returns 0.0 when height is not positive; display code must always have a
/// number to show, so an undefined BMI is a defined fallback rather than an
/// error.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Amount left to reach a daily goal, clamped at zero
pub fn remaining(goal: f64, consumed: f64) -> f64 {
    (goal - consumed).max(0.0)
}

/// WHO-style BMI classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiClass {
    SevereUnderweight,
    Underweight,
    Normal,
    Overweight,
    Obese1,
    Obese2,
    Obese3,
}

/// Upper bounds (exclusive) per class; anything above the last bound is
/// Obese3. Static lookup table, not re-derived per call site.
const BMI_BANDS: [(f64, BmiClass); 6] = [
    (16.5, BmiClass::SevereUnderweight),
    (18.5, BmiClass::Underweight),
    (25.0, BmiClass::Normal),
    (30.0, BmiClass::Overweight),
    (35.0, BmiClass::Obese1),
    (40.0, BmiClass::Obese2),
];

impl BmiClass {
    /// Classify a BMI value into its band
    pub fn classify(bmi: f64) -> BmiClass {
        for (bound, class) in BMI_BANDS {
            if bmi < bound {
                return class;
            }
        }
        BmiClass::Obese3
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            BmiClass::SevereUnderweight => "Severe underweight",
            BmiClass::Underweight => "Underweight",
            BmiClass::Normal => "Normal weight",
            BmiClass::Overweight => "Overweight",
            BmiClass::Obese1 => "Obesity class I",
            BmiClass::Obese2 => "Obesity class II",
            BmiClass::Obese3 => "Obesity class III",
        }
    }

    /// Display color associated with the band (hex RGB)
    pub fn color(&self) -> &'static str {
        match self {
            BmiClass::SevereUnderweight | BmiClass::Underweight => "#4169E1",
            BmiClass::Normal => "#2E8B57",
            BmiClass::Overweight => "#DAA520",
            BmiClass::Obese1 | BmiClass::Obese2 | BmiClass::Obese3 => "#CD3333",
        }
    }
}
