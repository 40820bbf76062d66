//! Currency and physical unit conversions.
//!
//! Currency rates are fixed snapshots, not live quotes; each amount converts
//! through a US dollar base. Physical units convert through a per-quantity
//! base unit in `f64`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Deserialize};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
    Chf,
    Inr,
    Brl,
    Mxn,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Chf => "CHF",
            Currency::Inr => "INR",
            Currency::Brl => "BRL",
            Currency::Mxn => "MXN",
        }
    }

    /// US dollars per one unit of the currency (fixed snapshot).
    fn usd_per_unit(&self) -> Decimal {
        match self {
            Currency::Usd => dec!(1),
            Currency::Eur => dec!(1.09),
            Currency::Gbp => dec!(1.27),
            Currency::Jpy => dec!(0.0067),
            Currency::Cad => dec!(0.74),
            Currency::Aud => dec!(0.66),
            Currency::Chf => dec!(1.13),
            Currency::Inr => dec!(0.012),
            Currency::Brl => dec!(0.18),
            Currency::Mxn => dec!(0.054),
        }
    }
}

/// Converts an amount between two currencies through the USD base.
///
/// # Errors
///
/// Returns an error on a negative amount.
pub fn convert_currency(
    amount: Decimal,
    from: Currency,
    to: Currency,
) -> Result<Decimal, anyhow::Error> {
    if amount < Decimal::ZERO {
        return Err(anyhow::anyhow!("Amount cannot be negative."));
    }
    Ok((amount * from.usd_per_unit() / to.usd_per_unit()).round_dp(2))
}

/// Length units, converted through meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LengthUnit {
    fn meters_per_unit(&self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.344,
        }
    }
}

pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.meters_per_unit() / to.meters_per_unit()
}

/// Weight units, converted through kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Gram,
    Kilogram,
    Ounce,
    Pound,
    Stone,
}

impl WeightUnit {
    fn kilograms_per_unit(&self) -> f64 {
        match self {
            WeightUnit::Gram => 0.001,
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Ounce => 0.028349523125,
            WeightUnit::Pound => 0.45359237,
            WeightUnit::Stone => 6.35029318,
        }
    }
}

pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    value * from.kilograms_per_unit() / to.kilograms_per_unit()
}

/// Temperature scales, converted through Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let celsius = match from {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - 273.15,
    };
    match to {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Kelvin => celsius + 273.15,
    }
}
