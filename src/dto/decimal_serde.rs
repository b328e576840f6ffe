//! Prices and stakes are held as `Decimal` but the API expects JSON numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use std::str::FromStr;

fn to_f64<E: serde::ser::Error>(value: &Decimal) -> Result<f64, E> {
    value
        .to_string()
        .parse::<f64>()
        .map_err(|e| E::custom(format!("decimal {value} is not a valid number: {e}")))
}

pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(to_f64(value)?)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let num = serde_json::Number::deserialize(deserializer)?;
    Decimal::from_str(&num.to_string()).map_err(serde::de::Error::custom)
}

pub mod option {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => serializer.serialize_some(&super::to_f64::<S::Error>(d)?),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt = Option::<serde_json::Number>::deserialize(deserializer)?;
        opt.map(|num| Decimal::from_str(&num.to_string()).map_err(serde::de::Error::custom))
            .transpose()
    }
}
