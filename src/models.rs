use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{calculator::PizzaPricing, error::AppError};

pub const SUCCESS_MESSAGE: &str = "success!";

/// Body of `POST /api/pizza`
///
/// Fields follow JavaScript truthiness: missing, `null`, `false` and `""`
/// read as not provided. Numeric strings are accepted as numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PizzaRequest {
    pub pizza_size: Option<f64>,
    pub pizza_cost: Option<f64>,
    pub crust_size: Option<f64>,
}

impl PizzaRequest {
    /// Decode a raw request body
    ///
    /// A non-object body (array, number, string) has no fields, so every field
    /// reads as missing. A `null` body cannot be destructured and is malformed.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => Self::from_fields(&fields),
            Value::Null => Err(AppError::MalformedRequest(
                "request body is null".to_string(),
            )),
            _ => Ok(Self::default()),
        }
    }

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, AppError> {
        Ok(Self {
            pizza_size: numeric_field(fields, "pizzaSize")?,
            pizza_cost: numeric_field(fields, "pizzaCost")?,
            crust_size: numeric_field(fields, "crustSize")?,
        })
    }

    /// Size and cost with missing, null and zero all treated as not provided
    pub fn required_fields(&self) -> Option<(f64, f64)> {
        let size = self.pizza_size.filter(|v| *v != 0.0)?;
        let cost = self.pizza_cost.filter(|v| *v != 0.0)?;
        Some((size, cost))
    }
}

fn numeric_field(fields: &Map<String, Value>, name: &'static str) -> Result<Option<f64>, AppError> {
    match fields.get(name) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| AppError::InvalidField(name)),
        Some(_) => Err(AppError::InvalidField(name)),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PizzaResponse {
    pub message: String,
    pub data: PricingData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingData {
    pub price_per_square_inch: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_square_inch_without_crust: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_of_pizza_is_crust: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_for_crust: Option<f64>,
}

impl From<PizzaPricing> for PricingData {
    fn from(pricing: PizzaPricing) -> Self {
        match pricing {
            PizzaPricing::Basic { price_per_area } => Self {
                price_per_square_inch: price_per_area,
                price_per_square_inch_without_crust: None,
                percent_of_pizza_is_crust: None,
                pay_for_crust: None,
            },
            PizzaPricing::WithCrust {
                price_per_area,
                price_per_area_excluding_crust,
                crust_area_fraction,
                crust_cost,
            } => Self {
                price_per_square_inch: price_per_area,
                price_per_square_inch_without_crust: Some(price_per_area_excluding_crust),
                percent_of_pizza_is_crust: Some(crust_area_fraction),
                pay_for_crust: Some(crust_cost),
            },
        }
    }
}

impl From<PizzaPricing> for PizzaResponse {
    fn from(pricing: PizzaPricing) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            data: pricing.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
