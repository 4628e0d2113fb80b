//! Pizza pricing calculator
//!
//! Computes the price per square inch of a round pizza and, when a crust size
//! is given, how much of the pizza (and of the bill) goes to the crust.
//!
//! The crust size is applied as a reduction of the diameter:
//! the filling circle has radius `(diameter - crust) / 2`.

use std::f64::consts::PI;
use thiserror::Error;

/// Reasons a calculation is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("Pizza size must be a positive number, got {0}")]
    InvalidDiameter(f64),

    #[error("Pizza cost must be a non-negative number, got {0}")]
    InvalidCost(f64),

    #[error("Crust size must be a non-negative number, got {0}")]
    InvalidCrust(f64),

    #[error("Crust size {crust} must be less than half the pizza size ({diameter})")]
    CrustTooLarge { crust: f64, diameter: f64 },

    #[error("Pizza size {diameter} and cost {cost} are outside the range that can be priced")]
    NonFiniteResult { diameter: f64, cost: f64 },
}

impl PricingError {
    /// Stable label used for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDiameter(_) => "invalid_diameter",
            Self::InvalidCost(_) => "invalid_cost",
            Self::InvalidCrust(_) => "invalid_crust",
            Self::CrustTooLarge { .. } => "crust_too_large",
            Self::NonFiniteResult { .. } => "non_finite_result",
        }
    }
}

/// Calculator input. Lengths are in inches, cost in a single currency unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PizzaInput {
    pub diameter: f64,
    pub cost: f64,
    pub crust_thickness: Option<f64>,
}

/// Pricing breakdown, with the crust figures only when a crust size was given
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PizzaPricing {
    Basic {
        price_per_area: f64,
    },
    WithCrust {
        price_per_area: f64,
        price_per_area_excluding_crust: f64,
        crust_area_fraction: f64,
        crust_cost: f64,
    },
}

impl PizzaPricing {
    pub fn price_per_area(&self) -> f64 {
        match self {
            Self::Basic { price_per_area } | Self::WithCrust { price_per_area, .. } => {
                *price_per_area
            }
        }
    }

    pub fn has_crust(&self) -> bool {
        matches!(self, Self::WithCrust { .. })
    }

    /// Part of `cost` paid for the filling. Equals `cost` without crust analysis.
    pub fn filling_cost(&self, cost: f64) -> f64 {
        match self {
            Self::Basic { .. } => cost,
            Self::WithCrust {
                crust_area_fraction,
                ..
            } => cost * (1.0 - crust_area_fraction),
        }
    }
}

impl PizzaInput {
    pub fn new(diameter: f64, cost: f64, crust_thickness: Option<f64>) -> Self {
        Self {
            diameter,
            cost,
            crust_thickness,
        }
    }

    /// Check the input without computing anything
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.diameter.is_finite() || self.diameter <= 0.0 {
            return Err(PricingError::InvalidDiameter(self.diameter));
        }
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(PricingError::InvalidCost(self.cost));
        }
        if let Some(crust) = self.crust_thickness {
            if !crust.is_finite() || crust < 0.0 {
                return Err(PricingError::InvalidCrust(crust));
            }
            if crust >= self.diameter / 2.0 {
                return Err(PricingError::CrustTooLarge {
                    crust,
                    diameter: self.diameter,
                });
            }
        }
        Ok(())
    }

    pub fn compute(&self) -> Result<PizzaPricing, PricingError> {
        self.validate()?;

        // Extreme sizes underflow to 0 or overflow to inf
        let area = self.priced_area(circle_area(self.diameter / 2.0))?;
        let price_per_area = self.finite(self.cost / area)?;

        let Some(crust) = self.crust_thickness else {
            return Ok(PizzaPricing::Basic { price_per_area });
        };

        let inner_area = self.priced_area(circle_area((self.diameter - crust) / 2.0))?;
        let crust_area_fraction = self.finite(1.0 - inner_area / area)?;

        Ok(PizzaPricing::WithCrust {
            price_per_area,
            price_per_area_excluding_crust: self.finite(self.cost / inner_area)?,
            crust_area_fraction,
            crust_cost: self.finite(self.cost * crust_area_fraction)?,
        })
    }

    fn priced_area(&self, area: f64) -> Result<f64, PricingError> {
        if area > 0.0 {
            self.finite(area)
        } else {
            Err(self.out_of_range())
        }
    }

    fn finite(&self, value: f64) -> Result<f64, PricingError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.out_of_range())
        }
    }

    fn out_of_range(&self) -> PricingError {
        PricingError::NonFiniteResult {
            diameter: self.diameter,
            cost: self.cost,
        }
    }
}

/// Price a pizza of `diameter` inches costing `cost`
pub fn compute(
    diameter: f64,
    cost: f64,
    crust_thickness: Option<f64>,
) -> Result<PizzaPricing, PricingError> {
    PizzaInput::new(diameter, cost, crust_thickness).compute()
}

fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}
