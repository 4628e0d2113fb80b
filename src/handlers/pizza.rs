use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::StatusCode,
    Json,
};
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    calculator::{self, PizzaPricing},
    error::AppError,
    metrics,
    models::{PizzaRequest, PizzaResponse},
};

/// Handle `POST /api/pizza`
///
/// The body is decoded here rather than through the `Json` extractor so that
/// every failure, including an oversized body, answers with the JSON error shape.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn handle_pizza(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PizzaResponse>, AppError> {
    let body = body.map_err(body_error)?;

    let started = Instant::now();
    let result = price_request(&body);
    metrics::record_duration(started.elapsed());

    match result {
        Ok(pricing) => {
            metrics::record_calculation("success", pricing.has_crust());
            info!(
                price_per_area = pricing.price_per_area(),
                crust = pricing.has_crust(),
                "Pizza priced"
            );
            Ok(Json(pricing.into()))
        }
        Err(err) => {
            metrics::record_calculation("rejected", false);
            debug!(error = %err, "Pizza pricing rejected");
            Err(err)
        }
    }
}

fn body_error(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::MalformedRequest(rejection.body_text())
    }
}

/// Decode a request body and run the calculator on it
pub fn price_request(body: &[u8]) -> Result<PizzaPricing, AppError> {
    let request = PizzaRequest::from_body(body)?;

    let (size, cost) = request
        .required_fields()
        .ok_or(AppError::MissingRequiredField)?;

    Ok(calculator::compute(size, cost, request.crust_size)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::PricingError;

    #[test]
    fn test_price_request_basic() {
        let pricing = price_request(br#"{"pizzaSize": 12, "pizzaCost": 15.99}"#).unwrap();
        assert!(!pricing.has_crust());
        assert!((pricing.price_per_area() - 0.1414).abs() < 1e-4);
    }

    #[test]
    fn test_price_request_with_crust() {
        let pricing =
            price_request(br#"{"pizzaSize": 12, "pizzaCost": 15.99, "crustSize": 2}"#).unwrap();
        assert!(pricing.has_crust());
    }

    #[test]
    fn test_null_crust_is_no_crust() {
        let pricing =
            price_request(br#"{"pizzaSize": 12, "pizzaCost": 15.99, "crustSize": null}"#).unwrap();
        assert!(!pricing.has_crust());
    }

    #[test]
    fn test_missing_cost_is_rejected() {
        for body in [
            r#"{"pizzaSize": 12}"#,
            r#"{"pizzaSize": 12, "pizzaCost": 0}"#,
            r#"{"pizzaSize": 0, "pizzaCost": 10, "crustSize": 1}"#,
            r#"{}"#,
            r#"{"pizzaSize": "", "pizzaCost": 10}"#,
            r#"{"pizzaSize": 12, "pizzaCost": false}"#,
            r#"[12, 15.99]"#,
        ] {
            let err = price_request(body.as_bytes()).unwrap_err();
            assert!(matches!(err, AppError::MissingRequiredField), "body: {}", body);
        }
    }

    #[test]
    fn test_invalid_geometry_is_rejected() {
        let err = price_request(br#"{"pizzaSize": 12, "pizzaCost": 10, "crustSize": 8}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidInput(PricingError::CrustTooLarge { .. })
        ));

        let err = price_request(br#"{"pizzaSize": -12, "pizzaCost": 10}"#).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidInput(PricingError::InvalidDiameter(_))
        ));
    }

    #[test]
    fn test_malformed_body() {
        for body in ["{", "null", ""] {
            let err = price_request(body.as_bytes()).unwrap_err();
            assert!(matches!(err, AppError::MalformedRequest(_)), "body: {}", body);
        }

        let err = price_request(br#"{"pizzaSize": "twelve", "pizzaCost": 10}"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidField("pizzaSize")));
    }

    #[test]
    fn test_unpriceable_size_is_rejected() {
        let err = price_request(br#"{"pizzaSize": 1e-200, "pizzaCost": 10}"#).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidInput(PricingError::NonFiniteResult { .. })
        ));
    }

    #[tokio::test]
    async fn test_handle_pizza_success() {
        let Json(response) = handle_pizza(Ok(Bytes::from_static(
            br#"{"pizzaSize": 12, "pizzaCost": 15.99, "crustSize": 2}"#,
        )))
        .await
        .unwrap();

        assert_eq!(response.message, "success!");
        let payment = response.data.pay_for_crust.unwrap();
        assert!((payment - 4.886).abs() < 1e-3);
    }
}
