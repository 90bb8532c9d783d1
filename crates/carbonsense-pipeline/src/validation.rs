//! Request validation. Failures are client-visible (HTTP 400).

use carbonsense_core::errors::ValidationError;
use carbonsense_core::models::Domain;
use carbonsense_core::traits::Coordinates;
use carbonsense_core::VehicleType;

use crate::request::PredictRequest;

/// A request whose fields are all within range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub domain: Domain,
    /// `distance_km` for transport, `kwh` for energy.
    pub quantity: Option<f64>,
    pub hour: u32,
    pub day_of_week: u32,
    pub is_weekend: bool,
    pub location: String,
    pub vehicle: VehicleType,
    pub route: Option<(Coordinates, Coordinates)>,
}

/// Name of the domain's quantity field.
pub fn quantity_field(domain: Domain) -> &'static str {
    match domain {
        Domain::Transport => "distance_km",
        Domain::Energy => "kwh",
    }
}

/// Validate a `/predict` body. The domain's quantity is required.
pub fn validate_predict(request: &PredictRequest) -> Result<ValidatedRequest, ValidationError> {
    let validated = validate_common(request)?;
    if validated.quantity.is_none() {
        return Err(ValidationError::missing(quantity_field(request.domain)));
    }
    Ok(validated)
}

/// Validate an `/optimize` body. The quantity is optional and defaults later.
pub fn validate_optimize(request: &PredictRequest) -> Result<ValidatedRequest, ValidationError> {
    validate_common(request)
}

fn validate_common(request: &PredictRequest) -> Result<ValidatedRequest, ValidationError> {
    let raw_quantity = match request.domain {
        Domain::Transport => request.distance_km,
        Domain::Energy => request.kwh,
    };
    let quantity = raw_quantity
        .map(|v| non_negative(quantity_field(request.domain), v))
        .transpose()?;

    Ok(ValidatedRequest {
        domain: request.domain,
        quantity,
        hour: in_range("hour", request.hour, 0, 23)?,
        day_of_week: in_range("day_of_week", request.day_of_week, 0, 6)?,
        is_weekend: in_range("is_weekend", request.is_weekend, 0, 1)? == 1,
        location: request.location.trim().to_string(),
        vehicle: VehicleType::from_name_or_default(request.vehicle_type.as_deref()),
        route: route(request)?,
    })
}

fn non_negative(field: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        })
    }
}

fn in_range(field: &str, value: i64, min: i64, max: i64) -> Result<u32, ValidationError> {
    if (min..=max).contains(&value) {
        // Bounds are within u32.
        Ok(value as u32)
    } else {
        Err(out_of_range(field, value as f64, min as f64, max as f64))
    }
}

fn out_of_range(field: &str, value: f64, min: f64, max: f64) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        value,
        min,
        max,
    }
}

fn coordinate(field: &str, value: f64, limit: f64) -> Result<f64, ValidationError> {
    if (-limit..=limit).contains(&value) {
        Ok(value)
    } else {
        Err(out_of_range(field, value, -limit, limit))
    }
}

fn route(request: &PredictRequest) -> Result<Option<(Coordinates, Coordinates)>, ValidationError> {
    match (
        request.start_lat,
        request.start_lon,
        request.end_lat,
        request.end_lon,
    ) {
        (None, None, None, None) => Ok(None),
        (Some(start_lat), Some(start_lon), Some(end_lat), Some(end_lon)) => {
            let start = Coordinates::new(
                coordinate("start_lat", start_lat, 90.0)?,
                coordinate("start_lon", start_lon, 180.0)?,
            );
            let end = Coordinates::new(
                coordinate("end_lat", end_lat, 90.0)?,
                coordinate("end_lon", end_lon, 180.0)?,
            );
            Ok(Some((start, end)))
        }
        _ => Err(ValidationError::IncompleteCoordinates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_quantity_names_the_field() {
        let mut request = PredictRequest::energy(1.0, "UK");
        request.kwh = None;
        assert_eq!(
            validate_predict(&request).unwrap_err().to_string(),
            "kwh required"
        );
        assert!(validate_optimize(&request).is_ok());
    }

    #[test]
    fn nan_is_rejected() {
        let request = PredictRequest::transport(f64::NAN, "UK");
        assert!(matches!(
            validate_predict(&request),
            Err(ValidationError::Negative { .. })
        ));
    }
}
