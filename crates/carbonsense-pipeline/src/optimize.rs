//! `/optimize` request mapping.

use carbonsense_core::models::Domain;
use carbonsense_optimizer::ForecastRequest;

use crate::validation::ValidatedRequest;

/// Forecast parameters for a validated request. A missing quantity is left
/// for the optimizer to default.
pub fn forecast_request(request: &ValidatedRequest) -> ForecastRequest {
    let forecast = match request.domain {
        Domain::Energy => ForecastRequest::energy(&request.location, request.quantity),
        Domain::Transport => {
            ForecastRequest::transport(&request.location, request.quantity, request.vehicle)
        }
    };

    match request.route {
        Some((start, end)) if request.domain == Domain::Transport => forecast.with_route(start, end),
        _ => forecast,
    }
}
