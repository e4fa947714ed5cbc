use common::{FetchResult, ForecastPoint};
use crate::api_client;

pub const FORECAST_DATA_PATH: &str = "/forecast_data";

pub async fn get_forecast_data() -> FetchResult<Vec<ForecastPoint>> {
    log::trace!("Fetching forecast data");
    let result = api_client::get::<Vec<ForecastPoint>>(FORECAST_DATA_PATH).await;

    match &result {
        Ok(points) => log::info!("Successfully fetched {} forecast points", points.len()),
        Err(e) => log::error!("Error fetching forecast data: {}", e),
    }

    result
}
