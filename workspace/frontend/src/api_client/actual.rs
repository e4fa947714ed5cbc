use common::{ActualPoint, FetchResult};
use crate::api_client;

pub const ACTUAL_DATA_PATH: &str = "/actual_data";

pub async fn get_actual_data() -> FetchResult<Vec<ActualPoint>> {
    log::trace!("Fetching actual data");
    let result = api_client::get::<Vec<ActualPoint>>(ACTUAL_DATA_PATH).await;

    match &result {
        Ok(points) => log::info!("Successfully fetched {} actual points", points.len()),
        Err(e) => log::error!("Error fetching actual data: {}", e),
    }

    result
}
