use common::{FetchResult, SummaryData};
use crate::api_client;

pub const SUMMARY_DATA_PATH: &str = "/summary_data";

pub async fn get_summary_data() -> FetchResult<SummaryData> {
    log::trace!("Fetching forecast summary");
    let result = api_client::get::<SummaryData>(SUMMARY_DATA_PATH).await;

    if let Err(ref e) = result {
        log::error!("Error fetching summary data: {}", e);
    }

    result
}
