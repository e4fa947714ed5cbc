use common::{EvaluationMetrics, FetchResult};
use crate::api_client;

pub const MODEL_EVALUATION_PATH: &str = "/model_evaluation";

pub async fn get_model_evaluation() -> FetchResult<EvaluationMetrics> {
    log::trace!("Fetching model evaluation metrics");
    let result = api_client::get::<EvaluationMetrics>(MODEL_EVALUATION_PATH).await;

    match &result {
        Ok(metrics) => log::info!("Model evaluation received (MAPE={})", metrics.mape),
        Err(e) => log::error!("Error fetching model evaluation: {}", e),
    }

    result
}
