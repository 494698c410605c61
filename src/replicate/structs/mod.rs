pub mod replicate_error_response;
pub mod replicate_model_response;
pub mod replicate_predictions_response;
