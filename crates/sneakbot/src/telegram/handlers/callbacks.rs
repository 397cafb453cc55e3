//! Callback query acknowledgment

use super::types::CallbackRequest;
use crate::telegram::api::ChatApi;

/// Answers a callback query exactly once, whatever data it carries.
///
/// A failed acknowledgment is logged and dropped; the client shows its own
/// error icon and there is nothing useful to retry.
pub async fn handle_button_callback<A>(api: &A, request: CallbackRequest)
where
    A: ChatApi + ?Sized,
{
    log::debug!(
        "Callback query {} from user {} (data: {:?})",
        request.query_id.0,
        request.user_id,
        request.data
    );

    match api.answer_callback(request.query_id.clone()).await {
        Ok(()) => log::info!("Acknowledged callback query for user {}", request.user_id),
        Err(e) => log::error!(
            "Failed to acknowledge callback query {} from user {}: {:?}",
            request.query_id.0,
            request.user_id,
            e
        ),
    }
}
