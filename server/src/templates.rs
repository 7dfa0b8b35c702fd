//! Askama templates for the receipt UI

use askama::Template;
use receipt_core::TransactionSummary;

// ============================================================================
// Payment Success
// ============================================================================

#[derive(Template)]
#[template(path = "pages/payment_success.html")]
pub struct PaymentSuccessTemplate {
    pub transaction_id: String,
    pub display_date: String,
    pub continue_action: &'static str,
    pub browse_action: &'static str,
}

impl PaymentSuccessTemplate {
    pub fn new(summary: &TransactionSummary) -> Self {
        Self {
            transaction_id: summary.transaction_id_display().to_string(),
            display_date: summary.display_date.clone(),
            continue_action: crate::routes::ui::payment::CONTINUE_PATH,
            browse_action: crate::routes::ui::payment::BROWSE_PATH,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub home_url: String,
}
