//! Email summary delivery
//!
//! Composes an HTML summary of the current month's spending, attaches the
//! breakdown chart, and submits it over authenticated STARTTLS. This is
//! the only operation in the core with a network dependency: it blocks
//! until the transport finishes or fails, with no retry and no internal
//! timeout. Callers needing bounded latency impose their own.

use std::path::Path;

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::error::{EmailFailure, OutlayError, OutlayResult};
use crate::models::{Money, Month};

/// Outbound mail submission endpoint (STARTTLS on port 587)
const SMTP_RELAY: &str = "smtp.gmail.com";

/// Sender address and app password for the SMTP submission
#[derive(Debug, Clone)]
pub struct SmtpCredentials {
    pub sender: String,
    pub password: String,
}

/// The figures the summary message is composed from
#[derive(Debug, Clone)]
pub struct MonthSummary {
    pub month: Month,
    pub total: Money,
    pub currency_symbol: String,
}

impl MonthSummary {
    /// The HTML body of the summary message
    pub fn html_body(&self) -> String {
        format!(
            "<html><body>\
             <h2>Expense Summary for {month}</h2>\
             <p>Hello,</p>\
             <p>Here is your expense summary for this month.</p>\
             <p><b>Total Expenses: {total}</b></p>\
             <p>Please find the category-wise breakdown chart attached.</p>\
             <p>Regards,<br>Outlay</p>\
             </body></html>",
            month = self.month,
            total = self.total.format_with_symbol(&self.currency_symbol),
        )
    }
}

/// Send the monthly summary with the chart attached
///
/// Failure reasons are distinguishable: a missing chart file, an
/// unreadable attachment, and transport/authentication errors each map to
/// their own [`EmailFailure`] variant.
pub fn send_summary_email(
    credentials: &SmtpCredentials,
    recipient: &str,
    chart_path: &Path,
    summary: &MonthSummary,
) -> OutlayResult<()> {
    if !chart_path.is_file() {
        return Err(EmailFailure::ChartMissing.into());
    }

    let chart_bytes = std::fs::read(chart_path)
        .map_err(|e| EmailFailure::Attachment(e.to_string()))?;

    let chart_name = chart_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "category_breakdown.svg".to_string());

    let from: Mailbox = credentials
        .sender
        .parse()
        .map_err(|_| OutlayError::Validation(format!("Invalid sender address: {}", credentials.sender)))?;
    let to: Mailbox = recipient
        .parse()
        .map_err(|_| OutlayError::Validation(format!("Invalid recipient address: {}", recipient)))?;

    let content_type = ContentType::parse("image/svg+xml")
        .map_err(|e| EmailFailure::Attachment(e.to_string()))?;
    let attachment = Attachment::new(chart_name).body(chart_bytes, content_type);

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(format!("Your Expense Summary for {}", summary.month))
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::html(summary.html_body()))
                .singlepart(attachment),
        )
        .map_err(|e| EmailFailure::Transport(e.to_string()))?;

    let mailer = SmtpTransport::starttls_relay(SMTP_RELAY)
        .map_err(|e| EmailFailure::Transport(e.to_string()))?
        .credentials(Credentials::new(
            credentials.sender.clone(),
            credentials.password.clone(),
        ))
        .build();

    mailer
        .send(&message)
        .map_err(|e| EmailFailure::Transport(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn summary() -> MonthSummary {
        MonthSummary {
            month: "2024-01".parse().unwrap(),
            total: Money::from_cents(123_456),
            currency_symbol: "€".to_string(),
        }
    }

    fn creds() -> SmtpCredentials {
        SmtpCredentials {
            sender: "sender@example.com".into(),
            password: "app-password".into(),
        }
    }

    #[test]
    fn test_body_carries_total_and_symbol() {
        let body = summary().html_body();
        assert!(body.contains("Expense Summary for 2024-01"));
        assert!(body.contains("€1,234.56"));
    }

    #[test]
    fn test_missing_chart_is_distinct_failure() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no_chart.svg");

        let err = send_summary_email(&creds(), "to@example.com", &missing, &summary()).unwrap_err();
        assert!(matches!(
            err,
            OutlayError::Email(EmailFailure::ChartMissing)
        ));
    }

    #[test]
    fn test_invalid_recipient_rejected_before_send() {
        let temp_dir = TempDir::new().unwrap();
        let chart = temp_dir.path().join("chart.svg");
        std::fs::write(&chart, "<svg/>").unwrap();

        let err = send_summary_email(&creds(), "not-an-address", &chart, &summary()).unwrap_err();
        assert!(err.is_validation());
    }
}
