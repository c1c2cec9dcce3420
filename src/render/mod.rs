//! Render layer: pure functions turning decoded responses into HTML
//! fragments. No DOM, no I/O; callers inject the markup wherever their
//! page framework wants it.

use std::fmt::Write as _;

use crate::domain::{BalanceInfo, ContactSet, DeliveryReport, DeliveryStatus, PhoneNumber, Price};

/// Placeholder shown for any missing field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Message ids longer than this are truncated with an ellipsis.
pub const MESSAGE_ID_PREVIEW_LEN: usize = 12;

/// How many numbers the contacts preview spells out before "and N more".
pub const CONTACTS_PREVIEW_LEN: usize = 3;

/// Escape text for safe interpolation into an HTML fragment.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn or_na(value: Option<&str>) -> String {
    match value {
        Some(text) => escape_html(text),
        None => NOT_AVAILABLE.to_owned(),
    }
}

/// Shorten a message id to [`MESSAGE_ID_PREVIEW_LEN`] characters plus an
/// ellipsis; absent ids become `N/A`.
pub fn truncate_id(id: Option<&str>) -> String {
    match id {
        None => NOT_AVAILABLE.to_owned(),
        Some(id) if id.chars().count() > MESSAGE_ID_PREVIEW_LEN => {
            let prefix: String = id.chars().take(MESSAGE_ID_PREVIEW_LEN).collect();
            format!("{}...", escape_html(&prefix))
        }
        Some(id) => escape_html(id),
    }
}

/// Format a price as `"<amount> <currency>"`, or `N/A` when absent.
pub fn format_price(price: Option<&Price>) -> String {
    match price {
        None => NOT_AVAILABLE.to_owned(),
        Some(price) => {
            let mut text = escape_html(&price.amount);
            if let Some(currency) = price.currency.as_deref() {
                text.push(' ');
                text.push_str(&escape_html(currency));
            }
            text
        }
    }
}

fn status_cell(status: Option<&DeliveryStatus>) -> String {
    let (class, name) = match status {
        Some(status) => (status.badge_class(), escape_html(status.name())),
        None => ("status-secondary", "Unknown".to_owned()),
    };
    format!(r#"<span class="status-badge {class}">{name}</span>"#)
}

/// Render delivery reports as a table, or the fixed empty state when there
/// are no rows.
pub fn render_reports(reports: &[DeliveryReport]) -> String {
    if reports.is_empty() {
        return concat!(
            r#"<div class="empty-state">"#,
            "<h3>No Reports Found</h3>",
            "<p>Try adjusting your search criteria or send some messages first.</p>",
            "</div>"
        )
        .to_owned();
    }

    let mut html = String::new();
    html.push_str(r#"<div class="reports-table">"#);
    html.push_str(concat!(
        r#"<div class="table-header">"#,
        r#"<div class="table-cell">Recipient</div>"#,
        r#"<div class="table-cell">Status</div>"#,
        r#"<div class="table-cell">Message ID</div>"#,
        r#"<div class="table-cell">Cost</div>"#,
        r#"<div class="table-cell">Sent</div>"#,
        r#"<div class="table-cell">Delivered</div>"#,
        "</div>"
    ));
    html.push_str(r#"<div class="table-body">"#);
    for report in reports {
        let _ = write!(
            html,
            concat!(
                r#"<div class="table-row">"#,
                r#"<div class="table-cell">{recipient}</div>"#,
                r#"<div class="table-cell">{status}</div>"#,
                r#"<div class="table-cell font-mono">{message_id}</div>"#,
                r#"<div class="table-cell">{price}</div>"#,
                r#"<div class="table-cell">{sent_at}</div>"#,
                r#"<div class="table-cell">{done_at}</div>"#,
                "</div>"
            ),
            recipient = or_na(report.recipient.as_deref()),
            status = status_cell(report.status.as_ref()),
            message_id = truncate_id(report.message_id.as_deref()),
            price = format_price(report.price.as_ref()),
            sent_at = or_na(report.sent_at.as_deref()),
            done_at = or_na(report.done_at.as_deref()),
        );
    }
    html.push_str("</div></div>");
    html
}

/// Render the two balance cards: available amount and account details.
pub fn render_balance(balance: &BalanceInfo) -> String {
    let currency = match balance.currency.as_deref() {
        Some(currency) => escape_html(currency),
        None => "$".to_owned(),
    };
    let amount = match balance.amount.as_deref() {
        Some(amount) => escape_html(amount),
        None => "0.00".to_owned(),
    };

    format!(
        concat!(
            r#"<div class="balance-cards">"#,
            r#"<div class="card balance-card">"#,
            r#"<div class="balance-amount">"#,
            r#"<span class="currency">{currency}</span>"#,
            r#"<span class="amount">{amount}</span>"#,
            "</div>",
            r#"<div class="balance-label">Available Balance</div>"#,
            "</div>",
            r#"<div class="card account-info">"#,
            r#"<h3 class="card-title">Account Details</h3>"#,
            r#"<div class="info-grid">"#,
            r#"<div class="info-item"><span class="label">Account ID</span><span class="value">{account_id}</span></div>"#,
            r#"<div class="info-item"><span class="label">Account Name</span><span class="value">{account_name}</span></div>"#,
            r#"<div class="info-item"><span class="label">Currency</span><span class="value">{currency_detail}</span></div>"#,
            "</div></div></div>"
        ),
        currency = currency,
        amount = amount,
        account_id = or_na(balance.account_id.as_deref()),
        account_name = or_na(balance.account_name.as_deref()),
        currency_detail = or_na(balance.currency.as_deref()),
    )
}

/// Plain-text preview of loaded contacts: the first three numbers joined
/// by `", "`, plus `" and N more..."` when there are more.
pub fn contacts_preview(numbers: &[PhoneNumber]) -> String {
    let preview = numbers
        .iter()
        .take(CONTACTS_PREVIEW_LEN)
        .map(PhoneNumber::as_digits)
        .collect::<Vec<_>>()
        .join(", ");

    let remaining = numbers.len().saturating_sub(CONTACTS_PREVIEW_LEN);
    if remaining > 0 {
        format!("{preview} and {remaining} more...")
    } else {
        preview
    }
}

/// Render the contacts-preview block for a form's contact set, or an empty
/// string when nothing is loaded (the container stays hidden).
pub fn render_contacts(contacts: &ContactSet) -> String {
    let numbers = contacts.effective();
    if numbers.is_empty() {
        return String::new();
    }

    format!(
        concat!(
            r#"<div class="contacts-preview">"#,
            r#"<div class="contacts-header">"#,
            r#"<span class="contacts-count">{count} contacts loaded</span>"#,
            "</div>",
            r#"<div class="contacts-list">{preview}</div>"#,
            "</div>"
        ),
        count = numbers.len(),
        preview = contacts_preview(numbers),
    )
}

/// Render the error state used when a balance or report fetch fails; the
/// caller wires the "Try Again" button to re-invoke the request.
pub fn render_error_state(title: &str, detail: &str) -> String {
    format!(
        concat!(
            r#"<div class="error-state">"#,
            "<h3>{title}</h3>",
            "<p>{detail}</p>",
            r#"<button class="btn btn-primary" data-action="retry">Try Again</button>"#,
            "</div>"
        ),
        title = escape_html(title),
        detail = escape_html(detail),
    )
}
