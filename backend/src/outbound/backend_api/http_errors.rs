//! Status and transport mapping shared by the API adapters.

use reqwest::StatusCode;

const PREVIEW_CHAR_LIMIT: usize = 160;

/// Collapse whitespace and truncate a response body for error messages.
pub(super) fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

/// `status 403` or `status 403: <preview>`.
pub(super) fn status_message(status: StatusCode, body: &[u8]) -> String {
    let preview = body_preview(body);
    if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    }
}

pub(super) fn transport_message(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("request timed out: {error}")
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previews_collapse_whitespace() {
        assert_eq!(
            body_preview(b"{\n  \"msg\":   \"User not allowed\"\n}"),
            "{ \"msg\": \"User not allowed\" }"
        );
    }

    #[test]
    fn long_previews_are_truncated() {
        let body = "x".repeat(PREVIEW_CHAR_LIMIT + 10);
        let preview = body_preview(body.as_bytes());
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PREVIEW_CHAR_LIMIT + 3);
    }

    #[test]
    fn status_messages_omit_empty_bodies() {
        assert_eq!(status_message(StatusCode::FORBIDDEN, b"  "), "status 403");
        assert_eq!(
            status_message(StatusCode::FORBIDDEN, b"denied"),
            "status 403: denied"
        );
    }
}
