//! Waitlist form submission.
//!
//! The endpoint is a fire-and-forget form handler: any 2xx answer counts as
//! success and the response body is ignored.

use std::time::Duration;

use super::fetch::client;

pub const SUCCESS_MESSAGE: &str = "You’ve been added to the waitlist!";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    pub name: String,
    pub email: String,
}

impl WaitlistForm {
    /// Form fields in submission order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.trim().to_string()),
            ("email", self.email.trim().to_string()),
        ]
    }

    /// Minimal client-side check: an email that looks like one.
    pub fn is_submittable(&self) -> bool {
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
    }
}

/// Error during waitlist submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError {
    pub message: String,
    pub status: Option<u16>,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "Submission rejected with status {}", status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for SubmitError {}

/// POST the form fields to `endpoint` (blocking).
pub fn submit(endpoint: &str, fields: &[(&str, String)]) -> Result<(), SubmitError> {
    let client = client(Duration::from_secs(15)).map_err(|e| SubmitError {
        message: e.message,
        status: None,
    })?;

    let response = client
        .post(endpoint)
        .form(fields)
        .send()
        .map_err(|e| SubmitError {
            message: format!("Request failed: {}", e),
            status: None,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SubmitError {
            message: format!("POST {}", endpoint),
            status: Some(status.as_u16()),
        });
    }
    log::info!("Waitlist submission accepted ({})", status.as_u16());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::fetch::tests::serve_once;

    #[test]
    fn fields_are_trimmed_and_ordered() {
        let form = WaitlistForm {
            name: "  Ada ".to_string(),
            email: " ada@example.com\n".to_string(),
        };
        assert_eq!(
            form.fields(),
            vec![
                ("name", "Ada".to_string()),
                ("email", "ada@example.com".to_string())
            ]
        );
    }

    #[test]
    fn email_must_look_like_an_address() {
        let mut form = WaitlistForm::default();
        assert!(!form.is_submittable());
        form.email = "nobody".to_string();
        assert!(!form.is_submittable());
        form.email = "@example.com".to_string();
        assert!(!form.is_submittable());
        form.email = "a@b".to_string();
        assert!(form.is_submittable());
    }

    #[test]
    fn reset_clears_input() {
        let mut form = WaitlistForm {
            name: "x".to_string(),
            email: "x@y".to_string(),
        };
        form.reset();
        assert_eq!(form, WaitlistForm::default());
    }

    #[test]
    fn unreachable_endpoint_is_an_error() {
        let err = submit("http://127.0.0.1:9/waitlist", &[("email", "a@b".to_string())]).unwrap_err();
        assert!(err.status.is_none());
    }

    #[test]
    fn rejected_submission_carries_status() {
        let base = serve_once("500 Internal Server Error", "");
        let err = submit(&format!("{}/waitlist", base), &[("email", "a@b".to_string())]).unwrap_err();
        assert_eq!(err.status, Some(500));
    }

    #[test]
    fn accepted_submission_is_ok() {
        let base = serve_once("200 OK", "");
        let form = WaitlistForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        assert_eq!(submit(&format!("{}/waitlist", base), &form.fields()), Ok(()));
    }

    #[test]
    fn alert_copy_uses_typographic_apostrophe() {
        assert_eq!(SUCCESS_MESSAGE, "You\u{2019}ve been added to the waitlist!");
    }
}
