//! Status texts rendered by the login page

/// Status markup once the server confirmed the login
#[must_use]
pub fn login_successful(server_body: &str) -> String {
    format!("Your Login is Successful!</br>{server_body}</br>Redirecting...")
}

/// Diagnostic line written when the widget reported an error
#[must_use]
pub fn widget_error_log(error: &str) -> String {
    format!("We're sorry, an error has occurred: {error}")
}

pub const LOGIN_ERROR: &str = "We're sorry, we cannot log you in right now due to an error.";

pub const SERVER_CALL_FAILED: &str =
    "Failed to make a server-side call. Check your configuration and console.";
