//! Server-rendered HTML fragments
//!
//! Pure functions from view models to HTML strings. Nothing here touches
//! storage or the network; callers resolve data (including signed avatar
//! URLs) before rendering.

pub mod doctor_details;
pub mod file_upload;

pub use doctor_details::{doctor_details, DoctorDetailsView, OfflineAvailabilityView, Viewer};
pub use file_upload::{file_upload_input, FileUploadInput};

/// Escape text for safe interpolation into HTML bodies and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a value for use inside a query string.
pub fn encode_query_value(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
