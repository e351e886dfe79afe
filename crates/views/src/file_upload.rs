//! File upload input
//!
//! A stateless file `<input>`: change events are forwarded to the handler
//! named in `on_change`, and an optional validation error is shown beneath.

use crate::escape_html;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileUploadInput {
    pub name: String,
    pub label: Option<String>,
    /// Comma-separated MIME types or extensions, e.g. `image/*,.pdf`
    pub accept: Option<String>,
    /// Client-side handler receiving the change event
    pub on_change: Option<String>,
    pub error: Option<String>,
}

pub fn file_upload_input(input: &FileUploadInput) -> String {
    let name = escape_html(&input.name);
    let mut html = String::from(r#"<div class="file-upload">"#);

    if let Some(label) = &input.label {
        html.push_str(&format!(
            r#"<label for="{}">{}</label>"#,
            name,
            escape_html(label)
        ));
    }

    html.push_str(&format!(r#"<input type="file" id="{0}" name="{0}""#, name));
    if let Some(accept) = &input.accept {
        html.push_str(&format!(r#" accept="{}""#, escape_html(accept)));
    }
    if let Some(handler) = &input.on_change {
        html.push_str(&format!(r#" data-on-change="{}""#, escape_html(handler)));
    }
    if input.error.is_some() {
        html.push_str(r#" aria-invalid="true""#);
    }
    html.push('>');

    if let Some(error) = &input.error {
        html.push_str(&format!(
            r#"<p class="file-upload__error" role="alert">{}</p>"#,
            escape_html(error)
        ));
    }

    html.push_str("</div>");
    html
}
