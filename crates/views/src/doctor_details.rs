//! Doctor details page
//!
//! Renders a doctor's profile for a patient. The offline-availability block
//! appears only when the doctor sees patients in person, and the action bar
//! (book appointment, chat, report analysis) only for premium viewers. Each
//! action links to its route with the doctor id carried as navigation state.

use crate::{encode_query_value, escape_html};

/// Message shown when no doctor was handed to the page
pub const DOCTOR_FALLBACK_MESSAGE: &str = "Doctor details not available";

/// In-person clinic details
#[derive(Debug, Clone, PartialEq)]
pub struct OfflineAvailabilityView {
    pub clinic_name: String,
    pub address: String,
    pub timings: String,
}

/// Everything the page needs to know about a doctor
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorDetailsView {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub specialization: String,
    pub experience_years: i32,
    pub consultation_fee: i32,
    pub about: Option<String>,
    pub offline_availability: Option<OfflineAvailabilityView>,
}

/// Who is looking at the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewer {
    pub premium: bool,
}

/// Navigation targets of the premium action bar
const ACTIONS: [(&str, &str); 3] = [
    ("/book-appointment", "Book Appointment"),
    ("/chat", "Chat"),
    ("/report-analysis", "Report Analysis"),
];

/// Render the doctor details page, or the fallback block when `doctor` is absent.
pub fn doctor_details(doctor: Option<&DoctorDetailsView>, viewer: Viewer) -> String {
    let Some(doctor) = doctor else {
        return format!(
            r#"<section class="doctor-details doctor-details--empty"><p>{}</p></section>"#,
            DOCTOR_FALLBACK_MESSAGE
        );
    };

    let mut html = String::from(r#"<section class="doctor-details">"#);

    if let Some(url) = &doctor.avatar_url {
        html.push_str(&format!(
            r#"<img class="doctor-details__avatar" src="{}" alt="{}">"#,
            escape_html(url),
            escape_html(&doctor.name)
        ));
    }

    html.push_str(&format!(
        r#"<h2 class="doctor-details__name">{}</h2><p class="doctor-details__specialization">{}</p><p class="doctor-details__experience">{} years of experience</p><p class="doctor-details__fee">Consultation fee: {}</p>"#,
        escape_html(&doctor.name),
        escape_html(&doctor.specialization),
        doctor.experience_years,
        doctor.consultation_fee
    ));

    if let Some(about) = &doctor.about {
        html.push_str(&format!(
            r#"<p class="doctor-details__about">{}</p>"#,
            escape_html(about)
        ));
    }

    if let Some(offline) = &doctor.offline_availability {
        html.push_str(&offline_block(offline));
    }

    if viewer.premium {
        html.push_str(&action_bar(&doctor.id));
    }

    html.push_str("</section>");
    html
}

fn offline_block(offline: &OfflineAvailabilityView) -> String {
    format!(
        r#"<div class="doctor-details__offline"><h3>Offline availability</h3><p>{}</p><p>{}</p><p>{}</p></div>"#,
        escape_html(&offline.clinic_name),
        escape_html(&offline.address),
        escape_html(&offline.timings)
    )
}

fn action_bar(doctor_id: &str) -> String {
    let doctor_id = encode_query_value(doctor_id);
    let links: String = ACTIONS
        .iter()
        .map(|(route, label)| {
            format!(
                r#"<a class="doctor-details__action" href="{}?doctorId={}">{}</a>"#,
                route, doctor_id, label
            )
        })
        .collect();
    format!(r#"<nav class="doctor-details__actions">{}</nav>"#, links)
}
