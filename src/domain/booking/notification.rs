//! Booking notification payload and its plain-text renderings.

use serde::Serialize;
use std::fmt::Write;

use super::availability::format_date_for_display;
use super::booking_type::BookingType;
use super::slot::{slot_label, slot_value};
use super::submission::ValidatedBooking;
use crate::domain::foundation::BookingId;

/// Data sent to the team and the customer once a booking is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingNotification {
    pub booking_id: BookingId,
    pub booking_type: BookingType,
    pub customer_name: String,
    pub customer_email: String,
    pub phone_number: Option<String>,
    /// "YYYY-MM-DD" in the business timezone.
    pub preferred_date: String,
    /// "HH:MM" in the business timezone.
    pub preferred_time: String,
    pub message: Option<String>,
    #[serde(skip)]
    display_date: String,
    #[serde(skip)]
    display_time: String,
}

impl BookingNotification {
    pub fn new(booking_id: BookingId, booking: &ValidatedBooking) -> Self {
        Self {
            booking_id,
            booking_type: booking.booking_type,
            customer_name: booking.customer_name(),
            customer_email: booking.email.clone(),
            phone_number: booking.phone_number.clone(),
            preferred_date: booking.preferred_date.format("%Y-%m-%d").to_string(),
            preferred_time: slot_value(booking.preferred_time),
            message: booking.message.clone(),
            display_date: format_date_for_display(booking.preferred_date),
            display_time: slot_label(booking.preferred_time),
        }
    }

    /// Subject line of the internal alert.
    pub fn team_subject(&self) -> String {
        format!("New {} booking: {}", self.booking_type.label(), self.customer_name)
    }

    /// Subject line of the customer confirmation.
    pub fn customer_subject(&self) -> String {
        format!("Your {} request has been received", self.booking_type.label())
    }

    /// Internal alert listing every submitted field and the follow-up steps.
    pub fn render_team_alert(&self) -> String {
        let consultation = self.booking_type == BookingType::Consultation;
        let mut body = String::new();

        let _ = writeln!(body, "New {} booking\n", self.booking_type.label());
        let _ = writeln!(body, "Customer Information");
        let _ = writeln!(body, "Name: {}", self.customer_name);
        let _ = writeln!(body, "Email: {}", self.customer_email);
        let _ = writeln!(
            body,
            "Phone: {}",
            self.phone_number.as_deref().unwrap_or("Not provided")
        );
        let _ = writeln!(
            body,
            "Booking Type: {} ({})",
            self.booking_type.label(),
            self.booking_type.duration_text()
        );
        let _ = writeln!(
            body,
            "Advance Notice: {} hours requirement met\n",
            self.booking_type.advance_notice_hours()
        );

        let _ = writeln!(body, "Appointment Details");
        let _ = writeln!(body, "Date: {}", self.display_date);
        let _ = writeln!(body, "Time: {}", self.display_time);
        let _ = writeln!(body, "Booking ID: {}\n", self.booking_id);

        if let Some(message) = &self.message {
            let heading = if consultation {
                "Customer Needs & Requirements"
            } else {
                "Customer Message"
            };
            let _ = writeln!(body, "{}\n\"{}\"", heading, message);
            if consultation {
                let _ = writeln!(
                    body,
                    "Use this information to research their case and prepare guidance for the consultation."
                );
            }
            body.push('\n');
        }

        let review = if consultation {
            "Review the customer's requirements and research their case"
        } else {
            "Review the customer's requirements"
        };
        let mut steps = vec![
            review,
            "Confirm the appointment time",
            "Send calendar invite to customer",
            "Prepare relevant materials for the session",
        ];
        if consultation {
            steps.push("Prepare customized recommendations based on their needs");
        }
        push_numbered(&mut body, "Next Steps", &steps);
        body
    }

    /// Confirmation sent to the customer.
    pub fn render_customer_confirmation(&self) -> String {
        let consultation = self.booking_type == BookingType::Consultation;
        let mut body = String::new();

        let _ = writeln!(body, "Hi {},\n", self.customer_name);
        let _ = writeln!(
            body,
            "Thank you! Your {} has been successfully scheduled.\n",
            self.booking_type.label().to_lowercase()
        );

        let _ = writeln!(body, "Appointment Details");
        let _ = writeln!(
            body,
            "Type: {} ({})",
            self.booking_type.label(),
            self.booking_type.duration_text()
        );
        let _ = writeln!(body, "Date: {}", self.display_date);
        let _ = writeln!(body, "Time: {}", self.display_time);
        let _ = writeln!(body, "Booking Reference: {}\n", self.booking_id);

        let mut steps = vec![
            "Our team will review your booking within 24 hours",
            "You'll receive a calendar invitation with meeting details",
            "We'll send you a brief preparation guide",
        ];
        if consultation {
            steps.push("We'll research your case using the information you provided");
        }
        steps.push("Join the session at your scheduled time");
        push_numbered(&mut body, "What Happens Next?", &steps);

        if consultation {
            let _ = writeln!(body, "\nConsultation Preparation");
            let _ = writeln!(
                body,
                "We'll use the information you provided to prepare customized recommendations. \
                 To make the most of our time, please also consider:"
            );
            for item in CONSULTATION_PREP {
                let _ = writeln!(body, "- {}", item);
            }
        }

        let _ = writeln!(body, "\nNeed to Reschedule?");
        let _ = writeln!(
            body,
            "Reply to this email to change your appointment. Please give {} notice for any changes.",
            self.booking_type.advance_notice_text()
        );
        body
    }
}

const CONSULTATION_PREP: [&str; 4] = [
    "Any additional business challenges you'd like to address",
    "Specific questions about AI implementation in your industry",
    "Current systems or processes you'd like to improve",
    "Budget considerations and timeline expectations",
];

fn push_numbered(body: &mut String, heading: &str, steps: &[&str]) {
    let _ = writeln!(body, "{}", heading);
    for (i, step) in steps.iter().enumerate() {
        let _ = writeln!(body, "{}. {}", i + 1, step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

    fn booking(message: Option<&str>) -> ValidatedBooking {
        ValidatedBooking {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@x.com".into(),
            phone_number: None,
            booking_type: BookingType::Consultation,
            preferred_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            preferred_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            preferred_at: Utc.with_ymd_and_hms(2024, 6, 5, 14, 30, 0).unwrap(),
            message: message.map(String::from),
        }
    }

    #[test]
    fn payload_uses_form_formats() {
        let notification = BookingNotification::new(BookingId::new(), &booking(None));
        let json = serde_json::to_value(&notification).unwrap();

        assert_eq!(json["customerName"], "Jane Doe");
        assert_eq!(json["preferredDate"], "2024-06-05");
        assert_eq!(json["preferredTime"], "14:30");
        assert_eq!(json["bookingType"], "consultation");
        assert!(json.get("displayDate").is_none());
    }

    #[test]
    fn team_alert_lists_fields_and_message() {
        let notification = BookingNotification::new(BookingId::new(), &booking(Some("Invoice automation")));
        let alert = notification.render_team_alert();

        assert!(alert.contains("Booking Type: Free Consultation (30 minutes)"));
        assert!(alert.contains("Advance Notice: 48 hours requirement met"));
        assert!(alert.contains("Email: jane@x.com"));
        assert!(alert.contains("Phone: Not provided"));
        assert!(alert.contains("Date: Wednesday, June 5, 2024"));
        assert!(alert.contains("Time: 2:30 PM"));
        assert!(alert.contains("Customer Needs & Requirements\n\"Invoice automation\""));
        assert!(alert.contains("1. Review the customer's requirements and research their case"));
        assert!(alert.contains("5. Prepare customized recommendations based on their needs"));
    }

    #[test]
    fn team_alert_for_a_call() {
        let mut call = booking(Some("Quick question"));
        call.booking_type = BookingType::Call;
        let alert = BookingNotification::new(BookingId::new(), &call).render_team_alert();

        assert!(alert.contains("Booking Type: Discovery Call (15 minutes)"));
        assert!(alert.contains("Advance Notice: 24 hours requirement met"));
        assert!(alert.contains("Customer Message\n\"Quick question\""));
        assert!(!alert.contains("Customer Needs & Requirements"));
        assert!(alert.contains("1. Review the customer's requirements\n"));
        assert!(alert.contains("4. Prepare relevant materials for the session"));
        assert!(!alert.contains("5. "));
    }

    #[test]
    fn customer_confirmation_mentions_slot_and_reference() {
        let id = BookingId::new();
        let confirmation = BookingNotification::new(id, &booking(None)).render_customer_confirmation();

        assert!(confirmation.starts_with("Hi Jane Doe"));
        assert!(confirmation.contains("Type: Free Consultation (30 minutes)"));
        assert!(confirmation.contains(&format!("Booking Reference: {}", id)));
        assert!(confirmation.contains("What Happens Next?"));
        assert!(confirmation.contains("4. We'll research your case using the information you provided"));
        assert!(confirmation.contains("5. Join the session at your scheduled time"));
        assert!(confirmation.contains("Consultation Preparation"));
        assert!(confirmation.contains("- Budget considerations and timeline expectations"));
        assert!(confirmation.contains("at least 48 hours in advance"));
    }

    #[test]
    fn customer_confirmation_for_a_call() {
        let mut call = booking(None);
        call.booking_type = BookingType::Call;
        let confirmation = BookingNotification::new(BookingId::new(), &call).render_customer_confirmation();

        assert!(confirmation.contains("Your discovery call has been successfully scheduled"));
        assert!(confirmation.contains("Type: Discovery Call (15 minutes)"));
        assert!(confirmation.contains("4. Join the session at your scheduled time"));
        assert!(!confirmation.contains("Consultation Preparation"));
        assert!(confirmation.contains("at least 24 hours in advance"));
    }
}
