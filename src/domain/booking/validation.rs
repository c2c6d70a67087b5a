//! Booking form validator.
//!
//! Every check runs independently so a form can show all problems at once.
//! The advance-notice check here is authoritative: it re-reads "now" at
//! submission time instead of trusting what the picker showed earlier.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use super::availability::{is_weekend, AvailabilityEngine};
use super::errors::{BookingField, FieldErrors};
use super::slot::{is_slot_start, parse_slot_time};
use super::submission::{BookingSubmission, ValidatedBooking};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

// E.164-like, checked after separators are stripped.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").unwrap());

/// Returns true if `email` looks like a deliverable address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns true if `phone` is valid once spaces, hyphens and parentheses are removed.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(&strip_phone_separators(phone))
}

fn strip_phone_separators(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

/// Trims and removes angle brackets from free text.
pub fn sanitize(input: &str) -> String {
    input.trim().replace(['<', '>'], "")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validates booking submissions against the availability rules.
pub struct BookingValidator {
    engine: Arc<AvailabilityEngine>,
}

impl BookingValidator {
    pub fn new(engine: Arc<AvailabilityEngine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &AvailabilityEngine {
        &self.engine
    }

    /// Validates against the engine's clock.
    pub fn validate(&self, submission: &BookingSubmission) -> Result<ValidatedBooking, FieldErrors> {
        self.validate_local(submission, self.engine.local_now())
    }

    /// Validates against an explicit instant.
    pub fn validate_at(
        &self,
        submission: &BookingSubmission,
        now: DateTime<Utc>,
    ) -> Result<ValidatedBooking, FieldErrors> {
        let local_now = now.with_timezone(&self.engine.zone()).naive_local();
        self.validate_local(submission, local_now)
    }

    fn validate_local(
        &self,
        submission: &BookingSubmission,
        now: NaiveDateTime,
    ) -> Result<ValidatedBooking, FieldErrors> {
        let mut errors = FieldErrors::new();
        let booking_type = submission.booking_type;

        let first_name = sanitize(&submission.first_name);
        if first_name.is_empty() {
            errors.insert(BookingField::FirstName, "First name is required");
        }

        let last_name = sanitize(&submission.last_name);
        if last_name.is_empty() {
            errors.insert(BookingField::LastName, "Last name is required");
        }

        let email = submission.email.trim().to_lowercase();
        if email.is_empty() {
            errors.insert(BookingField::Email, "Email is required");
        } else if !is_valid_email(&email) {
            errors.insert(BookingField::Email, "Please enter a valid email address");
        }

        let phone_number = non_blank(submission.phone_number.as_deref()).map(sanitize);
        if let Some(phone) = &phone_number {
            if !is_valid_phone(phone) {
                errors.insert(BookingField::PhoneNumber, "Please enter a valid phone number");
            }
        }

        let date = self.check_date(&submission.preferred_date, &mut errors);
        let time = check_time(&submission.preferred_time, &mut errors);

        let message = non_blank(submission.message.as_deref()).map(sanitize);
        if booking_type.requires_message() && message.is_none() {
            errors.insert(
                BookingField::Message,
                "Please tell us about your needs so we can prepare for the consultation",
            );
        }

        if let (Some(date), Some(time)) = (date, time) {
            if !self.engine.meets_notice(booking_type, date.and_time(time), now) {
                errors.insert(
                    BookingField::Datetime,
                    format!(
                        "Please select a date and time {}",
                        booking_type.advance_notice_text()
                    ),
                );
            }
        }

        match (date, time) {
            (Some(preferred_date), Some(preferred_time)) if errors.is_empty() => Ok(ValidatedBooking {
                first_name,
                last_name,
                email,
                phone_number,
                booking_type,
                preferred_date,
                preferred_time,
                preferred_at: self.engine.to_instant(preferred_date.and_time(preferred_time)),
                message,
            }),
            _ => Err(errors),
        }
    }

    /// Parses the date and rejects closure days. Returns the parsed date even
    /// when it is a closure day so the datetime check still runs.
    fn check_date(&self, value: &str, errors: &mut FieldErrors) -> Option<NaiveDate> {
        let value = value.trim();
        if value.is_empty() {
            errors.insert(BookingField::PreferredDate, "Preferred date is required");
            return None;
        }

        let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
            errors.insert(BookingField::PreferredDate, "Please select a valid date");
            return None;
        };

        if is_weekend(date) {
            errors.insert(BookingField::PreferredDate, "Bookings are not available on weekends");
        } else if let Some(name) = self.engine.holiday_name(date) {
            errors.insert(BookingField::PreferredDate, format!("We are closed on {}", name));
        }
        Some(date)
    }
}

fn check_time(value: &str, errors: &mut FieldErrors) -> Option<chrono::NaiveTime> {
    if value.trim().is_empty() {
        errors.insert(BookingField::PreferredTime, "Preferred time is required");
        return None;
    }

    let Some(time) = parse_slot_time(value) else {
        errors.insert(BookingField::PreferredTime, "Please select a valid time");
        return None;
    };

    if !is_slot_start(time) {
        errors.insert(
            BookingField::PreferredTime,
            "Please choose a time between 9:00 AM and 5:00 PM in 30-minute increments",
        );
    }
    Some(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::BookingType;
    use crate::domain::foundation::FixedClock;
    use chrono::{Duration, FixedOffset, TimeZone};
    use proptest::prelude::*;

    fn validator_at(now: DateTime<Utc>) -> BookingValidator {
        let engine = AvailabilityEngine::new(
            Arc::new(FixedClock::new(now)),
            FixedOffset::east_opt(0).unwrap(),
        );
        BookingValidator::new(Arc::new(engine))
    }

    /// Monday 2024-06-03 10:00 UTC.
    fn monday_morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap()
    }

    fn submission(booking_type: BookingType) -> BookingSubmission {
        BookingSubmission {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@x.com".into(),
            phone_number: None,
            booking_type,
            preferred_date: "2024-06-06".into(),
            preferred_time: "14:00".into(),
            message: Some("We want to automate our support inbox".into()),
        }
    }

    #[test]
    fn accepts_a_complete_call_booking() {
        let validated = validator_at(monday_morning())
            .validate(&submission(BookingType::Call))
            .unwrap();

        assert_eq!(validated.customer_name(), "Jane Doe");
        assert_eq!(
            validated.preferred_at,
            Utc.with_ymd_and_hms(2024, 6, 6, 14, 0, 0).unwrap()
        );
    }

    #[test]
    fn consultation_without_message_yields_exactly_message_error() {
        let mut form = submission(BookingType::Consultation);
        form.message = Some(String::new());

        let errors = validator_at(monday_morning()).validate(&form).unwrap_err();
        assert_eq!(errors.fields(), vec![BookingField::Message]);
    }

    #[test]
    fn call_without_message_is_fine() {
        let mut form = submission(BookingType::Call);
        form.message = Some("   ".into());

        let validated = validator_at(monday_morning()).validate(&form).unwrap();
        assert_eq!(validated.message, None);
    }

    #[test]
    fn reports_every_violation_at_once() {
        let form = BookingSubmission {
            first_name: "  ".into(),
            last_name: String::new(),
            email: "not-an-email".into(),
            phone_number: Some("abc".into()),
            booking_type: BookingType::Consultation,
            preferred_date: String::new(),
            preferred_time: String::new(),
            message: None,
        };

        let errors = validator_at(monday_morning()).validate(&form).unwrap_err();
        assert_eq!(
            errors.fields(),
            vec![
                BookingField::FirstName,
                BookingField::LastName,
                BookingField::Email,
                BookingField::PhoneNumber,
                BookingField::PreferredDate,
                BookingField::PreferredTime,
                BookingField::Message,
            ]
        );
        assert_eq!(errors.get(BookingField::Email), Some("Please enter a valid email address"));
    }

    #[test]
    fn exact_notice_boundary_is_rejected() {
        // now + 24h lands exactly on the 10:00 slot.
        let mut form = submission(BookingType::Call);
        form.preferred_date = "2024-06-04".into();
        form.preferred_time = "10:00".into();

        let errors = validator_at(monday_morning()).validate(&form).unwrap_err();
        assert_eq!(errors.fields(), vec![BookingField::Datetime]);
        assert_eq!(
            errors.get(BookingField::Datetime),
            Some("Please select a date and time at least 24 hours in advance")
        );
    }

    #[test]
    fn one_second_past_the_boundary_is_accepted() {
        let mut form = submission(BookingType::Call);
        form.preferred_date = "2024-06-04".into();
        form.preferred_time = "10:00".into();

        let now = monday_morning() - Duration::seconds(1);
        assert!(validator_at(now).validate(&form).is_ok());
    }

    #[test]
    fn consultation_needs_forty_eight_hours() {
        let mut form = submission(BookingType::Consultation);
        form.preferred_date = "2024-06-04".into();
        form.preferred_time = "16:30".into();

        let errors = validator_at(monday_morning()).validate(&form).unwrap_err();
        assert!(errors.contains(BookingField::Datetime));
    }

    #[test]
    fn validate_at_overrides_the_clock() {
        let validator = validator_at(monday_morning());
        let mut form = submission(BookingType::Call);
        form.preferred_date = "2024-06-04".into();
        form.preferred_time = "10:00".into();

        let earlier = Utc.with_ymd_and_hms(2024, 6, 3, 8, 0, 0).unwrap();
        assert!(validator.validate_at(&form, earlier).is_ok());
    }

    #[test]
    fn weekend_and_holiday_dates_are_rejected() {
        let validator = validator_at(monday_morning());

        let mut form = submission(BookingType::Call);
        form.preferred_date = "2024-06-08".into();
        let errors = validator.validate(&form).unwrap_err();
        assert_eq!(
            errors.get(BookingField::PreferredDate),
            Some("Bookings are not available on weekends")
        );

        form.preferred_date = "2024-07-04".into();
        let errors = validator.validate(&form).unwrap_err();
        assert_eq!(
            errors.get(BookingField::PreferredDate),
            Some("We are closed on Independence Day")
        );
    }

    #[test]
    fn times_outside_the_slot_grid_are_rejected() {
        let validator = validator_at(monday_morning());
        let mut form = submission(BookingType::Call);

        for bad in ["08:30", "17:00", "10:15"] {
            form.preferred_time = bad.into();
            let errors = validator.validate(&form).unwrap_err();
            assert_eq!(errors.fields(), vec![BookingField::PreferredTime], "time {}", bad);
        }

        form.preferred_time = "noon".into();
        let errors = validator.validate(&form).unwrap_err();
        assert_eq!(errors.get(BookingField::PreferredTime), Some("Please select a valid time"));
    }

    #[test]
    fn normalizes_accepted_fields() {
        let mut form = submission(BookingType::Call);
        form.first_name = "  <Jane> ".into();
        form.email = "  Jane@X.COM ".into();
        form.phone_number = Some(" +1 (555) 123-4567 ".into());
        form.message = Some("  hello  ".into());

        let validated = validator_at(monday_morning()).validate(&form).unwrap();
        assert_eq!(validated.first_name, "Jane");
        assert_eq!(validated.email, "jane@x.com");
        assert_eq!(validated.phone_number.as_deref(), Some("+1 (555) 123-4567"));
        assert_eq!(validated.message.as_deref(), Some("hello"));
    }

    #[test]
    fn phone_numbers_are_checked_without_separators() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("4915112345678"));
        assert!(!is_valid_phone("0123"));
        assert!(!is_valid_phone("+1 555 CALL NOW"));
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("jane.doe+ai@example.co"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("@example.com"));
    }

    proptest! {
        #[test]
        fn message_rule_depends_only_on_booking_type(message in prop_oneof![Just(String::new()), "[ \\t]{0,4}"]) {
            let validator = validator_at(monday_morning());

            let mut consultation = submission(BookingType::Consultation);
            consultation.message = Some(message.clone());
            let errors = validator.validate(&consultation).unwrap_err();
            prop_assert!(errors.contains(BookingField::Message));

            let mut call = submission(BookingType::Call);
            call.message = Some(message);
            prop_assert!(validator.validate(&call).is_ok());
        }
    }
}
