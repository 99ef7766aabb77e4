//! Record model: one contact entry in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, an ordered list of phones and an optional birthday.
///
/// The name is fixed at construction. Phones keep insertion order and are
/// not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self::from_parts(name, Vec::new(), None)
    }

    /// Create a record from already validated fields.
    pub fn from_parts(name: Name, phones: Vec<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    /// Create a record from raw strings, validating every field.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` hit by the name, a phone, or the birthday.
    pub fn with_details<I, P>(
        name: impl Into<String>,
        phones: I,
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let name = Name::new(name)?;
        let phones = phones
            .into_iter()
            .map(Phone::new)
            .collect::<Result<Vec<_>, _>>()?;
        let birthday = birthday.map(Birthday::new).transpose()?;
        Ok(Self::from_parts(name, phones, birthday))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, phone: &str) -> RecordResult<Phone> {
        let index = self.position_of(phone)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Removing phone");
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// The list is left untouched on any error.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if `old` is not on the record
    /// - `RecordError::Validation` if `new` is not a valid phone
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> RecordResult<()> {
        let index = self.position_of(old)?;
        self.phones[index].set(new)?;
        tracing::debug!(
            contact = %self.name,
            old = %old,
            new = %self.phones[index],
            "Edited phone"
        );
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: impl Into<String>) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Stop tracking a birthday for this contact.
    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Days from today (local clock) until the next birthday, or `None` without one.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday, or `None` without one.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().map(|b| b.days_until(today))
    }

    fn position_of(&self, phone: &str) -> RecordResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| RecordError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        match (&self.birthday, self.days_to_birthday()) {
            (Some(birthday), Some(days)) => write!(
                f,
                "Contact name: {}, Phones: {}, Birthday: {}, Days until birthday: {} days",
                self.name, phones, birthday, days
            ),
            _ => write!(
                f,
                "Contact name: {}, Phones: {}, No birthday specified",
                self.name, phones
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::with_details("Alice", ["1111111111", "2222222222"], None).unwrap()
    }

    fn phones(record: &Record) -> Vec<&str> {
        record.phones().iter().map(Phone::as_str).collect()
    }

    #[test]
    fn test_with_details_rejects_bad_fields() {
        assert_eq!(
            Record::with_details("", Vec::<String>::new(), None),
            Err(ValidationError::EmptyName)
        );
        assert!(matches!(
            Record::with_details("Bob", ["123"], None),
            Err(ValidationError::InvalidPhone(_))
        ));
        assert!(matches!(
            Record::with_details("Bob", ["1234567890"], Some("2000-02-30")),
            Err(ValidationError::InvalidBirthday(_))
        ));
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut record = sample();
        record.add_phone("1111111111").unwrap();
        assert_eq!(phones(&record), ["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_add_phone_invalid_leaves_list() {
        let mut record = sample();
        assert!(record.add_phone("12345").is_err());
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone_first_match_only() {
        let mut record = sample();
        record.add_phone("1111111111").unwrap();

        let removed = record.remove_phone("1111111111").unwrap();
        assert_eq!(removed.as_str(), "1111111111");
        assert_eq!(phones(&record), ["2222222222", "1111111111"]);
    }

    #[test]
    fn test_remove_phone_not_found() {
        let mut record = sample();
        assert_eq!(
            record.remove_phone("9999999999"),
            Err(RecordError::PhoneNotFound("9999999999".to_string()))
        );
    }

    #[test]
    fn test_edit_phone_in_place() {
        let mut record = sample();
        record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(phones(&record), ["3333333333", "2222222222"]);
    }

    #[test]
    fn test_edit_phone_invalid_is_atomic() {
        let mut record = sample();
        let before = record.clone();

        let err = record.edit_phone("1111111111", "bad").unwrap_err();
        assert!(matches!(
            err,
            RecordError::Validation(ValidationError::InvalidPhone(_))
        ));
        assert_eq!(record, before);
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = sample();
        assert_eq!(
            record.edit_phone("0000000000", "3333333333"),
            Err(RecordError::PhoneNotFound("0000000000".to_string()))
        );
    }

    #[test]
    fn test_find_phone() {
        let record = sample();
        assert_eq!(
            record.find_phone("2222222222").map(Phone::as_str),
            Some("2222222222")
        );
        assert!(record.find_phone("222").is_none());
    }

    #[test]
    fn test_days_to_birthday() {
        let mut record = sample();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(record.days_to_birthday_from(today), None);
        assert_eq!(record.days_to_birthday(), None);

        record.set_birthday("1990-10-20").unwrap();
        assert_eq!(record.days_to_birthday_from(today), Some(1));

        assert!(record.set_birthday("1990-10-32").is_err());
        assert_eq!(record.birthday().map(Birthday::as_str), Some("1990-10-20"));

        record.clear_birthday();
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_display_without_birthday() {
        assert_eq!(
            sample().to_string(),
            "Contact name: Alice, Phones: 1111111111; 2222222222, No birthday specified"
        );
    }

    #[test]
    fn test_display_with_birthday() {
        let record = Record::with_details("Bob", ["1234567890"], Some("2000-01-01")).unwrap();
        let text = record.to_string();
        assert!(text.starts_with(
            "Contact name: Bob, Phones: 1234567890, Birthday: 2000-01-01, Days until birthday: "
        ));
        assert!(text.ends_with(" days"));
    }

    #[test]
    fn test_serialization_omits_missing_birthday() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["phones"][1], "2222222222");
        assert!(json.get("birthday").is_none());
    }
}
