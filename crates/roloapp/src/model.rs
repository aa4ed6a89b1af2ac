//! # Data Model
//!
//! A [`PersonRecord`] aggregates a [`Name`], three contact fields ([`Phone`],
//! [`Email`], [`Address`]) and a [`TagSet`]. Every piece is validated when it
//! is built, so a record in hand is always well formed.
//!
//! Records are immutable: there are no setters. Changing a person means
//! building a new record and handing it to the store, which swaps it in whole.
//!
//! ## Privacy
//!
//! Each contact field carries an `is_private` flag. The core never enforces
//! it; it only travels with the value so that display layers can hide the
//! field from outside viewers (see [`PersonRecord::display_text`]).
//!
//! ## Raw Input
//!
//! UI layers hand raw strings to the commands as a [`PersonInput`]. Calling
//! [`PersonInput::build`] runs every validator and yields either a record or a
//! [`RoloError::Validation`] naming the first offending field.
//!
//! ## Serialization
//!
//! All validated types deserialize through their constructors, so a data file
//! edited by hand cannot load invalid values.

use crate::error::{Result, RoloError};
use crate::tags::TagSet;
use crate::validation::{
    validate_address, validate_email, validate_name, validate_phone, Field, FieldValidationError,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

const PRIVATE_MARKER: &str = "(private) ";

/// A person's full name. The natural key used by lookups.
///
/// Stored trimmed, with runs of inner spaces collapsed to one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(name.trim()).map_err(|e| RoloError::validation(Field::Name, e))?;
        Ok(Self(normalize_name(&name)))
    }

    pub fn full_name(&self) -> &str {
        &self.0
    }

    /// The whitespace-separated words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

/// Collapses whitespace runs to single spaces and trims the ends.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl TryFrom<String> for Name {
    type Error = RoloError;

    fn try_from(value: String) -> Result<Self> {
        Name::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Marker trait tying a [`ContactField`] to its label and validator.
pub trait ContactKind: Clone + fmt::Debug + PartialEq + Eq + Hash {
    const FIELD: Field;
    const LABEL: &'static str;

    fn validate(value: &str) -> std::result::Result<(), FieldValidationError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneKind;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailKind;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressKind;

impl ContactKind for PhoneKind {
    const FIELD: Field = Field::Phone;
    const LABEL: &'static str = "Phone";

    fn validate(value: &str) -> std::result::Result<(), FieldValidationError> {
        validate_phone(value)
    }
}

impl ContactKind for EmailKind {
    const FIELD: Field = Field::Email;
    const LABEL: &'static str = "Email";

    fn validate(value: &str) -> std::result::Result<(), FieldValidationError> {
        validate_email(value)
    }
}

impl ContactKind for AddressKind {
    const FIELD: Field = Field::Address;
    const LABEL: &'static str = "Address";

    fn validate(value: &str) -> std::result::Result<(), FieldValidationError> {
        validate_address(value)
    }
}

/// On-disk shape shared by all contact fields.
#[derive(Serialize, Deserialize)]
pub struct RawContact {
    value: String,
    #[serde(default)]
    is_private: bool,
}

/// A validated contact value with its privacy flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawContact",
    into = "RawContact",
    bound = "K: ContactKind"
)]
pub struct ContactField<K: ContactKind> {
    value: String,
    is_private: bool,
    kind: PhantomData<K>,
}

pub type Phone = ContactField<PhoneKind>;
pub type Email = ContactField<EmailKind>;
pub type Address = ContactField<AddressKind>;

impl<K: ContactKind> ContactField<K> {
    pub fn new(value: impl Into<String>, is_private: bool) -> Result<Self> {
        let value = value.into().trim().to_string();
        K::validate(&value).map_err(|e| RoloError::validation(K::FIELD, e))?;
        Ok(Self {
            value,
            is_private,
            kind: PhantomData,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

impl<K: ContactKind> TryFrom<RawContact> for ContactField<K> {
    type Error = RoloError;

    fn try_from(raw: RawContact) -> Result<Self> {
        ContactField::new(raw.value, raw.is_private)
    }
}

impl<K: ContactKind> From<ContactField<K>> for RawContact {
    fn from(field: ContactField<K>) -> Self {
        RawContact {
            value: field.value,
            is_private: field.is_private,
        }
    }
}

impl<K: ContactKind> fmt::Display for ContactField<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", K::LABEL)?;
        if self.is_private {
            f.write_str(PRIVATE_MARKER)?;
        }
        f.write_str(&self.value)
    }
}

/// A single contact entry.
///
/// Equality is structural over every field, privacy flags and tags included.
/// The store uses it to reject exact duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    #[serde(default)]
    tags: TagSet,
}

impl PersonRecord {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: TagSet) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// One-line rendering of the record.
    ///
    /// With `show_private` false, private contact fields are left out
    /// entirely, which is what outside viewers get to see.
    pub fn display_text(&self, show_private: bool) -> String {
        let mut text = self.name.to_string();
        push_field(&mut text, &self.phone, show_private);
        push_field(&mut text, &self.email, show_private);
        push_field(&mut text, &self.address, show_private);
        text.push_str(" Tags: ");
        text.push_str(&self.tags.to_string());
        text
    }
}

fn push_field<K: ContactKind>(text: &mut String, field: &ContactField<K>, show_private: bool) {
    if field.is_private() && !show_private {
        return;
    }
    text.push(' ');
    text.push_str(&field.to_string());
}

/// Raw, unvalidated input for building a [`PersonRecord`].
#[derive(Debug, Clone, Default)]
pub struct PersonInput {
    pub name: String,
    pub phone: String,
    pub is_phone_private: bool,
    pub email: String,
    pub is_email_private: bool,
    pub address: String,
    pub is_address_private: bool,
    pub tags: Vec<String>,
}

impl PersonInput {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            ..Default::default()
        }
    }

    pub fn with_privacy(mut self, phone: bool, email: bool, address: bool) -> Self {
        self.is_phone_private = phone;
        self.is_email_private = email;
        self.is_address_private = address;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Validates every field and assembles the record.
    pub fn build(&self) -> Result<PersonRecord> {
        Ok(PersonRecord::new(
            Name::new(self.name.as_str())?,
            Phone::new(self.phone.as_str(), self.is_phone_private)?,
            Email::new(self.email.as_str(), self.is_email_private)?,
            Address::new(self.address.as_str(), self.is_address_private)?,
            TagSet::from_names(&self.tags)?,
        ))
    }
}
