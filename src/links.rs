// SPDX-License-Identifier: PMPL-1.0-or-later

//! Outbound link construction (phone, email, WhatsApp, Instagram)
//!
//! These are URLs handed to the browser, not protocols this crate speaks.
//! Booking messages always name the item by its English name so the front
//! desk sees one language regardless of the visitor's.

use crate::types::{ContactInfo, Package, Service};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

const WHATSAPP_BASE: &str = "https://wa.me";
const INSTAGRAM_BASE: &str = "https://instagram.com";

/// Bytes `encodeURIComponent` escapes: all but ASCII alphanumerics and
/// `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `value` the way `encodeURIComponent` does, with
/// upper-case hex over the UTF-8 bytes.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn tel_link(phone: &str) -> String {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{compact}")
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{email}")
}

pub fn whatsapp_link(number: &str) -> String {
    format!("{WHATSAPP_BASE}/{number}")
}

/// WhatsApp chat link with a pre-filled message.
pub fn whatsapp_message_link(number: &str, message: &str) -> String {
    format!("{WHATSAPP_BASE}/{number}?text={}", encode_component(message))
}

pub fn instagram_link(handle: &str) -> String {
    format!("{INSTAGRAM_BASE}/{}", handle.trim_start_matches('@'))
}

/// Something a visitor can ask to book.
#[derive(Debug, Clone, Copy)]
pub enum BookingTarget<'a> {
    Service(&'a Service),
    Package(&'a Package),
}

impl BookingTarget<'_> {
    pub fn message(&self) -> String {
        match self {
            BookingTarget::Service(service) => format!("I'd like to book {}", service.name.en),
            BookingTarget::Package(package) => {
                format!("I'd like to book package: {}", package.name.en)
            }
        }
    }

    pub fn link(&self, contact: &ContactInfo) -> String {
        whatsapp_message_link(&contact.whatsapp, &self.message())
    }
}

/// Every outbound contact link for a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLinks {
    pub phone: String,
    pub email: String,
    pub whatsapp: String,
    pub instagram: String,
}

impl ContactLinks {
    pub fn from_contact(contact: &ContactInfo) -> Self {
        Self {
            phone: tel_link(&contact.phone),
            email: mailto_link(&contact.email),
            whatsapp: whatsapp_link(&contact.whatsapp),
            instagram: instagram_link(&contact.instagram),
        }
    }
}
