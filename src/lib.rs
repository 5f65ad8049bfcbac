#![no_std]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]

extern crate alloc;
use alloc::{borrow::Cow, string::String};

use log::{debug, trace};
use thiserror::Error;

pub mod punycode;
use crate::punycode::PunyDecodeError;

mod separator;
pub use separator::Separator;

/// The prefix used before a punycode label.
pub const PREFIX: &str = "xn--";

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ToUnicodeError {
    #[error(transparent)]
    Punycode(#[from] PunyDecodeError),
    #[error("no at sign in the e-mail address")]
    NoAtSignInEmail,
}

/// Decodes a single host name label.
///
/// Labels that do not start with [`PREFIX`] are returned unchanged. The prefix match is
/// case-sensitive. Decoded labels are lowercased one code point at a time, so a trailing `Σ`
/// becomes `σ` rather than `ς`.
///
/// # Errors
///
/// Any [`PunyDecodeError`] from decoding the label body.
///
/// # Examples
///
/// ```
/// # use puny::decode_label;
/// assert_eq!(decode_label("xn--Bcher-kva").as_deref(), Ok("bücher"));
/// assert_eq!(decode_label("Bücher").as_deref(), Ok("Bücher"));
/// ```
pub fn decode_label(label: &str) -> Result<Cow<'_, str>, PunyDecodeError> {
    let Some(body) = label.strip_prefix(PREFIX) else {
        return Ok(Cow::Borrowed(label));
    };

    let decoded = punycode::decode(body)?;
    trace!("decoded label {label:?} as {decoded:?}");
    Ok(Cow::Owned(
        decoded.chars().flat_map(char::to_lowercase).collect::<String>(),
    ))
}

/// Decodes every ACE label of a host name.
///
/// Labels are split on any [`Separator`] and joined back with `.`. Host names that do not
/// contain [`PREFIX`] are returned unchanged, separators included.
///
/// # Errors
///
/// The first [`PunyDecodeError`] from any label.
///
/// # Examples
///
/// ```
/// # use puny::decode_hostname;
/// assert_eq!(decode_hostname("xn--maana-pta。com").as_deref(), Ok("mañana.com"));
/// assert_eq!(decode_hostname("example.com.").as_deref(), Ok("example.com."));
/// ```
pub fn decode_hostname(s: &str) -> Result<Cow<'_, str>, PunyDecodeError> {
    if !s.contains(PREFIX) {
        return Ok(Cow::Borrowed(s));
    }

    let mut ret = String::with_capacity(s.len());
    let mut start = 0;
    for (i, sep) in s
        .char_indices()
        .filter_map(|(i, c)| Separator::of(c).map(|sep| (i, sep)))
    {
        push_label(&mut ret, &s[start..i])?;
        ret.push('.');
        start = i + sep.len_utf8();
    }
    push_label(&mut ret, &s[start..])?;

    trace!("decoded host name {s:?} as {ret:?}");
    Ok(Cow::Owned(ret))
}

fn push_label(ret: &mut String, label: &str) -> Result<(), PunyDecodeError> {
    let decoded = decode_label(label).inspect_err(|e| debug!("label {label:?}: {e}"))?;
    ret.push_str(&decoded);
    Ok(())
}

/// Decodes the domain part of an e-mail address.
///
/// The address is split on the first `@`. The local part is kept verbatim and the domain goes
/// through [`decode_hostname`].
///
/// # Errors
///
/// - [`ToUnicodeError::NoAtSignInEmail`] if `s` has no `@`.
/// - [`ToUnicodeError::Punycode`] if the domain fails to decode.
///
/// # Examples
///
/// ```
/// # use puny::{decode_email, ToUnicodeError};
/// assert_eq!(
///     decode_email("user@xn--caf-dma.com").as_deref(),
///     Ok("user@café.com")
/// );
/// assert_eq!(decode_email("noatsign"), Err(ToUnicodeError::NoAtSignInEmail));
/// ```
pub fn decode_email(s: &str) -> Result<Cow<'_, str>, ToUnicodeError> {
    let Some((local, domain)) = s.split_once('@') else {
        debug!("e-mail address {s:?} has no at sign");
        return Err(ToUnicodeError::NoAtSignInEmail);
    };

    match decode_hostname(domain)? {
        Cow::Borrowed(_) => Ok(Cow::Borrowed(s)),
        Cow::Owned(domain) => {
            let mut ret = String::with_capacity(local.len() + 1 + domain.len());
            ret.push_str(local);
            ret.push('@');
            ret.push_str(&domain);
            Ok(Cow::Owned(ret))
        }
    }
}
