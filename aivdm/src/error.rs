//! Structured, non-fatal errors reported while decoding.
//!
//! Nothing in this crate aborts a stream. Parsers return their best-effort
//! result together with an [`ErrorReport`], and callers decide which kinds are
//! fatal for them.

use std::fmt;

/// The category of a decoding problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A payload byte is not a legal 6-bit armor character.
    InvalidCharacter,
    /// The padding bit count is outside 0..=5.
    InvalidPadding,
    /// A declared checksum does not match the XOR of the covered bytes.
    ChecksumMismatch,
    /// A field has a value that does not follow its grammar.
    MalformedField,
    /// A tag block field key is not recognized (strict mode only).
    UnknownField,
    /// A sentence is structurally unusable.
    MalformedSentence,
    /// A fragment index lies outside `[1, total]`.
    GroupIndexOutOfRange,
    /// A fragment declares a different total than its group.
    GroupTotalMismatch,
    /// A partially received group was dropped to bound memory use.
    IncompleteGroupEvicted,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidCharacter => "invalid character",
            ErrorKind::InvalidPadding => "invalid padding",
            ErrorKind::ChecksumMismatch => "checksum mismatch",
            ErrorKind::MalformedField => "malformed field",
            ErrorKind::UnknownField => "unknown field",
            ErrorKind::MalformedSentence => "malformed sentence",
            ErrorKind::GroupIndexOutOfRange => "group index out of range",
            ErrorKind::GroupTotalMismatch => "group total mismatch",
            ErrorKind::IncompleteGroupEvicted => "incomplete group evicted",
        };
        f.write_str(name)
    }
}

/// One structured error: what went wrong, a readable explanation, and the
/// offending raw text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct AisError {
    pub kind: ErrorKind,
    pub message: String,
    pub raw: String,
}

impl AisError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            raw: raw.into(),
        }
    }
}

/// Accumulates zero or more errors for the processing of one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReport {
    errors: Vec<AisError>,
}

impl ErrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: AisError) {
        self.errors.push(error);
    }

    pub fn report(&mut self, kind: ErrorKind, message: impl Into<String>, raw: impl Into<String>) {
        self.push(AisError::new(kind, message, raw));
    }

    /// Moves every error of `other` into this report, keeping their order.
    pub fn append(&mut self, other: ErrorReport) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AisError> {
        self.errors.iter()
    }
}

impl From<AisError> for ErrorReport {
    fn from(error: AisError) -> Self {
        Self { errors: vec![error] }
    }
}

impl IntoIterator for ErrorReport {
    type Item = AisError;
    type IntoIter = std::vec::IntoIter<AisError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'r> IntoIterator for &'r ErrorReport {
    type Item = &'r AisError;
    type IntoIter = std::slice::Iter<'r, AisError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// A best-effort value together with the errors reported while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reported<T> {
    pub value: T,
    pub errors: ErrorReport,
}

impl<T> Reported<T> {
    pub fn new(value: T, errors: ErrorReport) -> Self {
        Self { value, errors }
    }

    pub fn into_parts(self) -> (T, ErrorReport) {
        (self.value, self.errors)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reported<U> {
        Reported::new(f(self.value), self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AisError::new(ErrorKind::InvalidCharacter, "byte 0x21 at index 3", "AB!");
        assert_eq!(err.to_string(), "invalid character: byte 0x21 at index 3");
        assert_eq!(err.raw, "AB!");
    }

    #[test]
    fn test_report_accumulates_in_order() {
        let mut report = ErrorReport::new();
        assert!(report.is_empty());

        report.report(ErrorKind::ChecksumMismatch, "first", "x");
        let mut other = ErrorReport::new();
        other.report(ErrorKind::UnknownField, "second", "y");
        report.append(other);

        assert_eq!(report.len(), 2);
        assert!(report.contains(ErrorKind::UnknownField));
        assert!(!report.contains(ErrorKind::MalformedField));
        let kinds: Vec<_> = report.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![ErrorKind::ChecksumMismatch, ErrorKind::UnknownField]);
    }

    #[test]
    fn test_reported_map_keeps_errors() {
        let reported = Reported::new(2, AisError::new(ErrorKind::MalformedField, "m", "r").into());
        let mapped = reported.map(|v| v * 10);
        assert_eq!(mapped.value, 20);
        assert_eq!(mapped.errors.len(), 1);
    }
}
