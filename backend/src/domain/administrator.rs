//! Administrator data model.
//!
//! Inbound payloads are validated into [`AdministratorRequest`] before they
//! reach the service. The persisted [`Administrator`] never leaves the domain
//! directly: callers only ever see the password-free
//! [`AdministratorResponse`] projection.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Validation errors raised while building administrator values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdministratorValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Email is not shaped like `local@domain`.
    InvalidEmail,
    /// Password was empty.
    EmptyPassword,
    /// Invitation code was missing or blank once trimmed.
    EmptyInvitationCode,
}

impl AdministratorValidationError {
    /// Request field the failure refers to, as named in JSON payloads.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyEmail | Self::InvalidEmail => "email",
            Self::EmptyPassword => "password",
            Self::EmptyInvitationCode => "invitationCode",
        }
    }

    /// Stable machine-readable code for error details.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyEmail => "empty_email",
            Self::InvalidEmail => "invalid_email",
            Self::EmptyPassword => "empty_password",
            Self::EmptyInvitationCode => "empty_invitation_code",
        }
    }
}

impl fmt::Display for AdministratorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must look like local@domain"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::EmptyInvitationCode => write!(f, "invitation code must not be empty"),
        }
    }
}

impl std::error::Error for AdministratorValidationError {}

/// Administrator email address; the unique identifier of an administrator.
///
/// ## Invariants
/// - Non-empty, with no surrounding or embedded whitespace.
/// - Exactly one `@` separating a non-empty local part and domain.
///
/// Comparison is exact: `A@x.com` and `a@x.com` are different administrators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    ///
    /// # Examples
    /// ```
    /// use admin_backend::domain::Email;
    ///
    /// assert!(Email::new("a@x.com").is_ok());
    /// assert!(Email::new("a.x.com").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, AdministratorValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, AdministratorValidationError> {
        if email.trim().is_empty() {
            return Err(AdministratorValidationError::EmptyEmail);
        }
        if email.chars().any(char::is_whitespace) {
            return Err(AdministratorValidationError::InvalidEmail);
        }
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(email))
            }
            _ => Err(AdministratorValidationError::InvalidEmail),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = AdministratorValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Validated input shared by registration, sign-in and update.
///
/// ## Invariants
/// - `password` is non-empty and kept verbatim, whitespace included.
/// - `invitation_code` is non-blank and kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdministratorRequest {
    email: Email,
    password: Zeroizing<String>,
    invitation_code: String,
}

impl AdministratorRequest {
    /// Build a request from raw payload fields.
    ///
    /// # Examples
    /// ```
    /// use admin_backend::domain::AdministratorRequest;
    ///
    /// let request = AdministratorRequest::try_from_parts("a@x.com", "p", "INV1").unwrap();
    /// assert_eq!(request.email().as_str(), "a@x.com");
    /// assert_eq!(request.invitation_code(), "INV1");
    /// ```
    pub fn try_from_parts(
        email: &str,
        password: &str,
        invitation_code: &str,
    ) -> Result<Self, AdministratorValidationError> {
        let email = Email::new(email)?;
        if password.is_empty() {
            return Err(AdministratorValidationError::EmptyPassword);
        }
        if invitation_code.trim().is_empty() {
            return Err(AdministratorValidationError::EmptyInvitationCode);
        }
        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
            invitation_code: invitation_code.to_owned(),
        })
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn invitation_code(&self) -> &str {
        self.invitation_code.as_str()
    }
}

/// Persisted administrator account.
///
/// `invitation_code` is optional only to represent rows written before the
/// registration invariant existed; registration always sets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Administrator {
    email: Email,
    password: Zeroizing<String>,
    invitation_code: Option<String>,
}

impl Administrator {
    pub fn new(email: Email, password: impl Into<String>, invitation_code: Option<String>) -> Self {
        Self {
            email,
            password: Zeroizing::new(password.into()),
            invitation_code,
        }
    }

    /// Build the entity persisted by a successful registration.
    pub fn from_request(request: &AdministratorRequest) -> Self {
        Self::new(
            request.email().clone(),
            request.password(),
            Some(request.invitation_code().to_owned()),
        )
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn invitation_code(&self) -> Option<&str> {
        self.invitation_code.as_deref()
    }

    /// Overwrite every field with the request's values.
    ///
    /// The request email is also the lookup key, so in practice only the
    /// password and invitation code change.
    pub fn overwrite_with(&mut self, request: &AdministratorRequest) {
        self.email = request.email().clone();
        self.password = Zeroizing::new(request.password().to_owned());
        self.invitation_code = Some(request.invitation_code().to_owned());
    }
}

/// Outward projection of an [`Administrator`]; never carries the password.
///
/// # Examples
/// ```
/// use admin_backend::domain::{Administrator, AdministratorResponse, Email};
///
/// let admin = Administrator::new(
///     Email::new("a@x.com").unwrap(),
///     "p",
///     Some("INV1".to_owned()),
/// );
/// let json = serde_json::to_value(AdministratorResponse::from(&admin)).unwrap();
/// assert_eq!(json, serde_json::json!({ "email": "a@x.com", "invitationCode": "INV1" }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdministratorResponse {
    pub email: String,
    pub invitation_code: Option<String>,
}

impl From<&Administrator> for AdministratorResponse {
    fn from(value: &Administrator) -> Self {
        Self {
            email: value.email().to_string(),
            invitation_code: value.invitation_code().map(str::to_owned),
        }
    }
}

impl From<Administrator> for AdministratorResponse {
    fn from(value: Administrator) -> Self {
        Self::from(&value)
    }
}

#[cfg(test)]
mod tests {
    //! Validation and projection coverage for administrator values.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@x.com")]
    #[case("first.last+tag@sub.example.org")]
    fn email_accepts_well_formed_addresses(#[case] raw: &str) {
        let email = Email::new(raw).expect("valid email");
        assert_eq!(email.as_str(), raw);
    }

    #[rstest]
    #[case("", AdministratorValidationError::EmptyEmail)]
    #[case("   ", AdministratorValidationError::EmptyEmail)]
    #[case("no-at-sign", AdministratorValidationError::InvalidEmail)]
    #[case("@x.com", AdministratorValidationError::InvalidEmail)]
    #[case("a@", AdministratorValidationError::InvalidEmail)]
    #[case("a@b@c", AdministratorValidationError::InvalidEmail)]
    #[case(" a@x.com", AdministratorValidationError::InvalidEmail)]
    #[case("a b@x.com", AdministratorValidationError::InvalidEmail)]
    fn email_rejects_malformed_addresses(
        #[case] raw: &str,
        #[case] expected: AdministratorValidationError,
    ) {
        assert_eq!(Email::new(raw), Err(expected));
    }

    #[rstest]
    fn email_deserialisation_validates() {
        let ok: Result<Email, _> = serde_json::from_str("\"a@x.com\"");
        let bad: Result<Email, _> = serde_json::from_str("\"nope\"");
        assert!(ok.is_ok());
        assert!(bad.is_err());
    }

    #[rstest]
    #[case("a@x.com", "", "INV1", AdministratorValidationError::EmptyPassword)]
    #[case("a@x.com", "p", "  ", AdministratorValidationError::EmptyInvitationCode)]
    #[case("", "p", "INV1", AdministratorValidationError::EmptyEmail)]
    fn request_rejects_missing_fields(
        #[case] email: &str,
        #[case] password: &str,
        #[case] code: &str,
        #[case] expected: AdministratorValidationError,
    ) {
        let result = AdministratorRequest::try_from_parts(email, password, code);
        assert_eq!(result, Err(expected));
    }

    #[rstest]
    fn request_keeps_password_whitespace() {
        let request =
            AdministratorRequest::try_from_parts("a@x.com", " p ", "INV1").expect("request");
        assert_eq!(request.password(), " p ");
    }

    #[rstest]
    #[case(AdministratorValidationError::EmptyEmail, "email", "empty_email")]
    #[case(AdministratorValidationError::InvalidEmail, "email", "invalid_email")]
    #[case(AdministratorValidationError::EmptyPassword, "password", "empty_password")]
    #[case(
        AdministratorValidationError::EmptyInvitationCode,
        "invitationCode",
        "empty_invitation_code"
    )]
    fn validation_errors_name_their_field(
        #[case] error: AdministratorValidationError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        assert_eq!(error.field(), field);
        assert_eq!(error.code(), code);
    }

    #[rstest]
    fn from_request_copies_fields_verbatim() {
        let request =
            AdministratorRequest::try_from_parts("a@x.com", "p", "INV1").expect("request");
        let admin = Administrator::from_request(&request);

        assert_eq!(admin.email().as_str(), "a@x.com");
        assert_eq!(admin.password(), "p");
        assert_eq!(admin.invitation_code(), Some("INV1"));
    }

    #[rstest]
    fn overwrite_replaces_password_and_code() {
        let email = Email::new("a@x.com").expect("email");
        let mut admin = Administrator::new(email, "old", Some("INV1".to_owned()));
        let request =
            AdministratorRequest::try_from_parts("a@x.com", "new", "INV2").expect("request");

        admin.overwrite_with(&request);

        assert_eq!(admin.password(), "new");
        assert_eq!(admin.invitation_code(), Some("INV2"));
    }

    #[rstest]
    fn response_projection_omits_password() {
        let email = Email::new("a@x.com").expect("email");
        let admin = Administrator::new(email, "secret", None);
        let value = serde_json::to_value(AdministratorResponse::from(&admin)).expect("json");

        assert!(value.get("password").is_none());
        assert_eq!(value.get("invitationCode"), Some(&serde_json::Value::Null));
    }
}
