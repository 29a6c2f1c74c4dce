//! Identity directory specification types.
//!
//! The directory's pool policy and role groups encode the platform's
//! access model; only the sign-in domain and the client's callback and
//! logout URLs come from configuration.

use serde::{Deserialize, Serialize};

/// Password complexity policy for the user pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum password length.
    pub min_length: u8,
    /// Require at least one digit.
    pub require_digits: bool,
    /// Require at least one lowercase letter.
    pub require_lowercase: bool,
    /// Require at least one uppercase letter.
    pub require_uppercase: bool,
}

/// Sign-in aliases accepted by the pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInAliases {
    /// Sign in with email address.
    pub email: bool,
    /// Sign in with username.
    pub username: bool,
    /// Sign in with phone number.
    pub phone: bool,
}

/// Multi-factor authentication policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MfaPolicy {
    /// Whether users may opt out of a second factor.
    pub optional: bool,
    /// SMS codes as second factor.
    pub sms: bool,
    /// One-time-password apps as second factor.
    pub otp: bool,
}

/// A required-and-mutable standard attribute of every user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandardAttribute {
    /// Attribute name.
    pub name: String,
    /// Whether the attribute must be supplied at sign-up.
    pub required: bool,
    /// Whether the attribute can change after sign-up.
    pub mutable: bool,
}

/// A named role group establishing a capability boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleGroup {
    /// Group name, unique within the pool.
    pub name: String,
    /// Human-readable capability description.
    pub description: String,
}

/// OAuth scopes bound to the client registration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OAuthScope {
    /// Email address scope.
    Email,
    /// OpenID Connect scope.
    OpenId,
    /// Phone number scope.
    Phone,
}

/// The client application registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientRegistration {
    /// Client name.
    pub name: String,
    /// Whether the authorization-code OAuth flow is enabled.
    pub authorization_code_flow: bool,
    /// OAuth scopes granted to the client.
    pub scopes: Vec<OAuthScope>,
    /// Callback URLs for the authorization-code flow.
    pub callback_urls: Vec<String>,
    /// Logout redirect URLs.
    pub logout_urls: Vec<String>,
    /// Whether a client secret is generated. Always false for a
    /// public browser client.
    pub generate_secret: bool,
    /// Whether user-existence errors are masked.
    pub prevent_user_existence_errors: bool,
}

/// The composed identity directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityDirectory {
    /// Pool name.
    pub pool_name: String,
    /// Whether users can sign themselves up.
    pub self_sign_up_enabled: bool,
    /// Hard block against pool destruction.
    pub deletion_protection: bool,
    /// Whether email verification uses a code (as opposed to a link).
    pub email_code_verification: bool,
    /// Accepted sign-in aliases.
    pub sign_in_aliases: SignInAliases,
    /// Whether email addresses are verified automatically.
    pub auto_verify_email: bool,
    /// Whether the original email stays active until the new one verifies.
    pub keep_original_email: bool,
    /// Required-and-mutable standard attributes.
    pub standard_attributes: Vec<StandardAttribute>,
    /// Password complexity policy.
    pub password_policy: PasswordPolicy,
    /// Whether account recovery is restricted to email.
    pub email_only_recovery: bool,
    /// Multi-factor authentication policy.
    pub mfa: MfaPolicy,
    /// Fixed capability-tier role groups.
    pub role_groups: Vec<RoleGroup>,
    /// Public sign-in domain prefix.
    pub domain_prefix: String,
    /// The single client application registration.
    pub client: ClientRegistration,
}
