//! Composition of the identity directory.
//!
//! The pool policy and the capability-tier role groups are part of the
//! platform's access model and never vary per environment; only the
//! sign-in domain prefix and the client's callback and logout URLs come
//! from configuration. The composer is network-independent.

use tracing::debug;

use crate::config::IdentityConfig;
use crate::error::{ConfigurationError, Result};
use crate::resources::{
    ClientRegistration, IdentityDirectory, MfaPolicy, OAuthScope, PasswordPolicy, RoleGroup,
    SignInAliases, StandardAttribute,
};

/// Name of the user pool.
const POOL_NAME: &str = "platform-main";

/// Name of the client application registration.
const CLIENT_NAME: &str = "platform-website";

/// The fixed capability-tier role groups, in creation order.
const ROLE_GROUPS: &[(&str, &str)] = &[
    ("admins", "Full administrative access to the system"),
    ("operators", "Operate day-to-day platform workflows"),
    ("contributors", "Create and edit platform content"),
    ("finance", "Manage payments and platform accounts"),
    ("managers", "Full access to the workspace"),
];

/// Composer for the identity directory.
#[derive(Debug, Default)]
pub struct IdentityComposer;

impl IdentityComposer {
    /// Creates a new identity composer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Composes the identity directory from the `IDENTITY` section.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the callback or logout URL
    /// is absent.
    pub fn compose(&self, config: &IdentityConfig) -> Result<IdentityDirectory> {
        let callback_url = config
            .callback_url
            .clone()
            .ok_or_else(|| ConfigurationError::missing_field("IDENTITY", "callback_url"))?;
        let logout_url = config
            .logout_url
            .clone()
            .ok_or_else(|| ConfigurationError::missing_field("IDENTITY", "logout_url"))?;

        let role_groups = ROLE_GROUPS
            .iter()
            .map(|(name, description)| RoleGroup {
                name: (*name).to_string(),
                description: (*description).to_string(),
            })
            .collect();

        let client = ClientRegistration {
            name: String::from(CLIENT_NAME),
            authorization_code_flow: true,
            scopes: vec![OAuthScope::Email, OAuthScope::OpenId, OAuthScope::Phone],
            callback_urls: vec![callback_url],
            logout_urls: vec![logout_url],
            generate_secret: false,
            prevent_user_existence_errors: true,
        };

        debug!(domain = %config.domain_prefix, "Composed identity directory");

        Ok(IdentityDirectory {
            pool_name: String::from(POOL_NAME),
            self_sign_up_enabled: true,
            deletion_protection: true,
            email_code_verification: true,
            sign_in_aliases: SignInAliases {
                email: true,
                username: true,
                phone: true,
            },
            auto_verify_email: true,
            keep_original_email: true,
            standard_attributes: vec![
                StandardAttribute {
                    name: String::from("email"),
                    required: true,
                    mutable: true,
                },
                StandardAttribute {
                    name: String::from("given_name"),
                    required: true,
                    mutable: true,
                },
            ],
            password_policy: PasswordPolicy {
                min_length: 8,
                require_digits: true,
                require_lowercase: true,
                require_uppercase: true,
            },
            email_only_recovery: true,
            mfa: MfaPolicy {
                optional: true,
                sms: true,
                otp: false,
            },
            role_groups,
            domain_prefix: config.domain_prefix.clone(),
            client,
        })
    }
}
