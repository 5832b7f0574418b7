//! Account aggregate: the authenticated user of the chat.

use crate::domain::Aggregate;
use crate::error::AuthenticationError;
use crate::value_objects::{DisplayName, Email, Identifier, Password, Token};

/// A registered user with credentials and a display name.
///
/// ```rust
/// use chat_domain::domain::Account;
/// use chat_domain::value_objects::{DisplayName, Email, Password};
///
/// let account = Account::register(
///     Email::new("a@b.com").unwrap(),
///     Password::new("pw").unwrap(),
///     DisplayName::new("Ann").unwrap(),
/// );
/// let token = account.authenticate(&Password::new("pw").unwrap()).unwrap();
/// assert_eq!(token.as_str(), "pw");
/// assert!(account.authenticate(&Password::new("wrong").unwrap()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: Identifier,
    email: Email,
    password: Password,
    name: DisplayName,
}

impl Account {
    /// Create a new account with a freshly generated identifier.
    pub fn register(email: Email, password: Password, name: DisplayName) -> Self {
        Self::restore(Identifier::generate(), email, password, name)
    }

    /// Rebuild an account whose identifier is already known.
    pub fn restore(id: Identifier, email: Email, password: Password, name: DisplayName) -> Self {
        Self {
            id,
            email,
            password,
            name,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Check `candidate` against the stored password.
    ///
    /// On success returns the token derived from the password.
    pub fn authenticate(&self, candidate: &Password) -> Result<Token, AuthenticationError> {
        if self.password != *candidate {
            return Err(AuthenticationError::InvalidCredentials);
        }
        Ok(Token::from_password(&self.password))
    }

    /// Whether `token` is the one this account's password derives.
    pub fn owns_token(&self, token: &Token) -> bool {
        Token::from_password(&self.password) == *token
    }

    pub fn rename(&mut self, name: DisplayName) {
        self.name = name;
    }
}

impl Aggregate for Account {
    const KIND: &'static str = "Account";

    fn id(&self) -> &Identifier {
        &self.id
    }
}
