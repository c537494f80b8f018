//! Account registration, login and session establishment.
//!
//! Passwords are hashed with argon2id using a per-password random salt.
//! Login failures never reveal whether the email or the password was wrong.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterParams, User},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Email and mobile number must both be unused. The password is hashed
    /// before the account is stored.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Conflict)` - Email or mobile already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_exists(&params.email).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }
        if repo.mobile_exists(&params.mobile).await? {
            return Err(AppError::Conflict(
                "Mobile number is already registered".to_string(),
            ));
        }

        let password_hash = hash_password(&params.password)?;

        let user = repo
            .create(CreateUserParams {
                email: params.email,
                password_hash,
                name: params.name,
                mobile: params.mobile,
                role: params.role,
            })
            .await?;

        Ok(user)
    }

    /// Verifies login credentials.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or
    ///   wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some((user, stored_hash)) = repo.find_credentials_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &stored_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

/// Hashes a password with argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AppError::InternalError(format!("Failed to hash password: {}", err)))
}

/// Verifies a password against a stored argon2 hash string.
///
/// A malformed stored hash is an internal error; a mismatch is `Ok(false)`.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|err| AppError::InternalError(format!("Malformed password hash: {}", err)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
