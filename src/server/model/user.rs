use entity::user::UserRole;

use crate::model::user::RegisterUserDto;
use crate::server::error::AppError;

/// Authenticated user without credential material.
///
/// The password hash never leaves the data layer except through
/// `UserRepository::find_credentials_by_email`, which the auth service uses
/// for login verification.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub mobile: String,
    pub role: UserRole,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            mobile: entity.mobile,
            role: entity.role,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> crate::model::user::UserDto {
        crate::model::user::UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            mobile: self.mobile,
            role: self.role.as_str().to_string(),
        }
    }
}

/// Parameters for creating a user account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub mobile: String,
    pub role: UserRole,
}

/// Registration request with the password still in plain text.
///
/// The auth service hashes the password before anything is persisted.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    pub password: String,
    pub name: String,
    pub mobile: String,
    pub role: UserRole,
}

impl RegisterParams {
    /// Converts a registration DTO, resolving the requested role.
    ///
    /// # Returns
    /// - `Ok(RegisterParams)` - Role omitted (defaults to USER) or recognized
    /// - `Err(AppError::BadRequest)` - Unknown role string
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        let role = match dto.role.as_deref() {
            None => UserRole::User,
            Some(value) => UserRole::parse(value)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown role '{}'", value)))?,
        };

        Ok(Self {
            email: dto.email,
            password: dto.password,
            name: dto.name,
            mobile: dto.mobile,
            role,
        })
    }
}
