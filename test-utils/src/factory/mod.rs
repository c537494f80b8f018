//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let ceo = factory::user::create_ceo(&db).await?;
//!
//!     // Create with all dependencies
//!     let (ceo, hotel, room) = factory::helpers::create_room_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("guest@example.com")
//!     .role(entity::user::UserRole::Ceo)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use hotel::create_hotel;
pub use reservation::create_reservation;
pub use room::create_room;
pub use user::{create_ceo, create_user};
