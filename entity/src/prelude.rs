pub use super::hotel::Entity as Hotel;
pub use super::reservation::Entity as Reservation;
pub use super::room::Entity as Room;
pub use super::user::Entity as User;
pub use super::wish::Entity as Wish;
