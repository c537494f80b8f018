mod hotel;
mod reservation;
mod user;
mod wish;
