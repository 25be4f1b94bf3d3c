pub mod compound;
pub mod lease;
pub mod rent_points;
pub mod rental_yield;
