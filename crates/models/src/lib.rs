//! Entities of the pizza restaurant domain.
//!
//! `restaurant` and `pizza` are joined through `restaurant_pizza`, a priced
//! menu entry. Each entity module carries its own validation helpers and the
//! JSON views handed out by the HTTP layer.
pub mod errors;
pub mod db;
pub mod restaurant;
pub mod pizza;
pub mod restaurant_pizza;

#[cfg(test)]
mod tests;
