//! Service layer: one function per data operation on top of `models`.
//! - Reads return the JSON views defined next to each entity.
//! - Writes run inside a single transaction; an early return drops it and rolls back.

pub mod errors;
pub mod restaurant_service;
pub mod pizza_service;
pub mod restaurant_pizza_service;
pub mod seed;
#[cfg(test)]
pub mod test_support;
