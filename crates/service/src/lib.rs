//! Service layer providing the cliente / prestador / servico operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Shapes every response through `views`.

pub mod errors;
pub mod views;
pub mod db;
#[cfg(test)]
pub mod test_support;
