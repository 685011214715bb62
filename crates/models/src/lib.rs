pub mod errors;
pub mod db;
pub mod validation;
pub mod cliente;
pub mod prestador;
pub mod servico;

#[cfg(test)]
mod tests;
