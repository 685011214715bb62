pub mod cliente_service;
pub mod prestador_service;
pub mod servico_service;
