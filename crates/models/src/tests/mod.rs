/// CRUD operations against the entities
pub mod crud_tests;
