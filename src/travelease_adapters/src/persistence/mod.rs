pub mod in_memory_document_store;
pub mod json_file_document_store;

pub use in_memory_document_store::InMemoryDocumentStore;
pub use json_file_document_store::JsonFileDocumentStore;
