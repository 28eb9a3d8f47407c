//! Items Domain
//!
//! This module provides a complete domain implementation for managing
//! catalog items held in process memory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{InMemoryItemRepository, ItemService, handlers};
//!
//! // Create the store, seeded with the two demo records
//! let repository = InMemoryItemRepository::seeded();
//! let service = ItemService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult, NotFoundDetail};
pub use handlers::ApiDoc;
pub use memory::InMemoryItemRepository;
pub use models::{Item, ItemRecord};
pub use repository::ItemRepository;
pub use service::ItemService;
