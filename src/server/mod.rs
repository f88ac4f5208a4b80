//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO conversion
//! - **Service Layer** (`service/`) - Orchestrates the scope engine and the repositories
//! - **Engine** (`engine/`) - Name collisions, singleton flags and dense positions over a
//!   storage port
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Middleware** resolves the session user and its team
//! 3. **Controller** converts DTOs to params and calls a service
//! 4. **Service** validates, runs the collision check, persists, then runs the best-effort
//!    flag and position follow-ups
//! 5. **Controller** converts the domain model to a DTO inside the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod engine;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
