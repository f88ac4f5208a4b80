//! Clubhouse Test Utils
//!
//! Shared testing utilities for the clubhouse API. The crate offers a builder for test
//! contexts backed by an in-memory SQLite database, plus factories that insert club
//! records with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder for configuring test environments
//! - **TestContext**: database connection and session for a single test
//! - **TestError**: errors that can occur during test setup
//! - **factory**: builders for users, tenants and tenant content
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn creates_album() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().with_club_tables().build().await?;
//!     let db = test.database().await?;
//!
//!     let (team, admin) = factory::helpers::create_team_with_admin(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
