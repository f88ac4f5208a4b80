//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand for
//! quick default creation. Tenant content factories take the owning team id explicitly so
//! tests control which tenant a record lands in.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (team, admin) = factory::helpers::create_team_with_admin(&db).await?;
//! let album = factory::album::AlbumFactory::new(&db, team.id)
//!     .name("Season 2024")
//!     .main(true)
//!     .build()
//!     .await?;
//! ```

pub mod album;
pub mod arena;
pub mod banner;
pub mod city;
pub mod helpers;
pub mod info;
pub mod news;
pub mod photo;
pub mod player;
pub mod team;
pub mod user;

pub use album::create_album;
pub use arena::create_arena;
pub use banner::create_banner;
pub use city::create_city;
pub use info::create_info;
pub use news::create_news;
pub use photo::create_photo;
pub use player::create_player;
pub use team::create_team;
pub use user::create_user;
