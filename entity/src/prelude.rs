pub use super::album::Entity as Album;
pub use super::arena::Entity as Arena;
pub use super::banner::Entity as Banner;
pub use super::city::Entity as City;
pub use super::event::Entity as Event;
pub use super::info::Entity as Info;
pub use super::news::Entity as News;
pub use super::photo::Entity as Photo;
pub use super::player::Entity as Player;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
