pub mod types;

pub use types::{ActorType, User, UserId, UserLevel};
