pub mod client;
pub mod couple;
pub mod factory;
pub mod schema;

pub use crate::domain::model::{Actor, ActorNationality, Actress, ActressNationality, Person};
pub use crate::domain::ports::{CastSource, ConfigProvider, Entity};
pub use crate::utils::error::Result;
