pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, ClientSettings};
pub use core::client::ApiClient;
pub use core::factory::{
    create_actor, create_actress, update_actor, update_actress, ActorUpdate, ActressUpdate,
    NewActor, NewActress,
};
pub use core::schema::{is_actor, is_actress};
pub use domain::model::{Actor, ActorNationality, Actress, ActressNationality, Person};
pub use domain::ports::{CastSource, ConfigProvider, Entity};
pub use utils::error::{ClientError, Result};
