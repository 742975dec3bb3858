//! Инфраструктурный слой вокруг движка:
//! - конфиг движка;
//! - выдача GameId;
//! - RNG-реализации для движка;
//! - маппинг domain → снапшот для клиентов.

pub mod config;
pub mod ids;
pub mod mapping;
pub mod rng;

pub use config::*;
pub use ids::*;
pub use mapping::*;
pub use rng::*;
