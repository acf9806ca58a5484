//! Cliente do feed de atividades do RD Station CRM
//!
//! O feed `/activities` é paginado e não filtra por negociação no volume
//! necessário, então o cliente lê todas as páginas em sequência:
//!
//! ```rust,ignore
//! use rdstation::ActivityFeedClient;
//!
//! let token = std::env::var("RD_CRM_TOKEN")?;
//! let client = ActivityFeedClient::new(token)?;
//! let activities = client.fetch_all_activities().await?;
//! ```

pub mod activities;
pub mod client;
pub mod error;

pub use activities::{ActivitiesPage, Activity};
pub use client::{ActivityFeedClient, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use error::{RdStationError, Result};
