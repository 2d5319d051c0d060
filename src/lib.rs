//! # contact-center-client
//!
//! Client-side API gateway for the contact center mobile app. It builds
//! JSON POST requests for the app's backend and decodes the responses into
//! typed values:
//!
//! - `/api/jwt` issues a [`NexmoUser`] (user name + JWT)
//! - `/api/whisper` returns the [`WhisperInfo`] ids for an agent whisper
//! - `/api/queue` lists the [`QueuedConversation`]s waiting for an agent
//!
//! Every request carries the configured `mobile_api_key`. Failures are
//! reported as [`ApiError`]: parameter/URL problems before anything is sent,
//! transport failures, or payloads that don't decode.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use contact_center_client::{ApiClient, Config};
//!
//! # async fn run() -> contact_center_client::Result<()> {
//! let config = Config::from_url("https://cc.example.com", "mobile-key".to_string())?;
//! let client = ApiClient::new(config)?;
//!
//! let user = client.fetch_token("jane").await?;
//! println!("token for {}: {}", user.user_name, user.token);
//!
//! for conversation in client.fetch_conversation_queue().await? {
//!     println!("waiting: {}", conversation.conversation_id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Callbacks
//!
//! ```no_run
//! use contact_center_client::{callback, ApiClient};
//!
//! # async fn run(client: ApiClient) {
//! let worker = client.clone();
//! callback::dispatch(
//!     async move { worker.fetch_whisper_info().await },
//!     |info| println!("whisper to leg {}", info.agent_leg_id),
//!     |error| eprintln!("whisper info failed: {}", error),
//! );
//! # }
//! ```

pub mod api;
pub mod callback;
pub mod config;
pub mod conversation;
pub mod error;
pub mod request;
pub mod response;
pub mod user;

// Re-export main types for convenience
pub use api::ApiClient;
pub use config::Config;
pub use conversation::QueuedConversation;
pub use error::{ApiError, Result};
pub use request::{build_request, encode, Params, RequestDescriptor};
pub use response::{FromJson, WhisperInfo};
pub use user::NexmoUser;
