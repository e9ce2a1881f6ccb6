//! StyleMorph session core
//!
//! Owns every piece of mutable application data — asset libraries, the draft
//! queue, the history ledger, selection state, in-flight flags — and
//! coordinates the async pipelines that call the external synthesis service:
//!
//! 1. **Analysis**: reference image -> batch of editable description drafts
//! 2. **Draft synthesis**: one draft -> one generated clothing asset
//! 3. **Batch try-on**: model x clothing x pose x angles -> history records
//!
//! Mutation happens only in short lock scopes on either side of an external
//! call, never while one is in flight. The batch pipeline is the single
//! point of true fan-out: one request per selected angle, issued together,
//! committed all-or-nothing.
//!
//! # Example
//!
//! ```rust,ignore
//! use morph_session::{Session, SessionConfig};
//! use std::sync::Arc;
//!
//! # async fn example(service: Arc<dyn morph_service::SynthesisService>) {
//! let session = Session::new(SessionConfig::default(), service);
//! session.upload_model("data:image/png;base64,...".into());
//! let records = session.synthesize_batch().await;
//! # }
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod guard;
pub mod session;
pub mod simulator;
pub mod state;

// Re-exports for convenience
pub use config::{PresetClothing, SessionConfig};
pub use error::SessionError;
pub use guard::AssetKind;
pub use session::Session;
pub use state::{SessionState, Step};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
