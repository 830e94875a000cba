//! Host boundary for cqp plugins.
//!
//! [`NativeHost`] is the raw interface exported by the host process.
//! [`CqpApi`] wraps it with the plugin's [`HostContext`] and a
//! [`WireFormat`](cqp_pack::WireFormat): it forwards plain calls, and for
//! calls that return structured data it base64-decodes the host text and
//! runs the record decoders from `cqp-pack`.

mod api;
mod context;
mod error;
mod host;

pub mod payload;

pub use api::CqpApi;
pub use context::HostContext;
pub use error::ApiError;
pub use host::{AudioFormat, LogLevel, NativeHost, RequestType, ResponseType};
