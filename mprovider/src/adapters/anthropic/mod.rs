mod provider;
mod serde_api;
mod transport;
mod types;

pub use provider::{
    AnthropicProvider, CLAUDE_SONNET_INPUT_COST_PER_MILLION, CLAUDE_SONNET_OUTPUT_COST_PER_MILLION,
    CLAUDE_SONNET_PRICING, DEFAULT_ANTHROPIC_MODEL,
};
pub(crate) use provider::MISSING_API_KEY_MESSAGE;
pub use transport::{
    ANTHROPIC_API_VERSION, ANTHROPIC_BASE_URL, AnthropicHttpTransport, AnthropicTransport,
};
pub use types::{
    AnthropicApiError, AnthropicMessage, AnthropicRequest, AnthropicResponse, AnthropicRole,
    AnthropicUsage,
};
