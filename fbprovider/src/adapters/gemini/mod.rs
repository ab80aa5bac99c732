mod provider;
mod serde_api;
mod transport;
mod types;

pub use provider::GeminiProvider;
pub use transport::{GEMINI_BASE_URL, GeminiHttpTransport, GeminiTransport};
pub use types::{
    GeminiContent, GeminiFinishReason, GeminiFunctionDeclaration, GeminiPart, GeminiRequest,
    GeminiResponse, GeminiRole, GeminiUsage,
};
