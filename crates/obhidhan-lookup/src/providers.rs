pub mod gemini;
pub mod openai;

pub use self::gemini::GeminiProvider;
pub use self::openai::OpenAiProvider;
