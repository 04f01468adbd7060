use thiserror::Error;

/// Errors from parsing the page query string into a [`crate::config::DemoConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown demo '{0}' (expected one of: cube, textured-cube, globe, shapes, save-point)")]
    UnknownDemo(String),

    #[error("invalid seed '{0}': expected an unsigned integer")]
    InvalidSeed(String),

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),

    #[error("'{0}' does not percent-decode to UTF-8")]
    InvalidEncoding(String),
}

/// Everything that can stop a demo from starting. None of these are retried.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("missing browser object: {0}")]
    MissingDom(&'static str),

    #[error("canvas '#{0}' not found")]
    CanvasNotFound(String),

    #[error("WebGL2 is not available; the browser or machine may not support it")]
    NoContext,

    #[error("an error occurred compiling the shaders: {0}")]
    ShaderCompile(String),

    #[error("unable to initialize the shader program: {0}")]
    ProgramLink(String),

    #[error("failed to allocate {0}")]
    Allocation(&'static str),

    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DemoError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DemoError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_convert_and_display() {
        let err: DemoError = ConfigError::UnknownDemo("teapot".into()).into();
        assert!(matches!(err, DemoError::Config(_)));
        assert!(err.to_string().contains("teapot"));
    }
}
