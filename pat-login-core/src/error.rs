//! 统一错误类型定义

use serde::Serialize;
use thiserror::Error;

/// 认证层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum AuthError {
    /// 输入校验错误（提交前即可发现）
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 网络错误
    #[error("Network error: {0}")]
    NetworkError(String),

    /// 服务端拒绝了该 token（401 / 403）
    #[error("Token rejected by server (HTTP {0})")]
    Unauthorized(u16),

    /// 其他非 2xx 响应（服务端故障等）
    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// 服务端响应无法解析
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 打开外部链接失败
    #[error("Failed to open link: {0}")]
    LinkError(String),
}

/// 认证层 Result 类型别名
pub type AuthResult<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AuthError::Unauthorized(401).to_string(),
            "Token rejected by server (HTTP 401)"
        );
        assert_eq!(
            AuthError::HttpStatus(503).to_string(),
            "Unexpected HTTP status 503"
        );
        assert_eq!(
            AuthError::NetworkError("timeout".to_string()).to_string(),
            "Network error: timeout"
        );
    }

    #[test]
    fn test_error_serializes_with_code_tag() {
        let json = serde_json::to_value(AuthError::Unauthorized(403)).unwrap();
        assert_eq!(json["code"], "Unauthorized");
        assert_eq!(json["details"], 403);
    }
}
