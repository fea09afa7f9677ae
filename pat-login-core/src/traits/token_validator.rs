//! Token 校验抽象 Trait

use async_trait::async_trait;

use crate::error::AuthResult;
use crate::types::{AuthTokenOptions, AuthenticatedAccount};

/// Token 校验 Trait
///
/// 平台实现:
/// - 默认：`GitHubTokenValidator`（GitHub REST API `/user`）
/// - 测试：返回固定结果的 mock
///
/// 超时、重试等策略由实现方决定，表单不做任何假设。
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// 校验 token 是否能在指定主机上完成认证
    ///
    /// # Arguments
    /// * `options` - token 与主机名
    ///
    /// # Returns
    /// * `Ok(account)` - 认证成功
    /// * `Err(_)` - 任意失败（网络、凭证无效、服务端错误）
    async fn validate_token(&self, options: &AuthTokenOptions) -> AuthResult<AuthenticatedAccount>;
}
