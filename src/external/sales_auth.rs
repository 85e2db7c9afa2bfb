use crate::config::SalesAuthConfig;
use crate::error::{AppError, AppResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const ROLE_HEADER: &str = "x-role";
pub const TOKEN_HEADER: &str = "x-sales-token";
const SALES_ROLE: &str = "sales";

/// 销售角色授权协作方。
/// 登记接口在进入核心逻辑前必须经过这里放行:
/// - 请求必须携带 x-role: sales
/// - 配置了 verify_url 时，将角色与令牌提交给外部授权服务裁决
/// - 未配置时仅接受头部断言（占位行为，线上应接外部服务）
#[derive(Clone)]
pub struct SalesAuthorizer {
    http: Client,
    cfg: SalesAuthConfig,
}

impl SalesAuthorizer {
    pub fn new(cfg: SalesAuthConfig) -> Self {
        let http = Client::builder()
            .user_agent("lucky-draw-backend/sales-auth")
            .build()
            .expect("reqwest client");
        Self { http, cfg }
    }

    pub fn is_external(&self) -> bool {
        self.cfg
            .verify_url
            .as_deref()
            .is_some_and(|u| !u.is_empty())
    }

    /// 批准或拒绝一次登记请求
    pub async fn authorize(&self, role: Option<&str>, token: Option<&str>) -> AppResult<()> {
        let Some(role) = role else {
            return Err(AppError::PermissionDenied);
        };
        if role != SALES_ROLE {
            return Err(AppError::PermissionDenied);
        }

        if !self.is_external() {
            return Ok(());
        }

        let url = self.cfg.verify_url.as_deref().unwrap_or_default();
        let req_body = AuthorizeRequest {
            role: role.to_string(),
            token: token.map(str::to_string),
        };

        let resp = self.http.post(url).json(&req_body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::ExternalApiError(format!(
                "Sales authorization failed: HTTP {}",
                status.as_u16()
            )));
        }

        let body: AuthorizeResponse = resp.json().await?;
        if !body.success {
            log::warn!(
                "Sales authorization denied: {}",
                body.message.as_deref().unwrap_or("no reason given")
            );
            return Err(AppError::PermissionDenied);
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct AuthorizeRequest {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthorizeResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}
