use crate::external::{ROLE_HEADER, SalesAuthorizer, TOKEN_HEADER};
use actix_web::http::Method;
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};
use std::rc::Rc;

// 需要销售角色的路径配置
struct ProtectedPaths {
    exact_paths: Vec<&'static str>,
}

impl ProtectedPaths {
    fn new() -> Self {
        Self {
            // 仅登记接口受保护，其余路由对顾客开放
            exact_paths: vec!["/add-order-number"],
        }
    }

    fn is_protected_path(&self, path: &str) -> bool {
        self.exact_paths.contains(&path)
    }
}

pub struct SalesAuthMiddleware {
    authorizer: SalesAuthorizer,
}

impl SalesAuthMiddleware {
    pub fn new(authorizer: SalesAuthorizer) -> Self {
        Self { authorizer }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SalesAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SalesAuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SalesAuthMiddlewareService {
            service: Rc::new(service),
            authorizer: self.authorizer.clone(),
            protected_paths: ProtectedPaths::new(),
        }))
    }
}

pub struct SalesAuthMiddlewareService<S> {
    service: Rc<S>,
    authorizer: SalesAuthorizer,
    protected_paths: ProtectedPaths,
}

impl<S, B> Service<ServiceRequest> for SalesAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // 放行所有 CORS 预检请求
        if req.method() == Method::OPTIONS {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        if !self.protected_paths.is_protected_path(req.path()) {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        // 授权裁决可能需要访问外部服务，整体走异步分支
        let service = Rc::clone(&self.service);
        let authorizer = self.authorizer.clone();

        Box::pin(async move {
            let role = header_value(&req, ROLE_HEADER);
            let token = header_value(&req, TOKEN_HEADER);

            authorizer
                .authorize(role.as_deref(), token.as_deref())
                .await?;

            service.call(req).await
        })
    }
}

fn header_value(req: &ServiceRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}
