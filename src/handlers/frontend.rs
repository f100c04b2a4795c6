//! 前端静态页面
//!
//! 静态目录下存在的文件直接返回，其余路径统一返回 index.html，由前端自行路由

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use std::path::Path;

/// 挂载在根路径的静态文件服务，需在接口路由之后注册
pub fn frontend(static_dir: &str) -> Files {
    let index = Path::new(static_dir).join("index.html");

    Files::new("/", static_dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&index).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            }
        }))
}
