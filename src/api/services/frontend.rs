use actix_web::{HttpResponse, web};
use rust_embed::Embed;
use tracing::{debug, trace};

// 使用 RustEmbed 嵌入每个服务的静态页面
#[derive(Embed)]
#[folder = "assets/shortener/"]
pub struct ShortenerAssets;

#[derive(Embed)]
#[folder = "assets/tracker/"]
pub struct TrackerAssets;

pub struct FrontendService;

impl FrontendService {
    /// 首页
    pub async fn handle_index<A: Embed>() -> HttpResponse {
        trace!("Serving landing page");

        match A::get("index.html") {
            Some(content) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(content.data.into_owned()),
            None => HttpResponse::NotFound().body("Not Found"),
        }
    }

    /// 其他静态文件（样式表等）
    pub async fn handle_static<A: Embed>(path: web::Path<String>) -> HttpResponse {
        let file = path.into_inner();
        trace!("Serving static file: {}", file);

        match A::get(&file) {
            Some(content) => HttpResponse::Ok()
                .content_type(Self::get_content_type(&file))
                .body(content.data.into_owned()),
            None => {
                debug!("Static file not found: {}", file);
                HttpResponse::NotFound().body("Not Found")
            }
        }
    }

    /// 根据文件扩展名确定 Content-Type
    fn get_content_type(path: &str) -> &'static str {
        match path.rsplit('.').next() {
            Some("html") => "text/html; charset=utf-8",
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("json") => "application/json",
            Some("png") => "image/png",
            Some("svg") => "image/svg+xml",
            Some("ico") => "image/x-icon",
            _ => "application/octet-stream",
        }
    }
}

/// 静态页面路由，必须最后注册
pub fn frontend_routes<A: Embed + 'static>() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(FrontendService::handle_index::<A>))
        .route("/{file}", web::get().to(FrontendService::handle_static::<A>))
}
