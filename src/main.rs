//! AGI Voice Agent Suite
//!
//! 启动顺序: 加载配置 -> 初始化日志 -> 检查笔记本目录 -> 构建适配器 -> 启动 HTTP 服务

use std::sync::Arc;

use agi_voice::application::{AvatarVideoPort, NotebookStorePort};
use agi_voice::config::{load_config, print_config, AppConfig};
use agi_voice::infrastructure::adapters::{
    DidClient, DidClientConfig, ElevenLabsClient, ElevenLabsClientConfig, FsNotebookStore,
    OpenAiChatClient, OpenAiChatClientConfig,
};
use agi_voice::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值），缺少必需密钥时直接退出
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("AGI Voice Agent Suite");
    print_config(&config);

    // 笔记本目录不可读视为启动失败
    let naming_rule = config.notebooks.naming_rule();
    let notebook_store = Arc::new(FsNotebookStore::new(
        &config.notebooks.dir,
        naming_rule.clone(),
    ));
    let initial = notebook_store
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Cannot scan notebook directory: {}", e))?;
    tracing::info!(count = initial.len(), "Notebooks discovered");

    // 问答客户端
    let answer_service = Arc::new(OpenAiChatClient::new(OpenAiChatClientConfig {
        base_url: config.answer.base_url.clone(),
        api_key: config.answer.api_key.clone(),
        model: config.answer.model.clone(),
        timeout_secs: config.answer.timeout_secs,
    })?);

    // 语音合成客户端
    let speech = Arc::new(ElevenLabsClient::new(ElevenLabsClientConfig {
        base_url: config.speech.base_url.clone(),
        api_key: config.speech.api_key.clone(),
        voice_name: config.speech.voice_name.clone(),
        voice_id: config.speech.voice_id.clone(),
        model_id: config.speech.model_id.clone(),
        timeout_secs: config.speech.timeout_secs,
    })?);

    // 数字人视频客户端（仅在配置密钥时创建）
    let video: Option<Arc<dyn AvatarVideoPort>> = match config.video.credential() {
        Some(api_key) => Some(Arc::new(DidClient::new(DidClientConfig {
            base_url: config.video.base_url.clone(),
            api_key: api_key.to_string(),
            source_url: config.video.source_url.clone(),
            result_url_template: config.video.result_url_template.clone(),
            timeout_secs: config.video.timeout_secs,
        })?) as Arc<dyn AvatarVideoPort>),
        None => None,
    };

    let state = AppState::new(
        notebook_store,
        answer_service,
        speech,
        video,
        naming_rule,
        config.notebooks.preview_policy(),
    );

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志（RUST_LOG 优先）
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},agi_voice={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
