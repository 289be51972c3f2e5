//! 网页抓取模块 - 抓取页面并按选择器提取文本内容
//!
//! 此模块负责：
//! - 发起带固定User-Agent和超时的HTTP GET请求
//! - 将响应体解析为HTML文档
//! - 按文档顺序提取选择器匹配的非空文本元素

// 标准库导入
use std::time::Duration;

// 第三方crate导入
use reqwest::Client;
use tracing::{debug, info};

// 本地模块导入
use crate::api_constants::fetch_config;
use crate::error::Result;
use crate::html_processor::{extract_content_items, parse_html, ContentItem};
use crate::translation_error;
use crate::utils::is_http_url;

/// 网页抓取配置结构体
#[derive(Debug, Clone)]
pub struct PageFetcherConfig {
    /// 目标URL
    pub url: String,
    /// 提取的标签选择器列表（按文档顺序匹配）
    pub selectors: Vec<String>,
    /// 用户代理字符串
    pub user_agent: String,
    /// 请求超时时间（秒）
    pub timeout: u64,
}

impl Default for PageFetcherConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            selectors: fetch_config::DEFAULT_SELECTORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            user_agent: fetch_config::DEFAULT_USER_AGENT.to_string(),
            timeout: fetch_config::REQUEST_TIMEOUT_SECONDS,
        }
    }
}

/// 网页抓取器
///
/// 发起GET请求并从响应HTML中按文档顺序提取文本元素。
/// 支持链式配置选择器、User-Agent和超时时间。
pub struct PageFetcher {
    config: PageFetcherConfig,
}

impl PageFetcher {
    /// 创建新的抓取器实例
    pub fn new(config: PageFetcherConfig) -> Self {
        Self { config }
    }

    /// 使用默认配置创建抓取器
    pub fn with_url(url: &str) -> Self {
        let mut config = PageFetcherConfig::default();
        config.url = url.to_string();
        Self::new(config)
    }

    /// 设置标签选择器列表
    pub fn selectors(mut self, selectors: &[String]) -> Self {
        self.config.selectors = selectors.to_vec();
        self
    }

    /// 设置用户代理
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.config.user_agent = user_agent.to_string();
        self
    }

    /// 设置请求超时时间
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.timeout = seconds;
        self
    }

    /// 执行网页抓取并提取文本内容
    ///
    /// 返回按文档顺序排列的内容条目；页面无匹配元素时返回空列表，
    /// 空列表是有效结果而非错误
    pub async fn fetch(&self) -> Result<Vec<ContentItem>> {
        info!("🕷️ 开始抓取网页: {}", self.config.url);
        debug!("抓取配置: {:?}", self.config);

        self.validate_url()?;

        let html = self.fetch_page().await?;
        debug!("响应体大小: {} 字节", html.len());

        let dom = parse_html(&html)?;
        let items = extract_content_items(&dom, &self.config.selectors);

        info!("📝 提取到 {} 个文本元素", items.len());
        Ok(items)
    }

    /// 发起GET请求并返回响应体
    async fn fetch_page(&self) -> Result<String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(self.config.timeout))
            .user_agent(&self.config.user_agent)
            .build()?;

        let response = client.get(&self.config.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(translation_error!(fetch, status.as_u16(), body));
        }

        Ok(response.text().await?)
    }

    /// 验证URL格式
    fn validate_url(&self) -> Result<()> {
        if self.config.url.is_empty() {
            return Err(translation_error!(config, "url", "URL不能为空"));
        }

        if !is_http_url(&self.config.url) {
            return Err(translation_error!(
                config,
                "url",
                format!("URL必须以http://或https://开头: {}", self.config.url)
            ));
        }

        Ok(())
    }
}
