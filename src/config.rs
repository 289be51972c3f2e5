//! 配置管理模块
//!
//! 提供CLI参数解析、翻译凭据和抓取来源的配置解析功能

// 标准库导入
use std::path::PathBuf;

// 第三方crate导入
use clap::Parser;

// 本地模块导入
use crate::api_constants::{azure_config, env_keys, fetch_config, normalize_endpoint, output_config};
use crate::error::Result;
use crate::translation_error;

/// CLI参数结构
#[derive(Parser)]
#[command(author, version, about = "网页内容抓取与Azure云翻译工具 - 按原文标签结构输出Markdown", long_about = None)]
pub struct Cli {
    /// 抓取页面URL (可选，默认读取SOURCE_URL环境变量)
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// 输出文件路径
    #[arg(short, long, value_name = "FILE", default_value = output_config::DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// 源语言代码
    #[arg(long, default_value = azure_config::DEFAULT_FROM_LANG)]
    pub from: String,

    /// 目标语言代码
    #[arg(long, default_value = azure_config::DEFAULT_TO_LANG)]
    pub to: String,

    /// 请求超时时间（秒）
    #[arg(long, default_value_t = fetch_config::REQUEST_TIMEOUT_SECONDS)]
    pub timeout: u64,

    /// 自定义User-Agent
    #[arg(long)]
    pub user_agent: Option<String>,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,

    /// 静默模式 (仅输出错误)
    #[arg(short, long)]
    pub quiet: bool,

    /// 显示性能统计
    #[arg(long)]
    pub stats: bool,
}

/// Azure翻译服务配置
///
/// 从键值提供者解析订阅密钥、区域和端点，支持链式覆盖语言对和超时。
/// 密钥或区域缺失时解析立即失败，不会发起任何网络请求。
#[derive(Debug, Clone)]
pub struct TranslatorSettings {
    /// 订阅密钥
    key: String,
    /// 订阅区域
    region: String,
    /// 服务端点（不带末尾斜杠）
    endpoint: String,
    /// 源语言代码
    from_lang: String,
    /// 目标语言代码
    to_lang: String,
    /// 请求超时时间（秒）
    timeout: u64,
}

impl TranslatorSettings {
    /// 从键值提供者解析翻译凭据
    pub fn resolve<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = require(&get, env_keys::TRANSLATOR_KEY)?;
        let region = require(&get, env_keys::TRANSLATOR_LOCATION)?;
        let endpoint = normalize_endpoint(
            &non_empty(get(env_keys::TRANSLATOR_ENDPOINT))
                .unwrap_or_else(|| azure_config::DEFAULT_ENDPOINT.to_string()),
        );

        Ok(Self {
            key,
            region,
            endpoint,
            from_lang: azure_config::DEFAULT_FROM_LANG.to_string(),
            to_lang: azure_config::DEFAULT_TO_LANG.to_string(),
            timeout: fetch_config::REQUEST_TIMEOUT_SECONDS,
        })
    }

    /// 从进程环境变量解析翻译凭据
    pub fn from_env() -> Result<Self> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// 获取订阅密钥
    pub fn key(&self) -> &str {
        &self.key
    }

    /// 获取订阅区域
    pub fn region(&self) -> &str {
        &self.region
    }

    /// 获取服务端点
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 获取源语言代码
    pub fn from_lang(&self) -> &str {
        &self.from_lang
    }

    /// 获取目标语言代码
    pub fn to_lang(&self) -> &str {
        &self.to_lang
    }

    /// 获取请求超时时间（秒）
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// 设置语言对
    pub fn language_pair(mut self, from: &str, to: &str) -> Self {
        self.from_lang = from.to_string();
        self.to_lang = to.to_string();
        self
    }

    /// 设置请求超时时间
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

/// 抓取来源配置
///
/// 解析优先级: CLI参数 > 环境变量 > 内置默认值
#[derive(Debug, Clone)]
pub struct SourceSettings {
    /// 来源页面URL
    url: String,
    /// 提取的标签选择器列表
    selectors: Vec<String>,
    /// User-Agent字符串
    user_agent: String,
    /// 请求超时时间（秒）
    timeout: u64,
}

impl SourceSettings {
    /// 从CLI参数和键值提供者解析抓取来源配置
    pub fn resolve<F>(cli_url: Option<&str>, user_agent: Option<&str>, timeout: u64, get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = cli_url
            .map(str::to_string)
            .or_else(|| non_empty(get(env_keys::SOURCE_URL)))
            .unwrap_or_else(|| fetch_config::DEFAULT_SOURCE_URL.to_string());

        Self {
            url,
            selectors: fetch_config::DEFAULT_SELECTORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            user_agent: user_agent
                .map(str::to_string)
                .unwrap_or_else(|| fetch_config::DEFAULT_USER_AGENT.to_string()),
            timeout,
        }
    }

    /// 从CLI参数和进程环境变量解析抓取来源配置
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(
            cli.url.as_deref(),
            cli.user_agent.as_deref(),
            cli.timeout,
            |name| std::env::var(name).ok(),
        )
    }

    /// 获取来源页面URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// 获取标签选择器列表
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// 获取User-Agent字符串
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// 获取请求超时时间（秒）
    pub fn timeout(&self) -> u64 {
        self.timeout
    }
}

/// 读取必需的配置项，缺失或为空时返回配置错误
fn require<F>(get: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(get(name)) {
        Some(value) => Ok(value),
        None => Err(translation_error!(config, name, "必须在环境变量中定义")),
    }
}

/// 将空白字符串折叠为None
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
