//! 翻译服务配置常量
//!
//! 该文件定义了Azure翻译服务和网页抓取相关的常量配置，方便统一管理和维护

/// Azure翻译服务配置
pub mod azure_config {
    /// 默认翻译服务端点
    pub const DEFAULT_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";

    /// 翻译API版本
    pub const API_VERSION: &str = "3.0";

    /// 默认源语言
    pub const DEFAULT_FROM_LANG: &str = "en";

    /// 默认目标语言
    pub const DEFAULT_TO_LANG: &str = "pt-br";

    /// 订阅密钥请求头
    pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

    /// 订阅区域请求头
    pub const SUBSCRIPTION_REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";
}

/// 网页抓取配置
pub mod fetch_config {
    /// 默认抓取页面URL
    pub const DEFAULT_SOURCE_URL: &str =
        "https://learn.microsoft.com/en-us/azure/ai-services/translator/translator-overview";

    /// 默认User-Agent
    pub const DEFAULT_USER_AGENT: &str = "azure-translator-scraper/1.0";

    /// 请求超时时间（秒）
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 15;

    /// 提取的标签选择器列表（按文档顺序匹配）
    pub const DEFAULT_SELECTORS: &[&str] = &["h1", "h2", "h3", "p", "li", "blockquote"];
}

/// 环境变量名称
pub mod env_keys {
    /// 订阅密钥（必需）
    pub const TRANSLATOR_KEY: &str = "TRANSLATOR_KEY";

    /// 订阅区域（必需）
    pub const TRANSLATOR_LOCATION: &str = "TRANSLATOR_LOCATION";

    /// 服务端点（可选）
    pub const TRANSLATOR_ENDPOINT: &str = "TRANSLATOR_ENDPOINT";

    /// 抓取页面URL（可选）
    pub const SOURCE_URL: &str = "SOURCE_URL";
}

/// 输出配置
pub mod output_config {
    /// 默认输出文件名
    pub const DEFAULT_OUTPUT_FILE: &str = "conteudo_traduzido.md";
}

/// 规范化服务端点，去除末尾斜杠
pub fn normalize_endpoint(endpoint: &str) -> String {
    endpoint.trim_end_matches('/').to_string()
}

/// 验证来源URL是否有效
pub fn is_valid_source_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// 判断标签是否在默认选择器列表中
pub fn is_default_selector(tag: &str) -> bool {
    fetch_config::DEFAULT_SELECTORS.contains(&tag)
}
