//! Azure翻译模块
//!
//! 通过Azure Translator REST API对文本序列进行单次批量翻译

// 标准库导入
use std::time::Duration;

// 第三方crate导入
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{info, warn};

// 本地模块导入
use crate::api_constants::azure_config;
use crate::config::TranslatorSettings;
use crate::error::Result;
use crate::translation_error;

/// Azure翻译客户端
///
/// 持有解析好的翻译凭据，将整个文本序列打包为一次POST请求。
/// 结果与输入等量且顺序一致由API契约保证，此处不做独立校验。
pub struct AzureTranslator {
    client: Client,
    settings: TranslatorSettings,
}

impl AzureTranslator {
    /// 创建新的翻译客户端
    pub fn new(settings: TranslatorSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout()))
            .build()?;

        Ok(Self { client, settings })
    }

    /// 批量翻译文本序列
    ///
    /// 输入为空时直接返回空列表，不发起网络请求
    pub async fn translate_texts(&self, texts: &[String]) -> Result<Vec<String>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let api_url = format!("{}/translate", self.settings.endpoint());
        let payload: Vec<Value> = texts.iter().map(|text| json!({ "text": text })).collect();

        info!(
            "🌐 发送翻译请求: {} 个文本 ({} -> {})",
            texts.len(),
            self.settings.from_lang(),
            self.settings.to_lang()
        );

        let response = self
            .client
            .post(&api_url)
            .query(&[
                ("api-version", azure_config::API_VERSION),
                ("from", self.settings.from_lang()),
                ("to", self.settings.to_lang()),
            ])
            .header(azure_config::SUBSCRIPTION_KEY_HEADER, self.settings.key())
            .header(azure_config::SUBSCRIPTION_REGION_HEADER, self.settings.region())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(translation_error!(
                translation_api,
                status.as_u16(),
                body,
                api_url
            ));
        }

        let body: Value = response.json().await?;
        let translations = parse_translation_response(&body)?;

        if translations.len() != texts.len() {
            warn!(
                "⚠️  翻译结果数量与输入不一致: {} != {}",
                translations.len(),
                texts.len()
            );
        }

        info!("✅ 翻译完成: {} 个结果", translations.len());
        Ok(translations)
    }
}

/// 解析翻译API的JSON响应
///
/// 每个数组元素取translations数组第一项的text字段，缺失时回退为空字符串
pub fn parse_translation_response(body: &Value) -> Result<Vec<String>> {
    let entries = body
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("翻译API响应不是JSON数组: {}", body))?;

    let translations = entries
        .iter()
        .map(|entry| {
            entry
                .get("translations")
                .and_then(|translations| translations.get(0))
                .and_then(|translation| translation.get("text"))
                .and_then(|text| text.as_str())
                .unwrap_or("")
                .to_string()
        })
        .collect();

    Ok(translations)
}
