//! 统一错误处理模块
//!
//! 提供抓取翻译流水线的统一错误类型定义和处理机制

// 标准库导入
use std::fmt;

// 第三方crate导入
use anyhow::Error as AnyhowError;

/// 抓取翻译流水线统一错误类型
///
/// 定义了流水线中可能出现的所有错误类型，提供统一的错误处理接口
#[derive(Debug)]
pub enum TranslationError {
    /// 网络请求相关错误（传输层失败或超时）
    Network {
        /// 错误消息
        message: String,
        /// HTTP状态码（如果适用）
        status_code: Option<u16>,
    },

    /// 页面抓取返回非成功状态
    Fetch {
        /// 上游响应状态码
        status_code: u16,
        /// 上游响应体内容
        message: String,
    },

    /// 翻译API返回非成功状态
    TranslationApi {
        /// API响应状态码
        status_code: u16,
        /// 错误消息
        message: String,
        /// API地址
        api_url: String,
    },

    /// HTML解析相关错误
    HtmlParse {
        /// 具体错误信息
        details: String,
    },

    /// 配置相关错误
    Configuration {
        /// 配置项名称
        field: String,
        /// 错误原因
        reason: String,
    },

    /// 页面中没有可翻译的内容
    EmptyContent,

    /// 文件操作相关错误
    FileOperation {
        /// 文件路径
        path: String,
        /// 操作类型（读取、写入等）
        operation: String,
        /// 底层错误信息
        source: String,
    },

    /// 内部处理错误（包装anyhow::Error）
    Internal {
        /// 包装的错误
        source: AnyhowError,
    },
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::Network { message, status_code } => {
                if let Some(code) = status_code {
                    write!(f, "网络请求失败 [{}]: {}", code, message)
                } else {
                    write!(f, "网络请求失败: {}", message)
                }
            }
            TranslationError::Fetch { status_code, message } => {
                write!(f, "页面抓取失败 [{}]: {}", status_code, message)
            }
            TranslationError::TranslationApi { status_code, message, api_url } => {
                write!(f, "翻译API错误 [{}] {}: {}", status_code, api_url, message)
            }
            TranslationError::HtmlParse { details } => {
                write!(f, "HTML解析失败: {}", details)
            }
            TranslationError::Configuration { field, reason } => {
                write!(f, "配置错误 [{}]: {}", field, reason)
            }
            TranslationError::EmptyContent => {
                write!(f, "没有找到可翻译的内容")
            }
            TranslationError::FileOperation { path, operation, source } => {
                write!(f, "文件{}操作失败 [{}]: {}", operation, path, source)
            }
            TranslationError::Internal { source } => {
                write!(f, "内部处理错误: {}", source)
            }
        }
    }
}

impl std::error::Error for TranslationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslationError::Internal { source } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// 流水线结果类型别名
pub type Result<T> = std::result::Result<T, TranslationError>;

/// 便捷的错误创建宏
#[macro_export]
macro_rules! translation_error {
    (network, $msg:expr) => {
        $crate::error::TranslationError::Network {
            message: $msg.to_string(),
            status_code: None,
        }
    };
    (network, $msg:expr, $code:expr) => {
        $crate::error::TranslationError::Network {
            message: $msg.to_string(),
            status_code: Some($code),
        }
    };
    (fetch, $code:expr, $msg:expr) => {
        $crate::error::TranslationError::Fetch {
            status_code: $code,
            message: $msg.to_string(),
        }
    };
    (translation_api, $code:expr, $msg:expr, $url:expr) => {
        $crate::error::TranslationError::TranslationApi {
            status_code: $code,
            message: $msg.to_string(),
            api_url: $url.to_string(),
        }
    };
    (html_parse, $details:expr) => {
        $crate::error::TranslationError::HtmlParse {
            details: $details.to_string(),
        }
    };
    (config, $field:expr, $reason:expr) => {
        $crate::error::TranslationError::Configuration {
            field: $field.to_string(),
            reason: $reason.to_string(),
        }
    };
    (file_op, $path:expr, $op:expr, $source:expr) => {
        $crate::error::TranslationError::FileOperation {
            path: $path.to_string(),
            operation: $op.to_string(),
            source: $source.to_string(),
        }
    };
}

/// 从anyhow::Error转换为TranslationError
impl From<AnyhowError> for TranslationError {
    fn from(error: AnyhowError) -> Self {
        TranslationError::Internal { source: error }
    }
}

/// 从reqwest::Error转换为TranslationError
impl From<reqwest::Error> for TranslationError {
    fn from(error: reqwest::Error) -> Self {
        let status_code = error.status().map(|s| s.as_u16());
        TranslationError::Network {
            message: error.to_string(),
            status_code,
        }
    }
}

/// 从std::io::Error转换为TranslationError
impl From<std::io::Error> for TranslationError {
    fn from(error: std::io::Error) -> Self {
        TranslationError::FileOperation {
            path: "unknown".to_string(),
            operation: "io".to_string(),
            source: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = TranslationError::Fetch {
            status_code: 404,
            message: "Not Found".to_string(),
        };

        assert_eq!(format!("{}", err), "页面抓取失败 [404]: Not Found");
    }

    #[test]
    fn test_translation_api_error_display() {
        let err = TranslationError::TranslationApi {
            status_code: 401,
            message: "invalid key".to_string(),
            api_url: "https://api.cognitive.microsofttranslator.com/translate".to_string(),
        };

        assert_eq!(
            format!("{}", err),
            "翻译API错误 [401] https://api.cognitive.microsofttranslator.com/translate: invalid key"
        );
    }

    #[test]
    fn test_configuration_error_display() {
        let err = TranslationError::Configuration {
            field: "TRANSLATOR_KEY".to_string(),
            reason: "必须在环境变量中定义".to_string(),
        };

        assert_eq!(format!("{}", err), "配置错误 [TRANSLATOR_KEY]: 必须在环境变量中定义");
    }

    #[test]
    fn test_error_macro() {
        let err = translation_error!(fetch, 500, "Internal Server Error");
        match err {
            TranslationError::Fetch { status_code, message } => {
                assert_eq!(status_code, 500);
                assert_eq!(message, "Internal Server Error");
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_anyhow_conversion() {
        let anyhow_err = anyhow::anyhow!("Test anyhow error");
        let translation_err: TranslationError = anyhow_err.into();

        match translation_err {
            TranslationError::Internal { .. } => {
                // Test passes
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let translation_err: TranslationError = io_err.into();

        match translation_err {
            TranslationError::FileOperation { operation, .. } => {
                assert_eq!(operation, "io");
            }
            _ => panic!("Wrong error type"),
        }
    }
}
