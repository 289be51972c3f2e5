//! HTML处理模块
//!
//! 提供HTML解析、按选择器的文本提取和空白规范化功能

// 第三方crate导入
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

// 本地模块导入
use crate::error::Result;
use crate::translation_error;

/// 提取出的内容条目
///
/// 表示页面中一个按文档顺序出现的非空文本块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    /// 小写标签名 (如: h1, p, li)
    pub tag: String,
    /// 规范化后的非空文本
    pub text: String,
}

/// 解析HTML文档
pub fn parse_html(html: &str) -> Result<RcDom> {
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| translation_error!(html_parse, format!("{:?}", e)))
}

/// 按选择器提取DOM中的文本元素
///
/// 深度优先遍历保证提取结果与文档顺序一致。
/// 元素文本为其子树全部文本节点的规范化拼接，规范化后为空的元素会被丢弃。
pub fn extract_content_items(dom: &RcDom, selectors: &[String]) -> Vec<ContentItem> {
    let mut items = Vec::new();
    let mut stack = vec![dom.document.clone()];

    while let Some(node) = stack.pop() {
        if let NodeData::Element { ref name, .. } = node.data {
            // 标签名缺失时回退为"p"
            let tag = match name.local.as_ref() {
                "" => "p".to_string(),
                local => local.to_ascii_lowercase(),
            };

            if selectors.iter().any(|selector| selector == &tag) {
                let text = collect_text(&node);
                if !text.is_empty() {
                    items.push(ContentItem { tag, text });
                }
            }
        }

        // 子节点逆序入栈，出栈顺序即文档顺序
        for child in node.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }

    items
}

/// 收集元素子树中的全部文本并规范化空白
pub fn collect_text(node: &Handle) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut stack = vec![node.clone()];

    while let Some(current) = stack.pop() {
        if let NodeData::Text { ref contents } = current.data {
            parts.push(contents.borrow().to_string());
        }

        for child in current.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }

    parts
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
