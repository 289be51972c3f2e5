//! Markdown渲染模块
//!
//! 将提取的标签结构与翻译结果按位置配对，渲染为Markdown文档并写入文件

// 标准库导入
use std::path::Path;

// 第三方crate导入
use tracing::{info, warn};

// 本地模块导入
use crate::error::Result;
use crate::html_processor::ContentItem;
use crate::translation_error;

/// 按标签结构渲染Markdown文本
///
/// 条目与翻译按位置配对，以较短一侧为准，多余部分被丢弃。
/// li条目连续排列，其余条目之后插入一个空行。
/// 整体文档去除首尾空白，并保证恰好一个结尾换行。
pub fn render_markdown(items: &[ContentItem], translations: &[String]) -> String {
    if items.len() != translations.len() {
        warn!(
            "⚠️  条目数量与翻译数量不一致: {} != {}，多余部分将被丢弃",
            items.len(),
            translations.len()
        );
    }

    let mut lines: Vec<String> = Vec::new();

    for (item, translated) in items.iter().zip(translations.iter()) {
        let text = translated.trim();

        let line = match item.tag.as_str() {
            "h1" => format!("# {}", text),
            "h2" => format!("## {}", text),
            "h3" => format!("### {}", text),
            "li" => format!("- {}", text),
            "blockquote" => format!("> {}", text),
            _ => text.to_string(),
        };
        lines.push(line);

        // li条目之间不插空行，保持列表连续
        if item.tag != "li" {
            lines.push(String::new());
        }
    }

    format!("{}\n", lines.join("\n").trim())
}

/// 渲染并写入Markdown文件
///
/// 返回写入的字节数
pub fn save_markdown(items: &[ContentItem], translations: &[String], path: &Path) -> Result<usize> {
    let document = render_markdown(items, translations);

    std::fs::write(path, &document)
        .map_err(|e| translation_error!(file_op, path.display(), "写入", e))?;

    info!("✅ Markdown已保存到: {}", path.display());
    Ok(document.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(tag: &str, text: &str) -> ContentItem {
        ContentItem {
            tag: tag.to_string(),
            text: text.to_string(),
        }
    }

    fn translations(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|text| text.to_string()).collect()
    }

    #[test]
    fn test_prefix_mapping() {
        let items = vec![
            item("h1", "a"),
            item("h2", "b"),
            item("h3", "c"),
            item("li", "d"),
            item("blockquote", "e"),
            item("p", "f"),
        ];
        let translated = translations(&["A", "B", "C", "D", "E", "F"]);

        let document = render_markdown(&items, &translated);

        assert_eq!(
            document,
            "# A\n\n## B\n\n### C\n\n- D\n> E\n\nF\n"
        );
    }

    #[test]
    fn test_heading_and_list_scenario() {
        let items = vec![item("h1", "Title"), item("li", "One")];
        let translated = translations(&["Título", "Um"]);

        let document = render_markdown(&items, &translated);

        assert_eq!(document, "# Título\n\n- Um\n");
    }

    #[test]
    fn test_list_items_render_contiguously() {
        let items = vec![item("li", "a"), item("li", "b"), item("li", "c")];
        let translated = translations(&["Um", "Dois", "Três"]);

        let document = render_markdown(&items, &translated);

        assert_eq!(document, "- Um\n- Dois\n- Três\n");
    }

    #[test]
    fn test_unknown_tag_renders_plain() {
        let items = vec![item("h4", "deep"), item("div", "box")];
        let translated = translations(&["Fundo", "Caixa"]);

        let document = render_markdown(&items, &translated);

        assert_eq!(document, "Fundo\n\nCaixa\n");
    }

    #[test]
    fn test_translated_text_trimmed() {
        let items = vec![item("h1", "Title")];
        let translated = translations(&["  Título  "]);

        let document = render_markdown(&items, &translated);

        assert_eq!(document, "# Título\n");
    }

    #[test]
    fn test_shorter_translations_truncate_pairing() {
        let items = vec![item("h1", "a"), item("p", "b"), item("p", "c")];
        let translated = translations(&["A", "B"]);

        let document = render_markdown(&items, &translated);

        assert_eq!(document, "# A\n\nB\n");
    }

    #[test]
    fn test_shorter_items_truncate_pairing() {
        let items = vec![item("h1", "a")];
        let translated = translations(&["A", "B", "C"]);

        let document = render_markdown(&items, &translated);

        assert_eq!(document, "# A\n");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let items = vec![item("h1", "a"), item("li", "b"), item("p", "c")];
        let translated = translations(&["A", "B", "C"]);

        let first = render_markdown(&items, &translated);
        let second = render_markdown(&items, &translated);

        assert_eq!(first, second);
    }

    #[test]
    fn test_exactly_one_trailing_newline() {
        let items = vec![item("p", "a")];
        let translated = translations(&["A"]);

        let document = render_markdown(&items, &translated);

        assert!(document.ends_with('\n'));
        assert!(!document.ends_with("\n\n"));
    }

    #[test]
    fn test_save_markdown_writes_file() {
        let items = vec![item("h1", "Title"), item("li", "One")];
        let translated = translations(&["Título", "Um"]);
        let path = std::env::temp_dir().join("test_save_markdown_output.md");

        let bytes = save_markdown(&items, &translated, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();

        assert_eq!(written, "# Título\n\n- Um\n");
        assert_eq!(bytes, written.len());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_markdown_unwritable_path() {
        let items = vec![item("h1", "Title")];
        let translated = translations(&["Título"]);
        let path = std::path::PathBuf::from("/nonexistent-dir/output.md");

        let result = save_markdown(&items, &translated, &path);

        assert!(matches!(
            result,
            Err(crate::error::TranslationError::FileOperation { .. })
        ));
    }
}
