use std::time::Instant;

use clap::Parser;
use tracing::{error, info};

use azure_translator_scraper::config::{Cli, SourceSettings, TranslatorSettings};
use azure_translator_scraper::error::{Result, TranslationError};
use azure_translator_scraper::fetcher::PageFetcher;
use azure_translator_scraper::renderer::save_markdown;
use azure_translator_scraper::stats::{print_pipeline_stats, PipelineStats};
use azure_translator_scraper::translator::AzureTranslator;
use azure_translator_scraper::utils::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 初始化日志系统
    init_logging(cli.verbose, cli.quiet);

    let total_start = Instant::now();

    match run_pipeline(&cli).await {
        Ok(stats) => {
            let total_duration = total_start.elapsed();

            if !cli.quiet {
                info!("✅ 翻译完成！总耗时: {:.3}秒", total_duration.as_secs_f64());
                info!("📄 输出文件: {}", cli.output.display());
            }

            // 显示性能统计
            if cli.stats || cli.verbose {
                print_pipeline_stats(&stats, total_duration);
            }
        }
        Err(e) => {
            error!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

/// 执行抓取-翻译-渲染流水线
async fn run_pipeline(cli: &Cli) -> Result<PipelineStats> {
    // 先解析翻译凭据，凭据缺失时不发起任何网络请求
    let settings = TranslatorSettings::from_env()?
        .language_pair(&cli.from, &cli.to)
        .with_timeout(cli.timeout);

    let source = SourceSettings::from_cli(cli);

    if !cli.quiet {
        info!("🚀 启动网页翻译流水线");
        info!("🌍 来源页面: {}", source.url());
        info!("🌐 目标语言: {} -> {}", settings.from_lang(), settings.to_lang());
    }

    // 1. 抓取页面并按文档顺序提取文本
    let fetch_start = Instant::now();
    let fetcher = PageFetcher::with_url(source.url())
        .selectors(source.selectors())
        .user_agent(source.user_agent())
        .timeout(source.timeout());
    let items = fetcher.fetch().await?;
    let fetch_duration = fetch_start.elapsed();

    if items.is_empty() {
        return Err(TranslationError::EmptyContent);
    }

    // 2. 批量翻译提取的文本
    let translate_start = Instant::now();
    let texts: Vec<String> = items.iter().map(|item| item.text.clone()).collect();
    let translator = AzureTranslator::new(settings)?;
    let translations = translator.translate_texts(&texts).await?;
    let translate_duration = translate_start.elapsed();

    // 3. 渲染并写入Markdown
    let render_start = Instant::now();
    let output_size = save_markdown(&items, &translations, &cli.output)?;
    let render_duration = render_start.elapsed();

    Ok(PipelineStats {
        fetch_time: fetch_duration,
        translation_time: translate_duration,
        render_time: render_duration,
        items_extracted: items.len(),
        chars_translated: texts.iter().map(|text| text.chars().count()).sum(),
        output_size,
    })
}
