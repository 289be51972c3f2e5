use std::time::Duration;

/// 流水线统计结构
#[derive(Debug, Default)]
pub struct PipelineStats {
    pub fetch_time: Duration,
    pub translation_time: Duration,
    pub render_time: Duration,
    pub items_extracted: usize,
    pub chars_translated: usize,
    pub output_size: usize,
}

/// 打印性能统计
pub fn print_pipeline_stats(stats: &PipelineStats, total_duration: Duration) {
    println!("\n📊 性能统计报告:");
    println!("═══════════════════════════════════════");

    // 时间分解
    println!("⏱️  时间分解:");
    println!("   页面抓取: {}", format_duration(stats.fetch_time));
    println!("   翻译执行: {}", format_duration(stats.translation_time));
    println!("   渲染写入: {}", format_duration(stats.render_time));
    println!("   总耗时: {}", format_duration(total_duration));

    // 翻译统计
    println!("\n🔤 翻译统计:");
    println!("   提取条目: {} 项", stats.items_extracted);
    println!("   翻译字符: {} 个", stats.chars_translated);
    println!(
        "   输出大小: {} 字节 ({:.1} KB)",
        stats.output_size,
        stats.output_size as f64 / 1024.0
    );
}

/// 格式化持续时间
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.3}s", duration.as_secs_f64())
    }
}
