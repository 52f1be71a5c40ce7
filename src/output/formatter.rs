//! Output formatters: console, JSON, Markdown and HTML renderings of a report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{AnalysisReport, MatchGauge};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const GAUGE_WIDTH: u32 = 40;
const DISCLAIMER: &str =
    "This tool uses AI for resume analysis but should be used alongside human judgment.";

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

/// Console formatter with colors and a text gauge
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing and documentation
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Standalone HTML page with a match/gap donut
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ATS Resume Analysis</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .header {
            border-bottom: 3px solid #0066cc;
            padding-bottom: 10px;
            margin-bottom: 20px;
        }
        .overview {
            display: flex;
            align-items: center;
            gap: 40px;
            margin: 20px 0;
        }
        .donut {
            width: 220px;
            height: 220px;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .donut-hole {
            width: 140px;
            height: 140px;
            border-radius: 50%;
            background: #f8f9fa;
        }
        .metric-label { color: #666; font-size: 14px; }
        .metric-value { font-size: 40px; font-weight: bold; }
        .result-box {
            padding: 1rem;
            border-radius: 10px;
            background-color: #1e1e1e;
            border: 1px solid #444;
            color: #f5f5f5;
            font-size: 15px;
            line-height: 1.6;
            white-space: pre-wrap;
        }
        .footer { margin-top: 30px; color: #666; font-size: 13px; }
    </style>
    {% endif %}
</head>
<body>
    <div class="header">
        <h1>ATS Resume Analyzer</h1>
        <p>{{ mode_label }} | {{ resume_file }} | Generated {{ generated_at }} with {{ model_used }}</p>
    </div>
    {% if has_gauge %}
    <h2>Match Percentage Overview</h2>
    <div class="overview">
        <div class="donut" style="background: conic-gradient(#28a745 0 {{ matched }}%, #e0e0e0 {{ matched }}% 100%);">
            <div class="donut-hole"></div>
        </div>
        <div>
            <div class="metric-label">Resume–Job Match</div>
            <div class="metric-value">{{ percentage_text }}</div>
        </div>
    </div>
    {% endif %}
    <h2>Detailed Analysis</h2>
    <div class="result-box">{{ response_text }}</div>
    <div class="footer">{{ disclaimer }}</div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    mode_label: String,
    resume_file: String,
    generated_at: String,
    model_used: String,
    has_gauge: bool,
    matched: u32,
    percentage_text: String,
    response_text: String,
    disclaimer: &'static str,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn format_gauge(&self, gauge: MatchGauge) -> String {
        let filled = gauge.matched * GAUGE_WIDTH / 100;
        let bar_match = "█".repeat(filled as usize);
        let bar_gap = "░".repeat((GAUGE_WIDTH - filled) as usize);
        format!(
            "[{}{}] match {}% / gap {}%",
            self.colorize(&bar_match, Color::Green),
            self.colorize(&bar_gap, Color::BrightBlack),
            gauge.matched,
            gauge.gap
        )
    }

    fn score_color(percentage: u32) -> Color {
        match percentage {
            80.. => Color::Green,
            60..=79 => Color::Yellow,
            _ => Color::Red,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📄 ATS RESUME ANALYSIS"));
        output.push_str(&format!(
            "{} | Resume: {} | Model: {} | {}ms\n",
            report.mode(),
            report.metadata.resume_file,
            report.metadata.model_used,
            report.metadata.processing_time_ms
        ));

        if let (Some(percentage), Some(gauge)) = (report.result.percentage(), report.gauge()) {
            output.push_str(&self.format_header("📊 Match Percentage Overview"));
            output.push_str(&self.format_gauge(gauge));
            output.push('\n');
            let metric = format!("{}%", percentage);
            output.push_str(&format!(
                "Resume–Job Match: {}\n",
                self.colorize(&metric, Self::score_color(percentage))
            ));
        }

        output.push_str(&self.format_header("📑 Detailed Analysis"));
        output.push_str(report.result.response_text());
        output.push('\n');

        output.push_str(&format!("\n{}\n", self.colorize(DISCLAIMER, Color::BrightBlack)));
        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::from("# 📄 ATS Resume Analysis\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Mode:** {} | **Resume:** `{}` | **Job:** `{}`\n",
                report.mode(),
                report.metadata.resume_file,
                report.metadata.job_source
            ));
            output.push_str(&format!(
                "**Generated:** {} | **Model:** {} | **Processing Time:** {}ms\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.model_used,
                report.metadata.processing_time_ms
            ));
        }

        if let (Some(percentage), Some(gauge)) = (report.result.percentage(), report.gauge()) {
            output.push_str("## 📊 Match Percentage Overview\n\n");
            output.push_str("| Category | Value |\n|---|---|\n");
            output.push_str(&format!("| Match | {} |\n| Gap | {} |\n\n", gauge.matched, gauge.gap));
            output.push_str(&format!("**Resume–Job Match:** {}%\n\n", percentage));
        }

        output.push_str("## 📑 Detailed Analysis\n\n");
        output.push_str(report.result.response_text());
        output.push_str("\n\n---\n\n");
        output.push_str(&format!("_{}_\n", DISCLAIMER));
        Ok(output)
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let gauge = report.gauge();
        HtmlTemplate {
            include_styles: self.include_styles,
            mode_label: report.mode().label().to_string(),
            resume_file: report.metadata.resume_file.clone(),
            generated_at: report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            model_used: report.metadata.model_used.clone(),
            has_gauge: gauge.is_some(),
            matched: gauge.map(|g| g.matched).unwrap_or(0),
            percentage_text: report
                .result
                .percentage()
                .map(|p| format!("{}%", p))
                .unwrap_or_default(),
            response_text: report.result.response_text().to_string(),
            disclaimer: DISCLAIMER,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        Ok(self.create_template_data(report).render()?)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_metadata: bool, include_html_styles: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_analysis{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_analysis{}.html", base_name, timestamp_suffix),
    }
}
