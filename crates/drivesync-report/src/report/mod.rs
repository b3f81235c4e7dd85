//! Interactive HTML companion: one plotly chart per panel on a maud page.
pub mod plots;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

use crate::config::ReportConfig;
use crate::figure::Figure;
use crate::summary::ProjectSummary;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

enum Block {
    Content(Markup),
    Plot(Plot),
}

pub struct ReportSection {
    title: String,
    blocks: Vec<Block>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn add_content(&mut self, content: Markup) {
        self.blocks.push(Block::Content(content));
    }

    pub fn add_plot(&mut self, plot: Plot) {
        self.blocks.push(Block::Plot(plot));
    }

    pub fn plot_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Plot(_)))
            .count()
    }
}

pub struct Report {
    name: String,
    version: String,
    title: String,
    generated: chrono::DateTime<chrono::Local>,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(name: &str, version: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            title: title.to_string(),
            generated: chrono::Local::now(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.title.as_str())
    }

    pub fn plot_count(&self) -> usize {
        self.sections.iter().map(ReportSection::plot_count).sum()
    }

    pub fn render(&self) -> Markup {
        let mut plot_id = 0usize;
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style {
                        "body { font-family: sans-serif; margin: 2em auto; max-width: 1200px; }
                        header { border-bottom: 2px solid #2563EB; margin-bottom: 1em; }
                        section { margin-bottom: 2.5em; }
                        .meta { color: #666; font-size: 0.9em; }
                        .code-container {
                            background-color: #f5f5f5;
                            padding: 10px;
                            border-radius: 5px;
                            overflow-x: auto;
                            font-family: monospace;
                            white-space: pre-wrap;
                        }"
                    }
                }
                body {
                    header {
                        h1 { (self.title) }
                        p class="meta" {
                            (self.name) " v" (self.version) " | generated "
                            (self.generated.format("%Y-%m-%d %H:%M:%S").to_string())
                        }
                    }
                    @for section in &self.sections {
                        section {
                            h2 { (section.title) }
                            @for block in &section.blocks {
                                @match block {
                                    Block::Content(markup) => { (markup) }
                                    Block::Plot(plot) => {
                                        ({
                                            plot_id += 1;
                                            PreEscaped(plot.to_inline_html(Some(&format!("plot-{}", plot_id))))
                                        })
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render().into_string())
            .with_context(|| format!("Failed to write report: {}", path.display()))
    }
}

/// Assemble the companion page for `figure`.
pub fn build_report(config: &ReportConfig, figure: &Figure) -> Result<Report> {
    let mut report = Report::new("DriveSync", &config.version, &figure.title);

    {
        let mut overview = ReportSection::new("Overview");
        overview.add_content(html! {
            p {
                "Static figure: " code { (config.output_file.display().to_string()) }
                " (" (config.dpi) " dpi)."
            }
            ul {
                @for panel in &figure.panels {
                    li { (panel.checklist) }
                }
            }
        });
        report.add_section(overview);
    }

    for panel in &figure.panels {
        let mut section = ReportSection::new(&panel.title);
        section.add_plot(plots::panel_plot(panel));
        report.add_section(section);
    }

    {
        let mut summary = ReportSection::new("Project Summary");
        summary.add_content(html! {
            div class="code-container" {
                pre { (ProjectSummary::drivesync().to_string()) }
            }
        });
        report.add_section(summary);
    }

    {
        let mut config_section = ReportSection::new("Configuration");
        config_section.add_content(html! {
            div class="code-container" {
                pre {
                    code { (serde_json::to_string_pretty(config)?) }
                }
            }
        });
        report.add_section(config_section);
    }

    Ok(report)
}

/// Build and save the companion page, returning its path.
pub fn write_html_report(config: &ReportConfig, figure: &Figure, path: &Path) -> Result<PathBuf> {
    let report = build_report(config, figure)?;
    report.save_to_file(path)?;
    log::info!("Report saved to {}", path.display());
    Ok(path.to_path_buf())
}
