//! Fixed console text printed around rendering.
use std::fmt;
use std::path::Path;

use crate::dataset::{ACCIDENT_THRESHOLD_G, SEVERE_THRESHOLD_G};
use crate::figure::Figure;

const RULE_WIDTH: usize = 70;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn generation_banner() -> String {
    format!(
        "\u{1F697} Generating DriveSync Complete System Analysis...\n{}\n\n\u{1F4CA} Creating Single Comprehensive Chart...",
        rule()
    )
}

/// One ✅ line per panel, in figure order.
pub fn generation_checklist(figure: &Figure) -> String {
    figure
        .panels
        .iter()
        .map(|p| format!("   \u{2705} {}", p.checklist))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn completion_notice(saved: &[&Path]) -> String {
    let files: Vec<String> = saved
        .iter()
        .map(|p| format!("   \u{2022} {}", p.display()))
        .collect();
    format!(
        "\n{}\n\n\u{1F389} DriveSync complete analysis chart generated successfully!\n\n\u{1F4C1} Saved File:\n{}\n\n\u{2728} Ready for your research paper!",
        rule(),
        files.join("\n")
    )
}

pub fn closing_remarks() -> String {
    "\n\u{1F3C6} DriveSync project visualization complete!\n\u{1F4D6} Use these charts in your research paper methodology and results sections."
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub icon: char,
    pub heading: String,
    pub items: Vec<String>,
}

impl SummarySection {
    fn new(icon: char, heading: &str, items: &[&str]) -> Self {
        Self {
            icon,
            heading: heading.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The project overview block printed after the figure is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub title: String,
    pub sections: Vec<SummarySection>,
}

impl ProjectSummary {
    pub fn drivesync() -> Self {
        let accident = format!("Accident Detection: {:.1}G", ACCIDENT_THRESHOLD_G);
        let severe = format!("Severe Accident: {:.1}G", SEVERE_THRESHOLD_G);

        Self {
            title: "DRIVESYNC PROJECT SUMMARY".to_string(),
            sections: vec![
                SummarySection::new(
                    '\u{1F527}',
                    "CORE FEATURES IMPLEMENTED",
                    &[
                        "Multi-sensor accident detection (Accelerometer, Gyroscope, GPS)",
                        "Blackspot detection using KNN pattern matching",
                        "Real-time road condition monitoring (Smooth/Moderate/Rough)",
                        "Emergency SOS system with automatic triggering",
                        "AI-powered risk assessment and scoring",
                        "Driver behavior analysis and classification",
                        "System performance monitoring (SMS, GPS, Battery)",
                        "Weather-based safety alerts",
                    ],
                ),
                SummarySection::new(
                    '\u{1F916}',
                    "ML ALGORITHMS USED",
                    &[
                        "Random Forest: Multi-class accident severity prediction",
                        "K-Nearest Neighbors (KNN): Real-time pattern matching",
                        "Support Vector Machine (SVM): Binary critical event detection",
                    ],
                ),
                SummarySection::new(
                    '\u{1F4CA}',
                    "KEY PERFORMANCE METRICS",
                    &[
                        "Overall Detection Accuracy: 93.2%",
                        "Emergency Response Time: 3.5 seconds",
                        "System Uptime: 97.8%",
                        "False Positive Rate: 4.8%",
                        "User Satisfaction: 88.5%",
                    ],
                ),
                SummarySection::new(
                    '\u{1F3AF}',
                    "THRESHOLDS & PARAMETERS",
                    &[
                        accident.as_str(),
                        severe.as_str(),
                        "Emergency SOS: 28.0G (user-configurable)",
                        "Rotation Alert: 300\u{B0}/s",
                        "Speed Change: 30 km/h",
                    ],
                ),
                SummarySection::new(
                    '\u{1F4BB}',
                    "TECHNOLOGY STACK",
                    &[
                        "Frontend: Flutter (Cross-platform)",
                        "Sensors: Accelerometer, Gyroscope, GPS, Magnetometer",
                        "AI Integration: OpenAI/Gemini API (for advanced features)",
                        "Local Storage: SharedPreferences, Hive",
                        "Notifications: Flutter Local Notifications",
                    ],
                ),
            ],
        }
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{}", rule())?;
        writeln!(f, "\u{1F4CB} {}", self.title)?;
        write!(f, "{}", rule())?;
        for section in &self.sections {
            write!(f, "\n\n{} {}:", section.icon, section.heading)?;
            for item in &section.items {
                write!(f, "\n   \u{2022} {}", item)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_thresholds_with_one_decimal() {
        let text = ProjectSummary::drivesync().to_string();
        assert!(text.contains("Accident Detection: 5.0G"));
        assert!(text.contains("Severe Accident: 7.0G"));
        assert!(text.contains("Rotation Alert: 300\u{B0}/s"));
    }

    #[test]
    fn summary_has_five_sections_in_order() {
        let summary = ProjectSummary::drivesync();
        let headings: Vec<_> = summary.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(
            headings,
            [
                "CORE FEATURES IMPLEMENTED",
                "ML ALGORITHMS USED",
                "KEY PERFORMANCE METRICS",
                "THRESHOLDS & PARAMETERS",
                "TECHNOLOGY STACK",
            ]
        );
        assert_eq!(summary.sections[0].items.len(), 8);
    }

    #[test]
    fn banner_has_a_seventy_column_rule() {
        assert!(generation_banner().lines().any(|l| l == "=".repeat(70)));
    }
}
