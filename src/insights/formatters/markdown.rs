use crate::comparison::{MetricRow, MetricSection, Winner};
use crate::insights::types::{CityComparison, ImagePair, Insight};

const BADGE: &str = " ✓";

/// Markdown formatter for comparison reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(comparison: &CityComparison) -> String {
        let mut md = String::with_capacity(2048);
        let name_a = &comparison.city_a.name;
        let name_b = &comparison.city_b.name;

        md.push_str(&format!("# {} vs {}\n\n", name_a, name_b));
        if let (Some(qa), Some(qb)) = (&comparison.quarter_a, &comparison.quarter_b) {
            md.push_str(&format!(
                "*Compared quarters:* {} ({}) / {} ({})\n\n",
                qa.name, name_a, qb.name, name_b
            ));
        }

        for section in &comparison.metrics {
            Self::format_section(&mut md, section, name_a, name_b);
        }

        Self::format_insights(&mut md, "Urban Form Insights", &comparison.insights.urban_form);
        Self::format_insights(&mut md, "Urban Morphology Insights", &comparison.insights.morphology);
        Self::format_insights(&mut md, "Daylight Insights", &comparison.insights.daylight);

        if !comparison.images.is_empty() {
            md.push_str("## Images\n\n");
            for pair in &comparison.images {
                Self::format_image_pair(&mut md, pair);
            }
            md.push('\n');
        }

        md
    }

    fn format_section(md: &mut String, section: &MetricSection, name_a: &str, name_b: &str) {
        md.push_str(&format!("## {}\n\n", section.title));
        md.push_str(&format!("| Metric | {} | {} |\n", name_a, name_b));
        md.push_str("|--------|------|------|\n");
        for row in &section.rows {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                row.label,
                Self::cell(row, Winner::A),
                Self::cell(row, Winner::B)
            ));
        }
        md.push('\n');
    }

    fn cell(row: &MetricRow, side: Winner) -> String {
        let (value, present) = match side {
            Winner::A => (&row.value_a, row.has_a),
            _ => (&row.value_b, row.has_b),
        };

        let mut cell = value.clone();
        if present {
            if let Some(unit) = &row.unit {
                cell.push_str(unit);
            }
        }
        if row.badge && row.winner == side {
            cell.push_str(BADGE);
        }
        cell
    }

    fn format_insights(md: &mut String, heading: &str, insights: &[Insight]) {
        if insights.is_empty() {
            return;
        }
        md.push_str(&format!("## {} ({})\n\n", heading, insights.len()));
        for insight in insights {
            md.push_str(&format!(
                "{} **{}**  \n{}\n\n",
                insight.category.icon(),
                insight.title,
                insight.content
            ));
        }
    }

    fn format_image_pair(md: &mut String, pair: &ImagePair) {
        let show = |url: &Option<String>| url.clone().unwrap_or_else(|| "no image".to_string());
        md.push_str(&format!(
            "- **{}:** {} | {}\n",
            pair.title,
            show(&pair.image_a),
            show(&pair.image_b)
        ));
    }
}
