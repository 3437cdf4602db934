use crate::assessment::{AssessmentResult, RiskTier};
use crate::errors::Error;
use crate::response::{render_recommendations_html, AssessmentResponse};
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
    Html,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// One assessed questionnaire and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentReport {
    pub source: String,
    pub result: AssessmentResult,
}

pub trait OutputWriter {
    fn write_reports(&mut self, reports: &[AssessmentReport]) -> anyhow::Result<()>;
}

#[derive(Serialize)]
struct SourcedResponse<'a> {
    source: &'a str,
    assessment: AssessmentResponse,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    /// A single report is written as a bare response object; several are
    /// written as an array tagged with their source.
    fn write_reports(&mut self, reports: &[AssessmentReport]) -> anyhow::Result<()> {
        let json = match reports {
            [single] => serde_json::to_string_pretty(&AssessmentResponse::from(&single.result))?,
            many => {
                let tagged: Vec<_> = many
                    .iter()
                    .map(|report| SourcedResponse {
                        source: &report.source,
                        assessment: AssessmentResponse::from(&report.result),
                    })
                    .collect();
                serde_json::to_string_pretty(&tagged)?
            }
        };
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_reports(&mut self, reports: &[AssessmentReport]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Nitrosamine Risk Assessment")?;
        writeln!(self.writer)?;
        for report in reports {
            self.write_summary(report)?;
            self.write_recommendations(&report.result)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_summary(&mut self, report: &AssessmentReport) -> anyhow::Result<()> {
        let result = &report.result;

        writeln!(self.writer, "## {}", report.source)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Measure | Value |")?;
        writeln!(self.writer, "|---------|-------|")?;
        self.write_summary_row("Nitrite level", result.nitrite_level.code())?;
        self.write_summary_row("Amine level", result.amine_level.code())?;
        self.write_summary_row("Risk", result.risk_tier.label())?;
        self.write_summary_row("Carryover of nitrites", yes_no(result.carryover.carry_nitrites))?;
        self.write_summary_row("Carryover of amines", yes_no(result.carryover.carry_amines))?;
        self.write_summary_row("Group 4 disabled", yes_no(result.group4_disabled))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary_row(&mut self, measure: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {measure} | {value} |")?;
        Ok(())
    }

    fn write_recommendations(&mut self, result: &AssessmentResult) -> anyhow::Result<()> {
        writeln!(self.writer, "### Recommended Actions")?;
        writeln!(self.writer)?;
        for (i, rec) in result.recommendations.iter().enumerate() {
            writeln!(self.writer, "{}. **{}**: {}", i + 1, rec.title, rec.body)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct HtmlWriter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for HtmlWriter<W> {
    fn write_reports(&mut self, reports: &[AssessmentReport]) -> anyhow::Result<()> {
        for report in reports {
            writeln!(
                self.writer,
                "{}",
                render_recommendations_html(&report.result.recommendations)
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_reports(&mut self, reports: &[AssessmentReport]) -> anyhow::Result<()> {
        for report in reports {
            self.write_header(&report.source)?;
            self.write_levels(&report.result)?;
            self.write_recommendations(&report.result)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, source: &str) -> anyhow::Result<()> {
        let title = format!("Nitrosamine Risk Assessment: {source}");
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.chars().count()).blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_levels(&mut self, result: &AssessmentResult) -> anyhow::Result<()> {
        writeln!(self.writer, "  Nitrite level:  {}", result.nitrite_level)?;
        writeln!(self.writer, "  Amine level:    {}", result.amine_level)?;
        writeln!(self.writer, "  Risk:           {}", tier_colored(result.risk_tier))?;
        writeln!(
            self.writer,
            "  Carryover:      nitrites {}, amines {}",
            yes_no(result.carryover.carry_nitrites),
            yes_no(result.carryover.carry_amines)
        )?;
        if result.group4_disabled {
            writeln!(self.writer, "  {}", "Group 4 not applicable".dimmed())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, result: &AssessmentResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Recommended actions".bold())?;
        for rec in &result.recommendations {
            writeln!(self.writer, "  - {}: {}", rec.title.bold(), rec.body)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn tier_colored(tier: RiskTier) -> ColoredString {
    let label = tier.label().to_uppercase();
    match tier {
        RiskTier::High => label.red().bold(),
        RiskTier::Moderate => label.yellow().bold(),
        RiskTier::Minor => label.cyan(),
        RiskTier::Nil => label.green(),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Html => Box::new(HtmlWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerSet;
    use crate::assessment::assess;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn report(source: &str, pairs: &[(&str, &str)]) -> AssessmentReport {
        let answers: AnswerSet = pairs.iter().copied().collect();
        AssessmentReport {
            source: source.to_string(),
            result: assess(&answers),
        }
    }

    fn render(format: OutputFormat, reports: &[AssessmentReport]) -> String {
        let mut buffer = Vec::new();
        create_writer(format, Box::new(&mut buffer))
            .write_reports(reports)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_json_single_report_is_bare_response() {
        let out = render(OutputFormat::Json, &[report("a.json", &[("group1_q1", "yes")])]);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["ln"], "LN1");
        assert_eq!(value["risk"], "nil");
        assert_eq!(value["carryNitrites"], "Yes");
    }

    #[test]
    fn test_json_many_reports_are_tagged() {
        let out = render(
            OutputFormat::Json,
            &[report("a.json", &[]), report("b.json", &[("group5_q1", "yes")])],
        );
        let value: Value = serde_json::from_str(&out).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["source"], "a.json");
        assert_eq!(items[1]["assessment"]["la"], "LA2");
        assert_eq!(items[1]["assessment"]["risk"], "nil");
    }

    #[test]
    fn test_markdown_report() {
        let out = render(OutputFormat::Markdown, &[report("plant.json", &[])]);
        assert!(out.starts_with("# Nitrosamine Risk Assessment\n"));
        assert!(out.contains("## plant.json"));
        assert!(out.contains("| Risk | Nil |"));
        assert!(out.contains("1. **Nitrosamine Risk (Nil)**: No further action required."));
        assert!(out.contains("2. **Overall**: No immediate action required."));
    }

    #[test]
    fn test_html_report() {
        let out = render(OutputFormat::Html, &[report("a.json", &[])]);
        assert!(out.starts_with("<h2>Recommended Actions Based on Assessment</h2><ul>"));
        assert!(out.trim_end().ends_with("</ul>"));
    }

    #[test]
    fn test_terminal_report_plain() {
        colored::control::set_override(false);
        let out = render(
            OutputFormat::Terminal,
            &[report("a.json", &[("group1_q2", "dont know")])],
        );
        assert!(out.contains("Nitrite level:  LN2"));
        assert!(out.contains("Risk:           NIL"));
        assert!(out.contains("Group 4 not applicable"));
        assert!(out.contains("Carryover of Nitrites"));
    }
}
