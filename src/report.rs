use typoguess::GuessReport;

/// Roles a piece of report text can play. Each maps to one SGR sequence.
#[derive(Clone, Copy)]
enum Style {
    Heading,
    Rule,
    Count,
    Output,
    Muted,
    Rulebar,
    Emphasis,
}

impl Style {
    fn sgr(self) -> &'static str {
        match self {
            Style::Heading => "\x1b[1;36m",
            Style::Rule => "\x1b[34m",
            Style::Count => "\x1b[33m",
            Style::Output => "\x1b[1;32m",
            Style::Muted => "\x1b[2m",
            Style::Rulebar => "\x1b[90m",
            Style::Emphasis => "\x1b[1m",
        }
    }
}

struct Palette {
    enabled: bool,
}

impl Palette {
    fn paint(&self, s: impl std::fmt::Display, style: Style) -> String {
        if self.enabled { format!("{}{s}\x1b[0m", style.sgr()) } else { s.to_string() }
    }

    fn section(&self, title: &str) {
        println!("\n{}", self.paint(format_args!("━━━ {title} ━━━"), Style::Rulebar));
    }
}

pub fn print_report(report: &GuessReport, color: bool) {
    let palette = Palette { enabled: color };
    println!("\n{}", palette.paint(format_args!("⚙  Guessing: \"{}\"", report.input), Style::Heading));
    println!(
        "  {} {}  {} {}",
        palette.paint("locale:", Style::Muted),
        palette.paint(report.locale.as_deref().unwrap_or("(base rules)"), Style::Rule),
        palette.paint("protected spans:", Style::Muted),
        palette.paint(report.protected_spans, Style::Count),
    );

    palette.section("Rules");
    for (idx, line) in step_lines(report, &palette).iter().enumerate() {
        println!("  {} {line}", palette.paint(format_args!("[{idx:>2}]"), Style::Rulebar));
    }

    palette.section("Result");
    if report.changed() {
        println!("  {}", palette.paint(&report.output, Style::Output));
    } else {
        println!("  {}", palette.paint(&report.output, Style::Emphasis));
        println!("  {}", palette.paint("(unchanged)", Style::Muted));
    }

    palette.section("Timing");
    println!("  Total: {}", palette.paint(format_args!("{:?}", report.elapsed), Style::Output));
    println!();
}

/// One line per rule: name padded to the longest name, outcome, duration.
fn step_lines(report: &GuessReport, palette: &Palette) -> Vec<String> {
    let width = report.steps.iter().map(|s| s.rule.chars().count()).max().unwrap_or(0);

    report
        .steps
        .iter()
        .map(|step| {
            let outcome = match (step.skipped, step.replacements) {
                (true, _) => palette.paint("– skipped", Style::Muted),
                (false, 0) => palette.paint("✗ no match", Style::Muted),
                (false, n) => palette.paint(format_args!("✓ {n} replaced"), Style::Output),
            };
            format!(
                "{}  {}  {}",
                palette.paint(format_args!("{:<width$}", step.rule), Style::Rule),
                outcome,
                palette.paint(format_args!("{:?}", step.duration), Style::Muted),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use typoguess::{Guesser, Options};

    #[test]
    fn plain_palette_lines_align_rule_names() {
        let report = Guesser::new(&Options::default()).guess_verbose("It's 1989-90");
        let lines = step_lines(&report, &Palette { enabled: false });

        assert_eq!(lines.len(), report.steps.len());
        let apostrophe = lines.iter().find(|l| l.starts_with("apostrophe ")).expect("apostrophe line");
        assert!(apostrophe.contains("✓ 1 replaced"));
        assert!(lines.iter().any(|l| l.starts_with("ellipsis ") && l.contains("– skipped")));
        assert!(lines.iter().all(|l| !l.contains('\x1b')));
    }

    #[test]
    fn colored_palette_wraps_in_sgr() {
        let palette = Palette { enabled: true };
        assert_eq!(palette.paint("x", Style::Count), "\x1b[33mx\x1b[0m");
    }
}
