use super::{Line, Report, ReportBlock, NOT_AVAILABLE};

/// Plain-text body of the notification email.
pub fn render_text(report: &Report) -> String {
    let mut out = String::from("NEW JOB APPLICATION / طلب توظيف جديد\n");
    out.push_str(&format!("Applicant: {}\n", report.applicant));

    for block in &report.blocks {
        out.push('\n');
        heading(&mut out, block.title());
        match block {
            ReportBlock::Fields { lines, .. } => write_lines(&mut out, lines, ""),
            ReportBlock::Entries { entries, .. } if entries.is_empty() => {
                out.push_str(NOT_AVAILABLE);
                out.push('\n');
            }
            ReportBlock::Entries { entries, .. } => {
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    out.push_str(&entry.heading);
                    out.push('\n');
                    write_lines(&mut out, &entry.lines, "  ");
                }
            }
        }
    }
    out
}

fn heading(out: &mut String, title: &str) {
    out.push_str(&format!("{}\n{}\n", title, "-".repeat(title.chars().count())));
}

fn write_lines(out: &mut String, lines: &[Line], indent: &str) {
    for line in lines {
        out.push_str(&format!("{}{}: {}\n", indent, line.label, line.value));
    }
}
