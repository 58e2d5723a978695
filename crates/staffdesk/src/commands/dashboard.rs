//! Dashboard (landing view) handler.

use chrono::{DateTime, Utc};
use staffdesk_core::{Console, DashboardSummary};
use tabled::Tabled;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct HeadcountRow {
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Staff")]
    staff: usize,
}

/// Coarse "how long ago" label for the fetch time.
fn age_label(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(at);
    match age.num_seconds() {
        ..=0 => "just now".into(),
        secs @ 1..=59 => format!("{secs}s ago"),
        _ if age.num_hours() < 1 => format!("{}m ago", age.num_minutes()),
        _ if age.num_days() < 1 => format!("{}h ago", age.num_hours()),
        _ => format!("{}d ago", age.num_days()),
    }
}

fn summary_text(s: &DashboardSummary) -> String {
    let mut lines = vec![
        format!(
            "Departments:  {} ({} active)",
            s.department_total, s.active_departments
        ),
        format!("Staff:        {} ({} active)", s.staff_total, s.active_staff),
        format!("Unassigned:   {}", s.unassigned_staff),
    ];
    if let Some(at) = s.fetched_at {
        lines.push(format!(
            "As of:        {} ({})",
            at.format("%Y-%m-%d %H:%M:%S UTC"),
            age_label(at, Utc::now())
        ));
    }

    if !s.staff_per_department.is_empty() {
        let rows: Vec<HeadcountRow> = s
            .staff_per_department
            .iter()
            .map(|(department, staff)| HeadcountRow {
                department: department.clone(),
                staff: *staff,
            })
            .collect();
        lines.push(String::new());
        lines.push(output::render_table(&rows));
    }
    lines.join("\n")
}

pub async fn handle(console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    let summary = console.dashboard().await;

    let out = match global.output_format() {
        OutputFormat::Plain => format!("{}\n{}", summary.department_total, summary.staff_total),
        format => output::render_single(format, &summary, summary_text, |_| String::new())?,
    };
    output::print_output(&out, global.quiet);

    // Partial data is still shown; the failure decides the exit code.
    if let Some(message) = summary.departments_error {
        return Err(CliError::action_failed(message, console.departments().error_kind()));
    }
    if let Some(message) = summary.staff_error {
        return Err(CliError::action_failed(message, console.staff().error_kind()));
    }
    Ok(())
}
