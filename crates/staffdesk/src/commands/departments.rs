//! Department command handlers.

use staffdesk_core::{Console, Department, DepartmentRequest};
use tabled::Tabled;

use crate::cli::{DepartmentCreate, DepartmentPatch, DepartmentsArgs, DepartmentsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DepartmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Parent")]
    parent: String,
    #[tabled(rename = "Level")]
    level: i32,
    #[tabled(rename = "Active")]
    active: String,
}

impl DepartmentRow {
    fn new(d: &Department, color: bool) -> Self {
        Self {
            id: id_string(d),
            code: d.code.clone(),
            name: d.name.clone(),
            parent: d.parent_id.map_or_else(|| "-".into(), |p| p.to_string()),
            level: d.level,
            active: output::active_marker(d.is_active, color),
        }
    }
}

fn id_string(d: &Department) -> String {
    d.id.map_or_else(|| "-".into(), |id| id.to_string())
}

fn detail(d: &Department) -> String {
    [
        format!("ID:           {}", id_string(d)),
        format!("Code:         {}", d.code),
        format!("Name:         {}", d.name),
        format!("Description:  {}", output::or_dash(d.description.as_deref())),
        format!(
            "Parent:       {}",
            d.parent_id.map_or_else(|| "-".into(), |p| p.to_string())
        ),
        format!("Level:        {}", d.level),
        format!("Active:       {}", d.is_active),
        format!("Created:      {}", output::or_dash(d.created_at.as_deref())),
        format!("Updated:      {}", output::or_dash(d.updated_at.as_deref())),
    ]
    .join("\n")
}

// ── Request building ────────────────────────────────────────────────

fn create_request(args: DepartmentCreate) -> DepartmentRequest {
    DepartmentRequest {
        description: args.description,
        parent_id: args.parent_id,
        level: args.level,
        is_active: Some(!args.inactive),
        ..DepartmentRequest::new(args.code, args.name)
    }
}

/// Overlay the flags that were given onto a prefilled request.
fn apply_patch(request: &mut DepartmentRequest, patch: DepartmentPatch) {
    if let Some(code) = patch.code {
        request.code = code;
    }
    if let Some(name) = patch.name {
        request.name = name;
    }
    if patch.no_description {
        request.description = None;
    } else if let Some(description) = patch.description {
        request.description = Some(description);
    }
    if patch.no_parent {
        request.parent_id = None;
    } else if let Some(parent_id) = patch.parent_id {
        request.parent_id = Some(parent_id);
    }
    if let Some(level) = patch.level {
        request.level = Some(level);
    }
    if let Some(active) = patch.active {
        request.is_active = Some(active);
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: DepartmentsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let store = console.departments();
    let format = global.output_format();

    match args.command {
        DepartmentsCommand::List => {
            store.fetch_all().await;
            util::check_store(store)?;
            print_list(&store.collection(), global)
        }

        DepartmentsCommand::Search { name } => {
            store.search(&name).await;
            util::check_store(store)?;
            print_list(&store.collection(), global)
        }

        DepartmentsCommand::Get { id } => {
            store.fetch_by_id(id).await;
            util::check_store(store)?;
            print_current(store.current(), global)
        }

        DepartmentsCommand::ByCode { code } => {
            store.fetch_by_key(&code).await;
            util::check_store(store)?;
            print_current(store.current(), global)
        }

        DepartmentsCommand::Create(fields) => {
            let created = store
                .create(&create_request(fields))
                .await
                .map_err(|e| util::write_failed(store, e))?;
            output::notice(&format!("Department created (id {})", id_string(&created)), global.quiet);
            let out = output::render_single(format, &created, detail, id_string)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DepartmentsCommand::Update { id, patch } => {
            // Edit view: prefill from the current record, overlay the flags.
            store.fetch_by_id(id).await;
            util::check_store(store)?;
            let mut request = store.current().map(|d| d.to_request()).ok_or_else(|| {
                CliError::action_failed("Failed to fetch department details", None)
            })?;
            apply_patch(&mut request, patch);

            let updated = store
                .update(id, &request)
                .await
                .map_err(|e| util::write_failed(store, e))?;
            output::notice("Department updated", global.quiet);
            let out = output::render_single(format, &updated, detail, id_string)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DepartmentsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete department {id}?"), global.yes)? {
                return Ok(());
            }
            store
                .delete(id)
                .await
                .map_err(|e| util::write_failed(store, e))?;
            output::notice(&format!("Department {id} deleted"), global.quiet);
            Ok(())
        }
    }
}

fn print_list(items: &[Department], global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(global.color_mode());
    let out = output::render_list(
        global.output_format(),
        items,
        |d| DepartmentRow::new(d, color),
        id_string,
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn print_current(current: Option<Department>, global: &GlobalOpts) -> Result<(), CliError> {
    let Some(department) = current else {
        return Ok(());
    };
    let out = output::render_single(global.output_format(), &department, detail, id_string)?;
    output::print_output(&out, global.quiet);
    Ok(())
}
