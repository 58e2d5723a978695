//! Staff command handlers.

use staffdesk_core::{Console, Staff, StaffRequest};
use tabled::Tabled;

use crate::cli::{
    GlobalOpts, StaffArgs, StaffCommand, StaffCreate, StaffDetails, StaffField, StaffPatch,
};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct StaffRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Staff No")]
    staff_no: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl StaffRow {
    fn new(s: &Staff, color: bool) -> Self {
        Self {
            id: id_string(s),
            staff_no: s.staff_no.clone(),
            name: s.name.clone(),
            department: output::or_dash(s.department_name()).into(),
            position: output::or_dash(s.position.as_deref()).into(),
            status: output::or_dash(s.status.as_deref()).into(),
            active: output::active_marker(s.is_active, color),
        }
    }
}

fn id_string(s: &Staff) -> String {
    s.id.map_or_else(|| "-".into(), |id| id.to_string())
}

fn detail(s: &Staff) -> String {
    let department = s.department.as_ref().map_or_else(
        || "-".into(),
        |d| match d.id {
            Some(id) => format!("{} ({}, id {id})", d.name, d.code),
            None => format!("{} ({})", d.name, d.code),
        },
    );

    [
        format!("ID:          {}", id_string(s)),
        format!("Staff No:    {}", s.staff_no),
        format!("Name:        {}", s.name),
        format!("Gender:      {}", output::or_dash(s.gender.as_deref())),
        format!("Birth date:  {}", output::or_dash(s.birth_date.as_deref())),
        format!("Phone:       {}", output::or_dash(s.phone.as_deref())),
        format!("Email:       {}", output::or_dash(s.email.as_deref())),
        format!("ID card:     {}", output::or_dash(s.id_card.as_deref())),
        format!("Department:  {department}"),
        format!("Position:    {}", output::or_dash(s.position.as_deref())),
        format!("Hire date:   {}", output::or_dash(s.hire_date.as_deref())),
        format!("Status:      {}", output::or_dash(s.status.as_deref())),
        format!("Address:     {}", output::or_dash(s.address.as_deref())),
        format!("Active:      {}", s.is_active),
        format!("Created:     {}", output::or_dash(s.created_at.as_deref())),
        format!("Updated:     {}", output::or_dash(s.updated_at.as_deref())),
    ]
    .join("\n")
}

// ── Request building ────────────────────────────────────────────────

fn create_request(args: StaffCreate) -> StaffRequest {
    let mut request = StaffRequest {
        department_id: args.department_id,
        is_active: Some(!args.inactive),
        ..StaffRequest::new(args.staff_no, args.name)
    };
    apply_details(&mut request, args.details);
    request
}

fn apply_details(request: &mut StaffRequest, details: StaffDetails) {
    let StaffDetails {
        gender,
        birth_date,
        phone,
        email,
        id_card,
        position,
        hire_date,
        status,
        address,
    } = details;

    for (slot, value) in [
        (&mut request.gender, gender),
        (&mut request.birth_date, birth_date),
        (&mut request.phone, phone),
        (&mut request.email, email),
        (&mut request.id_card, id_card),
        (&mut request.position, position),
        (&mut request.hire_date, hire_date),
        (&mut request.status, status),
        (&mut request.address, address),
    ] {
        if value.is_some() {
            *slot = value;
        }
    }
}

fn field_slot(request: &mut StaffRequest, field: StaffField) -> &mut Option<String> {
    match field {
        StaffField::Gender => &mut request.gender,
        StaffField::BirthDate => &mut request.birth_date,
        StaffField::Phone => &mut request.phone,
        StaffField::Email => &mut request.email,
        StaffField::IdCard => &mut request.id_card,
        StaffField::Position => &mut request.position,
        StaffField::HireDate => &mut request.hire_date,
        StaffField::Status => &mut request.status,
        StaffField::Address => &mut request.address,
    }
}

/// Overlay the flags that were given onto a prefilled request.
///
/// `--clear` runs last, so it wins over a value flag for the same field.
fn apply_patch(request: &mut StaffRequest, patch: StaffPatch) {
    if let Some(staff_no) = patch.staff_no {
        request.staff_no = staff_no;
    }
    if let Some(name) = patch.name {
        request.name = name;
    }
    if patch.no_department {
        request.department_id = None;
    } else if let Some(department_id) = patch.department_id {
        request.department_id = Some(department_id);
    }
    if let Some(active) = patch.active {
        request.is_active = Some(active);
    }
    apply_details(request, patch.details);
    for field in patch.clear {
        *field_slot(request, field) = None;
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(console: &Console, args: StaffArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let store = console.staff();
    let format = global.output_format();

    match args.command {
        StaffCommand::List => {
            store.fetch_all().await;
            util::check_store(store)?;
            print_list(&store.collection(), global)
        }

        StaffCommand::ByDepartment { department_id } => {
            store.fetch_by_department(department_id).await;
            util::check_store(store)?;
            print_list(&store.collection(), global)
        }

        StaffCommand::Search { name } => {
            store.search(&name).await;
            util::check_store(store)?;
            print_list(&store.collection(), global)
        }

        StaffCommand::Get { id } => {
            store.fetch_by_id(id).await;
            util::check_store(store)?;
            print_current(store.current(), global)
        }

        StaffCommand::ByNo { staff_no } => {
            store.fetch_by_key(&staff_no).await;
            util::check_store(store)?;
            print_current(store.current(), global)
        }

        StaffCommand::Create(fields) => {
            let created = store
                .create(&create_request(fields))
                .await
                .map_err(|e| util::write_failed(store, e))?;
            output::notice(&format!("Staff member created (id {})", id_string(&created)), global.quiet);
            let out = output::render_single(format, &created, detail, id_string)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        StaffCommand::Update { id, patch } => {
            store.fetch_by_id(id).await;
            util::check_store(store)?;
            let mut request = store
                .current()
                .map(|s| s.to_request())
                .ok_or_else(|| CliError::action_failed("Failed to fetch staff details", None))?;
            apply_patch(&mut request, patch);

            let updated = store
                .update(id, &request)
                .await
                .map_err(|e| util::write_failed(store, e))?;
            output::notice("Staff member updated", global.quiet);
            let out = output::render_single(format, &updated, detail, id_string)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        StaffCommand::Delete { id } => {
            if !util::confirm(&format!("Delete staff member {id}?"), global.yes)? {
                return Ok(());
            }
            store
                .delete(id)
                .await
                .map_err(|e| util::write_failed(store, e))?;
            output::notice(&format!("Staff member {id} deleted"), global.quiet);
            Ok(())
        }
    }
}

fn print_list(items: &[Staff], global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(global.color_mode());
    let out = output::render_list(
        global.output_format(),
        items,
        |s| StaffRow::new(s, color),
        id_string,
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn print_current(current: Option<Staff>, global: &GlobalOpts) -> Result<(), CliError> {
    let Some(member) = current else {
        return Ok(());
    };
    let out = output::render_single(global.output_format(), &member, detail, id_string)?;
    output::print_output(&out, global.quiet);
    Ok(())
}
