//! Route table handlers. Pure lookups, no backend needed.

use serde::Serialize;
use staffdesk_core::{ROUTES, Route, RouteEntry};
use tabled::Tabled;

use crate::cli::{GlobalOpts, RoutesArgs, RoutesCommand};
use crate::error::CliError;
use crate::output;

#[derive(Serialize, Tabled)]
struct RouteRow {
    #[tabled(rename = "Path")]
    path: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "View")]
    view: &'static str,
}

impl From<&RouteEntry> for RouteRow {
    fn from(entry: &RouteEntry) -> Self {
        Self {
            path: entry.pattern,
            name: entry.name.into(),
            view: entry.view.into(),
        }
    }
}

/// A concrete path resolved against the table.
#[derive(Serialize)]
struct Resolved {
    path: String,
    name: &'static str,
    view: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
}

impl From<Route> for Resolved {
    fn from(route: Route) -> Self {
        Self {
            path: route.path(),
            name: route.name().into(),
            view: route.view().into(),
            id: route.id(),
        }
    }
}

fn detail(r: &Resolved) -> String {
    let mut lines = vec![
        format!("Path:  {}", r.path),
        format!("Name:  {}", r.name),
        format!("View:  {}", r.view),
    ];
    if let Some(id) = r.id {
        lines.push(format!("ID:    {id}"));
    }
    lines.join("\n")
}

pub fn handle(args: RoutesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let out = match args.command {
        RoutesCommand::List => {
            let rows: Vec<RouteRow> = ROUTES.iter().map(RouteRow::from).collect();
            output::render_list(
                global.output_format(),
                &rows,
                |r| RouteRow {
                    path: r.path,
                    name: r.name,
                    view: r.view,
                },
                |r| r.path.to_owned(),
            )?
        }

        RoutesCommand::Resolve { path } => {
            let route = Route::resolve(&path).ok_or(CliError::UnknownRoute { path })?;
            let resolved = Resolved::from(route);
            output::render_single(global.output_format(), &resolved, detail, |r| {
                r.view.to_owned()
            })?
        }
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
