//! Route table: maps URL paths to the views that render them.

use std::fmt;
use std::str::FromStr;

use staffdesk_api::Id;
use strum::{Display, EnumIter, IntoStaticStr};

/// Named entries of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum RouteName {
    Dashboard,
    StaffList,
    StaffNew,
    StaffDetail,
    StaffEdit,
    DepartmentList,
    DepartmentNew,
    DepartmentEdit,
}

/// The view a route renders. Create and edit routes share a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum ViewId {
    Dashboard,
    StaffList,
    StaffDetail,
    StaffForm,
    DepartmentList,
    DepartmentForm,
}

/// One row of the static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub name: RouteName,
    pub view: ViewId,
}

/// The route table, in declaration order.
pub static ROUTES: [RouteEntry; 8] = [
    RouteEntry {
        pattern: "/",
        name: RouteName::Dashboard,
        view: ViewId::Dashboard,
    },
    RouteEntry {
        pattern: "/staff",
        name: RouteName::StaffList,
        view: ViewId::StaffList,
    },
    RouteEntry {
        pattern: "/staff/new",
        name: RouteName::StaffNew,
        view: ViewId::StaffForm,
    },
    RouteEntry {
        pattern: "/staff/:id",
        name: RouteName::StaffDetail,
        view: ViewId::StaffDetail,
    },
    RouteEntry {
        pattern: "/staff/:id/edit",
        name: RouteName::StaffEdit,
        view: ViewId::StaffForm,
    },
    RouteEntry {
        pattern: "/departments",
        name: RouteName::DepartmentList,
        view: ViewId::DepartmentList,
    },
    RouteEntry {
        pattern: "/departments/new",
        name: RouteName::DepartmentNew,
        view: ViewId::DepartmentForm,
    },
    RouteEntry {
        pattern: "/departments/:id/edit",
        name: RouteName::DepartmentEdit,
        view: ViewId::DepartmentForm,
    },
];

/// A concrete, resolved route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    StaffList,
    StaffNew,
    StaffDetail { id: Id },
    StaffEdit { id: Id },
    DepartmentList,
    DepartmentNew,
    DepartmentEdit { id: Id },
}

impl Route {
    /// Match a concrete path against the table.
    ///
    /// A trailing slash is tolerated and `new` is matched before `:id`.
    /// Returns `None` for unknown paths and ids that are not integers.
    pub fn resolve(path: &str) -> Option<Self> {
        let rest = path.strip_prefix('/')?.trim_end_matches('/');
        let segments: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };

        match segments.as_slice() {
            [] => Some(Self::Dashboard),
            ["staff"] => Some(Self::StaffList),
            ["staff", "new"] => Some(Self::StaffNew),
            ["staff", id] => parse_id(id).map(|id| Self::StaffDetail { id }),
            ["staff", id, "edit"] => parse_id(id).map(|id| Self::StaffEdit { id }),
            ["departments"] => Some(Self::DepartmentList),
            ["departments", "new"] => Some(Self::DepartmentNew),
            ["departments", id, "edit"] => parse_id(id).map(|id| Self::DepartmentEdit { id }),
            _ => None,
        }
    }

    /// Render back to a concrete path.
    pub fn path(self) -> String {
        match self {
            Self::Dashboard => "/".into(),
            Self::StaffList => "/staff".into(),
            Self::StaffNew => "/staff/new".into(),
            Self::StaffDetail { id } => format!("/staff/{id}"),
            Self::StaffEdit { id } => format!("/staff/{id}/edit"),
            Self::DepartmentList => "/departments".into(),
            Self::DepartmentNew => "/departments/new".into(),
            Self::DepartmentEdit { id } => format!("/departments/{id}/edit"),
        }
    }

    pub fn name(self) -> RouteName {
        match self {
            Self::Dashboard => RouteName::Dashboard,
            Self::StaffList => RouteName::StaffList,
            Self::StaffNew => RouteName::StaffNew,
            Self::StaffDetail { .. } => RouteName::StaffDetail,
            Self::StaffEdit { .. } => RouteName::StaffEdit,
            Self::DepartmentList => RouteName::DepartmentList,
            Self::DepartmentNew => RouteName::DepartmentNew,
            Self::DepartmentEdit { .. } => RouteName::DepartmentEdit,
        }
    }

    /// The table entry this route was matched from.
    pub fn entry(self) -> Option<&'static RouteEntry> {
        let name = self.name();
        ROUTES.iter().find(|entry| entry.name == name)
    }

    pub fn view(self) -> ViewId {
        match self {
            Self::Dashboard => ViewId::Dashboard,
            Self::StaffList => ViewId::StaffList,
            Self::StaffDetail { .. } => ViewId::StaffDetail,
            Self::StaffNew | Self::StaffEdit { .. } => ViewId::StaffForm,
            Self::DepartmentList => ViewId::DepartmentList,
            Self::DepartmentNew | Self::DepartmentEdit { .. } => ViewId::DepartmentForm,
        }
    }

    /// Captured `:id`, for detail and edit routes.
    pub fn id(self) -> Option<Id> {
        match self {
            Self::StaffDetail { id } | Self::StaffEdit { id } | Self::DepartmentEdit { id } => {
                Some(id)
            }
            _ => None,
        }
    }
}

fn parse_id(segment: &str) -> Option<Id> {
    segment.parse().ok()
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Error for a path that matches no route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no route matches '{0}'")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| UnknownRoute(s.to_owned()))
    }
}
