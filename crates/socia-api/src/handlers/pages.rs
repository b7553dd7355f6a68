//! Page handlers.
//!
//! Views are deliberately bare: the dashboard's charts, tables, and mock
//! data live in the front end. These pages exist so the route guard has
//! real content to protect and so the login flow works without JavaScript.

use axum::extract::{Path, Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::extractors::{CurrentUser, MaybeUser};
use crate::handlers::auth::LOGIN_ERROR_CODE;
use crate::state::AppState;
use crate::view::{ViewContext, ViewQuery};

/// Dashboard sections reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// KPI overview.
    Overview,
    /// Ad campaign performance.
    Ads,
    /// Lead pipeline.
    Leads,
    /// Client roster.
    Clients,
    /// Generated reports.
    Reports,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::Ads,
        Section::Leads,
        Section::Clients,
        Section::Reports,
    ];

    /// Page title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Ads => "Ad Campaigns",
            Self::Leads => "Leads",
            Self::Clients => "Clients",
            Self::Reports => "Reports",
        }
    }

    /// Request path.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Overview => "/dashboard",
            Self::Ads => "/dashboard/ads",
            Self::Leads => "/dashboard/leads",
            Self::Clients => "/dashboard/clients",
            Self::Reports => "/dashboard/reports",
        }
    }
}

/// Query string of the login page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginPageQuery {
    /// Error code set after a rejected form login.
    pub error: Option<String>,
}

/// GET /
pub async fn landing(MaybeUser(claims): MaybeUser) -> Html<String> {
    let action = match &claims {
        Some(claims) => format!(
            r#"<p>Signed in as {}.</p><p><a href="/dashboard">Open dashboard</a></p>"#,
            escape_html(&claims.name)
        ),
        None => r#"<p><a href="/login">Sign in</a></p>"#.to_string(),
    };
    Html(document(
        "SOCIA",
        &format!("<h1>SOCIA</h1><p>Creative Agency</p>{action}"),
    ))
}

/// GET /login
///
/// Rendered whether or not a session exists unless the guard is configured
/// to send signed-in users to the dashboard.
pub async fn login_page(Query(query): Query<LoginPageQuery>) -> Html<String> {
    let error = match query.error.as_deref() {
        Some(LOGIN_ERROR_CODE) => r#"<p role="alert">Invalid email or password.</p>"#,
        Some(_) => r#"<p role="alert">Sign-in failed.</p>"#,
        None => "",
    };
    let body = format!(
        r#"<h1>Welcome Back</h1>{error}
<form method="post" action="/login">
<label>Email Address <input type="email" name="email" autocomplete="username"></label>
<label>Password <input type="password" name="password" autocomplete="current-password"></label>
<button type="submit">Sign in</button>
</form>"#
    );
    Html(document("Sign in · SOCIA", &body))
}

/// GET /dashboard
pub async fn overview(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ViewQuery>,
) -> Html<String> {
    let view = ViewContext::resolve(&state.config.ui, &query);
    Html(dashboard(Section::Overview, &user, &view, ""))
}

/// GET /dashboard/ads
pub async fn ads(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ViewQuery>,
) -> Html<String> {
    let view = ViewContext::resolve(&state.config.ui, &query);
    Html(dashboard(Section::Ads, &user, &view, ""))
}

/// GET /dashboard/leads
pub async fn leads(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ViewQuery>,
) -> Html<String> {
    let view = ViewContext::resolve(&state.config.ui, &query);
    Html(dashboard(Section::Leads, &user, &view, ""))
}

/// GET /dashboard/clients
pub async fn clients(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ViewQuery>,
) -> Html<String> {
    let view = ViewContext::resolve(&state.config.ui, &query);
    Html(dashboard(Section::Clients, &user, &view, ""))
}

/// GET /dashboard/clients/{id}
pub async fn client_detail(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(client_id): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Html<String> {
    let view = ViewContext::resolve(&state.config.ui, &query).with_client(&client_id);
    let detail = format!(
        r#"<section data-client="{id}"><h2>Client {id}</h2></section>"#,
        id = escape_html(&client_id)
    );
    Html(dashboard(Section::Clients, &user, &view, &detail))
}

/// GET /dashboard/reports
pub async fn reports(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ViewQuery>,
) -> Html<String> {
    let view = ViewContext::resolve(&state.config.ui, &query);
    Html(dashboard(Section::Reports, &user, &view, ""))
}

fn dashboard(section: Section, user: &CurrentUser, view: &ViewContext, content: &str) -> String {
    let identity = user.identity();

    let nav: String = Section::ALL
        .iter()
        .map(|s| {
            let current = if *s == section { r#" aria-current="page""# } else { "" };
            format!(r#"<li><a href="{}"{current}>{}</a></li>"#, s.path(), s.title())
        })
        .collect();

    let sidebar_state = if view.sidebar_collapsed { "collapsed" } else { "expanded" };
    let client = view
        .active_client_id
        .as_deref()
        .map(|c| format!(r#" data-active-client="{}""#, escape_html(c)))
        .unwrap_or_default();

    let body = format!(
        r#"<header{client}><span>{name}</span> <span>{role}</span> <span data-unread="{unread}">{unread}</span>
<form method="post" action="/api/auth/logout"><button type="submit">Sign out</button></form></header>
<nav data-sidebar="{sidebar_state}"><ul>{nav}</ul></nav>
<main><h1>{title}</h1>{content}</main>"#,
        name = escape_html(&identity.name),
        role = identity.role,
        unread = view.unread_notifications,
        title = section.title(),
    );

    document(&format!("{} · SOCIA", section.title()), &body)
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><title>{}</title></head><body>{body}</body></html>",
        escape_html(title)
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
