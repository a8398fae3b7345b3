use std::collections::HashMap;
use std::io::Read;
use std::thread;

use astra::Request;
use chrono::NaiveDate;
use serde_json::json;
use tracing::{error, info, warn};

use crate::app::App;
use crate::auth::{
    clear_current_user, get_current_user, landing_for, resolve_view, set_current_user, Role, User,
    ViewDecision,
};
use crate::domain::calendar::{days_until, due_label, long_date};
use crate::domain::maintenance::{NewRequest, Priority};
use crate::domain::money::format_usd;
use crate::domain::payment::{method_label, PaymentStatus};
use crate::domain::tenant::{DeleteOutcome, PaymentStanding, TenantDraft, TenantStatus};
use crate::domain::{aggregate, filter, DateRange, Query, TenantFacet};
use crate::errors::ServerError;
use crate::responses::{json_response, redirect, ResultResp};
use crate::spreadsheets::export_payments_xlsx;

type Params = HashMap<String, String>;

/// Recent payments shown on the renter dashboard.
const DASHBOARD_PAYMENTS: usize = 3;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    let result = route(req, app, &method, &path);
    match &result {
        Ok(resp) => info!(%method, %path, status = resp.status().as_u16(), "request"),
        Err(e) if e.status() >= 500 => {
            error!(%method, %path, status = e.status(), error = %e, "request failed")
        }
        Err(e) => warn!(%method, %path, status = e.status(), error = %e, "request rejected"),
    }
    result
}

fn route(req: Request, app: &App, method: &str, path: &str) -> ResultResp {
    let query = parse_query(&req);
    let user = app.db.with_conn(|conn| get_current_user(conn))?;

    match resolve_view(path, user.as_ref()) {
        ViewDecision::Landing => return landing(),
        ViewDecision::Redirect(to) => return redirect(to),
        ViewDecision::Allow => {}
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method, segments.as_slice()) {
        ("POST", ["login"]) => login(&read_form(req)?, app),
        ("POST", ["logout"]) => logout(app),

        ("GET", ["session"]) => json_response(200, &signed_in(user)?),
        ("GET", ["dashboard"]) => dashboard(&signed_in(user)?, app),

        ("GET", ["payments"]) => list_payments(&query, app),
        ("POST", ["payments"]) => submit_payment(&read_form(req)?, app),
        ("GET", ["payments", "export"]) => export_payments(&query, app),

        ("GET", ["tenants"]) => list_tenants(&query, app),
        ("POST", ["tenants"]) => add_tenant(&read_form(req)?, app),
        ("GET", ["tenants", id]) => show_tenant(id, app),
        ("POST", ["tenants", id]) => update_tenant(id, &read_form(req)?, app),
        ("POST", ["tenants", id, "delete"]) => delete_tenant(id, &read_form(req)?, app),

        ("GET", ["reminders"]) => list_reminders(app),
        ("POST", ["reminders", "check"]) => check_reminders(app),
        ("POST", ["reminders", id, "read"]) => read_reminder(id, app),
        ("POST", ["autopay"]) => set_auto_pay(&read_form(req)?, app),

        ("GET", ["messages"]) => list_messages(signed_in(user)?.role, app),
        ("POST", ["messages", id, "read"]) => read_message(signed_in(user)?.role, id, app),
        ("POST", ["messages", id, "reply"]) => {
            let role = signed_in(user)?.role;
            reply_message(role, id, &read_form(req)?, app)
        }

        ("GET", ["maintenance"]) => list_maintenance(signed_in(user)?.role, app),
        ("POST", ["maintenance"]) => {
            let role = signed_in(user)?.role;
            submit_maintenance(role, &read_form(req)?, app)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn signed_in(user: Option<User>) -> Result<User, ServerError> {
    user.ok_or_else(|| ServerError::Unauthorized("sign in required".into()))
}

fn parse_query(req: &Request) -> Params {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: Request) -> Result<Params, ServerError> {
    let mut raw = String::new();
    req.into_body()
        .reader()
        .read_to_string(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;

    Ok(url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect())
}

fn param<'a>(params: &'a Params, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or("")
}

fn parse_amount(value: &str, field: &str) -> Result<f64, ServerError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ServerError::BadRequest(format!("{field} must be a number")))
}

fn parse_date(value: &str, field: &str) -> Result<NaiveDate, ServerError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ServerError::BadRequest(format!("{field} must be a YYYY-MM-DD date")))
}

fn parse_flag(value: &str, field: &str) -> Result<bool, ServerError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(ServerError::BadRequest(format!("{field} must be true or false"))),
    }
}

// ---------- session ----------

fn landing() -> ResultResp {
    json_response(
        200,
        &json!({
            "app": "RentEase",
            "signed_in": false,
            "login": "/login",
        }),
    )
}

fn login(form: &Params, app: &App) -> ResultResp {
    let user = app.auth.login(param(form, "email"), param(form, "password"))?;
    app.db.with_conn(|conn| set_current_user(conn, &user))?;
    redirect(landing_for(user.role))
}

fn logout(app: &App) -> ResultResp {
    app.db.with_conn(|conn| clear_current_user(conn))?;
    info!("signed out");
    redirect("/")
}

// ---------- dashboards ----------

fn dashboard(user: &User, app: &App) -> ResultResp {
    let now = app.now();
    let ws = app.workspaces()?;

    match user.role {
        Role::Renter => {
            let renter = &ws.renter;
            let recent: Vec<_> = renter
                .payments
                .payments()
                .iter()
                .take(DASHBOARD_PAYMENTS)
                .collect();

            json_response(
                200,
                &json!({
                    "user": user,
                    "rent_amount": renter.rent.amount,
                    "rent_display": format_usd(renter.rent.amount),
                    "property": renter.rent.property_name,
                    "due_date": renter.due_date,
                    "due_date_display": long_date(renter.due_date),
                    "days_remaining": days_until(renter.due_date, now),
                    "due_label": due_label(renter.due_date, now),
                    "auto_pay_enabled": renter.auto_pay_enabled,
                    "unread_reminders": renter.unread_reminders(),
                    "unread_messages": renter.messages.unread_count(),
                    "recent_payments": recent,
                }),
            )
        }
        Role::Landlord => {
            let landlord = &ws.landlord;
            let summary = landlord.summary();

            json_response(
                200,
                &json!({
                    "user": user,
                    "revenue_display": format_usd(summary.monthly_revenue),
                    "summary": summary,
                    "tenant_counts": landlord.tenant_counts(),
                    "properties": landlord.properties,
                    "maintenance": landlord.maintenance.requests(),
                }),
            )
        }
    }
}

// ---------- payments ----------

fn payment_query(params: &Params) -> Query<PaymentStatus> {
    Query::new()
        .text(param(params, "search"))
        .status(PaymentStatus::parse(param(params, "status")))
        .within(DateRange::parse(param(params, "range")))
}

fn list_payments(params: &Params, app: &App) -> ResultResp {
    let now = app.now();
    let ws = app.workspaces()?;

    let all = ws.renter.payments.payments();
    let payments = filter(all, &payment_query(params), now);
    // Headline figures cover the whole history, whatever is filtered.
    let summary = aggregate(all);

    json_response(
        200,
        &json!({
            "payments": payments,
            "summary": summary,
            "total_display": format_usd(summary.total),
            "filtered_summary": aggregate(payments.iter().copied()),
        }),
    )
}

fn export_payments(params: &Params, app: &App) -> ResultResp {
    let now = app.now();
    let ws = app.workspaces()?;

    let payments = filter(ws.renter.payments.payments(), &payment_query(params), now);
    info!(rows = payments.len(), "exporting payment history");
    export_payments_xlsx(&payments)
}

fn submit_payment(form: &Params, app: &App) -> ResultResp {
    let amount = match form.get("amount") {
        Some(raw) if !raw.trim().is_empty() => parse_amount(raw, "amount")?,
        _ => app.workspaces()?.renter.rent.amount,
    };
    if !(amount.is_finite() && amount > 0.0) {
        return Err(ServerError::BadRequest("amount must be positive".into()));
    }
    let method = method_label(param(form, "method"));

    thread::sleep(app.simulation.payment_delay());

    let now = app.now();
    let mut ws = app.workspaces()?;
    let payment = ws.renter.record_payment(amount, method, now)?;

    json_response(
        201,
        &json!({
            "payment": payment,
            "amount_display": format_usd(payment.amount),
            "next_due_date": ws.renter.due_date,
            "confirmation": ws.renter.reminders.first(),
        }),
    )
}

// ---------- tenants ----------

fn tenant_query(params: &Params) -> Query<TenantFacet> {
    Query::new()
        .text(param(params, "search"))
        .status(TenantStatus::parse(param(params, "status")).map(TenantFacet::Lease))
        .status(PaymentStanding::parse(param(params, "payment")).map(TenantFacet::Payment))
        .within(DateRange::parse(param(params, "range")))
}

fn list_tenants(params: &Params, app: &App) -> ResultResp {
    let now = app.now();
    let ws = app.workspaces()?;

    let all = ws.landlord.tenants.tenants();
    let tenants = filter(all, &tenant_query(params), now);

    json_response(
        200,
        &json!({
            "tenants": tenants,
            "summary": aggregate(all),
            "filtered_summary": aggregate(tenants.iter().copied()),
            "counts": ws.landlord.tenant_counts(),
        }),
    )
}

/// Builds a tenant from the add/edit form. Status fields default to a new,
/// paid-up lease; the last payment defaults to `today`.
fn tenant_draft(form: &Params, today: NaiveDate) -> Result<TenantDraft, ServerError> {
    let rent_amount = match param(form, "rent_amount") {
        "" => 0.0,
        raw => parse_amount(raw, "rent_amount")?,
    };
    let last_payment = match param(form, "last_payment") {
        "" => today,
        raw => parse_date(raw, "last_payment")?,
    };

    let draft = TenantDraft {
        name: param(form, "name").trim().to_string(),
        email: param(form, "email").trim().to_string(),
        phone: param(form, "phone").trim().to_string(),
        property: param(form, "property").trim().to_string(),
        unit: param(form, "unit").trim().to_string(),
        rent_amount,
        lease_start: parse_date(param(form, "lease_start"), "lease_start")?,
        lease_end: parse_date(param(form, "lease_end"), "lease_end")?,
        status: TenantStatus::parse(param(form, "status")).unwrap_or(TenantStatus::Active),
        payment_status: PaymentStanding::parse(param(form, "payment_status"))
            .unwrap_or(PaymentStanding::Current),
        last_payment,
    };
    draft.validate()?;
    Ok(draft)
}

fn add_tenant(form: &Params, app: &App) -> ResultResp {
    let now = app.now();
    let draft = tenant_draft(form, now.date_naive())?;

    let mut ws = app.workspaces()?;
    let tenant = ws
        .landlord
        .tenants
        .add(draft, now.timestamp_millis().to_string())?;
    info!(tenant_id = %tenant.id, "tenant added");

    json_response(201, &tenant)
}

fn show_tenant(id: &str, app: &App) -> ResultResp {
    let ws = app.workspaces()?;
    let tenant = ws.landlord.tenants.get(id).ok_or(ServerError::NotFound)?;
    json_response(200, tenant)
}

fn update_tenant(id: &str, form: &Params, app: &App) -> ResultResp {
    let draft = tenant_draft(form, app.now().date_naive())?;

    let mut ws = app.workspaces()?;
    let tenant = ws.landlord.tenants.update(id, draft)?;
    info!(tenant_id = %tenant.id, "tenant updated");

    json_response(200, &tenant)
}

fn delete_tenant(id: &str, form: &Params, app: &App) -> ResultResp {
    let confirmed = param(form, "confirm").eq_ignore_ascii_case("true");

    let mut ws = app.workspaces()?;
    match ws.landlord.tenants.delete(id, confirmed)? {
        DeleteOutcome::Deleted(tenant) => {
            info!(tenant_id = %tenant.id, "tenant deleted");
            json_response(200, &json!({ "deleted": true, "tenant": tenant }))
        }
        DeleteOutcome::Cancelled => json_response(200, &json!({ "deleted": false })),
    }
}

// ---------- reminders ----------

fn list_reminders(app: &App) -> ResultResp {
    let ws = app.workspaces()?;
    json_response(
        200,
        &json!({
            "reminders": ws.renter.reminders,
            "unread_count": ws.renter.unread_reminders(),
            "auto_pay_enabled": ws.renter.auto_pay_enabled,
        }),
    )
}

fn check_reminders(app: &App) -> ResultResp {
    let now = app.now();
    let mut ws = app.workspaces()?;
    let created = ws.renter.check_reminders(now);

    json_response(
        200,
        &json!({
            "created": created,
            "unread_count": ws.renter.unread_reminders(),
        }),
    )
}

fn read_reminder(id: &str, app: &App) -> ResultResp {
    let mut ws = app.workspaces()?;
    ws.renter.mark_reminder_read(id)?;
    json_response(200, &json!({ "unread_count": ws.renter.unread_reminders() }))
}

fn set_auto_pay(form: &Params, app: &App) -> ResultResp {
    let enabled = parse_flag(param(form, "enabled"), "enabled")?;

    let mut ws = app.workspaces()?;
    ws.renter.set_auto_pay(enabled);
    json_response(200, &json!({ "auto_pay_enabled": enabled }))
}

// ---------- messages ----------

fn list_messages(role: Role, app: &App) -> ResultResp {
    let ws = app.workspaces()?;
    let inbox = match role {
        Role::Renter => &ws.renter.messages,
        Role::Landlord => &ws.landlord.messages,
    };

    json_response(
        200,
        &json!({
            "messages": inbox.messages(),
            "unread_count": inbox.unread_count(),
        }),
    )
}

fn read_message(role: Role, id: &str, app: &App) -> ResultResp {
    let mut ws = app.workspaces()?;
    let inbox = match role {
        Role::Renter => &mut ws.renter.messages,
        Role::Landlord => &mut ws.landlord.messages,
    };
    inbox.mark_read(id)?;
    json_response(200, &json!({ "unread_count": inbox.unread_count() }))
}

fn reply_message(role: Role, id: &str, form: &Params, app: &App) -> ResultResp {
    let content = param(form, "content");
    if content.trim().is_empty() {
        return Err(ServerError::BadRequest("reply content is required".into()));
    }

    thread::sleep(app.simulation.reply_delay());

    let now = app.now();
    let mut ws = app.workspaces()?;
    let inbox = match role {
        Role::Renter => &mut ws.renter.messages,
        Role::Landlord => &mut ws.landlord.messages,
    };
    let reply = inbox.reply(id, content, now)?;
    info!(reply_to = %id, role = role.as_str(), "reply sent");

    json_response(201, &reply)
}

// ---------- maintenance ----------

fn list_maintenance(role: Role, app: &App) -> ResultResp {
    let ws = app.workspaces()?;
    let log = match role {
        Role::Renter => &ws.renter.maintenance,
        Role::Landlord => &ws.landlord.maintenance,
    };

    json_response(
        200,
        &json!({
            "requests": log.requests(),
            "pending_count": log.pending_count(),
        }),
    )
}

fn submit_maintenance(role: Role, form: &Params, app: &App) -> ResultResp {
    if role != Role::Renter {
        return Err(ServerError::Unauthorized(
            "only renters submit maintenance requests".into(),
        ));
    }

    let scheduled = match param(form, "preferred_date") {
        "" => None,
        raw => Some(parse_date(raw, "preferred_date")?),
    };
    let request = NewRequest {
        kind: param(form, "type").to_string(),
        priority: Priority::parse(param(form, "priority")),
        description: param(form, "description").to_string(),
        scheduled,
    };
    if request.kind.trim().is_empty() || request.description.trim().is_empty() {
        return Err(ServerError::BadRequest(
            "type and description are required".into(),
        ));
    }

    thread::sleep(app.simulation.maintenance_delay());

    let now = app.now();
    let mut ws = app.workspaces()?;
    let created = ws.renter.maintenance.submit(request, now)?;
    info!(request_id = %created.id, kind = %created.kind, "maintenance request submitted");

    json_response(201, &created)
}
