use std::str::FromStr;

use actix_web::{dev, get, patch, post, web, FromRequest, HttpRequest, Responder};
use chrono::Local;
use futures_util::future::LocalBoxFuture;
use rust_decimal::Decimal;
use sea_orm::{prelude::DateTimeWithTimeZone, DatabaseConnection, EntityTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    auth::{Admin, Identity},
    entity::{payslip, sea_orm_active_enums::PayslipStatus},
    error::PayrollError,
    payroll::{self, payslip::{Deductions, Earnings, PayPeriod}, store::{self, PayslipFilter}, PayrollRun},
};

use model::*;

mod extractor;
mod model;

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(generate_payslip)
        .service(run_payroll)
        .service(get_payslips)
        .service(get_own_payslips)
        .service(update_payslip_status);
}

#[post("/generate")]
async fn generate_payslip(db: web::Data<DatabaseConnection>, _admin: Admin, payload: web::Json<GeneratePayslip>) -> Result<impl Responder, PayrollError> {
    let period = PayPeriod::new(payload.year, payload.month)?;
    let employee = store::find_employee(db.get_ref(), &payload.login_id).await?;

    let payslip = payroll::generate_payslip(db.get_ref(), &employee, period).await?;

    Ok(web::Json(PayslipView::from(payslip)))
}

#[post("/run")]
async fn run_payroll(db: web::Data<DatabaseConnection>, _admin: Admin, payload: web::Json<RunPayroll>) -> Result<impl Responder, PayrollError> {
    let period = PayPeriod::new(payload.year, payload.month)?;

    let run = payroll::run_payroll(db.get_ref(), period).await?;

    Ok(web::Json(PayrollRunView::from(run)))
}

#[get("")]
async fn get_payslips(db: web::Data<DatabaseConnection>, _admin: Admin, query: web::Query<PayslipQuery>) -> Result<impl Responder, PayrollError> {
    let employee_id = match &query.login_id {
        Some(login_id) => Some(store::find_employee(db.get_ref(), login_id).await?.id),
        None => None,
    };

    let payslips = store::list_payslips(db.get_ref(), PayslipFilter {
        employee_id,
        month: query.month,
        year: query.year,
    }).await?;

    Ok(web::Json(payslips.into_iter().map(PayslipView::from).collect::<Vec<_>>()))
}

#[get("/me")]
async fn get_own_payslips(db: web::Data<DatabaseConnection>, identity: Identity) -> Result<impl Responder, PayrollError> {
    let payslips = store::list_payslips(db.get_ref(), PayslipFilter {
        employee_id: Some(identity.id),
        ..Default::default()
    }).await?;

    Ok(web::Json(payslips.into_iter().map(PayslipView::from).collect::<Vec<_>>()))
}

/// Paying out happens elsewhere, this only records the outcome
#[patch("/{payslip_id}/status")]
async fn update_payslip_status(db: web::Data<DatabaseConnection>, _admin: Admin, payslip: payslip::Model, payload: web::Json<UpdatePayslipStatus>) -> Result<impl Responder, PayrollError> {
    let payslip = store::set_payslip_status(db.get_ref(), payslip.id, payload.status, Local::now().fixed_offset()).await?;

    Ok(web::Json(PayslipView::from(payslip)))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::{Method, StatusCode}, test, App};
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::{
        auth::{tests::{bearer, SECRET}, Authority},
        entity::{attendance, leave_request, salary_structure, sea_orm_active_enums::RoleType, user},
        payroll::tests::{employee, payslip_model, structure_model},
    };

    use super::*;

    fn generate_request(admin: &user::Model, login_id: &str, month: u32, year: i32) -> test::TestRequest {
        test::TestRequest::default()
            .uri("/payslips/generate")
            .method(Method::POST)
            .insert_header(bearer(admin))
            .set_json(GeneratePayslip {
                login_id: login_id.to_owned(),
                month,
                year,
            })
    }

    #[actix_web::test]
    async fn test_generate_payslip() {
        let admin = employee("root", RoleType::Admin);
        let bob = employee("bob", RoleType::Employee);
        let payslip = payslip_model(bob.id, 4, 2025);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![ bob.clone() ],
            ])
            .append_query_results([
                vec![ structure_model(bob.id, dec!(50000)) ],
            ])
            .append_query_results([
                Vec::<attendance::Model>::new(),
            ])
            .append_query_results([
                Vec::<leave_request::Model>::new(),
            ])
            .append_query_results([
                vec![ payslip.clone() ],
            ]);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Authority::new(SECRET)))
                .app_data(web::Data::new(db.into_connection()))
                .service(web::scope("/payslips").configure(config))
        ).await;

        let view: PayslipView = test::call_and_read_body_json(&app, generate_request(&admin, "bob", 4, 2025).to_request()).await;
        assert_eq!(view.id, payslip.id);
        assert_eq!(view.employee_id, bob.id);
        assert_eq!(view.status, PayslipStatus::Pending);
        assert_eq!(view.earnings.gross_earnings, dec!(50000));
        assert_eq!(view.deductions.total_deductions, dec!(3200));
        assert_eq!(view.net_salary, dec!(46800));
    }

    #[actix_web::test]
    async fn test_generate_payslip_failures() {
        let admin = employee("root", RoleType::Admin);
        let bob = employee("bob", RoleType::Employee);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                Vec::<user::Model>::new(),
            ])
            .append_query_results([
                vec![ bob.clone() ],
            ])
            .append_query_results([
                Vec::<salary_structure::Model>::new(),
            ]);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Authority::new(SECRET)))
                .app_data(web::Data::new(db.into_connection()))
                .service(web::scope("/payslips").configure(config))
        ).await;

        {
            let response = test::call_service(&app, generate_request(&bob, "bob", 4, 2025).to_request()).await;
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
        }

        {
            let response = test::call_service(&app, generate_request(&admin, "bob", 13, 2025).to_request()).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        {
            let response = test::call_service(&app, generate_request(&admin, "nobody", 4, 2025).to_request()).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }

        {
            let response = test::call_service(&app, generate_request(&admin, "bob", 4, 2025).to_request()).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);

            let body = test::read_body(response).await;
            assert_eq!(&body[..], b"salary structure not defined");
        }
    }

    #[actix_web::test]
    async fn test_run_payroll() {
        let admin = employee("root", RoleType::Admin);
        let alice = employee("alice", RoleType::Employee);
        let payslip = payslip_model(alice.id, 2, 2024);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![ alice.clone() ],
            ])
            .append_query_results([
                vec![ structure_model(alice.id, dec!(50000)) ],
            ])
            .append_query_results([
                Vec::<attendance::Model>::new(),
            ])
            .append_query_results([
                Vec::<leave_request::Model>::new(),
            ])
            .append_query_results([
                vec![ payslip.clone() ],
            ]);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Authority::new(SECRET)))
                .app_data(web::Data::new(db.into_connection()))
                .service(web::scope("/payslips").configure(config))
        ).await;

        let req = test::TestRequest::default()
            .uri("/payslips/run")
            .method(Method::POST)
            .insert_header(bearer(&admin))
            .set_json(RunPayroll { month: 2, year: 2024 })
            .to_request();

        let run: PayrollRunView = test::call_and_read_body_json(&app, req).await;
        assert_eq!(run.generated.len(), 1);
        assert_eq!(run.generated[0].id, payslip.id);
        assert!(run.skipped.is_empty());
    }

    #[actix_web::test]
    async fn test_get_payslips() {
        let admin = employee("root", RoleType::Admin);
        let bob = employee("bob", RoleType::Employee);

        let april = payslip_model(bob.id, 4, 2025);
        let march = payslip_model(bob.id, 3, 2025);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![ bob.clone() ],
            ])
            .append_query_results([
                vec![ april.clone(), march.clone() ],
                vec![ april.clone() ],
            ]);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Authority::new(SECRET)))
                .app_data(web::Data::new(db.into_connection()))
                .service(web::scope("/payslips").configure(config))
        ).await;

        {
            let req = test::TestRequest::default()
                .uri("/payslips?loginId=bob&year=2025")
                .insert_header(bearer(&admin))
                .to_request();

            let payslips: Vec<PayslipView> = test::call_and_read_body_json(&app, req).await;
            assert_eq!(payslips.iter().map(|p| p.month).collect::<Vec<_>>(), vec![ 4, 3 ]);
        }

        {
            let req = test::TestRequest::default()
                .uri("/payslips/me")
                .insert_header(bearer(&bob))
                .to_request();

            let payslips: Vec<PayslipView> = test::call_and_read_body_json(&app, req).await;
            assert_eq!(payslips.len(), 1);
            assert_eq!(payslips[0].employee_id, bob.id);
        }

        {
            let req = test::TestRequest::default()
                .uri("/payslips")
                .insert_header(bearer(&bob))
                .to_request();

            let response = test::call_service(&app, req).await;
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
        }
    }

    #[actix_web::test]
    async fn test_update_payslip_status() {
        let admin = employee("root", RoleType::Admin);
        let payslip = payslip_model(Uuid::new_v4(), 4, 2025);

        let paid = payslip::Model {
            status: PayslipStatus::Paid,
            ..payslip.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![ payslip.clone() ],
                vec![ paid.clone() ],
            ]);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Authority::new(SECRET)))
                .app_data(web::Data::new(db.into_connection()))
                .service(web::scope("/payslips").configure(config))
        ).await;

        let req = test::TestRequest::default()
            .uri(&format!("/payslips/{}/status", payslip.id))
            .method(Method::PATCH)
            .insert_header(bearer(&admin))
            .set_json(UpdatePayslipStatus { status: PayslipStatus::Paid })
            .to_request();

        let view: PayslipView = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view.id, payslip.id);
        assert_eq!(view.status, PayslipStatus::Paid);
    }
}
