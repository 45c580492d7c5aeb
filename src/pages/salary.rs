use actix_web::{get, put, web, Responder};
use rust_decimal::Decimal;
use sea_orm::{prelude::DateTimeWithTimeZone, DatabaseConnection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    auth::{Admin, Identity},
    entity::{salary_structure, user},
    error::PayrollError,
    payroll::{self, store, structure::{SalaryRules, SalaryStructure}},
};

use model::*;

mod model;

pub(super) fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(update_salary_structure)
        .service(get_salary_structure);
}

#[put("")]
async fn update_salary_structure(db: web::Data<DatabaseConnection>, admin: Admin, payload: web::Json<UpdateSalaryStructure>) -> Result<impl Responder, PayrollError> {
    let employee = store::find_employee(db.get_ref(), &payload.login_id).await?;

    let model = payroll::update_structure(db.get_ref(), admin.id, &employee, payload.monthly_wage, &payload.rules).await?;

    Ok(web::Json(SalaryStructureView::new(&employee, &model)))
}

#[get("/{login_id}")]
async fn get_salary_structure(db: web::Data<DatabaseConnection>, identity: Identity, login_id: web::Path<String>) -> Result<impl Responder, actix_web::Error> {
    if !identity.is_admin() && identity.login_id != *login_id {
        return Err(actix_web::error::ErrorForbidden("forbidden"));
    }

    let employee = store::find_employee(db.get_ref(), &login_id).await?;

    let Some(model) = store::find_structure(db.get_ref(), employee.id).await? else {
        return Err(PayrollError::not_found("salary structure not defined").into());
    };

    Ok(web::Json(SalaryStructureView::new(&employee, &model)))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::{Method, StatusCode}, test, App};
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::{
        auth::{tests::{bearer, SECRET}, Authority},
        entity::sea_orm_active_enums::RoleType,
        payroll::tests::{employee, structure_model},
    };

    use super::*;

    fn update_payload(login_id: &str) -> UpdateSalaryStructure {
        UpdateSalaryStructure {
            login_id: login_id.to_owned(),
            monthly_wage: dec!(50000),
            rules: SalaryRules::default(),
        }
    }

    #[actix_web::test]
    async fn test_update_salary_structure() {
        let admin = employee("root", RoleType::Admin);
        let bob = employee("bob", RoleType::Employee);
        let stored = structure_model(bob.id, dec!(50000));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![ bob.clone() ],
            ])
            .append_query_results([
                vec![ stored.clone() ],
            ]);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Authority::new(SECRET)))
                .app_data(web::Data::new(db.into_connection()))
                .service(web::scope("/salary").configure(config))
        ).await;

        let req = test::TestRequest::default()
            .uri("/salary")
            .method(Method::PUT)
            .insert_header(bearer(&admin))
            .set_json(update_payload("bob"))
            .to_request();

        let view: SalaryStructureView = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view.employee_id, bob.id);
        assert_eq!(view.login_id, "bob");
        assert_eq!(view.structure.basic.amount, dec!(25000));
        assert_eq!(view.structure.fixed_allowance, dec!(4167.25));
        assert_eq!(view.structure.pf.employee_contribution, dec!(3000));
    }

    #[actix_web::test]
    async fn test_update_salary_structure_guards() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                Vec::<user::Model>::new(),
            ]);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Authority::new(SECRET)))
                .app_data(web::Data::new(db.into_connection()))
                .service(web::scope("/salary").configure(config))
        ).await;

        {
            let forbidden_req = test::TestRequest::default()
                .uri("/salary")
                .method(Method::PUT)
                .insert_header(bearer(&employee("bob", RoleType::Employee)))
                .set_json(update_payload("bob"))
                .to_request();

            let response = test::call_service(&app, forbidden_req).await;
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
        }

        {
            let not_found_req = test::TestRequest::default()
                .uri("/salary")
                .method(Method::PUT)
                .insert_header(bearer(&employee("root", RoleType::Admin)))
                .set_json(update_payload("nobody"))
                .to_request();

            let response = test::call_service(&app, not_found_req).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[actix_web::test]
    async fn test_get_salary_structure() {
        let bob = employee("bob", RoleType::Employee);
        let alice = employee("alice", RoleType::Employee);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![ bob.clone() ],
            ])
            .append_query_results([
                vec![ structure_model(bob.id, dec!(50000)) ],
            ])
            .append_query_results([
                vec![ alice.clone() ],
            ])
            .append_query_results([
                Vec::<salary_structure::Model>::new(),
            ]);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Authority::new(SECRET)))
                .app_data(web::Data::new(db.into_connection()))
                .service(web::scope("/salary").configure(config))
        ).await;

        {
            let req = test::TestRequest::default()
                .uri("/salary/bob")
                .insert_header(bearer(&bob))
                .to_request();

            let view: SalaryStructureView = test::call_and_read_body_json(&app, req).await;
            assert_eq!(view.structure.monthly_wage, dec!(50000));
            assert_eq!(view.structure.working_days_per_week, 5);
        }

        {
            let forbidden_req = test::TestRequest::default()
                .uri("/salary/alice")
                .insert_header(bearer(&bob))
                .to_request();

            let response = test::call_service(&app, forbidden_req).await;
            assert_eq!(response.status(), StatusCode::FORBIDDEN);
        }

        {
            let not_found_req = test::TestRequest::default()
                .uri("/salary/alice")
                .insert_header(bearer(&employee("root", RoleType::Admin)))
                .to_request();

            let response = test::call_service(&app, not_found_req).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }
}
