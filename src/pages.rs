use actix_web::web;

mod payslip;
mod salary;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(web::scope("/salary")
            .configure(salary::config))
        .service(web::scope("/payslips")
            .configure(payslip::config));
}
