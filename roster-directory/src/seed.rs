//! Demo data the directory starts with.

use crate::models::{
    Client, ClientStatus, Employee, EmployeeStatus, Subscription, SubscriptionStatus,
};

#[allow(clippy::too_many_arguments)]
fn client(
    id: &str,
    name: &str,
    client_id: &str,
    company: &str,
    sector: &str,
    location: &str,
    is_active: bool,
    contract_type: &str,
    last_contact: &str,
    status: ClientStatus,
    phone: &str,
    email: &str,
) -> Client {
    Client {
        id: id.into(),
        name: name.into(),
        client_id: client_id.into(),
        company: company.into(),
        sector: sector.into(),
        location: location.into(),
        is_active,
        contract_type: contract_type.into(),
        last_contact: last_contact.into(),
        status,
        phone: phone.into(),
        email: email.into(),
        website: None,
    }
}

pub fn clients() -> Vec<Client> {
    use ClientStatus::*;

    let mut maria = client(
        "1", "María González", "CLI-2024-001", "TechnoSoft Solutions", "Tecnología", "Madrid",
        true, "Premium", "2 Sep, 2025", ClienteActivo, "(91) 652-0744",
        "maria.gonzalez@technosoft.com",
    );
    maria.website = Some("www.technosoft.com".into());

    vec![
        maria,
        client(
            "2", "Carlos Ruiz", "CLI-2024-002", "Construcciones Ruiz", "Construcción", "Barcelona",
            true, "Estándar", "5 Ago, 2025", ClienteActivo, "(93) 602-0279",
            "carlos.ruiz@construcciones.com",
        ),
        client(
            "3", "Ana López", "CLI-2024-003", "Consultoría López & Asociados", "Consultoría",
            "Sevilla", false, "Básico", "4 Sep, 2025", ClienteInactivo, "(95) 403-6999",
            "ana.lopez@consultoria.com",
        ),
        client(
            "4", "Roberto Martín", "CLI-2024-004", "Comercial Valencia SL", "Comercio", "Valencia",
            false, "Estándar", "3 Sep, 2025", ClienteProspecto, "(96) 365-2984",
            "roberto.martin@comercialvalencia.com",
        ),
        client(
            "5", "Laura Fernández", "CLI-2024-005", "Innovación Digital", "Tecnología", "Madrid",
            true, "Premium", "2 Sep, 2025", ClienteActivo, "(91) 572-9509",
            "laura.fernandez@innovacion.com",
        ),
        client(
            "6", "Javier Sánchez", "CLI-2024-006", "Logística Barcelona", "Logística", "Barcelona",
            false, "Básico", "25 Ago, 2025", ClienteProspecto, "(93) 378-7874",
            "javier.sanchez@logistica.com",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    name: &str,
    employee_id: &str,
    department: &str,
    location: &str,
    is_active: bool,
    career_plan: &str,
    last_evaluation: &str,
    status: EmployeeStatus,
    phone: &str,
    email: &str,
) -> Employee {
    Employee {
        id: id.into(),
        name: name.into(),
        employee_id: employee_id.into(),
        department: department.into(),
        location: location.into(),
        is_active,
        career_plan: career_plan.into(),
        last_evaluation: last_evaluation.into(),
        status,
        phone: phone.into(),
        email: email.into(),
    }
}

pub fn employees() -> Vec<Employee> {
    use EmployeeStatus::*;

    vec![
        employee(
            "1", "Sofía Pérez", "202468746MA", "Software", "Madrid", false, "Senior",
            "2 Sep, 2025", NuevaReferencia, "(91) 652-0744", "sofia.perez@empresa.com",
        ),
        employee(
            "2", "Carlos Sánchez", "203083553BA", "Sistemas", "Barcelona", true, "Pleno",
            "5 Ago, 2025", EmpleadoActivo, "(93) 602-0279", "carlos.sanchez@empresa.com",
        ),
        employee(
            "3", "Valentina González", "201093014SE", "Administración", "Sevilla", true, "Junior",
            "4 Sep, 2025", EmpleadoActivo, "(95) 403-6999", "valentina.gonzalez@empresa.com",
        ),
        employee(
            "4", "Mateo Fernández", "100485862VA", "Comercial", "Valencia", true, "Pleno",
            "3 Sep, 2025", EmpleadoActivo, "(96) 365-2984", "mateo.fernandez@empresa.com",
        ),
        employee(
            "5", "Lucas Martín", "20209054MA", "Software", "Madrid", true, "Senior",
            "2 Sep, 2025", EmpleadoActivo, "(91) 572-9509", "lucas.martin@empresa.com",
        ),
        employee(
            "6", "Martina Romero", "202122330BA", "Sistemas", "Barcelona", false, "Junior",
            "25 Ago, 2025", EmpleadoInteresado, "(93) 378-7874", "martina.romero@empresa.com",
        ),
    ]
}

fn subscription(
    id: &str,
    platform: &str,
    plan: &str,
    start_date: &str,
    end_date: &str,
    amount: &str,
    status: SubscriptionStatus,
) -> Subscription {
    Subscription {
        id: id.into(),
        client_id: "1".into(),
        platform: platform.into(),
        plan: plan.into(),
        start_date: start_date.into(),
        end_date: end_date.into(),
        amount: amount.into(),
        status,
    }
}

/// Subscriptions of client "1".
pub fn subscriptions() -> Vec<Subscription> {
    use SubscriptionStatus::*;

    vec![
        subscription("1", "Netflix", "Plan Premium", "2024-03-01", "2026-03-01", "15,99", Activa),
        subscription("2", "HBO Max", "Plan Estándar", "2024-01-15", "2026-07-15", "9,99", Activa),
        subscription("3", "Disney+", "Plan Anual", "2023-12-10", "2025-12-10", "8,99", Activa),
        subscription(
            "4", "Spotify Premium", "Plan Individual", "2023-05-05", "2024-05-05", "10,99",
            Caducada,
        ),
        subscription(
            "5", "YouTube Premium", "Plan Familiar", "2024-02-20", "2024-08-20", "11,99", Caducada,
        ),
    ]
}
