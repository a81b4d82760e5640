//! Default data the in-memory stores start with

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::models::{
    catalog::{Product, Service},
    reseller::Reseller,
    schedule::{ScheduleConfig, WorkDay},
};

fn hour(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Monday to Friday 09:00-18:00, Saturday 09:00-15:00, closed on Sunday,
/// bookable two weeks ahead
pub fn default_schedule() -> ScheduleConfig {
    let days: [(&str, bool, u32); 7] = [
        ("Domingo", false, 15),
        ("Segunda-feira", true, 18),
        ("Terça-feira", true, 18),
        ("Quarta-feira", true, 18),
        ("Quinta-feira", true, 18),
        ("Sexta-feira", true, 18),
        ("Sábado", true, 15),
    ];

    ScheduleConfig {
        schedule: days
            .iter()
            .enumerate()
            .map(|(idx, (name, is_open, close))| WorkDay {
                day_index: idx as u8,
                name: name.to_string(),
                is_open: *is_open,
                open_time: hour(9),
                close_time: hour(*close),
            })
            .collect(),
        booking_window_days: 14,
    }
}

pub fn default_services() -> Vec<Service> {
    let service = |id: &str, name: &str, category: &str, price: i64, minutes: u32, description: &str| Service {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price: Decimal::from(price),
        duration_minutes: minutes,
        description: description.to_string(),
    };

    vec![
        service("srv_01", "Corte Feminino", "Cabelo", 500, 60, "Corte profissional com lavagem e finalização"),
        service("srv_02", "Manicure Completa", "Manicure", 300, 45, "Tratamento completo das unhas das mãos com esmaltação"),
        service("srv_03", "Pedicure Completa", "Pedicure", 350, 60, "Tratamento completo dos pés com esmaltação"),
        service("srv_04", "Spa Day", "Spa", 2500, 180, "Massagem relaxante, limpeza de pele e hidratação"),
        service("srv_05", "Design de Sobrancelhas", "Estética", 200, 30, "Design com henna ou natural"),
    ]
}

pub fn default_products() -> Vec<Product> {
    let product = |id: &str, name: &str, category: &str, price: i64, stock: u32, description: &str| Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price: Decimal::from(price),
        stock,
        description: Some(description.to_string()),
    };

    vec![
        product("CLR001", "Colar Dourado Elegance", "Colares", 850, 15, "Colar fino dourado com pingente delicado"),
        product("CJ-BRI001", "Brincos Argola Grande Dourada", "Conjuntos de Brincos", 650, 20, "Brincos argola grande em dourado brilhante"),
        product("PLS001", "Pulseira de Pérolas", "Pulseiras", 1200, 5, "Pulseira clássica com pérolas cultivadas"),
        product("CLR002", "Colar Gargantilha Black & Gold", "Colares", 1200, 8, "Gargantilha sofisticada em preto e dourado"),
        product("BRI002", "Brincos Gota Cristal", "Brincos", 890, 12, "Brincos em formato de gota com cristais"),
    ]
}

pub fn default_resellers() -> Vec<Reseller> {
    vec![Reseller {
        id: "res_1".to_string(),
        name: "Joana Machava".to_string(),
        email: "joana.resell@email.com".to_string(),
        phone: "849998877".to_string(),
        address: "Matola, Bairro da Liberdade".to_string(),
        notes: Some("Interessada em colares".to_string()),
        date: NaiveDate::from_ymd_opt(2023, 11, 1).unwrap_or_default(),
    }]
}
