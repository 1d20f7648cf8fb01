use actix_web::web::{self};

pub mod routes {
    pub mod message;
    pub mod payment;
    pub mod property;
    pub mod tenant;
}

pub mod services {
    pub mod message;
    pub mod payment;
    pub mod property;
    pub mod tenant;
}

pub mod dtos {
    pub mod message;
    pub mod payment;
    pub mod property;
    pub mod tenant;
}

pub fn mount_properties() -> actix_web::Scope {
    web::scope("/properties")
        .service(routes::property::get_properties)
        .service(routes::property::post_property)
        .service(routes::property::delete_property)
}
pub fn mount_tenants() -> actix_web::Scope {
    web::scope("/tenants")
        .service(routes::tenant::get_tenants)
        .service(routes::tenant::post_tenant)
        .service(routes::tenant::delete_tenant)
}
pub fn mount_payments() -> actix_web::Scope {
    web::scope("/payments")
        .service(routes::payment::get_payments)
        .service(routes::payment::post_payment)
}
pub fn mount_messages() -> actix_web::Scope {
    web::scope("/messages")
        .service(routes::message::get_messages)
        .service(routes::message::post_message)
        .service(routes::message::post_mark_read)
}
