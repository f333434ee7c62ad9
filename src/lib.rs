pub mod config {
    pub mod settings;
}

pub mod core {
    pub mod course;
    pub mod grouper;
    pub mod html_parser;
    pub mod portal;
    pub mod row;
    pub mod semester;
}

pub mod error {
    pub mod heading;
    pub mod portal;
}

pub mod http {
    pub mod log_middleware;
    pub mod random_headers;
}

pub mod model {
    pub mod notification;
}

pub mod web {
    pub mod routes;
    pub mod view;
}
