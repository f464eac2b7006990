pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const JWT_TTL_ENV_VAR: &str = "JWT_TTL_IN_SECONDS";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const MAIL_RELAY_BASE_URL_ENV_VAR: &str = "MAIL_RELAY_BASE_URL";
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const JWT_TTL_IN_SECONDS: i64 = 86_400;

    pub mod mail_relay {
        use std::time::Duration;

        pub const BASE_URL: &str = "https://api.telkomedika.co.id/";
        pub const TIMEOUT: Duration = std::time::Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    pub mod mail_relay {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
