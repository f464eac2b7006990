pub mod http_mail_relay;
pub mod mock_mail_relay;

pub use http_mail_relay::HttpMailRelay;
pub use mock_mail_relay::MockMailRelay;
