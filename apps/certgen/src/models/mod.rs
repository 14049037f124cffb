pub mod request;

pub use request::CertificateRequest;
