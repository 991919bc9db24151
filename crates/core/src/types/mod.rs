pub mod operator;
pub mod request;

pub use operator::Operator;
pub use request::OperationRequest;
