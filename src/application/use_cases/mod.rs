mod authorize_request;

pub use authorize_request::AuthorizeRequestUseCase;
