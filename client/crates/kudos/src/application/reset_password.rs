//! Password Reset Request Use Case

use std::sync::Arc;

use crate::application::session::AuthService;
use crate::domain::repository::AuthRepository;
use crate::error::AuthFailure;

/// Password-reset request use case
pub struct ResetPasswordUseCase<A>
where
    A: AuthRepository,
{
    service: Arc<AuthService<A>>,
}

impl<A> ResetPasswordUseCase<A>
where
    A: AuthRepository,
{
    pub fn new(service: Arc<AuthService<A>>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, email: &str) -> Result<(), AuthFailure> {
        self.service.request_password_reset(email).await
    }
}
