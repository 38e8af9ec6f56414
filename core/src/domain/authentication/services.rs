use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    authentication::{
        ports::{AuthService, TokenVerifier},
        value_objects::{AuthorizeRequestInput, AuthorizeRequestOutput, Identity},
    },
    catalog::ports::{IngredientRepository, SymptomRepository},
    common::{entities::app_errors::CoreError, services::Service},
    food_log::ports::FoodLogRepository,
    health::ports::HealthCheckRepository,
    ingredient_normalization::ports::LLMClient,
    trigger_analysis::ports::LogSnapshotRepository,
};

impl<L, I, S, T, A, LLM, HC> AuthService for Service<L, I, S, T, A, LLM, HC>
where
    L: FoodLogRepository,
    I: IngredientRepository,
    S: SymptomRepository,
    T: LogSnapshotRepository,
    A: TokenVerifier,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let claims = self.token_verifier.verify(&input.token)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            debug!("token subject is not a user id: {}", claims.sub);
            CoreError::InvalidToken
        })?;

        Ok(AuthorizeRequestOutput {
            identity: Identity {
                user_id,
                email: claims.email,
                role: claims.role,
            },
        })
    }
}
