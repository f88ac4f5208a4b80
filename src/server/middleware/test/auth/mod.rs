use crate::{
    model::access::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod require;
mod require_actor;
