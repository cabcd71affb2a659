use crate::server::error::{auth::AuthError, AppError};
use test_utils::{builder::TestBuilder, factory};
