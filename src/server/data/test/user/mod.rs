use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id_with_role;
mod find_credentials_by_email;
mod get_paginated;
mod update;

fn create_params(email: &str, role_id: i32) -> CreateUserParams {
    CreateUserParams {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        password_salt: "salt".to_string(),
        role_id,
    }
}
