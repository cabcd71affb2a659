use crate::server::{
    data::role::RoleRepository,
    model::role::{ROLE_ADMIN, ROLE_MANAGER, ROLE_USER},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod ensure;
mod find_ids_by_names;
