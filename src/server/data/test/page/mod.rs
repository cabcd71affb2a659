use crate::{
    model::page::PageStatus,
    server::{
        data::page::PageRepository,
        error::AppError,
        model::page::{CreatePageParams, Page, PageVisibility, UpdatePageParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::page::PageFactory};

mod create;
mod delete;
mod get_visible_paginated;
mod update;

fn create_params(url_slug: &str) -> CreatePageParams {
    CreatePageParams {
        title: "Title".to_string(),
        content: "Content".to_string(),
        url_slug: url_slug.to_string(),
    }
}
