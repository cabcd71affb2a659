use crate::{
    model::api::PaginationQueryDto,
    server::{error::validation::ValidationError, validation::Validator},
};

/// Validated `limit`/`offset` window for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    pub fn from_query(query: PaginationQueryDto) -> Result<Self, ValidationError> {
        let mut validator = Validator::new();

        let limit = validator.limit(query.limit.as_deref());
        let offset = validator.offset(query.offset.as_deref());

        validator.finish()?;

        Ok(Self { limit, offset })
    }
}
