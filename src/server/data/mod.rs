//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one entity each and convert entity models into
//! domain models at the boundary. Listings exclude tombstoned rows; deletes only set
//! `deleted_at`. The engine reaches the same tables through [`scoped::SeaOrmScopedStore`].

pub mod album;
pub mod arena;
pub mod banner;
pub mod city;
pub mod event;
pub mod info;
pub mod news;
pub mod photo;
pub mod player;
pub mod scoped;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Select};

use crate::server::model::page::PageRequest;

/// Fetches one page of `select` together with the total row count.
///
/// An unpaginated request returns every row.
pub(crate) async fn fetch_page<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    request: PageRequest,
) -> Result<(Vec<E::Model>, u64), DbErr>
where
    E: EntityTrait,
    E::Model: Sync,
{
    if request.unpaginated {
        let items = select.all(db).await?;
        let total = items.len() as u64;
        return Ok((items, total));
    }

    let paginator = select.paginate(db, request.per_page.max(1));
    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(request.page).await?;

    Ok((items, total))
}
