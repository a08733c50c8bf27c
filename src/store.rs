use sea_orm::{
    ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait,
};

use crate::{entities::movie, error::AppResult, models::NewMovie};

/// Typed persistence operations over the single `movie` table.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All movies, worst rating first. SQLite keeps ties in rowid order.
    pub async fn list_by_rating(&self) -> AppResult<Vec<movie::Model>> {
        let movies = movie::Entity::find()
            .order_by_asc(movie::Column::Rating)
            .all(&self.db)
            .await?;
        Ok(movies)
    }

    pub async fn movie(&self, id: i32) -> AppResult<Option<movie::Model>> {
        let found = movie::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found)
    }

    /// Inserts and returns the new local id. A duplicate title violates the
    /// unique constraint and comes back as a database error.
    pub async fn insert(&self, new: NewMovie) -> AppResult<i32> {
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(new.rating),
            ranking: Set(new.ranking),
            review: Set(new.review),
            img_url: Set(new.img_url),
        };
        let res = movie::Entity::insert(model).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    pub async fn update_review(&self, id: i32, rating: f64, review: &str) -> AppResult<()> {
        let model = movie::ActiveModel {
            id: Set(id),
            rating: Set(rating),
            review: Set(review.to_string()),
            ..Default::default()
        };
        movie::Entity::update(model).exec(&self.db).await?;
        Ok(())
    }

    /// Overwrites the cached ranking of every listed movie in one transaction,
    /// so a list render never persists a half-updated ordering.
    pub async fn set_rankings(&self, rankings: &[(i32, i32)]) -> AppResult<()> {
        let txn = self.db.begin().await?;

        for &(id, ranking) in rankings {
            let model = movie::ActiveModel {
                id: Set(id),
                ranking: Set(ranking),
                ..Default::default()
            };
            movie::Entity::update(model).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
