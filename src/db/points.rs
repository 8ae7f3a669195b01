use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::point;
use crate::error::AppResult;

/// Fields supplied by the caller when recording a new point.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPoint {
    pub category: i32,
    pub name: String,
    pub classification_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub registration_date: Option<String>,
}

/// Append one point. No deduplication and no retry on failure.
pub async fn insert_point(db: &DatabaseConnection, new_point: NewPoint) -> AppResult<()> {
    let model = point::ActiveModel {
        category: Set(new_point.category),
        name: Set(new_point.name),
        classification_code: Set(new_point.classification_code),
        latitude: Set(new_point.latitude),
        longitude: Set(new_point.longitude),
        registration_date: Set(new_point.registration_date),
        ..Default::default()
    };

    let inserted = model.insert(db).await?;
    tracing::info!(id = inserted.id, category = inserted.category, "Point stored");

    Ok(())
}

/// Fetch points, optionally restricted to a set of category codes.
///
/// `None` returns every stored point. An explicit empty slice matches
/// nothing and does not touch the database.
pub async fn fetch_points(
    db: &DatabaseConnection,
    categories: Option<&[i32]>,
) -> AppResult<Vec<point::Model>> {
    let query = match categories {
        None => point::Entity::find(),
        Some([]) => return Ok(Vec::new()),
        Some(codes) => {
            point::Entity::find().filter(point::Column::Category.is_in(codes.iter().copied()))
        }
    };

    Ok(query.all(db).await?)
}
