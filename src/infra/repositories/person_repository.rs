//! Person repository: read-only directory queries.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::entities::{
    department_user, entity_user, image, person, DepartmentUserEntity, EntityUserEntity,
    ImageEntity, PersonEntity, PersonModel,
};
use crate::domain::{Membership, Person};
use crate::errors::AppResult;

#[cfg(test)]
use mockall::automock;

/// Person repository trait for dependency injection.
///
/// Every query returns people ordered by last name, then first name.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// People with at least one membership in the given unit, each carrying
    /// only the memberships for that unit.
    async fn find_by_parent_entity(&self, parent_entities_id: &str) -> AppResult<Vec<Person>>;

    /// People affiliated with a department. Memberships are left empty.
    async fn find_by_department(&self, department_id: &str) -> AppResult<Vec<Person>>;
}

/// SeaORM-backed implementation of PersonRepository
pub struct PersonStore {
    db: Arc<DatabaseConnection>,
}

impl PersonStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Image file names keyed by person id
    async fn images_for(&self, person_ids: &[String]) -> AppResult<HashMap<String, String>> {
        if person_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let images = ImageEntity::find()
            .filter(image::Column::ImageableId.is_in(person_ids.iter().cloned()))
            .all(&*self.db)
            .await?;

        Ok(images
            .into_iter()
            .map(|img| (img.imageable_id, img.src))
            .collect())
    }
}

#[async_trait]
impl PersonRepository for PersonStore {
    async fn find_by_parent_entity(&self, parent_entities_id: &str) -> AppResult<Vec<Person>> {
        let rows = EntityUserEntity::find()
            .filter(entity_user::Column::ParentEntitiesId.eq(parent_entities_id))
            .all(&*self.db)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut memberships: HashMap<String, Vec<Membership>> = HashMap::new();
        for row in rows {
            memberships
                .entry(row.entities_id.clone())
                .or_default()
                .push(Membership::from(row));
        }

        let person_ids: Vec<String> = memberships.keys().cloned().collect();
        let models = PersonEntity::find()
            .filter(person::Column::IndividualsId.is_in(person_ids.clone()))
            .order_by_asc(person::Column::LastName)
            .order_by_asc(person::Column::FirstName)
            .all(&*self.db)
            .await?;

        let mut images = self.images_for(&person_ids).await?;

        tracing::debug!(
            parent = parent_entities_id,
            people = models.len(),
            "Loaded unit members"
        );

        Ok(models
            .into_iter()
            .map(|model| {
                let image = images.remove(&model.individuals_id);
                let unit_memberships = memberships
                    .remove(&model.individuals_id)
                    .unwrap_or_default();
                model.into_person(image, unit_memberships)
            })
            .collect())
    }

    async fn find_by_department(&self, department_id: &str) -> AppResult<Vec<Person>> {
        let rows = DepartmentUserEntity::find()
            .filter(department_user::Column::DepartmentId.eq(department_id))
            .find_also_related(PersonEntity)
            .order_by_asc(person::Column::LastName)
            .order_by_asc(person::Column::FirstName)
            .all(&*self.db)
            .await?;

        let models: Vec<PersonModel> = rows.into_iter().filter_map(|(_, member)| member).collect();
        let person_ids: Vec<String> = models.iter().map(|m| m.individuals_id.clone()).collect();
        let mut images = self.images_for(&person_ids).await?;

        tracing::debug!(
            department = department_id,
            people = models.len(),
            "Loaded department members"
        );

        Ok(models
            .into_iter()
            .map(|model| {
                let image = images.remove(&model.individuals_id);
                model.into_person(image, Vec::new())
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    fn person_row(id: &str, first: &str, last: &str, rank: Option<&str>) -> person::Model {
        person::Model {
            individuals_id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            display_name: format!("{} {}", first, last),
            email: format!("{}@csun.edu", first.to_lowercase()),
            rank: rank.map(str::to_string),
        }
    }

    fn membership_row(person_id: &str, role: &str) -> entity_user::Model {
        entity_user::Model {
            parent_entities_id: "centers:metalab".to_string(),
            entities_id: person_id.to_string(),
            role_name: role.to_string(),
        }
    }

    fn image_row(person_id: &str, src: &str) -> image::Model {
        image::Model {
            imageable_id: person_id.to_string(),
            src: src.to_string(),
        }
    }

    /// Drop the store and hand back every SQL statement it issued
    fn statements(store: PersonStore) -> Vec<String> {
        let db = Arc::try_unwrap(store.db)
            .ok()
            .expect("store holds the only connection handle");
        db.into_transaction_log()
            .iter()
            .flat_map(Transaction::statements)
            .map(|stmt| stmt.sql.clone())
            .collect()
    }

    #[tokio::test]
    async fn center_members_carry_their_memberships_and_images() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                membership_row("members:ada", "affiliate"),
                membership_row("members:ada", "director"),
                membership_row("members:bob", "staff"),
            ]])
            .append_query_results([vec![
                person_row("members:bob", "Bob", "Babbage", Some("staff")),
                person_row("members:ada", "Ada", "Lovelace", Some("Professor")),
            ]])
            .append_query_results([vec![image_row("members:ada", "ada.png")]])
            .into_connection();
        let store = PersonStore::new(Arc::new(db));

        let people = store
            .find_by_parent_entity("centers:metalab")
            .await
            .unwrap();

        let ids: Vec<_> = people.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["members:bob", "members:ada"]);

        let bob = &people[0];
        assert_eq!(bob.memberships.len(), 1);
        assert_eq!(bob.image, None);
        assert_eq!(bob.image_path(), "imgs/profile-default.png");

        let ada = &people[1];
        let roles: Vec<_> = ada.memberships.iter().map(|m| m.role_name.as_str()).collect();
        assert_eq!(roles, vec!["affiliate", "director"]);
        assert!(ada.memberships.iter().all(|m| m.parent_entity == "centers:metalab"));
        assert_eq!(ada.image_path(), "uploads/imgs/ada.png");

        let sql = statements(store);
        assert_eq!(sql.len(), 3);
        assert!(sql[0].contains(r#""parent_entities_id" = $1"#));
        assert!(sql[1].contains(r#"ORDER BY "persons"."last_name" ASC, "persons"."first_name" ASC"#));
    }

    #[tokio::test]
    async fn center_without_members_stops_after_membership_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity_user::Model>::new()])
            .into_connection();
        let store = PersonStore::new(Arc::new(db));

        let people = store.find_by_parent_entity("centers:").await.unwrap();

        assert!(people.is_empty());
        assert_eq!(statements(store).len(), 1);
    }

    #[tokio::test]
    async fn department_members_come_from_affiliation_rows() {
        let affiliation = |user: &str| department_user::Model {
            department_id: "academic_departments:189".to_string(),
            user_id: user.to_string(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                (
                    affiliation("members:ada"),
                    Some(person_row("members:ada", "Ada", "Lovelace", None)),
                ),
                (affiliation("members:gone"), None),
            ]])
            .append_query_results([vec![image_row("members:ada", "ada.png")]])
            .into_connection();
        let store = PersonStore::new(Arc::new(db));

        let people = store
            .find_by_department("academic_departments:189")
            .await
            .unwrap();

        assert_eq!(people.len(), 1);
        assert_eq!(people[0].display_name, "Ada Lovelace");
        assert_eq!(people[0].image.as_deref(), Some("ada.png"));
        assert!(people[0].memberships.is_empty());

        let sql = statements(store);
        assert!(sql[0].contains(r#""department_id" = $1"#));
        assert!(sql[0].contains(r#"ORDER BY "persons"."last_name" ASC, "persons"."first_name" ASC"#));
    }

    #[tokio::test]
    async fn database_errors_propagate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let store = PersonStore::new(Arc::new(db));

        let result = store.find_by_department("academic_departments:189").await;

        assert!(matches!(result, Err(crate::errors::AppError::Database(_))));
    }
}
