//! `PostgreSQL` repository implementation for translation storage.

use super::{
    models::{NewTranslationRow, TranslationChangeset, TranslationRow},
    schema::translations,
};
use crate::translation::{
    domain::{
        PersistedTranslationData, QaMark, Translation, TranslationId, TranslationStatus, UserId,
    },
    ports::{
        StatusCount, TranslationRepository, TranslationRepositoryError,
        TranslationRepositoryResult,
    },
};
use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by translation adapters.
pub type TranslationPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed translation repository.
#[derive(Debug, Clone)]
pub struct PostgresTranslationRepository {
    pool: TranslationPgPool,
}

impl PostgresTranslationRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TranslationPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TranslationRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TranslationRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TranslationRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TranslationRepositoryError::persistence)?
    }
}

#[async_trait]
impl TranslationRepository for PostgresTranslationRepository {
    async fn store(&self, translation: &Translation) -> TranslationRepositoryResult<()> {
        let translation_id = translation.id();
        let new_row = to_new_row(translation);

        self.run_blocking(move |connection| {
            diesel::insert_into(translations::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TranslationRepositoryError::DuplicateTranslation(translation_id)
                    }
                    _ => TranslationRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, translation: &Translation) -> TranslationRepositoryResult<()> {
        let translation_id = translation.id();
        let changeset = to_changeset(translation);

        self.run_blocking(move |connection| {
            let affected = diesel::update(
                translations::table.filter(translations::id.eq(translation_id.into_inner())),
            )
            .set(&changeset)
            .execute(connection)
            .map_err(TranslationRepositoryError::persistence)?;

            if affected == 0 {
                return Err(TranslationRepositoryError::NotFound(translation_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: TranslationId,
    ) -> TranslationRepositoryResult<Option<Translation>> {
        self.run_blocking(move |connection| {
            let row = translations::table
                .filter(translations::id.eq(id.into_inner()))
                .select(TranslationRow::as_select())
                .first::<TranslationRow>(connection)
                .optional()
                .map_err(TranslationRepositoryError::persistence)?;
            row.map(row_to_translation).transpose()
        })
        .await
    }

    async fn list(
        &self,
        status: Option<TranslationStatus>,
    ) -> TranslationRepositoryResult<Vec<Translation>> {
        self.run_blocking(move |connection| {
            let mut query = translations::table
                .select(TranslationRow::as_select())
                .into_boxed();
            if let Some(wanted) = status {
                query = query.filter(translations::status.eq(wanted.as_str()));
            }
            let rows = query
                .order((translations::created_at.asc(), translations::id.asc()))
                .load::<TranslationRow>(connection)
                .map_err(TranslationRepositoryError::persistence)?;
            rows.into_iter().map(row_to_translation).collect()
        })
        .await
    }

    async fn count_assigned_to(&self, translator: UserId) -> TranslationRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let count: i64 = translations::table
                .filter(translations::translator.eq(translator.into_inner()))
                .count()
                .get_result(connection)
                .map_err(TranslationRepositoryError::persistence)?;
            u64::try_from(count).map_err(TranslationRepositoryError::persistence)
        })
        .await
    }

    async fn status_counts(&self) -> TranslationRepositoryResult<Vec<StatusCount>> {
        self.run_blocking(|connection| {
            let rows: Vec<(String, i64)> = translations::table
                .group_by(translations::status)
                .select((translations::status, count_star()))
                .load(connection)
                .map_err(TranslationRepositoryError::persistence)?;

            let mut counts = rows
                .into_iter()
                .map(|(status, count)| {
                    let status = TranslationStatus::try_from(status.as_str())
                        .map_err(TranslationRepositoryError::persistence)?;
                    let count =
                        u64::try_from(count).map_err(TranslationRepositoryError::persistence)?;
                    Ok(StatusCount { status, count })
                })
                .collect::<TranslationRepositoryResult<Vec<StatusCount>>>()?;
            counts.sort_by_key(|entry| entry.status.code());
            Ok(counts)
        })
        .await
    }
}

fn to_new_row(translation: &Translation) -> NewTranslationRow {
    NewTranslationRow {
        id: translation.id().into_inner(),
        original_text: translation.original_text().to_owned(),
        translated_text: translation.translated_text().map(str::to_owned),
        status: translation.status().as_str().to_owned(),
        translator: translation.translator().map(UserId::into_inner),
        qa_reviewer: translation.qa_reviewer().map(UserId::into_inner),
        on_hold: translation.on_hold(),
        qa_comment: translation.qa_comment().map(str::to_owned),
        mark: translation.mark().map(|mark| i16::from(mark.value())),
        created_at: translation.created_at(),
        updated_at: translation.updated_at(),
    }
}

fn to_changeset(translation: &Translation) -> TranslationChangeset {
    TranslationChangeset {
        translated_text: translation.translated_text().map(str::to_owned),
        status: translation.status().as_str().to_owned(),
        translator: translation.translator().map(UserId::into_inner),
        qa_reviewer: translation.qa_reviewer().map(UserId::into_inner),
        on_hold: translation.on_hold(),
        qa_comment: translation.qa_comment().map(str::to_owned),
        mark: translation.mark().map(|mark| i16::from(mark.value())),
        updated_at: translation.updated_at(),
    }
}

fn row_to_translation(row: TranslationRow) -> TranslationRepositoryResult<Translation> {
    let TranslationRow {
        id,
        original_text,
        translated_text,
        status: persisted_status,
        translator,
        qa_reviewer,
        on_hold,
        qa_comment,
        mark: persisted_mark,
        created_at,
        updated_at,
    } = row;

    let status = TranslationStatus::try_from(persisted_status.as_str())
        .map_err(TranslationRepositoryError::persistence)?;
    let mark = persisted_mark
        .map(|value| {
            let narrowed = u8::try_from(value).map_err(TranslationRepositoryError::persistence)?;
            QaMark::new(narrowed).map_err(TranslationRepositoryError::persistence)
        })
        .transpose()?;

    let data = PersistedTranslationData {
        id: TranslationId::from_uuid(id),
        original_text,
        translated_text,
        status,
        translator: translator.map(UserId::from_uuid),
        qa_reviewer: qa_reviewer.map(UserId::from_uuid),
        on_hold,
        qa_comment,
        mark,
        created_at,
        updated_at,
    };
    Ok(Translation::from_persisted(data))
}
